// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Built-in template helpers and the registry that carries them.
//!
//! A [`HelperRegistry`] is constructed once at process startup and passed
//! by reference into every compile call. There is no process-global
//! registration; the registry is read-only after construction and safe to
//! share across concurrent invocations.
//!
//! # Built-ins
//!
//! - `formatDate` — short locale-style date rendering (`M/D/YYYY`).
//!   Accepts RFC 3339 timestamps and `YYYY-MM-DD` dates; anything else
//!   renders the literal text `Invalid Date`, never an error.
//! - `eq`, `gt`, `lt` — strict comparisons on JSON values, usable in
//!   subexpressions: `{{#if (eq status "sent")}}…{{/if}}`. Ordering is
//!   defined for number/number and string/string pairs; any other pairing
//!   is neither greater nor lesser.

use handlebars::{Handlebars, HelperDef};

mod builtin {
    use chrono::{DateTime, NaiveDate};
    use handlebars::handlebars_helper;
    use serde_json::Value;
    use std::cmp::Ordering;

    pub(super) fn compare(a: &Value, b: &Value) -> Option<Ordering> {
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
            (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
            _ => None,
        }
    }

    pub(super) fn locale_date(input: &str) -> String {
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return dt.date_naive().format("%-m/%-d/%Y").to_string();
        }
        if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return d.format("%-m/%-d/%Y").to_string();
        }
        "Invalid Date".to_string()
    }

    handlebars_helper!(format_date: |s: str| locale_date(s));
    handlebars_helper!(eq: |a: Json, b: Json| a == b);
    handlebars_helper!(gt: |a: Json, b: Json| compare(a, b) == Some(Ordering::Greater));
    handlebars_helper!(lt: |a: Json, b: Json| compare(a, b) == Some(Ordering::Less));
}

/// The set of helper functions shared by every compilation.
///
/// Wraps a configured [`Handlebars`] registry. Construct one at startup —
/// usually via [`with_builtins`](Self::with_builtins) — and pass it by
/// reference into every [`compile`](crate::compile) call.
pub struct HelperRegistry {
    handlebars: Handlebars<'static>,
}

impl std::fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelperRegistry").finish_non_exhaustive()
    }
}

impl Default for HelperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HelperRegistry {
    /// Creates an empty registry with no helpers beyond the language's own.
    pub fn new() -> Self {
        Self {
            handlebars: Handlebars::new(),
        }
    }

    /// Creates a registry carrying the studio built-ins:
    /// `formatDate`, `eq`, `gt`, `lt`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("formatDate", Box::new(builtin::format_date));
        registry.register("eq", Box::new(builtin::eq));
        registry.register("gt", Box::new(builtin::gt));
        registry.register("lt", Box::new(builtin::lt));
        registry
    }

    /// Registers an additional helper under the given name.
    ///
    /// Intended for startup-time configuration; the registry is meant to
    /// be immutable once compilations begin.
    pub fn register(&mut self, name: &str, def: Box<dyn HelperDef + Send + Sync>) {
        self.handlebars.register_helper(name, def);
    }

    /// The configured template compiler backing this registry.
    pub(crate) fn handlebars(&self) -> &Handlebars<'static> {
        &self.handlebars
    }
}

#[cfg(test)]
mod tests {
    use super::builtin::{compare, locale_date};
    use serde_json::json;
    use std::cmp::Ordering;

    #[test]
    fn locale_date_formats_plain_dates() {
        assert_eq!(locale_date("2024-01-15"), "1/15/2024");
        assert_eq!(locale_date("2024-12-01"), "12/1/2024");
    }

    #[test]
    fn locale_date_formats_rfc3339_timestamps() {
        assert_eq!(locale_date("2024-01-15T10:30:00Z"), "1/15/2024");
        assert_eq!(locale_date("2024-01-15T23:59:59+02:00"), "1/15/2024");
    }

    #[test]
    fn locale_date_renders_invalid_input_as_text() {
        assert_eq!(locale_date("not-a-date"), "Invalid Date");
        assert_eq!(locale_date(""), "Invalid Date");
        assert_eq!(locale_date("2024-13-45"), "Invalid Date");
    }

    #[test]
    fn compare_orders_numbers_and_strings() {
        assert_eq!(compare(&json!(2), &json!(1)), Some(Ordering::Greater));
        assert_eq!(compare(&json!(1.5), &json!(2)), Some(Ordering::Less));
        assert_eq!(compare(&json!("a"), &json!("b")), Some(Ordering::Less));
    }

    #[test]
    fn compare_refuses_mixed_pairings() {
        assert_eq!(compare(&json!(1), &json!("1")), None);
        assert_eq!(compare(&json!(true), &json!(false)), None);
        assert_eq!(compare(&json!(null), &json!(null)), None);
    }
}
