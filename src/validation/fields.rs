//! Field-level readers over a JSON object body.
//!
//! Each reader records at most one message per field and returns `None` when
//! the field is unusable, so a single pass reports every bad field at once.
//! Coercion is lenient in the usual way for form-ish APIs: numbers may arrive
//! as numeric strings, integral floats count as integers.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use super::ValidationErrors;

pub const MISSING: &str = "Missing data for required field.";
pub const NULL: &str = "Field may not be null.";
pub const UNKNOWN: &str = "Unknown field.";
pub const EMPTY: &str = "Field may not be empty.";
pub const NOT_STRING: &str = "Not a valid string.";
pub const NOT_INTEGER: &str = "Not a valid integer.";
pub const NOT_NUMBER: &str = "Not a valid number.";
pub const NOT_FINITE: &str = "Special numeric values (nan or infinity) are not permitted.";
pub const NOT_DATETIME: &str = "Not a valid datetime.";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub struct FieldReader<'a> {
    body: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    /// Start reading `body`, flagging any key outside `allowed`.
    pub fn new(body: &'a Value, allowed: &[&str]) -> Result<Self, ValidationErrors> {
        let Value::Object(map) = body else {
            return Err(ValidationErrors::single("_schema", "Invalid input type."));
        };

        let mut errors = ValidationErrors::default();
        for key in map.keys() {
            if !allowed.contains(&key.as_str()) {
                errors.add(key, UNKNOWN);
            }
        }

        Ok(Self { body: map, errors })
    }

    /// Present and non-null value, or a recorded error.
    fn required(&mut self, name: &str) -> Option<&'a Value> {
        match self.body.get(name) {
            None => {
                self.errors.add(name, MISSING);
                None
            }
            Some(Value::Null) => {
                self.errors.add(name, NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    fn optional(&self, name: &str) -> Option<&'a Value> {
        match self.body.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    pub fn required_string(&mut self, name: &str) -> Option<String> {
        let value = self.required(name)?;
        self.string(name, value)
    }

    pub fn optional_string(&mut self, name: &str) -> Option<String> {
        let value = self.optional(name)?;
        self.string(name, value)
    }

    /// Required string that must contain something other than whitespace
    /// and fit in `max_chars`.
    pub fn required_text(&mut self, name: &str, max_chars: usize) -> Option<String> {
        let value = self.required_string(name)?;
        self.check_text(name, value, max_chars)
    }

    pub fn optional_text(&mut self, name: &str, max_chars: usize) -> Option<String> {
        let value = self.optional_string(name)?;
        self.check_text(name, value, max_chars)
    }

    pub fn required_integer(&mut self, name: &str) -> Option<i64> {
        let value = self.required(name)?;
        self.integer(name, value)
    }

    pub fn optional_integer(&mut self, name: &str) -> Option<i64> {
        let value = self.optional(name)?;
        self.integer(name, value)
    }

    pub fn required_float(&mut self, name: &str) -> Option<f64> {
        let value = self.required(name)?;
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match parsed {
            None => {
                self.errors.add(name, NOT_NUMBER);
                None
            }
            Some(f) if !f.is_finite() => {
                self.errors.add(name, NOT_FINITE);
                None
            }
            Some(f) => Some(f),
        }
    }

    pub fn required_datetime(&mut self, name: &str) -> Option<DateTime<Utc>> {
        let value = self.required(name)?;
        let parsed = match value {
            Value::String(s) => parse_datetime(s.trim()),
            _ => None,
        };

        if parsed.is_none() {
            self.errors.add(name, NOT_DATETIME);
        }
        parsed
    }

    /// Record a message produced by schema-specific rules.
    pub fn reject(&mut self, name: &str, message: impl Into<String>) {
        self.errors.add(name, message);
    }

    /// All errors collected so far, if any.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn string(&mut self, name: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.errors.add(name, NOT_STRING);
                None
            }
        }
    }

    fn check_text(&mut self, name: &str, value: String, max_chars: usize) -> Option<String> {
        if value.trim().is_empty() {
            self.errors.add(name, EMPTY);
            return None;
        }
        if value.chars().count() > max_chars {
            self.errors.add(name, format!("Longer than maximum length {}.", max_chars));
            return None;
        }
        Some(value)
    }

    fn integer(&mut self, name: &str, value: &Value) -> Option<i64> {
        let parsed = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        if parsed.is_none() {
            self.errors.add(name, NOT_INTEGER);
        }
        parsed
    }
}

/// ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
