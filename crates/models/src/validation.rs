//! Field-rule checks shared by every input type.
//!
//! Rules are applied in declaration order and never stop at the first
//! failure, so callers get the full list of violations in one response.
//! Field names in messages use the JSON (camelCase) spelling.

use chrono::{DateTime, NaiveDate};

use crate::errors::ModelError;

/// Width of the `name` columns (`varchar(128)`).
pub const NAME_MAX_LEN: usize = 128;

#[derive(Debug, Default)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, msg: impl Into<String>) -> &mut Self {
        self.0.push(msg.into());
        self
    }

    /// Required string with at least one non-whitespace character.
    pub fn non_blank(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(format!("\"{field}\" is not allowed to be empty"));
        }
        self
    }

    /// At most `max` characters after trimming.
    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.trim().chars().count() > max {
            self.push(format!("\"{field}\" length must be less than or equal to {max} characters long"));
        }
        self
    }

    /// ASCII digits only, with a character count in `min..=max`.
    pub fn digits(&mut self, field: &str, value: &str, min: usize, max: usize) -> &mut Self {
        let len = value.chars().count();
        if len < min || len > max {
            if min == max {
                self.push(format!("\"{field}\" must be exactly {min} digits long"));
            } else {
                self.push(format!("\"{field}\" must be between {min} and {max} digits long"));
            }
        } else if !value.chars().all(|c| c.is_ascii_digit()) {
            self.push(format!("\"{field}\" must contain only digits"));
        }
        self
    }

    pub fn at_least(&mut self, field: &str, value: i64, min: i64) -> &mut Self {
        if value < min {
            self.push(format!("\"{field}\" must be greater than or equal to {min}"));
        }
        self
    }

    /// ISO 8601 calendar date, optionally not later than `latest`.
    pub fn iso_date(&mut self, field: &str, value: &str, latest: Option<NaiveDate>) -> &mut Self {
        match parse_iso_date(value) {
            None => {
                self.push(format!("\"{field}\" must be in ISO 8601 date format"));
            }
            Some(d) if latest.is_some_and(|l| d > l) => {
                self.push(format!("\"{field}\" must not be in the future"));
            }
            Some(_) => {}
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), ModelError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(self.0))
        }
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (date part kept).
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}
