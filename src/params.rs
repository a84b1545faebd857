//! Path parameter parsing and validation.

use crate::error::AppError;

/// Parse an integer path segment; `name` is used in the error message.
pub fn parse_int(name: &str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{} must be an integer, got '{}'.", name, raw)))
}

/// Inclusive season range with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeasonRange {
    start: i64,
    end: i64,
}

impl SeasonRange {
    pub fn new(start: i64, end: i64) -> Result<Self, AppError> {
        if end < start {
            return Err(AppError::Validation(
                "End year must be greater than or equal to start year.".into(),
            ));
        }
        Ok(SeasonRange { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        Self::new(parse_int("Start year", start)?, parse_int("End year", end)?)
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }
}
