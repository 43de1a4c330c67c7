//! Due dates and event times.
//!
//! Dates are entered as `dd/mm/yyyy HH:MM`, or as `dd/mm/yyyy` in which case
//! the time defaults to midnight.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TaskError;

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// The time attribute of a deadline or an event.
///
/// `Text` is kept verbatim when date parsing is disabled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum When {
    Text(String),
    DateTime(NaiveDateTime),
}

impl When {
    /// Parses `dd/mm/yyyy HH:MM`, falling back to `dd/mm/yyyy` at midnight.
    ///
    /// # Errors
    ///
    /// [`TaskError::MalformedDate`] if neither format matches.
    pub fn parse(input: &str) -> Result<Self, TaskError> {
        let input = input.trim();

        if let Ok(date_time) = NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT) {
            return Ok(When::DateTime(date_time));
        }

        debug!("'{}' has no time component, trying date only", input);

        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(When::DateTime)
            .ok_or_else(|| TaskError::MalformedDate(input.to_string()))
    }

    /// Builds a `When` from user text, parsing it only if `parse_dates` is set.
    pub fn from_input(input: &str, parse_dates: bool) -> Result<Self, TaskError> {
        if parse_dates {
            Self::parse(input)
        } else {
            Ok(When::Text(input.trim().to_string()))
        }
    }

    /// The calendar day, if this is a parsed date.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            When::DateTime(date_time) => Some(date_time.date()),
            When::Text(_) => None,
        }
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            When::Text(text) => f.write_str(text),
            When::DateTime(date_time) => write!(f, "{}", date_time.format(DATE_TIME_FORMAT)),
        }
    }
}
