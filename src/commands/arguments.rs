//! Input line tokenization.
//!
//! Splits a raw line into a command name and named arguments. Everything
//! before the first flag marker (`/by`, `/at`, any `/word`) is the payload;
//! each marker owns the tokens up to the next marker.

use std::collections::HashMap;

use log::debug;

/// Key under which the text before the first flag marker is stored.
pub const PAYLOAD: &str = "payload";

/// A tokenized input line.
///
/// # Examples
///
/// ```
/// # use duke::commands::arguments::CommandArguments;
/// let args = CommandArguments::parse("Deadline return book /by 20/12/2024");
/// assert_eq!(args.name(), "deadline");
/// assert_eq!(args.payload(), "return book");
/// assert_eq!(args.get("by"), Some("20/12/2024"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArguments {
    name: String,
    values: HashMap<String, String>,
}

/// A flag marker is a slash followed by at least one ASCII alphanumeric character.
fn flag_key(token: &str) -> Option<String> {
    let key = token.strip_prefix('/')?;
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(key.to_ascii_lowercase())
}

impl CommandArguments {
    /// Tokenizes `line`. Never fails; validation belongs to the commands.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default().to_lowercase();

        let mut values = HashMap::new();
        let mut key = PAYLOAD.to_string();
        let mut span: Vec<&str> = Vec::new();

        for token in tokens {
            match flag_key(token) {
                Some(next_key) => {
                    values.insert(std::mem::replace(&mut key, next_key), span.join(" "));
                    span.clear();
                }
                None => span.push(token),
            }
        }
        values.insert(key, span.join(" "));

        let arguments = CommandArguments { name, values };
        debug!("tokenized {:?} into {:?}", line, arguments);
        arguments
    }

    /// Lower-cased command keyword, empty for a blank line.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &str {
        self.get(PAYLOAD).unwrap_or_default()
    }

    /// Value of a flag, `Some("")` if the marker was given without a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value of a flag, `None` when absent or empty.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_is_lowercased() {
        let args = CommandArguments::parse("TODO buy milk");
        assert_eq!(args.name(), "todo");
        assert_eq!(args.payload(), "buy milk");
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let args = CommandArguments::parse("  todo   buy \t  milk  ");
        assert_eq!(args.payload(), "buy milk");
    }

    #[test]
    fn test_parse_no_arguments() {
        let args = CommandArguments::parse("list");
        assert_eq!(args.name(), "list");
        assert_eq!(args.payload(), "");
        assert_eq!(args.get("by"), None);
    }

    #[test]
    fn test_parse_blank_line() {
        let args = CommandArguments::parse("   ");
        assert_eq!(args.name(), "");
        assert_eq!(args.payload(), "");
    }

    #[test]
    fn test_parse_flag_spans() {
        let args = CommandArguments::parse("event project sync /at 20/12/2024 14:00 /room B2");
        assert_eq!(args.payload(), "project sync");
        assert_eq!(args.get("at"), Some("20/12/2024 14:00"));
        assert_eq!(args.get("room"), Some("B2"));
    }

    #[test]
    fn test_parse_flag_without_value() {
        let args = CommandArguments::parse("deadline return book /by");
        assert_eq!(args.get("by"), Some(""));
        assert_eq!(args.non_empty("by"), None);
    }

    #[test]
    fn test_parse_flag_first_leaves_empty_payload() {
        let args = CommandArguments::parse("deadline /by 20/12/2024");
        assert_eq!(args.payload(), "");
        assert_eq!(args.get("by"), Some("20/12/2024"));
    }

    #[test]
    fn test_parse_flag_is_case_insensitive() {
        let args = CommandArguments::parse("deadline x /BY tomorrow");
        assert_eq!(args.get("by"), Some("tomorrow"));
    }

    #[test]
    fn test_parse_repeated_flag_last_wins() {
        let args = CommandArguments::parse("deadline x /by monday /by friday");
        assert_eq!(args.get("by"), Some("friday"));
    }

    #[test]
    fn test_parse_slash_tokens_that_are_not_flags() {
        let args = CommandArguments::parse("todo read a/b and / and /-x");
        assert_eq!(args.payload(), "read a/b and / and /-x");
    }
}
