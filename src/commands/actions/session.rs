//! Fixed-message handlers: `hello`, `help` and `bye`.
//!
//! These are stateless and never touch the task list.

use log::debug;

use crate::{
    commands::{
        CommandResult,
        response::{format_farewell, format_greeting, format_help},
    },
    locale::Catalog,
};

pub fn handle_greet(catalog: &Catalog) -> CommandResult {
    debug!("handling greet command");

    CommandResult::message(format_greeting(catalog))
}

/// Returns the command summary.
pub fn handle_help(catalog: &Catalog) -> CommandResult {
    debug!("handling help command");

    CommandResult::message(format_help(catalog))
}

/// Says goodbye and asks the session to stop reading input.
pub fn handle_bye(catalog: &Catalog) -> CommandResult {
    debug!("handling bye command");

    CommandResult {
        response: format_farewell(catalog),
        warning: None,
        exit: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_greet() {
        let result = handle_greet(&Catalog::for_locale("english"));

        assert!(result.response.starts_with("Hello! I'm Duke."));
        assert!(!result.exit);
    }

    #[test]
    fn test_handle_help() {
        let result = handle_help(&Catalog::for_locale("english"));

        for keyword in ["todo", "deadline", "event", "list", "done", "delete", "bye"] {
            assert!(result.response.contains(keyword), "{} missing", keyword);
        }
        assert!(!result.exit);
    }

    #[test]
    fn test_handle_bye() {
        let result = handle_bye(&Catalog::for_locale("english"));

        assert_eq!(result.response, "Bye. Hope to see you again soon!");
        assert!(result.warning.is_none());
        assert!(result.exit);
    }
}
