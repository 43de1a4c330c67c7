//! Response formatters for commands.
//!
//! Every sentence comes from the [`Catalog`]; these functions only pick the
//! key and prepare the arguments.

use crate::{error::TaskError, locale::Catalog, tasks::Task};

/// Indentation of a task inside a multi-line message.
pub const TASK_INDENT: &str = "\t";

pub fn format_greeting(catalog: &Catalog) -> String {
    catalog.lookup("GREETING", &[])
}

pub fn format_farewell(catalog: &Catalog) -> String {
    catalog.lookup("FAREWELL", &[])
}

pub fn format_help(catalog: &Catalog) -> String {
    catalog.lookup("HELP", &[])
}

/// Confirmation for a newly added task. `size` is the list size after insertion.
pub fn format_new_task(catalog: &Catalog, task: &Task, size: usize) -> String {
    catalog.lookup(
        "NEW_TASK",
        &[format!("{}{}", TASK_INDENT, task).as_str(), size.to_string().as_str()],
    )
}

pub fn format_task_done(catalog: &Catalog, task: &Task) -> String {
    catalog.lookup("TASK_DONE", &[format!("{}{}", TASK_INDENT, task).as_str()])
}

/// Confirmation for a removed task. `size` is the list size after removal.
pub fn format_task_removed(catalog: &Catalog, task: &Task, size: usize) -> String {
    catalog.lookup(
        "TASK_REMOVED",
        &[format!("{}{}", TASK_INDENT, task).as_str(), size.to_string().as_str()],
    )
}

/// Formats numbered tasks, one per line.
///
/// `entries` pairs each task with its 0-based position in the full list, so
/// a filtered listing keeps the numbers `done` and `delete` expect. `on` is
/// the date filter as typed, if any.
pub fn format_task_list(catalog: &Catalog, entries: &[(usize, &Task)], on: Option<&str>) -> String {
    let suffix = on
        .map(|date| catalog.lookup("TASK_LIST_ON", &[date]))
        .unwrap_or_default();

    if entries.is_empty() {
        return catalog.lookup("TASK_LIST_EMPTY", &[suffix.as_str()]);
    }

    let lines = entries
        .iter()
        .map(|(index, task)| format!("{}.{}{}", index + 1, TASK_INDENT, task))
        .collect::<Vec<String>>()
        .join("\n");

    format!("{}\n{}", catalog.lookup("TASK_LIST", &[suffix.as_str()]), lines)
}

/// Converts an error into the message shown to the user.
pub fn format_error(catalog: &Catalog, error: &TaskError) -> String {
    match error {
        TaskError::EmptyDescription => catalog.lookup("EMPTY_DESCRIPTION", &[]),
        TaskError::NoByDate => catalog.lookup("NO_BY_DATE", &[]),
        TaskError::NoAtDate => catalog.lookup("NO_AT_DATE", &[]),
        TaskError::MalformedDate(input) => catalog.lookup("MALFORMED_DATE", &[input.as_str()]),
        TaskError::MissingArgument(command) => catalog.lookup("MISSING_ARGUMENT", &[command.as_str()]),
        TaskError::NotInteger(token) => catalog.lookup("NOT_INTEGER", &[token.as_str()]),
        TaskError::IndexOutOfBound { index, size } => catalog.lookup(
            "INDEX_OUT_OF_BOUND",
            &[index.to_string().as_str(), size.to_string().as_str()],
        ),
        TaskError::UnknownCommand(name) => catalog.lookup("UNKNOWN_COMMAND", &[name.as_str()]),
        TaskError::Persist(reason) => catalog.lookup("PERSIST_ERROR", &[reason.as_str()]),
        TaskError::Load(reason) => catalog.lookup("LOAD_ERROR", &[reason.as_str()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::When;

    fn english() -> Catalog {
        Catalog::for_locale("english")
    }

    #[test]
    fn test_format_new_task() {
        let task = Task::todo("buy milk").unwrap();
        assert_eq!(
            format_new_task(&english(), &task, 3),
            "Got it. I've added this task:\n\t[T][✘] buy milk\nNow you have 3 tasks in the list."
        );
    }

    #[test]
    fn test_format_new_task_keeps_braces_in_description() {
        let task = Task::todo("{1}").unwrap();
        assert_eq!(
            format_new_task(&english(), &task, 7),
            "Got it. I've added this task:\n\t[T][✘] {1}\nNow you have 7 tasks in the list."
        );
    }

    #[test]
    fn test_format_task_removed() {
        let task = Task::todo("buy milk").unwrap();
        let message = format_task_removed(&english(), &task, 0);
        assert!(message.contains("removed this task:\n\t[T][✘] buy milk"));
        assert!(message.contains("Now you have 0 tasks"));
    }

    #[test]
    fn test_format_task_list_numbers_from_one() {
        let a = Task::todo("a").unwrap();
        let b = Task::deadline("b", When::parse("20/12/2024").unwrap()).unwrap();

        assert_eq!(
            format_task_list(&english(), &[(0, &a), (1, &b)], None),
            "Here are the tasks in your list:\n1.\t[T][✘] a\n2.\t[D][✘] b (by: 20/12/2024 00:00)"
        );
    }

    #[test]
    fn test_format_task_list_filtered_keeps_positions() {
        let b = Task::deadline("b", When::parse("20/12/2024").unwrap()).unwrap();

        assert_eq!(
            format_task_list(&english(), &[(4, &b)], Some("20/12/2024")),
            "Here are the tasks in your list on 20/12/2024:\n5.\t[D][✘] b (by: 20/12/2024 00:00)"
        );
    }

    #[test]
    fn test_format_task_list_empty() {
        assert_eq!(
            format_task_list(&english(), &[], None),
            "You don't have a task in your list!"
        );
        assert_eq!(
            format_task_list(&english(), &[], Some("01/01/2025")),
            "You don't have a task in your list on 01/01/2025!"
        );
    }

    #[test]
    fn test_format_error_out_of_bound() {
        let error = TaskError::IndexOutOfBound { index: 9, size: 2 };
        assert_eq!(
            format_error(&english(), &error),
            "Oops! There is no task 9, you have 2 tasks in the list."
        );
    }

    #[test]
    fn test_format_error_every_variant_has_a_message() {
        let errors = [
            TaskError::EmptyDescription,
            TaskError::NoByDate,
            TaskError::NoAtDate,
            TaskError::MalformedDate("x".to_string()),
            TaskError::MissingArgument("done".to_string()),
            TaskError::NotInteger("x".to_string()),
            TaskError::IndexOutOfBound { index: 0, size: 0 },
            TaskError::UnknownCommand("x".to_string()),
            TaskError::Persist("x".to_string()),
            TaskError::Load("x".to_string()),
        ];

        for error in &errors {
            assert!(!format_error(&english(), error).is_empty(), "{:?}", error);
        }
    }

    #[test]
    fn test_format_error_german_falls_back_per_key() {
        let german = Catalog::for_locale("german");
        assert!(format_error(&german, &TaskError::NotInteger("x".to_string())).starts_with("Hoppla"));
        assert!(format_error(&german, &TaskError::NoByDate).starts_with("Oops"));
    }
}
