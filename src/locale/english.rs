//! Default catalog. Must contain every key used by the crate.

pub const TEMPLATES: &[(&str, &str)] = &[
    ("GREETING", "Hello! I'm Duke.\nWhat can I do for you?"),
    ("FAREWELL", "Bye. Hope to see you again soon!"),
    (
        "HELP",
        "Here is what I understand:\n\
         \ttodo <description>\n\
         \tdeadline <description> /by <dd/mm/yyyy [HH:MM]>\n\
         \tevent <description> /at <dd/mm/yyyy [HH:MM]>\n\
         \tlist [/on <dd/mm/yyyy>]\n\
         \tdone <task number>\n\
         \tdelete <task number>\n\
         \tbye",
    ),
    (
        "NEW_TASK",
        "Got it. I've added this task:\n{0}\nNow you have {1} tasks in the list.",
    ),
    ("TASK_LIST", "Here are the tasks in your list{0}:"),
    ("TASK_LIST_EMPTY", "You don't have a task in your list{0}!"),
    ("TASK_LIST_ON", " on {0}"),
    ("TASK_DONE", "Nice! I've marked this task as done:\n{0}"),
    (
        "TASK_REMOVED",
        "Sure! I've removed this task:\n{0}\nNow you have {1} tasks in the list.",
    ),
    (
        "EMPTY_DESCRIPTION",
        "Oops! The description of a task cannot be empty.",
    ),
    (
        "NO_BY_DATE",
        "Oops! A deadline needs a date, like this: `deadline return book /by 20/12/2024`.",
    ),
    (
        "NO_AT_DATE",
        "Oops! An event needs a time, like this: `event meeting /at 20/12/2024 14:00`.",
    ),
    (
        "MALFORMED_DATE",
        "Oops! I cannot read the date '{0}'. Please use dd/mm/yyyy or dd/mm/yyyy HH:MM.",
    ),
    (
        "MISSING_ARGUMENT",
        "You will need to give me an index, like this: `{0} 2`.",
    ),
    ("NOT_INTEGER", "Oops! '{0}' is not a task number."),
    (
        "INDEX_OUT_OF_BOUND",
        "Oops! There is no task {0}, you have {1} tasks in the list.",
    ),
    (
        "UNKNOWN_COMMAND",
        "Sorry, I don't know what '{0}' means. Type `help` to see what I can do.",
    ),
    (
        "PERSIST_ERROR",
        "Warning: I could not save your tasks ({0}). This change may not survive a restart.",
    ),
    (
        "LOAD_ERROR",
        "Warning: I could not read your saved tasks ({0}). Starting with an empty list.",
    ),
];
