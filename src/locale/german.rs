//! German catalog. Keys missing here fall back to English.

pub const TEMPLATES: &[(&str, &str)] = &[
    ("GREETING", "Hallo! Ich bin Duke.\nWas kann ich für dich tun?"),
    ("FAREWELL", "Tschüss. Bis zum nächsten Mal!"),
    (
        "NEW_TASK",
        "Alles klar. Ich habe diese Aufgabe hinzugefügt:\n{0}\nDu hast jetzt {1} Aufgaben in der Liste.",
    ),
    ("TASK_LIST", "Hier sind die Aufgaben in deiner Liste{0}:"),
    ("TASK_LIST_EMPTY", "Deine Liste{0} ist leer!"),
    ("TASK_LIST_ON", " am {0}"),
    ("TASK_DONE", "Super! Diese Aufgabe ist jetzt erledigt:\n{0}"),
    (
        "TASK_REMOVED",
        "Gut! Ich habe diese Aufgabe entfernt:\n{0}\nDu hast jetzt {1} Aufgaben in der Liste.",
    ),
    (
        "EMPTY_DESCRIPTION",
        "Hoppla! Die Beschreibung einer Aufgabe darf nicht leer sein.",
    ),
    ("NOT_INTEGER", "Hoppla! '{0}' ist keine Aufgabennummer."),
    (
        "UNKNOWN_COMMAND",
        "Entschuldigung, '{0}' verstehe ich nicht. Tippe `help` für eine Übersicht.",
    ),
];
