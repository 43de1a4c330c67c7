//! Message catalog with per-locale templates.
//!
//! Every user-facing sentence is looked up by key. Templates use positional
//! placeholders (`{0}`, `{1}`, ...) filled from the lookup arguments.
//!
//! # Fallback chain
//!
//! 1. the selected locale
//! 2. the English catalog, if the locale is unknown or lacks the key
//! 3. the empty string, logged as an error, if English lacks the key too
//!
//! # Examples
//!
//! ```
//! # use duke::locale::Catalog;
//! let catalog = Catalog::for_locale("german");
//! assert_eq!(catalog.lookup("FAREWELL", &[]), "Tschüss. Bis zum nächsten Mal!");
//! ```

mod english;
mod german;

use std::collections::HashMap;

use log::{debug, error, warn};

/// Name of the locale every other locale falls back to.
pub const DEFAULT_LOCALE: &str = "english";

type Templates = HashMap<&'static str, &'static str>;

/// Key to template lookup for one locale, backed by the English catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    templates: Templates,
    fallback: Templates,
}

fn templates_for(locale: &str) -> Option<Templates> {
    let entries: &[(&'static str, &'static str)] = match locale {
        "english" | "en" => english::TEMPLATES,
        "german" | "deutsch" | "de" => german::TEMPLATES,
        _ => return None,
    };

    Some(entries.iter().copied().collect())
}

impl Catalog {
    /// Loads the catalog for `locale` (case-insensitive).
    ///
    /// An unknown locale logs a warning and uses the English catalog.
    pub fn for_locale(locale: &str) -> Self {
        let requested = locale.trim().to_lowercase();
        let fallback = templates_for(DEFAULT_LOCALE).unwrap_or_default();

        let (name, templates) = match templates_for(&requested) {
            Some(templates) => (requested, templates),
            None => {
                warn!(
                    "unknown locale '{}', falling back to {}",
                    locale, DEFAULT_LOCALE
                );
                (DEFAULT_LOCALE.to_string(), fallback.clone())
            }
        };

        debug!("loaded locale {} with {} messages", name, templates.len());

        Catalog {
            name,
            templates,
            fallback,
        }
    }

    /// Name of the locale actually in use.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up `key` and fills its placeholders with `args`.
    pub fn lookup(&self, key: &str, args: &[&str]) -> String {
        let template = self
            .templates
            .get(key)
            .or_else(|| {
                debug!("key {} missing from locale {}", key, self.name);
                self.fallback.get(key)
            })
            .copied();

        match template {
            Some(template) => fill(template, args),
            None => {
                error!("message key {} missing from the default catalog", key);
                String::new()
            }
        }
    }
}

/// Replaces every `{n}` with `args[n]`. Placeholders without an argument are kept.
///
/// The template is scanned once, so argument text is copied verbatim even if
/// it looks like a placeholder.
fn fill(template: &str, args: &[&str]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        filled.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let argument = after.find('}').and_then(|end| {
            let digits = &after[..end];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let position: usize = digits.parse().ok()?;
            args.get(position).map(|arg| (*arg, end))
        });

        match argument {
            Some((arg, end)) => {
                filled.push_str(arg);
                rest = &after[end + 1..];
            }
            None => {
                filled.push('{');
                rest = after;
            }
        }
    }

    filled.push_str(rest);
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_positional_arguments() {
        assert_eq!(fill("{1} before {0}", &["a", "b"]), "b before a");
        assert_eq!(fill("{0} and {0}", &["x"]), "x and x");
    }

    #[test]
    fn test_fill_keeps_unmatched_placeholders() {
        assert_eq!(fill("{0} of {1}", &["3"]), "3 of {1}");
        assert_eq!(fill("{x} {} {", &["3"]), "{x} {} {");
    }

    #[test]
    fn test_fill_does_not_rescan_arguments() {
        assert_eq!(fill("{0} / {1}", &["{1}", "x"]), "{1} / x");
        assert_eq!(fill("{1} / {0}", &["a", "{0}"]), "{0} / a");
    }

    #[test]
    fn test_lookup_english() {
        let catalog = Catalog::for_locale("english");
        assert_eq!(
            catalog.lookup("TASK_DONE", &["\t[T][✓] a"]),
            "Nice! I've marked this task as done:\n\t[T][✓] a"
        );
    }

    #[test]
    fn test_locale_name_is_case_insensitive() {
        let catalog = Catalog::for_locale("  German ");
        assert_eq!(catalog.name(), "german");
    }

    #[test]
    fn test_unknown_locale_uses_english() {
        let catalog = Catalog::for_locale("klingon");
        assert_eq!(catalog.name(), DEFAULT_LOCALE);
        assert_eq!(
            catalog.lookup("FAREWELL", &[]),
            "Bye. Hope to see you again soon!"
        );
    }

    #[test]
    fn test_missing_key_falls_back_to_english() {
        let catalog = Catalog::for_locale("german");
        assert_eq!(
            catalog.lookup("HELP", &[]),
            Catalog::for_locale("english").lookup("HELP", &[])
        );
    }

    #[test]
    fn test_missing_everywhere_is_empty() {
        let catalog = Catalog::for_locale("german");
        assert_eq!(catalog.lookup("NO_SUCH_KEY", &["x"]), "");
    }

    #[test]
    fn test_every_german_key_exists_in_english() {
        let english: Templates = english::TEMPLATES.iter().copied().collect();
        for (key, _) in german::TEMPLATES {
            assert!(english.contains_key(key), "{} missing from english", key);
        }
    }
}
