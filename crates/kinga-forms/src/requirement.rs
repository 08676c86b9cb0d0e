use kinga_core::path::lookup;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// A required-field rule, evaluated against a serialized document.
///
/// Paths are dotted and absolute from the document root, except inside
/// [`Requirement::Nested`] and [`Requirement::When`], where they are
/// relative to the enclosing `at` / conditional section.
#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    /// Text non-empty after trim; any other value explicitly set.
    Filled {
        path: &'static str,
        label: &'static str,
    },
    /// Boolean explicitly `true`.
    Affirmed {
        path: &'static str,
        label: &'static str,
    },
    /// Non-empty list.
    AtLeastOne {
        path: &'static str,
        label: &'static str,
    },
    /// A nested object whose own required leaves must all be satisfied.
    Nested {
        at: &'static str,
        require: &'static [Requirement],
    },
    /// Only required when the value at `discriminator` (absolute path)
    /// equals `equals`.
    When {
        discriminator: &'static str,
        equals: &'static str,
        at: &'static str,
        require: &'static [Requirement],
    },
}

/// Outcome of checking one leaf field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldCheck {
    pub path: String,
    pub label: String,
    pub satisfied: bool,
}

impl Requirement {
    pub const fn filled(path: &'static str, label: &'static str) -> Self {
        Requirement::Filled { path, label }
    }

    pub const fn affirmed(path: &'static str, label: &'static str) -> Self {
        Requirement::Affirmed { path, label }
    }

    pub const fn at_least_one(path: &'static str, label: &'static str) -> Self {
        Requirement::AtLeastOne { path, label }
    }

    pub fn is_satisfied(&self, document: &Value) -> bool {
        self.check(document).iter().all(|c| c.satisfied)
    }

    /// Flatten this rule into leaf checks against `document`.
    pub fn check(&self, document: &Value) -> Vec<FieldCheck> {
        let mut out = Vec::new();
        self.check_under(document, "", &mut out);
        out
    }

    fn check_under(&self, document: &Value, prefix: &str, out: &mut Vec<FieldCheck>) {
        match *self {
            Requirement::Filled { path, label } => {
                let full = join(prefix, path);
                let satisfied = is_filled(lookup(document, &full));
                out.push(FieldCheck {
                    path: full,
                    label: label.to_string(),
                    satisfied,
                });
            }
            Requirement::Affirmed { path, label } => {
                let full = join(prefix, path);
                let satisfied = matches!(lookup(document, &full), Some(Value::Bool(true)));
                out.push(FieldCheck {
                    path: full,
                    label: label.to_string(),
                    satisfied,
                });
            }
            Requirement::AtLeastOne { path, label } => {
                let full = join(prefix, path);
                let satisfied =
                    matches!(lookup(document, &full), Some(Value::Array(items)) if !items.is_empty());
                out.push(FieldCheck {
                    path: full,
                    label: label.to_string(),
                    satisfied,
                });
            }
            Requirement::Nested { at, require } => {
                let base = join(prefix, at);
                for r in require {
                    r.check_under(document, &base, out);
                }
            }
            Requirement::When {
                discriminator,
                equals,
                at,
                require,
            } => {
                let applies = lookup(document, discriminator).and_then(Value::as_str) == Some(equals);
                if applies {
                    let base = join(prefix, at);
                    for r in require {
                        r.check_under(document, &base, out);
                    }
                }
            }
        }
    }
}

fn join(prefix: &str, path: &str) -> String {
    match (prefix.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{prefix}.{path}"),
    }
}

fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}
