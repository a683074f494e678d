use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::locale::{IssueKind, Locale};
use super::types::{Issue, IssuePathItem, ObjectSchema, Schema, StringCheck, StringSchema};
use crate::config::ValidationConfig;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Za-z0-9_+-]+(?:\.[A-Za-z0-9_+-]+)*@[0-9a-z]+(?:[.-][0-9a-z]+)*\.[a-z]{2,}$")
        .expect("email pattern compiles")
});

/// Check `input` against `schema`, collecting every issue found.
pub fn validate(schema: &Schema, input: &Value, config: &ValidationConfig) -> Result<(), Vec<Issue>> {
    let mut walker = Walker {
        locale: config.locale,
        path: Vec::new(),
        issues: Vec::new(),
    };
    walker.check(schema, Some(input));

    if walker.issues.is_empty() {
        Ok(())
    } else {
        Err(walker.issues)
    }
}

/// Validate and then convert into the typed form.
///
/// Handlers receive the result of this and never look at the raw body.
pub fn parse<T: DeserializeOwned>(
    schema: &Schema,
    input: Value,
    config: &ValidationConfig,
) -> Result<T, Vec<Issue>> {
    validate(schema, &input, config)?;
    serde_json::from_value(input).map_err(|e| {
        vec![Issue::root(
            config.locale.message(&IssueKind::Json { detail: e.to_string() }),
        )]
    })
}

struct Walker {
    locale: Locale,
    path: Vec<IssuePathItem>,
    issues: Vec<Issue>,
}

impl Walker {
    fn check(&mut self, schema: &Schema, input: Option<&Value>) {
        match schema {
            Schema::Optional(inner) => {
                if input.is_some() {
                    self.check(inner, input);
                }
            }
            Schema::String(string) => self.check_string(schema, string, input),
            Schema::Integer => {
                if !matches!(input, Some(v) if v.is_i64() || v.is_u64()) {
                    self.type_issue(schema, input);
                }
            }
            Schema::Number => {
                if !matches!(input, Some(Value::Number(_))) {
                    self.type_issue(schema, input);
                }
            }
            Schema::Literal(expected) => {
                if input.and_then(Value::as_bool) != Some(*expected) {
                    self.type_issue(schema, input);
                }
            }
            Schema::Array(item) => match input {
                Some(Value::Array(items)) => {
                    for (index, value) in items.iter().enumerate() {
                        self.enter(index.to_string(), Some(value));
                        self.check(item, Some(value));
                        self.leave();
                    }
                }
                _ => self.type_issue(schema, input),
            },
            Schema::Object(object) => match input {
                Some(Value::Object(_)) => self.check_object(object, input),
                _ => self.type_issue(schema, input),
            },
        }
    }

    fn check_object(&mut self, object: &ObjectSchema, input: Option<&Value>) {
        for (key, field) in &object.fields {
            let value = input.and_then(|v| v.get(key));
            self.enter(key.clone(), value);
            self.check(field, value);
            self.leave();
        }
    }

    fn check_string(&mut self, schema: &Schema, string: &StringSchema, input: Option<&Value>) {
        let Some(Value::String(text)) = input else {
            self.type_issue(schema, input);
            return;
        };

        let length = text.chars().count();
        for check in &string.checks {
            let failure = match *check {
                StringCheck::Email if !EMAIL_PATTERN.is_match(text) => Some(IssueKind::Email {
                    received: describe(input),
                }),
                StringCheck::MinLength(min) if length < min => Some(IssueKind::MinLength {
                    expected: min,
                    received: length,
                }),
                StringCheck::MaxLength(max) if length > max => Some(IssueKind::MaxLength {
                    expected: max,
                    received: length,
                }),
                _ => None,
            };
            if let Some(kind) = failure {
                self.push(kind);
            }
        }
    }

    fn type_issue(&mut self, schema: &Schema, input: Option<&Value>) {
        self.push(IssueKind::Type {
            expected: schema.type_name(),
            received: describe(input),
        });
    }

    fn push(&mut self, kind: IssueKind) {
        self.issues.push(Issue {
            message: self.locale.message(&kind),
            path: self.path.clone(),
        });
    }

    fn enter(&mut self, key: String, value: Option<&Value>) {
        self.path.push(IssuePathItem {
            key,
            value: value.map(render),
        });
    }

    fn leave(&mut self) {
        self.path.pop();
    }
}

/// How a received value is named in messages
fn describe(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => format!("\"{}\"", s),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(_)) => "Array".to_string(),
        Some(Value::Object(_)) => "Object".to_string(),
    }
}

/// Value shown in an issue path; strings verbatim, anything else as JSON text
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
