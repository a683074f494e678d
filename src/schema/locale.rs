use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for validation issue messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ja,
    En,
}

/// What went wrong, independent of how it is phrased
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Type { expected: String, received: String },
    Email { received: String },
    MinLength { expected: usize, received: usize },
    MaxLength { expected: usize, received: usize },
    Json { detail: String },
}

impl Locale {
    pub fn message(&self, kind: &IssueKind) -> String {
        match self {
            Locale::Ja => match kind {
                IssueKind::Type { expected, received } => {
                    format!("無効な型: {}を期待しましたが{}を受け取りました", expected, received)
                }
                IssueKind::Email { received } => {
                    format!("無効なメールアドレス: {}を受け取りました", received)
                }
                IssueKind::MinLength { expected, received } => {
                    format!("無効な長さ: >={}を期待しましたが{}を受け取りました", expected, received)
                }
                IssueKind::MaxLength { expected, received } => {
                    format!("無効な長さ: <={}を期待しましたが{}を受け取りました", expected, received)
                }
                IssueKind::Json { detail } => format!("無効なJSON: {}", detail),
            },
            Locale::En => match kind {
                IssueKind::Type { expected, received } => {
                    format!("Invalid type: Expected {} but received {}", expected, received)
                }
                IssueKind::Email { received } => format!("Invalid email: Received {}", received),
                IssueKind::MinLength { expected, received } => {
                    format!("Invalid length: Expected >={} but received {}", expected, received)
                }
                IssueKind::MaxLength { expected, received } => {
                    format!("Invalid length: Expected <={} but received {}", expected, received)
                }
                IssueKind::Json { detail } => format!("Invalid JSON: {}", detail),
            },
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "ja-jp" => Ok(Locale::Ja),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ja => write!(f, "ja"),
            Locale::En => write!(f, "en"),
        }
    }
}
