use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing an ID from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from an empty string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

// Sample data uses short string keys ("q1", "reading-3"), so every id wraps a
// trimmed, non-empty `String`.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new id from the given string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ParseIdError {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(trimmed.to_owned()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id!(
    /// Unique identifier for a Quiz
    QuizId
);
string_id!(
    /// Unique identifier for a question within a quiz
    QuestionId
);
string_id!(
    /// Unique identifier for a memory verse
    VerseId
);
string_id!(
    /// Unique identifier for one day of the reading plan
    ReadingId
);
string_id!(
    /// Unique identifier for a journal entry
    JournalEntryId
);

impl JournalEntryId {
    /// Generates a fresh random id for a newly written entry.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("j-{}", uuid::Uuid::new_v4()))
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_id_display() {
        let id = QuizId::new("q1");
        assert_eq!(id.to_string(), "q1");
        assert_eq!(format!("{id:?}"), "QuizId(q1)");
    }

    #[test]
    fn quiz_id_from_str_trims() {
        let id: QuizId = "  q2 ".parse().unwrap();
        assert_eq!(id, QuizId::new("q2"));
    }

    #[test]
    fn id_from_str_rejects_blank() {
        let err = "   ".parse::<VerseId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse VerseId from an empty string");
    }

    #[test]
    fn generated_journal_ids_are_unique() {
        let a = JournalEntryId::generate();
        let b = JournalEntryId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("j-"));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ReadingId::new("reading-0")).unwrap();
        assert_eq!(json, "\"reading-0\"");
    }
}
