use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::model::ids::JournalEntryId;

/// Tag given to entries written without any tag.
pub const DEFAULT_JOURNAL_TAG: &str = "Réflexion";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JournalError {
    #[error("journal title cannot be empty")]
    EmptyTitle,

    #[error("journal content cannot be empty")]
    EmptyContent,
}

/// A dated reflection or prayer note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    id: JournalEntryId,
    date: NaiveDate,
    title: String,
    content: String,
    tags: Vec<String>,
}

/// Unvalidated user input for a new journal entry.
#[derive(Clone, Debug, Default)]
pub struct JournalDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl JournalDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Validate and normalize the draft into an entry.
    ///
    /// Blank tags are dropped; an entry left without tags gets
    /// [`DEFAULT_JOURNAL_TAG`].
    ///
    /// # Errors
    ///
    /// Returns `JournalError::EmptyTitle` or `JournalError::EmptyContent` for blank input.
    pub fn validate(
        self,
        id: JournalEntryId,
        date: NaiveDate,
    ) -> Result<JournalEntry, JournalError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(JournalError::EmptyTitle);
        }
        let content = self.content.trim();
        if content.is_empty() {
            return Err(JournalError::EmptyContent);
        }

        let mut tags: Vec<String> = self
            .tags
            .iter()
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();
        if tags.is_empty() {
            tags.push(DEFAULT_JOURNAL_TAG.to_owned());
        }

        Ok(JournalEntry {
            id,
            date,
            title: title.to_owned(),
            content: content.to_owned(),
            tags,
        })
    }
}

impl JournalEntry {
    #[must_use]
    pub fn id(&self) -> &JournalEntryId {
        &self.id
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Case-insensitive match of `term` against title or content.
    ///
    /// An empty term matches everything.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }

    /// Case-insensitive tag lookup, accented capitals included.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }
}
