use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::VerseId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VerseError {
    #[error("verse reference cannot be empty")]
    EmptyReference,

    #[error("verse text cannot be empty")]
    EmptyText,
}

/// How well a verse is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerseStatus {
    /// Not practiced yet.
    New,
    Learning,
    Mastered,
}

/// A verse queued for memorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    id: VerseId,
    reference: String,
    text: String,
    topic: String,
    status: VerseStatus,
    last_reviewed: Option<NaiveDate>,
}

impl Verse {
    /// Creates a verse that has never been reviewed.
    ///
    /// # Errors
    ///
    /// Returns `VerseError::EmptyReference` or `VerseError::EmptyText` for blank input.
    pub fn new(
        id: VerseId,
        reference: impl Into<String>,
        text: impl Into<String>,
        topic: impl Into<String>,
        status: VerseStatus,
    ) -> Result<Self, VerseError> {
        let reference = reference.into();
        let text = text.into();
        if reference.trim().is_empty() {
            return Err(VerseError::EmptyReference);
        }
        if text.trim().is_empty() {
            return Err(VerseError::EmptyText);
        }

        Ok(Self {
            id,
            reference: reference.trim().to_owned(),
            text: text.trim().to_owned(),
            topic: topic.into().trim().to_owned(),
            status,
            last_reviewed: None,
        })
    }

    /// Records a review outcome on `on`.
    pub fn review(&mut self, status: VerseStatus, on: NaiveDate) {
        self.status = status;
        self.last_reviewed = Some(on);
    }

    #[must_use]
    pub fn id(&self) -> &VerseId {
        &self.id
    }

    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn status(&self) -> VerseStatus {
        self.status
    }

    #[must_use]
    pub fn last_reviewed(&self) -> Option<NaiveDate> {
        self.last_reviewed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verse_rejects_blank_reference() {
        let err = Verse::new(VerseId::new("v"), " ", "text", "topic", VerseStatus::New)
            .unwrap_err();
        assert_eq!(err, VerseError::EmptyReference);
    }

    #[test]
    fn review_updates_status_and_date() {
        let mut verse = Verse::new(
            VerseId::new("v1"),
            "Jean 3:16",
            "Car Dieu a tant aimé le monde",
            "Amour",
            VerseStatus::Learning,
        )
        .unwrap();
        assert_eq!(verse.last_reviewed(), None);

        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        verse.review(VerseStatus::Mastered, day);
        assert_eq!(verse.status(), VerseStatus::Mastered);
        assert_eq!(verse.last_reviewed(), Some(day));
    }
}
