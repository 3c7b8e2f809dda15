use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::model::ids::ReadingId;
use crate::model::quiz::score_percentage;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadingPlanError {
    #[error("reading day must be >= 1")]
    InvalidDay,

    #[error("reading passage cannot be empty")]
    EmptyPassage,
}

/// One day of the reading plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingPlanItem {
    id: ReadingId,
    day: u32,
    passage: String,
    completed: bool,
    date: NaiveDate,
}

impl ReadingPlanItem {
    /// # Errors
    ///
    /// Returns `ReadingPlanError::InvalidDay` for day 0.
    /// Returns `ReadingPlanError::EmptyPassage` if the passage is blank.
    pub fn new(
        id: ReadingId,
        day: u32,
        passage: impl Into<String>,
        completed: bool,
        date: NaiveDate,
    ) -> Result<Self, ReadingPlanError> {
        if day == 0 {
            return Err(ReadingPlanError::InvalidDay);
        }
        let passage = passage.into();
        if passage.trim().is_empty() {
            return Err(ReadingPlanError::EmptyPassage);
        }

        Ok(Self {
            id,
            day,
            passage: passage.trim().to_owned(),
            completed,
            date,
        })
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    #[must_use]
    pub fn id(&self) -> &ReadingId {
        &self.id
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub fn passage(&self) -> &str {
        &self.passage
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Completion totals for a reading plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl ReadingProgress {
    #[must_use]
    pub fn from_items(items: &[ReadingPlanItem]) -> Self {
        let completed = items.iter().filter(|item| item.is_completed()).count();
        Self {
            completed,
            total: items.len(),
            percent: score_percentage(completed, items.len()),
        }
    }
}
