use thiserror::Error;

use crate::model::{JournalError, QuizError, ReadingPlanError, StudySettingsError, VerseError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Verse(#[from] VerseError),
    #[error(transparent)]
    ReadingPlan(#[from] ReadingPlanError),
    #[error(transparent)]
    Journal(#[from] JournalError),
    #[error(transparent)]
    Settings(#[from] StudySettingsError),
    #[error("invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
