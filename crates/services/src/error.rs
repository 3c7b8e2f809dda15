//! Shared error types for the services crate.

use thiserror::Error;

use study_core::model::{JournalError, QuizId, ReadingId, StudySettingsError, VerseId};

use crate::quiz::{QuizOperation, QuizPhase};

/// Errors emitted by `QuizSession`.
///
/// Every variant leaves the session state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("quiz {0} not found")]
    NotFound(QuizId),
    #[error("cannot {operation} while {state}")]
    InvalidTransition {
        operation: QuizOperation,
        state: QuizPhase,
    },
    #[error("option {index} is out of range for {options} options")]
    InvalidInput { index: usize, options: usize },
}

/// Errors emitted by `ReadingPlanService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadingServiceError {
    #[error("reading {0} not found")]
    NotFound(ReadingId),
}

/// Errors emitted by `MemorizationService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MemorizationError {
    #[error("verse {0} not found")]
    NotFound(VerseId),
    #[error("no verse selected")]
    NoSelection,
}

/// Errors emitted by `JournalService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum JournalServiceError {
    #[error(transparent)]
    Journal(#[from] JournalError),
}

/// Errors emitted by `SettingsService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsServiceError {
    #[error(transparent)]
    Settings(#[from] StudySettingsError),
}

/// Errors emitted while assembling the seeded services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyServicesError {
    #[error(transparent)]
    Seed(#[from] study_core::Error),
}
