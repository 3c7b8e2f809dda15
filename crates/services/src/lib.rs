#![forbid(unsafe_code)]

pub mod error;
pub mod journal_service;
pub mod memorization_service;
pub mod quiz;
pub mod reading_service;
pub mod settings_service;
pub mod study_services;

pub use study_core::Clock;

pub use error::{
    JournalServiceError, MemorizationError, QuizSessionError, ReadingServiceError,
    SettingsServiceError, StudyServicesError,
};
pub use journal_service::JournalService;
pub use memorization_service::{MemorizationService, VerseCounts};
pub use quiz::{
    OptionMark, OptionView, QuestionView, QuizOperation, QuizOutcome, QuizPhase, QuizProgress,
    QuizSession, QuizSessionView, QuizState, option_marks,
};
pub use reading_service::ReadingPlanService;
pub use settings_service::{NotificationKind, SettingsService};
pub use study_services::StudyServices;
