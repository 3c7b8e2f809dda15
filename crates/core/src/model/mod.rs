mod ids;
mod journal;
mod quiz;
mod reading;
mod settings;
mod stats;
mod verse;

pub use ids::{JournalEntryId, ParseIdError, QuestionId, QuizId, ReadingId, VerseId};

pub use journal::{DEFAULT_JOURNAL_TAG, JournalDraft, JournalEntry, JournalError};
pub use quiz::{Quiz, QuizError, QuizQuestion, score_percentage};
pub use reading::{ReadingPlanError, ReadingPlanItem, ReadingProgress};
pub use settings::{
    NotificationPrefs, PrivacyLevel, StudySettings, StudySettingsDraft, StudySettingsError,
    ThemeTone,
};
pub use stats::StudyStats;
pub use verse::{Verse, VerseError, VerseStatus};
