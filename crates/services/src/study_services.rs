use std::sync::Arc;

use tracing::debug;

use study_core::model::{StudySettings, StudyStats};
use study_core::{Clock, QuizBank, seed};

use crate::error::StudyServicesError;
use crate::journal_service::JournalService;
use crate::memorization_service::MemorizationService;
use crate::quiz::QuizSession;
use crate::reading_service::ReadingPlanService;
use crate::settings_service::SettingsService;

/// Assembles every study service over the same in-memory data.
#[derive(Debug, Clone)]
pub struct StudyServices {
    bank: Arc<QuizBank>,
    quiz: QuizSession,
    reading: ReadingPlanService,
    memorization: MemorizationService,
    journal: JournalService,
    settings: SettingsService,
}

impl StudyServices {
    /// Build services from the bundled sample data.
    ///
    /// # Errors
    ///
    /// Returns `StudyServicesError::Seed` if the sample data fails validation.
    pub fn seeded(clock: Clock) -> Result<Self, StudyServicesError> {
        let bank = Arc::new(seed::sample_quiz_bank().map_err(study_core::Error::from)?);
        let reading = seed::sample_reading_plan(clock.today()).map_err(study_core::Error::from)?;
        let verses = seed::sample_verses().map_err(study_core::Error::from)?;
        let entries = seed::sample_journal_entries()?;

        debug!(
            quizzes = bank.len(),
            reading_days = reading.len(),
            verses = verses.len(),
            journal_entries = entries.len(),
            "study services seeded"
        );

        Ok(Self {
            quiz: QuizSession::new(Arc::clone(&bank)),
            bank,
            reading: ReadingPlanService::new(reading),
            memorization: MemorizationService::new(clock, verses),
            journal: JournalService::new(clock, entries),
            settings: SettingsService::new(StudySettings::default()),
        })
    }

    #[must_use]
    pub fn quiz_bank(&self) -> Arc<QuizBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizSession {
        &mut self.quiz
    }

    #[must_use]
    pub fn reading(&self) -> &ReadingPlanService {
        &self.reading
    }

    pub fn reading_mut(&mut self) -> &mut ReadingPlanService {
        &mut self.reading
    }

    #[must_use]
    pub fn memorization(&self) -> &MemorizationService {
        &self.memorization
    }

    pub fn memorization_mut(&mut self) -> &mut MemorizationService {
        &mut self.memorization
    }

    #[must_use]
    pub fn journal(&self) -> &JournalService {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut JournalService {
        &mut self.journal
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsService {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsService {
        &mut self.settings
    }

    /// Dashboard totals over the current state.
    #[must_use]
    pub fn stats(&self) -> StudyStats {
        StudyStats::compute(
            self.reading.items(),
            self.memorization.verses(),
            self.bank.quizzes(),
        )
    }
}
