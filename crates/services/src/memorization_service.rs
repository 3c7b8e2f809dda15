use tracing::debug;

use study_core::Clock;
use study_core::model::{Verse, VerseId, VerseStatus};

use crate::error::MemorizationError;

/// Verse counts per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerseCounts {
    pub new: usize,
    pub learning: usize,
    pub mastered: usize,
}

/// Memorization drill: pick a verse, recite it, reveal the text, grade it.
#[derive(Debug, Clone)]
pub struct MemorizationService {
    clock: Clock,
    verses: Vec<Verse>,
    selected: Option<VerseId>,
    revealed: bool,
}

impl MemorizationService {
    #[must_use]
    pub fn new(clock: Clock, verses: Vec<Verse>) -> Self {
        Self {
            clock,
            verses,
            selected: None,
            revealed: false,
        }
    }

    #[must_use]
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    /// Select a verse for practice. Its text starts hidden.
    ///
    /// # Errors
    ///
    /// Returns `MemorizationError::NotFound` for an unknown verse.
    pub fn select(&mut self, id: &VerseId) -> Result<&Verse, MemorizationError> {
        let pos = self.position(id)?;
        self.selected = Some(id.clone());
        self.revealed = false;
        debug!(verse_id = %id, "verse selected");
        Ok(&self.verses[pos])
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Verse> {
        let id = self.selected.as_ref()?;
        self.verses.iter().find(|verse| verse.id() == id)
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Show the text of the selected verse.
    ///
    /// # Errors
    ///
    /// Returns `MemorizationError::NoSelection` if no verse is selected.
    pub fn reveal(&mut self) -> Result<&str, MemorizationError> {
        let id = self.selected.clone().ok_or(MemorizationError::NoSelection)?;
        let pos = self.position(&id)?;
        self.revealed = true;
        Ok(self.verses[pos].text())
    }

    pub fn hide(&mut self) {
        self.revealed = false;
    }

    /// Grade a verse, stamping today's date and hiding the text again.
    ///
    /// # Errors
    ///
    /// Returns `MemorizationError::NotFound` for an unknown verse.
    pub fn set_status(
        &mut self,
        id: &VerseId,
        status: VerseStatus,
    ) -> Result<&Verse, MemorizationError> {
        let pos = self.position(id)?;
        let today = self.clock.today();
        self.verses[pos].review(status, today);
        self.revealed = false;
        debug!(verse_id = %id, ?status, "verse reviewed");
        Ok(&self.verses[pos])
    }

    #[must_use]
    pub fn counts(&self) -> VerseCounts {
        self.verses
            .iter()
            .fold(VerseCounts::default(), |mut counts, verse| {
                match verse.status() {
                    VerseStatus::New => counts.new += 1,
                    VerseStatus::Learning => counts.learning += 1,
                    VerseStatus::Mastered => counts.mastered += 1,
                }
                counts
            })
    }

    fn position(&self, id: &VerseId) -> Result<usize, MemorizationError> {
        self.verses
            .iter()
            .position(|verse| verse.id() == id)
            .ok_or_else(|| MemorizationError::NotFound(id.clone()))
    }
}
