use tracing::debug;

use study_core::Clock;
use study_core::model::{JournalDraft, JournalEntry, JournalEntryId};

use crate::error::JournalServiceError;

/// In-memory journal. New entries go on top.
#[derive(Debug, Clone)]
pub struct JournalService {
    clock: Clock,
    entries: Vec<JournalEntry>,
}

impl JournalService {
    #[must_use]
    pub fn new(clock: Clock, entries: Vec<JournalEntry>) -> Self {
        Self { clock, entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &JournalEntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Validate `draft`, date it today and put it at the top of the journal.
    ///
    /// # Errors
    ///
    /// Returns `JournalServiceError::Journal` if the title or content is blank.
    pub fn create(&mut self, draft: JournalDraft) -> Result<&JournalEntry, JournalServiceError> {
        let entry = draft.validate(JournalEntryId::generate(), self.clock.today())?;
        debug!(entry_id = %entry.id(), date = %entry.date(), "journal entry created");
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    /// Entries whose title or content contains `term`, ignoring case.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&JournalEntry> {
        let term = term.trim();
        self.entries.iter().filter(|entry| entry.matches(term)).collect()
    }

    #[must_use]
    pub fn with_tag(&self, tag: &str) -> Vec<&JournalEntry> {
        self.entries.iter().filter(|entry| entry.has_tag(tag)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{DEFAULT_JOURNAL_TAG, JournalError};
    use study_core::seed::sample_journal_entries;
    use study_core::time::fixed_clock;

    fn service() -> JournalService {
        JournalService::new(fixed_clock(), sample_journal_entries().unwrap())
    }

    #[test]
    fn create_prepends_dated_entry() {
        let mut service = service();
        let entry = service
            .create(JournalDraft::new("Psaume 23", "Le Seigneur est mon berger."))
            .unwrap()
            .clone();

        assert_eq!(entry.date(), fixed_clock().today());
        assert_eq!(entry.tags(), [DEFAULT_JOURNAL_TAG.to_owned()]);
        assert_eq!(service.entries().len(), 3);
        assert_eq!(service.entries()[0].id(), entry.id());
        assert_eq!(service.get(entry.id()).unwrap().title(), "Psaume 23");
    }

    #[test]
    fn create_rejects_blank_draft() {
        let mut service = service();
        let err = service.create(JournalDraft::new("", "content")).unwrap_err();
        assert_eq!(err, JournalServiceError::Journal(JournalError::EmptyTitle));
        assert_eq!(service.entries().len(), 2);
    }

    #[test]
    fn search_matches_title_and_content() {
        let service = service();
        let hits = service.search("  SAGESSE ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title(), "Prière pour la famille");

        assert_eq!(service.search("").len(), 2);
        assert!(service.search("apocalypse").is_empty());
    }

    #[test]
    fn filter_by_tag() {
        let service = service();
        let hits = service.with_tag("famille");
        assert_eq!(hits.len(), 1);
        assert!(service.with_tag("Jeûne").is_empty());
    }

    #[test]
    fn filter_by_tag_folds_accented_capitals() {
        let mut service = service();
        let id = service
            .create(JournalDraft::new("Romains 5", "Justifiés par la foi").with_tag("Épître"))
            .unwrap()
            .id()
            .clone();

        let hits = service.with_tag("épître");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), &id);
        assert_eq!(service.with_tag("création").len(), 1);
    }
}
