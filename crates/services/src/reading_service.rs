use tracing::debug;

use study_core::model::{ReadingId, ReadingPlanItem, ReadingProgress};

use crate::error::ReadingServiceError;

/// In-memory reading plan tracker.
#[derive(Debug, Clone, Default)]
pub struct ReadingPlanService {
    items: Vec<ReadingPlanItem>,
}

impl ReadingPlanService {
    #[must_use]
    pub fn new(items: Vec<ReadingPlanItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[ReadingPlanItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ReadingId) -> Option<&ReadingPlanItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Flip the completion of one day and return its new state.
    ///
    /// # Errors
    ///
    /// Returns `ReadingServiceError::NotFound` if no day has this id.
    pub fn toggle(&mut self, id: &ReadingId) -> Result<bool, ReadingServiceError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| ReadingServiceError::NotFound(id.clone()))?;
        let completed = item.toggle();
        debug!(reading_id = %id, day = item.day(), completed, "reading toggled");
        Ok(completed)
    }

    #[must_use]
    pub fn progress(&self) -> ReadingProgress {
        ReadingProgress::from_items(&self.items)
    }

    /// First day of the plan not read yet.
    #[must_use]
    pub fn next_unread(&self) -> Option<&ReadingPlanItem> {
        self.items
            .iter()
            .filter(|item| !item.is_completed())
            .min_by_key(|item| item.day())
    }
}
