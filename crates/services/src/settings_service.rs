use tracing::debug;

use study_core::model::{StudySettings, StudySettingsDraft};

use crate::error::SettingsServiceError;

/// One reminder slot in the notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Morning,
    Afternoon,
    Evening,
    WeeklyDigest,
}

/// Holds the live study settings.
#[derive(Debug, Clone, Default)]
pub struct SettingsService {
    settings: StudySettings,
}

impl SettingsService {
    #[must_use]
    pub fn new(settings: StudySettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn current(&self) -> &StudySettings {
        &self.settings
    }

    /// Replace the settings with a validated draft.
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError::Settings` if the draft is invalid; the
    /// current settings are kept.
    pub fn update(
        &mut self,
        draft: StudySettingsDraft,
    ) -> Result<&StudySettings, SettingsServiceError> {
        self.settings = draft.validate()?;
        debug!(settings = ?self.settings, "settings updated");
        Ok(&self.settings)
    }

    pub fn set_notification(&mut self, kind: NotificationKind, enabled: bool) -> &StudySettings {
        let mut prefs = self.settings.notifications();
        match kind {
            NotificationKind::Morning => prefs.morning = enabled,
            NotificationKind::Afternoon => prefs.afternoon = enabled,
            NotificationKind::Evening => prefs.evening = enabled,
            NotificationKind::WeeklyDigest => prefs.weekly_digest = enabled,
        }
        self.settings = self.settings.clone().with_notifications(prefs);
        debug!(?kind, enabled, "notification preference changed");
        &self.settings
    }

    pub fn reset(&mut self) -> &StudySettings {
        self.settings = StudySettings::default();
        debug!("settings reset to defaults");
        &self.settings
    }
}
