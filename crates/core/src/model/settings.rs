use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed range for the daily chapter goal.
pub const CHAPTER_GOAL_RANGE: std::ops::RangeInclusive<u8> = 1..=10;
/// Allowed range for the daily memorization goal, in verses.
pub const MEMORIZATION_GOAL_RANGE: std::ops::RangeInclusive<u8> = 1..=8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudySettingsError {
    #[error("daily chapter goal must be between 1 and 10, got {0}")]
    InvalidChapterGoal(u8),

    #[error("daily memorization goal must be between 1 and 8, got {0}")]
    InvalidMemorizationGoal(u8),
}

/// Which reminders the user wants to receive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub morning: bool,
    pub afternoon: bool,
    pub evening: bool,
    pub weekly_digest: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            morning: true,
            afternoon: false,
            evening: true,
            weekly_digest: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeTone {
    #[default]
    Classic,
    Minimal,
    Contrast,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyLevel {
    Public,
    #[default]
    Friends,
    Private,
}

/// Validated study preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StudySettingsDraft", into = "StudySettingsDraft")]
pub struct StudySettings {
    notifications: NotificationPrefs,
    reminder_time: NaiveTime,
    daily_chapter_goal: u8,
    daily_memorization_goal: u8,
    theme_tone: ThemeTone,
    privacy_level: PrivacyLevel,
}

/// Editable form of [`StudySettings`]; `Default` yields the stock preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySettingsDraft {
    pub notifications: NotificationPrefs,
    pub reminder_time: NaiveTime,
    pub daily_chapter_goal: u8,
    pub daily_memorization_goal: u8,
    pub theme_tone: ThemeTone,
    pub privacy_level: PrivacyLevel,
}

impl Default for StudySettingsDraft {
    fn default() -> Self {
        Self {
            notifications: NotificationPrefs::default(),
            reminder_time: default_reminder_time(),
            daily_chapter_goal: 3,
            daily_memorization_goal: 2,
            theme_tone: ThemeTone::default(),
            privacy_level: PrivacyLevel::default(),
        }
    }
}

impl StudySettingsDraft {
    /// Validate the draft into settings.
    ///
    /// # Errors
    ///
    /// Returns `StudySettingsError` if a daily goal is outside its allowed range.
    pub fn validate(self) -> Result<StudySettings, StudySettingsError> {
        if !CHAPTER_GOAL_RANGE.contains(&self.daily_chapter_goal) {
            return Err(StudySettingsError::InvalidChapterGoal(
                self.daily_chapter_goal,
            ));
        }
        if !MEMORIZATION_GOAL_RANGE.contains(&self.daily_memorization_goal) {
            return Err(StudySettingsError::InvalidMemorizationGoal(
                self.daily_memorization_goal,
            ));
        }

        Ok(StudySettings {
            notifications: self.notifications,
            reminder_time: self.reminder_time,
            daily_chapter_goal: self.daily_chapter_goal,
            daily_memorization_goal: self.daily_memorization_goal,
            theme_tone: self.theme_tone,
            privacy_level: self.privacy_level,
        })
    }
}

impl StudySettings {
    /// Returns an editable copy of these settings.
    #[must_use]
    pub fn to_draft(&self) -> StudySettingsDraft {
        StudySettingsDraft {
            notifications: self.notifications,
            reminder_time: self.reminder_time,
            daily_chapter_goal: self.daily_chapter_goal,
            daily_memorization_goal: self.daily_memorization_goal,
            theme_tone: self.theme_tone,
            privacy_level: self.privacy_level,
        }
    }

    #[must_use]
    pub fn notifications(&self) -> NotificationPrefs {
        self.notifications
    }

    /// Returns a copy with `prefs` as the notification preferences.
    #[must_use]
    pub fn with_notifications(mut self, prefs: NotificationPrefs) -> Self {
        self.notifications = prefs;
        self
    }

    #[must_use]
    pub fn reminder_time(&self) -> NaiveTime {
        self.reminder_time
    }

    #[must_use]
    pub fn daily_chapter_goal(&self) -> u8 {
        self.daily_chapter_goal
    }

    #[must_use]
    pub fn daily_memorization_goal(&self) -> u8 {
        self.daily_memorization_goal
    }

    #[must_use]
    pub fn theme_tone(&self) -> ThemeTone {
        self.theme_tone
    }

    #[must_use]
    pub fn privacy_level(&self) -> PrivacyLevel {
        self.privacy_level
    }
}

impl Default for StudySettings {
    fn default() -> Self {
        let draft = StudySettingsDraft::default();
        Self {
            notifications: draft.notifications,
            reminder_time: draft.reminder_time,
            daily_chapter_goal: draft.daily_chapter_goal,
            daily_memorization_goal: draft.daily_memorization_goal,
            theme_tone: draft.theme_tone,
            privacy_level: draft.privacy_level,
        }
    }
}

impl TryFrom<StudySettingsDraft> for StudySettings {
    type Error = StudySettingsError;

    fn try_from(draft: StudySettingsDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl From<StudySettings> for StudySettingsDraft {
    fn from(settings: StudySettings) -> Self {
        settings.to_draft()
    }
}

fn default_reminder_time() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 30, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_preferences() {
        let settings = StudySettings::default();
        assert_eq!(settings.daily_chapter_goal(), 3);
        assert_eq!(settings.daily_memorization_goal(), 2);
        assert_eq!(settings.theme_tone(), ThemeTone::Classic);
        assert_eq!(settings.privacy_level(), PrivacyLevel::Friends);
        assert_eq!(
            settings.reminder_time(),
            NaiveTime::from_hms_opt(7, 30, 0).unwrap()
        );
        let prefs = settings.notifications();
        assert!(prefs.morning);
        assert!(!prefs.afternoon);
        assert!(prefs.evening);
        assert!(prefs.weekly_digest);
    }

    #[test]
    fn validate_rejects_out_of_range_goals() {
        let draft = StudySettingsDraft {
            daily_chapter_goal: 0,
            ..StudySettingsDraft::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            StudySettingsError::InvalidChapterGoal(0)
        );

        let draft = StudySettingsDraft {
            daily_memorization_goal: 9,
            ..StudySettingsDraft::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            StudySettingsError::InvalidMemorizationGoal(9)
        );
    }

    #[test]
    fn with_notifications_keeps_other_fields() {
        let prefs = NotificationPrefs {
            morning: false,
            afternoon: true,
            evening: false,
            weekly_digest: false,
        };
        let settings = StudySettings::default().with_notifications(prefs);
        assert_eq!(settings.notifications(), prefs);
        assert_eq!(
            settings.to_draft(),
            StudySettingsDraft {
                notifications: prefs,
                ..StudySettingsDraft::default()
            }
        );
    }

    #[test]
    fn draft_roundtrips_through_settings() {
        let draft = StudySettingsDraft {
            daily_chapter_goal: 10,
            theme_tone: ThemeTone::Contrast,
            ..StudySettingsDraft::default()
        };
        let settings = draft.clone().validate().unwrap();
        assert_eq!(settings.to_draft(), draft);
    }

    #[test]
    fn deserialize_validates_goals() {
        let json = r#"{
            "notifications": {"morning": true, "afternoon": true, "evening": false, "weekly_digest": false},
            "reminder_time": "06:15:00",
            "daily_chapter_goal": 12,
            "daily_memorization_goal": 2,
            "theme_tone": "minimal",
            "privacy_level": "private"
        }"#;
        let result: Result<StudySettings, _> = serde_json::from_str(json);
        assert!(result.is_err());

        let ok = json.replace("12", "4");
        let settings: StudySettings = serde_json::from_str(&ok).unwrap();
        assert_eq!(settings.daily_chapter_goal(), 4);
        assert_eq!(settings.theme_tone(), ThemeTone::Minimal);
        assert_eq!(settings.privacy_level(), PrivacyLevel::Private);
    }
}
