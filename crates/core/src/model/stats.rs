use crate::model::{Quiz, ReadingPlanItem, Verse, VerseStatus};

/// Dashboard totals derived from the current study state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StudyStats {
    /// Consecutive completed reading days ending at the latest completed day.
    pub streak: u32,
    pub chapters_read: u32,
    pub verses_memorized: u32,
    /// Mean of recorded quiz scores, as a percentage. 0 when nothing is recorded.
    pub quiz_score_average: u8,
}

impl StudyStats {
    #[must_use]
    pub fn compute(readings: &[ReadingPlanItem], verses: &[Verse], quizzes: &[Quiz]) -> Self {
        Self {
            streak: reading_streak(readings),
            chapters_read: count_u32(readings.iter().filter(|r| r.is_completed()).count()),
            verses_memorized: count_u32(
                verses
                    .iter()
                    .filter(|v| v.status() == VerseStatus::Mastered)
                    .count(),
            ),
            quiz_score_average: quiz_average(quizzes),
        }
    }
}

fn reading_streak(readings: &[ReadingPlanItem]) -> u32 {
    let mut days: Vec<(u32, bool)> = readings
        .iter()
        .map(|r| (r.day(), r.is_completed()))
        .collect();
    days.sort_unstable_by_key(|(day, _)| *day);

    let Some(last) = days.iter().rposition(|(_, done)| *done) else {
        return 0;
    };

    let mut streak = 0_u32;
    let mut expected_day = days[last].0;
    for (day, done) in days[..=last].iter().rev() {
        if !done || *day != expected_day {
            break;
        }
        streak = streak.saturating_add(1);
        expected_day = expected_day.saturating_sub(1);
    }
    streak
}

fn quiz_average(quizzes: &[Quiz]) -> u8 {
    let scores: Vec<u32> = quizzes
        .iter()
        .filter_map(Quiz::last_score)
        .map(u32::from)
        .collect();
    if scores.is_empty() {
        return 0;
    }
    let len = count_u32(scores.len());
    let sum: u32 = scores.iter().sum();
    let avg = (sum * 2 + len) / (len * 2);
    u8::try_from(avg).unwrap_or(100)
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
