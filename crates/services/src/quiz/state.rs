use std::fmt;

use study_core::model::QuizId;

/// Where a quiz attempt stands.
///
/// `Idle -> AwaitingAnswer -> AnswerLocked -> (AwaitingAnswer | Completed) -> Idle`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizState {
    /// No quiz is running.
    #[default]
    Idle,
    AwaitingAnswer {
        quiz_id: QuizId,
        index: usize,
        score: usize,
    },
    /// An answer was submitted for `index`; it can no longer change.
    AnswerLocked {
        quiz_id: QuizId,
        index: usize,
        score: usize,
        selection: usize,
        is_correct: bool,
    },
    Completed {
        quiz_id: QuizId,
        final_score: usize,
    },
}

impl QuizState {
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self {
            QuizState::Idle => QuizPhase::Idle,
            QuizState::AwaitingAnswer { .. } => QuizPhase::AwaitingAnswer,
            QuizState::AnswerLocked { .. } => QuizPhase::AnswerLocked,
            QuizState::Completed { .. } => QuizPhase::Completed,
        }
    }

    #[must_use]
    pub fn quiz_id(&self) -> Option<&QuizId> {
        match self {
            QuizState::Idle => None,
            QuizState::AwaitingAnswer { quiz_id, .. }
            | QuizState::AnswerLocked { quiz_id, .. }
            | QuizState::Completed { quiz_id, .. } => Some(quiz_id),
        }
    }

    /// Index of the question on screen; `None` when idle or completed.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            QuizState::AwaitingAnswer { index, .. } | QuizState::AnswerLocked { index, .. } => {
                Some(*index)
            }
            QuizState::Idle | QuizState::Completed { .. } => None,
        }
    }

    /// Correct answers so far; `None` when idle.
    #[must_use]
    pub fn score(&self) -> Option<usize> {
        match self {
            QuizState::Idle => None,
            QuizState::AwaitingAnswer { score, .. } | QuizState::AnswerLocked { score, .. } => {
                Some(*score)
            }
            QuizState::Completed { final_score, .. } => Some(*final_score),
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        match self {
            QuizState::AnswerLocked { selection, .. } => Some(*selection),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, QuizState::Idle)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, QuizState::Completed { .. })
    }
}

/// Payload-free tag of a [`QuizState`], for errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    Idle,
    AwaitingAnswer,
    AnswerLocked,
    Completed,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizPhase::Idle => "idle",
            QuizPhase::AwaitingAnswer => "awaiting an answer",
            QuizPhase::AnswerLocked => "the answer is locked",
            QuizPhase::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// User intents a `QuizSession` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizOperation {
    Start,
    SubmitAnswer,
    Advance,
    Reset,
}

impl fmt::Display for QuizOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizOperation::Start => "start",
            QuizOperation::SubmitAnswer => "submit an answer",
            QuizOperation::Advance => "advance",
            QuizOperation::Reset => "reset",
        };
        f.write_str(label)
    }
}
