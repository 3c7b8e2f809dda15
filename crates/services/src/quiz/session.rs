use std::sync::Arc;

use tracing::{debug, warn};

use study_core::QuizBank;
use study_core::model::{Quiz, QuizId, QuizQuestion};

use super::progress::QuizProgress;
use super::state::{QuizOperation, QuizState};
use super::view::{QuestionView, QuizOutcome, QuizSessionView};
use crate::error::QuizSessionError;

/// Controller for the single live quiz attempt.
///
/// Reads quizzes from a shared, read-only [`QuizBank`] and owns the only
/// mutable [`QuizState`]. Operations either apply a full transition or
/// return an error and leave the state as it was.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuizBank>,
    state: QuizState,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: Arc<QuizBank>) -> Self {
        Self {
            bank,
            state: QuizState::Idle,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// The quiz being taken, if any.
    #[must_use]
    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.state.quiz_id().and_then(|id| self.bank.get(id))
    }

    /// The question on screen; `None` when idle or completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        let index = self.state.index()?;
        self.active_quiz()?.question(index)
    }

    /// Start `quiz_id` from its first question, discarding any attempt in progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::NotFound` if the bank has no such quiz; the
    /// previous session is kept.
    pub fn start(&mut self, quiz_id: &QuizId) -> Result<&QuizState, QuizSessionError> {
        if !self.bank.contains(quiz_id) {
            warn!(quiz_id = %quiz_id, operation = %QuizOperation::Start, "quiz not found");
            return Err(QuizSessionError::NotFound(quiz_id.clone()));
        }

        if let Some(previous) = self.state.quiz_id() {
            debug!(quiz_id = %previous, phase = %self.state.phase(), "discarding quiz session");
        }
        self.state = QuizState::AwaitingAnswer {
            quiz_id: quiz_id.clone(),
            index: 0,
            score: 0,
        };
        debug!(quiz_id = %quiz_id, index = 0, score = 0, "quiz started");
        Ok(&self.state)
    }

    /// Lock in `option` for the current question and score it.
    ///
    /// Once an answer is locked, further calls are ignored until [`advance`](Self::advance).
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::InvalidInput` if `option` is not an option of
    /// the current question.
    /// Returns `QuizSessionError::InvalidTransition` when idle or completed.
    pub fn submit_answer(&mut self, option: usize) -> Result<&QuizState, QuizSessionError> {
        let next = match &self.state {
            QuizState::AwaitingAnswer {
                quiz_id,
                index,
                score,
            } => {
                let question = self.question_at(quiz_id, *index)?;
                if option >= question.option_count() {
                    warn!(
                        quiz_id = %quiz_id,
                        index = *index,
                        option,
                        options = question.option_count(),
                        "answer out of range"
                    );
                    return Err(QuizSessionError::InvalidInput {
                        index: option,
                        options: question.option_count(),
                    });
                }

                let is_correct = question.is_correct(option);
                let score = if is_correct { score + 1 } else { *score };
                debug!(
                    quiz_id = %quiz_id,
                    index = *index,
                    score,
                    selection = option,
                    is_correct,
                    "answer locked"
                );
                QuizState::AnswerLocked {
                    quiz_id: quiz_id.clone(),
                    index: *index,
                    score,
                    selection: option,
                    is_correct,
                }
            }
            QuizState::AnswerLocked { quiz_id, index, .. } => {
                debug!(quiz_id = %quiz_id, index = *index, option, "answer already locked");
                return Ok(&self.state);
            }
            QuizState::Idle | QuizState::Completed { .. } => {
                return Err(self.reject(QuizOperation::SubmitAnswer));
            }
        };

        self.state = next;
        Ok(&self.state)
    }

    /// Move past a locked answer: to the next question, or to `Completed`
    /// after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::InvalidTransition` unless an answer is locked.
    pub fn advance(&mut self) -> Result<&QuizState, QuizSessionError> {
        let next = match &self.state {
            QuizState::AnswerLocked {
                quiz_id,
                index,
                score,
                ..
            } => {
                let quiz = self.quiz(quiz_id)?;
                if *index >= quiz.last_index() {
                    debug!(quiz_id = %quiz_id, index = *index, score = *score, "quiz completed");
                    QuizState::Completed {
                        quiz_id: quiz_id.clone(),
                        final_score: *score,
                    }
                } else {
                    debug!(quiz_id = %quiz_id, index = *index + 1, score = *score, "next question");
                    QuizState::AwaitingAnswer {
                        quiz_id: quiz_id.clone(),
                        index: index + 1,
                        score: *score,
                    }
                }
            }
            QuizState::Idle | QuizState::AwaitingAnswer { .. } | QuizState::Completed { .. } => {
                return Err(self.reject(QuizOperation::Advance));
            }
        };

        self.state = next;
        Ok(&self.state)
    }

    /// Drop the current attempt. The bank is not updated.
    pub fn reset(&mut self) -> &QuizState {
        if let Some(quiz_id) = self.state.quiz_id() {
            debug!(
                quiz_id = %quiz_id,
                index = ?self.state.index(),
                score = ?self.state.score(),
                phase = %self.state.phase(),
                operation = %QuizOperation::Reset,
                "quiz session reset"
            );
        }
        self.state = QuizState::Idle;
        &self.state
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        let total = self.active_quiz()?.question_count();
        let progress = match &self.state {
            QuizState::Idle => return None,
            QuizState::AwaitingAnswer { index, .. } => QuizProgress::new(total, *index, false),
            QuizState::AnswerLocked { index, .. } => QuizProgress::new(total, index + 1, false),
            QuizState::Completed { .. } => QuizProgress::new(total, total, true),
        };
        Some(progress)
    }

    /// Final result; `None` unless completed.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        match &self.state {
            QuizState::Completed {
                quiz_id,
                final_score,
            } => self
                .bank
                .get(quiz_id)
                .map(|quiz| QuizOutcome::new(quiz, *final_score)),
            _ => None,
        }
    }

    /// Snapshot for rendering the current state.
    #[must_use]
    pub fn view(&self) -> QuizSessionView {
        match &self.state {
            QuizState::Idle => QuizSessionView::Idle,
            QuizState::AwaitingAnswer {
                quiz_id,
                index,
                score,
            } => self.question_view(quiz_id, *index, *score, None),
            QuizState::AnswerLocked {
                quiz_id,
                index,
                score,
                selection,
                ..
            } => self.question_view(quiz_id, *index, *score, Some(*selection)),
            QuizState::Completed { .. } => self
                .outcome()
                .map_or(QuizSessionView::Idle, QuizSessionView::Completed),
        }
    }

    fn question_view(
        &self,
        quiz_id: &QuizId,
        index: usize,
        score: usize,
        selection: Option<usize>,
    ) -> QuizSessionView {
        self.bank
            .get(quiz_id)
            .and_then(|quiz| {
                quiz.question(index)
                    .map(|question| QuestionView::build(quiz, question, index, score, selection))
            })
            .map_or(QuizSessionView::Idle, QuizSessionView::Question)
    }

    fn quiz(&self, quiz_id: &QuizId) -> Result<&Quiz, QuizSessionError> {
        self.bank
            .get(quiz_id)
            .ok_or_else(|| QuizSessionError::NotFound(quiz_id.clone()))
    }

    fn question_at(
        &self,
        quiz_id: &QuizId,
        index: usize,
    ) -> Result<&QuizQuestion, QuizSessionError> {
        self.quiz(quiz_id)?
            .question(index)
            .ok_or_else(|| QuizSessionError::NotFound(quiz_id.clone()))
    }

    fn reject(&self, operation: QuizOperation) -> QuizSessionError {
        let state = self.state.phase();
        warn!(%operation, %state, "invalid quiz transition");
        QuizSessionError::InvalidTransition { operation, state }
    }
}
