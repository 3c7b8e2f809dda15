use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct option {index} is out of range for {options} options")]
    CorrectIndexOutOfRange { index: usize, options: usize },

    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("duplicate question id {0}")]
    DuplicateQuestion(QuestionId),

    #[error("duplicate quiz id {0}")]
    DuplicateQuiz(QuizId),

    #[error("score must be a percentage in 0..=100, got {0}")]
    InvalidScore(u8),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Holds at least two options and the 0-based index of the correct one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl QuizQuestion {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyPrompt` if the prompt is blank.
    /// Returns `QuizError::TooFewOptions` if fewer than two options are given.
    /// Returns `QuizError::EmptyOption` if any option is blank.
    /// Returns `QuizError::CorrectIndexOutOfRange` if `correct_index` is not an option.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuizError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuizError::EmptyPrompt);
        }
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions { len: options.len() });
        }
        if let Some(index) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuizError::EmptyOption { index });
        }
        if correct_index >= options.len() {
            return Err(QuizError::CorrectIndexOutOfRange {
                index: correct_index,
                options: options.len(),
            });
        }

        Ok(Self {
            id,
            prompt: prompt.trim().to_owned(),
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// True when `index` names the correct option.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// An ordered, non-empty set of questions with a completion record.
///
/// Only `completed` and `last_score` ever change after loading, and only by
/// building a new value through [`Quiz::with_result`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    id: QuizId,
    title: String,
    questions: Vec<QuizQuestion>,
    completed: bool,
    last_score: Option<u8>,
}

impl Quiz {
    /// Creates a quiz that has never been taken.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyTitle` if the title is blank.
    /// Returns `QuizError::NoQuestions` if `questions` is empty.
    /// Returns `QuizError::DuplicateQuestion` if two questions share an id.
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        questions: Vec<QuizQuestion>,
    ) -> Result<Self, QuizError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        for (pos, question) in questions.iter().enumerate() {
            if questions[..pos].iter().any(|q| q.id() == question.id()) {
                return Err(QuizError::DuplicateQuestion(question.id().clone()));
            }
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            questions,
            completed: false,
            last_score: None,
        })
    }

    /// Returns a copy marked as completed with the given percentage score.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidScore` if `score` is above 100.
    pub fn with_result(mut self, score: u8) -> Result<Self, QuizError> {
        if score > 100 {
            return Err(QuizError::InvalidScore(score));
        }
        self.completed = true;
        self.last_score = Some(score);
        Ok(self)
    }

    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Percentage score of the last recorded attempt.
    #[must_use]
    pub fn last_score(&self) -> Option<u8> {
        self.last_score
    }
}

/// Converts `correct` out of `total` to a rounded percentage.
///
/// Returns 0 when `total` is 0.
#[must_use]
pub fn score_percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    // Round half up in integer arithmetic.
    let pct = (correct * 200 + total) / (total * 2);
    u8::try_from(pct).unwrap_or(100)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    fn question(id: &str, correct: usize) -> QuizQuestion {
        QuizQuestion::new(
            QuestionId::new(id),
            "Who built the ark?",
            options(&["Moses", "Noah", "Abraham"]),
            correct,
        )
        .unwrap()
    }

    #[test]
    fn question_rejects_single_option() {
        let err = QuizQuestion::new(QuestionId::new("a"), "prompt", options(&["only"]), 0)
            .unwrap_err();
        assert_eq!(err, QuizError::TooFewOptions { len: 1 });
    }

    #[test]
    fn question_rejects_out_of_range_correct_index() {
        let err = QuizQuestion::new(QuestionId::new("a"), "prompt", options(&["x", "y"]), 2)
            .unwrap_err();
        assert_eq!(
            err,
            QuizError::CorrectIndexOutOfRange {
                index: 2,
                options: 2
            }
        );
    }

    #[test]
    fn question_rejects_blank_prompt_and_option() {
        let err = QuizQuestion::new(QuestionId::new("a"), "  ", options(&["x", "y"]), 0)
            .unwrap_err();
        assert_eq!(err, QuizError::EmptyPrompt);

        let err = QuizQuestion::new(QuestionId::new("a"), "p", options(&["x", " "]), 0)
            .unwrap_err();
        assert_eq!(err, QuizError::EmptyOption { index: 1 });
    }

    #[test]
    fn question_checks_correctness() {
        let q = question("a", 1);
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
        assert_eq!(q.option_count(), 3);
    }

    #[test]
    fn quiz_requires_questions_and_title() {
        let err = Quiz::new(QuizId::new("q"), "Title", vec![]).unwrap_err();
        assert_eq!(err, QuizError::NoQuestions);

        let err = Quiz::new(QuizId::new("q"), " ", vec![question("a", 0)]).unwrap_err();
        assert_eq!(err, QuizError::EmptyTitle);
    }

    #[test]
    fn quiz_rejects_duplicate_question_ids() {
        let err = Quiz::new(
            QuizId::new("q"),
            "Title",
            vec![question("a", 0), question("a", 1)],
        )
        .unwrap_err();
        assert_eq!(err, QuizError::DuplicateQuestion(QuestionId::new("a")));
    }

    #[test]
    fn quiz_with_result_marks_completed() {
        let quiz = Quiz::new(QuizId::new("q"), "Title", vec![question("a", 0)]).unwrap();
        assert!(!quiz.is_completed());
        assert_eq!(quiz.last_score(), None);

        let done = quiz.clone().with_result(50).unwrap();
        assert!(done.is_completed());
        assert_eq!(done.last_score(), Some(50));

        assert_eq!(quiz.with_result(101).unwrap_err(), QuizError::InvalidScore(101));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(score_percentage(1, 2), 50);
        assert_eq!(score_percentage(2, 3), 67);
        assert_eq!(score_percentage(1, 3), 33);
        assert_eq!(score_percentage(1, 8), 13);
        assert_eq!(score_percentage(3, 3), 100);
        assert_eq!(score_percentage(0, 0), 0);
    }
}
