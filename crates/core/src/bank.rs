//! Read-only catalogue of quizzes available during a session.

use crate::model::{Quiz, QuizError, QuizId};

/// Presentation-agnostic list item for the quiz picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
    pub question_count: usize,
    pub completed: bool,
    pub last_score: Option<u8>,
}

impl QuizSummary {
    #[must_use]
    pub fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id().clone(),
            title: quiz.title().to_owned(),
            question_count: quiz.question_count(),
            completed: quiz.is_completed(),
            last_score: quiz.last_score(),
        }
    }
}

/// Ordered collection of quizzes, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizBank {
    quizzes: Vec<Quiz>,
}

impl QuizBank {
    /// Builds a bank, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DuplicateQuiz` if two quizzes share an id.
    pub fn new(quizzes: Vec<Quiz>) -> Result<Self, QuizError> {
        for (pos, quiz) in quizzes.iter().enumerate() {
            if quizzes[..pos].iter().any(|q| q.id() == quiz.id()) {
                return Err(QuizError::DuplicateQuiz(quiz.id().clone()));
            }
        }
        Ok(Self { quizzes })
    }

    #[must_use]
    pub fn get(&self, id: &QuizId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &QuizId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<QuizSummary> {
        self.quizzes.iter().map(QuizSummary::from_quiz).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionId, QuizQuestion};

    fn quiz(id: &str) -> Quiz {
        let question = QuizQuestion::new(
            QuestionId::new(format!("{id}-1")),
            "Prompt",
            vec!["yes".into(), "no".into()],
            0,
        )
        .unwrap();
        Quiz::new(QuizId::new(id), format!("Quiz {id}"), vec![question]).unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = QuizBank::new(vec![quiz("a"), quiz("b"), quiz("a")]).unwrap_err();
        assert_eq!(err, QuizError::DuplicateQuiz(QuizId::new("a")));
    }

    #[test]
    fn lookup_and_order() {
        let bank = QuizBank::new(vec![quiz("b"), quiz("a")]).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(bank.contains(&QuizId::new("a")));
        assert!(bank.get(&QuizId::new("missing")).is_none());

        let ids: Vec<&str> = bank.iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn summaries_expose_picker_fields() {
        let done = quiz("a").with_result(100).unwrap();
        let bank = QuizBank::new(vec![done, quiz("b")]).unwrap();
        let summaries = bank.summaries();

        assert_eq!(summaries[0].title, "Quiz a");
        assert_eq!(summaries[0].question_count, 1);
        assert!(summaries[0].completed);
        assert_eq!(summaries[0].last_score, Some(100));
        assert!(!summaries[1].completed);
        assert_eq!(summaries[1].last_score, None);
    }
}
