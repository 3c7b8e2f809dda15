use study_core::model::{Quiz, QuizError, QuizId, QuizQuestion, score_percentage};

/// How an option should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// No answer yet.
    Neutral,
    /// The right answer, shown once any answer is locked.
    Correct,
    /// The selected option when it is wrong.
    Incorrect,
    /// Any other option after an answer is locked.
    Dimmed,
}

/// Derives a mark for every option of `question` from the locked `selection`.
#[must_use]
pub fn option_marks(question: &QuizQuestion, selection: Option<usize>) -> Vec<OptionMark> {
    (0..question.option_count())
        .map(|idx| match selection {
            None => OptionMark::Neutral,
            Some(_) if question.is_correct(idx) => OptionMark::Correct,
            Some(selected) if selected == idx => OptionMark::Incorrect,
            Some(_) => OptionMark::Dimmed,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub mark: OptionMark,
}

/// Snapshot of the question on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    /// 1-based.
    pub question_number: usize,
    pub total: usize,
    /// Share of questions already behind this one.
    pub progress_percent: u8,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub selection: Option<usize>,
    pub is_correct: Option<bool>,
    pub is_last: bool,
    pub score: usize,
}

impl QuestionView {
    pub(crate) fn build(
        quiz: &Quiz,
        question: &QuizQuestion,
        index: usize,
        score: usize,
        selection: Option<usize>,
    ) -> Self {
        let total = quiz.question_count();
        let options = question
            .options()
            .iter()
            .zip(option_marks(question, selection))
            .enumerate()
            .map(|(index, (text, mark))| OptionView {
                index,
                text: text.clone(),
                mark,
            })
            .collect();

        Self {
            quiz_id: quiz.id().clone(),
            quiz_title: quiz.title().to_owned(),
            question_number: index + 1,
            total,
            progress_percent: score_percentage(index, total),
            prompt: question.prompt().to_owned(),
            options,
            selection,
            is_correct: selection.map(|s| question.is_correct(s)),
            is_last: index == quiz.last_index(),
            score,
        }
    }
}

/// Result of a finished attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub quiz_id: QuizId,
    pub quiz_title: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u8,
}

impl QuizOutcome {
    pub(crate) fn new(quiz: &Quiz, score: usize) -> Self {
        let total = quiz.question_count();
        Self {
            quiz_id: quiz.id().clone(),
            quiz_title: quiz.title().to_owned(),
            score,
            total,
            percentage: score_percentage(score, total),
        }
    }

    /// Records this outcome on `quiz`, returning the updated copy.
    ///
    /// The session never does this itself; callers that keep quiz history opt in.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidScore` if the percentage is out of range.
    pub fn apply_to(&self, quiz: Quiz) -> Result<Quiz, QuizError> {
        quiz.with_result(self.percentage)
    }
}

/// What the presentation layer should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSessionView {
    Idle,
    Question(QuestionView),
    Completed(QuizOutcome),
}
