mod progress;
mod session;
mod state;
mod view;

// Public API of the quiz subsystem.
pub use crate::error::QuizSessionError;
pub use progress::QuizProgress;
pub use session::QuizSession;
pub use state::{QuizOperation, QuizPhase, QuizState};
pub use view::{OptionMark, OptionView, QuestionView, QuizOutcome, QuizSessionView, option_marks};
