#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod model;
pub mod seed;
pub mod time;

pub use bank::{QuizBank, QuizSummary};
pub use error::Error;
pub use time::Clock;
