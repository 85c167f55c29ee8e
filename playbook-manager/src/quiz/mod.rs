//! Chapter quiz generation and scoring
//!
//! This module derives multiple-choice certification quizzes from a
//! chapter's RACI matrix rows, scores completed sessions against the pass
//! threshold, and batch-generates quiz snapshots for whole playbooks.

pub mod bank;
pub mod generator;
pub mod session;
mod templates;
pub mod types;

// Re-export commonly used items
pub use bank::{run_bank_generation, BankConfig, BankSummary};
pub use generator::{eligible_records, generate_quiz, generate_quiz_with_rng};
pub use session::{QuizReport, QuizSession, PASS_THRESHOLD_PERCENT};
pub use types::{GeneratedQuestion, QuestionKind, QuizSet, MAX_QUESTIONS, MIN_QUESTIONS};
