//! Data structures for generated chapter quizzes

use serde::{Deserialize, Serialize};

/// Fewest questions a quiz is expected to carry; shorter quizzes are
/// returned as-is rather than padded
pub const MIN_QUESTIONS: usize = 3;

/// Most questions a single quiz may carry
pub const MAX_QUESTIONS: usize = 5;

/// Number of answer options presented per question
pub const OPTIONS_PER_QUESTION: usize = 3;

/// The kind of knowledge a question tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Who holds a RACI role for a step
    Responsibility,
    /// Which step follows another in the process sequence
    Sequence,
}

impl QuestionKind {
    /// Suffix appended to the source step id to form the question id
    pub fn id_suffix(&self) -> &'static str {
        match self {
            QuestionKind::Responsibility => "responsibility",
            QuestionKind::Sequence => "sequence",
        }
    }
}

/// A single multiple-choice question derived from a chapter's RACI matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    /// Exactly three candidate answers in presentation order
    pub options: Vec<String>,
    /// Index of the correct entry in `options`
    pub correct_index: usize,
    pub explanation: String,
    pub source_step_id: String,
}

impl GeneratedQuestion {
    /// The text of the correct answer
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// One generated quiz for a chapter
///
/// Quizzes are ephemeral: every generation re-derives and re-shuffles the
/// questions, so two runs over the same chapter present the same content in
/// a different order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSet {
    /// Opaque label of the chapter/phase the quiz was generated for
    pub phase_label: String,
    pub questions: Vec<GeneratedQuestion>,
}

impl QuizSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
