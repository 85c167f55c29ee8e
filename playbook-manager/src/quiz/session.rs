//! Quiz sessions: answer collection and pass/fail scoring

use anyhow::{bail, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::quiz::types::QuizSet;

/// Minimum score (percent) required to pass a chapter quiz
pub const PASS_THRESHOLD_PERCENT: usize = 75;

/// One run through a generated quiz
///
/// Holds the quiz plus one optional answer slot per question. Answers can
/// be revised until the report is taken; scoring always reflects the
/// latest recorded choice.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    quiz: QuizSet,
    answers: Vec<Option<usize>>,
}

impl QuizSession {
    pub fn new(quiz: QuizSet) -> Self {
        let answers = vec![None; quiz.questions.len()];
        Self {
            id: Uuid::new_v4(),
            quiz,
            answers,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn quiz(&self) -> &QuizSet {
        &self.quiz
    }

    /// Record the chosen option for a question; returns whether the choice
    /// was correct
    pub fn record_answer(&mut self, question: usize, choice: usize) -> Result<bool> {
        let Some(q) = self.quiz.questions.get(question) else {
            bail!(
                "Question index {} out of range ({} questions)",
                question,
                self.quiz.questions.len()
            );
        };
        if choice >= q.options.len() {
            bail!(
                "Option index {} out of range for question '{}'",
                choice,
                q.id
            );
        }
        self.answers[question] = Some(choice);
        Ok(choice == q.correct_index)
    }

    /// Score the session against the pass threshold
    pub fn report(&self) -> QuizReport {
        let total = self.quiz.questions.len();
        let answered = self.answers.iter().filter(|a| a.is_some()).count();
        let correct = self
            .quiz
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, answer)| **answer == Some(q.correct_index))
            .count();

        let score_percent = if total == 0 {
            0
        } else {
            (correct * 100 / total) as u32
        };

        QuizReport {
            total,
            answered,
            correct,
            score_percent,
            // An empty quiz certifies nothing
            passed: total > 0 && correct * 100 >= total * PASS_THRESHOLD_PERCENT,
        }
    }
}

/// Outcome of a scored quiz session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizReport {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    pub score_percent: u32,
    pub passed: bool,
}
