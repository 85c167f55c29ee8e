//! Chapter quiz generation from RACI matrix rows
//!
//! Derives a shuffled multiple-choice quiz from a chapter's responsibility
//! records. Two question kinds are produced: responsibility questions (who
//! holds the highest-priority role for a step) and sequence questions
//! (which step follows another). The generator is a pure function of its
//! input apart from the injected random source, so callers can pass a
//! seeded [`rand::rngs::StdRng`] to reproduce an exact quiz.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use playbook_manager_sdk::ResponsibilityRecord;

use crate::quiz::templates::{responsibility_prompt, sequence_prompt, simplify_task};
use crate::quiz::types::{GeneratedQuestion, QuestionKind, QuizSet, MAX_QUESTIONS};

/// Answer candidate carried through the shuffle
///
/// The correct slot is tagged rather than recovered by text comparison
/// afterwards, so duplicate option texts cannot mislabel the answer.
struct TaggedOption {
    text: String,
    correct: bool,
}

/// Generate a quiz for one chapter using the thread-local random source
pub fn generate_quiz(records: &[ResponsibilityRecord], phase_label: &str) -> QuizSet {
    generate_quiz_with_rng(records, phase_label, &mut rand::thread_rng())
}

/// Generate a quiz for one chapter with an injected random source
///
/// Returns up to [`MAX_QUESTIONS`] questions; when fewer can be built the
/// result is returned short, down to an empty set for a chapter with no
/// eligible records. The final list is shuffled as a whole.
pub fn generate_quiz_with_rng<R: Rng + ?Sized>(
    records: &[ResponsibilityRecord],
    phase_label: &str,
    rng: &mut R,
) -> QuizSet {
    let eligible = eligible_records(records);

    let mut questions = responsibility_questions(&eligible, rng);
    let quota_used = questions.len();
    questions.extend(sequence_questions(&eligible, quota_used, rng));

    questions.truncate(MAX_QUESTIONS);
    questions.shuffle(rng);

    QuizSet {
        phase_label: phase_label.to_string(),
        questions,
    }
}

/// Records that may back a question: non-boundary, with a task and at
/// least one role assignment
pub fn eligible_records(records: &[ResponsibilityRecord]) -> Vec<&ResponsibilityRecord> {
    records.iter().filter(|r| r.is_eligible()).collect()
}

/// One question per eligible record, first occurrence of each task text
/// wins, up to the shared quota
fn responsibility_questions<R: Rng + ?Sized>(
    eligible: &[&ResponsibilityRecord],
    rng: &mut R,
) -> Vec<GeneratedQuestion> {
    let mut used_tasks: HashSet<&str> = HashSet::new();
    let mut questions = Vec::new();

    for (index, record) in eligible.iter().enumerate() {
        if questions.len() >= MAX_QUESTIONS {
            break;
        }
        if used_tasks.contains(record.task.as_str()) {
            continue;
        }

        // Highest-priority populated role is the designated correct answer
        let assignments = record.role_assignments();
        let Some(&(role, correct_name)) = assignments.first() else {
            continue;
        };

        let wrong = wrong_role_candidates(eligible, index, correct_name);
        if wrong.len() < 2 {
            continue;
        }

        let relation = role.relation_phrase();
        let prompt = responsibility_prompt(&record.task, &record.step_id, relation);
        let (options, correct_index) = shuffled_options(correct_name.to_string(), wrong, rng);

        questions.push(GeneratedQuestion {
            id: question_id(&record.step_id, QuestionKind::Responsibility),
            kind: QuestionKind::Responsibility,
            prompt,
            options,
            correct_index,
            explanation: format!(
                "{} is {} this task according to the RACI matrix for Step {}.",
                correct_name, relation, record.step_id
            ),
            source_step_id: record.step_id.clone(),
        });
        used_tasks.insert(record.task.as_str());
    }

    questions
}

/// First two distinct role names found on the other eligible records,
/// scanning in input order and skipping the correct answer's name
fn wrong_role_candidates(
    eligible: &[&ResponsibilityRecord],
    current: usize,
    correct_name: &str,
) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    for (index, record) in eligible.iter().enumerate() {
        if index == current {
            continue;
        }
        for (_, name) in record.role_assignments() {
            if name == correct_name || candidates.iter().any(|c| c == name) {
                continue;
            }
            candidates.push(name.to_string());
            if candidates.len() == 2 {
                return candidates;
            }
        }
    }

    candidates
}

/// Sequence questions over adjacent eligible pairs, filling the quota left
/// by the responsibility questions
fn sequence_questions<R: Rng + ?Sized>(
    eligible: &[&ResponsibilityRecord],
    quota_used: usize,
    rng: &mut R,
) -> Vec<GeneratedQuestion> {
    let mut questions = Vec::new();
    if eligible.len() < 2 {
        return questions;
    }

    for index in 0..eligible.len() - 1 {
        if quota_used + questions.len() >= MAX_QUESTIONS {
            break;
        }
        let current = eligible[index];
        let next = eligible[index + 1];

        // Wrong answers are drawn from the other steps of the same chapter
        let pool: Vec<&ResponsibilityRecord> = eligible
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index && i != index + 1)
            .map(|(_, r)| *r)
            .collect();
        if pool.len() < 2 {
            continue;
        }
        let wrong: Vec<&ResponsibilityRecord> =
            pool.choose_multiple(rng, 2).copied().collect();

        let prompt = sequence_prompt(&current.task, &current.step_id);
        let (options, correct_index) = shuffled_options(
            simplify_task(&next.task),
            vec![simplify_task(&wrong[0].task), simplify_task(&wrong[1].task)],
            rng,
        );

        questions.push(GeneratedQuestion {
            id: question_id(&current.step_id, QuestionKind::Sequence),
            kind: QuestionKind::Sequence,
            prompt,
            options,
            correct_index,
            explanation: format!(
                "Step {} follows Step {} in the chapter's process sequence.",
                next.step_id, current.step_id
            ),
            source_step_id: current.step_id.clone(),
        });
    }

    questions
}

fn question_id(step_id: &str, kind: QuestionKind) -> String {
    format!("{}-{}", step_id, kind.id_suffix())
}

/// Shuffle the correct answer in with the wrong ones and report its final
/// position
fn shuffled_options<R: Rng + ?Sized>(
    correct: String,
    wrong: Vec<String>,
    rng: &mut R,
) -> (Vec<String>, usize) {
    let mut tagged: Vec<TaggedOption> = Vec::with_capacity(wrong.len() + 1);
    tagged.push(TaggedOption {
        text: correct,
        correct: true,
    });
    tagged.extend(wrong.into_iter().map(|text| TaggedOption {
        text,
        correct: false,
    }));

    tagged.shuffle(rng);

    let correct_index = tagged.iter().position(|o| o.correct).unwrap_or(0);
    let options = tagged.into_iter().map(|o| o.text).collect();
    (options, correct_index)
}
