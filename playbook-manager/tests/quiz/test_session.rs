//! Tests for quiz session scoring

use playbook_manager::quiz::{
    GeneratedQuestion, QuestionKind, QuizSession, QuizSet, PASS_THRESHOLD_PERCENT,
};

fn question(id: &str, correct_index: usize) -> GeneratedQuestion {
    GeneratedQuestion {
        id: id.to_string(),
        kind: QuestionKind::Responsibility,
        prompt: format!("Prompt for {}", id),
        options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        correct_index,
        explanation: format!("Explanation for {}", id),
        source_step_id: id.to_string(),
    }
}

fn quiz(count: usize) -> QuizSet {
    QuizSet {
        phase_label: "Test Phase".to_string(),
        questions: (0..count).map(|i| question(&format!("P{}", i + 1), i % 3)).collect(),
    }
}

#[test]
fn pass_threshold_is_seventy_five_percent() {
    assert_eq!(PASS_THRESHOLD_PERCENT, 75);
}

#[test]
fn three_of_four_correct_passes() {
    let mut session = QuizSession::new(quiz(4));
    for i in 0..3 {
        session.record_answer(i, i % 3).unwrap();
    }
    session.record_answer(3, (3 % 3 + 1) % 3).unwrap();

    let report = session.report();
    assert_eq!(report.correct, 3);
    assert_eq!(report.score_percent, 75);
    assert!(report.passed);
}

#[test]
fn two_of_three_correct_fails() {
    let mut session = QuizSession::new(quiz(3));
    session.record_answer(0, 0).unwrap();
    session.record_answer(1, 1).unwrap();
    session.record_answer(2, 0).unwrap();

    let report = session.report();
    assert_eq!(report.correct, 2);
    assert_eq!(report.score_percent, 66);
    assert!(!report.passed);
}

#[test]
fn unanswered_questions_count_against_the_score() {
    let mut session = QuizSession::new(quiz(4));
    session.record_answer(0, 0).unwrap();

    let report = session.report();
    assert_eq!(report.answered, 1);
    assert_eq!(report.correct, 1);
    assert_eq!(report.score_percent, 25);
    assert!(!report.passed);
}

#[test]
fn an_empty_quiz_never_passes() {
    let session = QuizSession::new(quiz(0));
    let report = session.report();
    assert_eq!(report.total, 0);
    assert_eq!(report.score_percent, 0);
    assert!(!report.passed);
}

#[test]
fn record_answer_reports_correctness() {
    let mut session = QuizSession::new(quiz(2));
    assert!(session.record_answer(0, 0).unwrap());
    assert!(!session.record_answer(1, 0).unwrap());
}

#[test]
fn answers_can_be_revised() {
    let mut session = QuizSession::new(quiz(1));
    session.record_answer(0, 2).unwrap();
    assert_eq!(session.report().correct, 0);

    session.record_answer(0, 0).unwrap();
    assert_eq!(session.report().correct, 1);
}

#[test]
fn out_of_range_indices_are_rejected() {
    let mut session = QuizSession::new(quiz(2));
    assert!(session.record_answer(2, 0).is_err());
    assert!(session.record_answer(0, 3).is_err());
    // Nothing was recorded by the failed calls
    assert_eq!(session.report().answered, 0);
}
