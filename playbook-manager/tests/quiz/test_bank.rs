//! Tests for batch quiz bank generation

use std::env;
use std::fs;
use std::path::PathBuf;

use playbook_manager::quiz::{run_bank_generation, BankConfig, QuizSet};
use playbook_manager_sdk::{Chapter, Playbook};

use super::common::{mobilization_chapter, record};

fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("playbook_manager_test_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

fn sample_playbook() -> Playbook {
    Playbook {
        id: "power-project".to_string(),
        title: "Power Project Execution".to_string(),
        chapters: vec![
            Chapter {
                id: "mobilization".to_string(),
                title: "Mobilization".to_string(),
                description: None,
                steps: mobilization_chapter(),
            },
            Chapter {
                id: "appendix".to_string(),
                title: "Appendix".to_string(),
                description: None,
                // Boundary nodes only, nothing to quiz
                steps: vec![
                    record("S", "Start", None, None, None, None),
                    record("E", "End", None, None, None, None),
                ],
            },
        ],
    }
}

#[tokio::test]
async fn bank_writes_one_file_per_quizzable_chapter() {
    let dir = temp_dir("bank_basic");
    let playbook = sample_playbook();
    let config = BankConfig {
        output_dir: dir.display().to_string(),
        batch_size: 2,
        seed: Some(42),
        chapters: None,
    };

    let summary = run_bank_generation(&playbook, &config).await.unwrap();
    assert_eq!(summary.written, 1);
    assert_eq!(summary.skipped, 1);

    let files: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("quiz_mobilization_"));
    assert!(name.ends_with(".yaml"));

    let quiz: QuizSet = serde_yaml::from_str(&fs::read_to_string(&files[0]).unwrap()).unwrap();
    assert_eq!(quiz.phase_label, "Mobilization");
    assert!((3..=5).contains(&quiz.len()));

    cleanup(&dir);
}

#[tokio::test]
async fn bank_respects_the_chapter_filter() {
    let dir = temp_dir("bank_filter");
    let playbook = sample_playbook();
    let config = BankConfig {
        output_dir: dir.display().to_string(),
        batch_size: 1,
        seed: Some(7),
        chapters: Some(vec!["appendix".to_string()]),
    };

    let summary = run_bank_generation(&playbook, &config).await.unwrap();
    assert_eq!(summary.written, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

    cleanup(&dir);
}

#[tokio::test]
async fn bank_rejects_unknown_chapter_ids() {
    let dir = temp_dir("bank_unknown");
    let playbook = sample_playbook();
    let config = BankConfig {
        output_dir: dir.display().to_string(),
        batch_size: 1,
        seed: None,
        chapters: Some(vec!["no-such-chapter".to_string()]),
    };

    let err = run_bank_generation(&playbook, &config)
        .await
        .unwrap_err()
        .to_string();
    assert!(err.contains("no-such-chapter"));

    cleanup(&dir);
}

#[tokio::test]
async fn seeded_bank_runs_are_reproducible() {
    let dir_a = temp_dir("bank_seed_a");
    let dir_b = temp_dir("bank_seed_b");
    let playbook = sample_playbook();

    let run = |dir: &PathBuf| BankConfig {
        output_dir: dir.display().to_string(),
        batch_size: 1,
        seed: Some(99),
        chapters: Some(vec!["mobilization".to_string()]),
    };

    run_bank_generation(&playbook, &run(&dir_a)).await.unwrap();
    run_bank_generation(&playbook, &run(&dir_b)).await.unwrap();

    let read_quiz = |dir: &PathBuf| -> QuizSet {
        let entry = fs::read_dir(dir).unwrap().next().unwrap().unwrap();
        serde_yaml::from_str(&fs::read_to_string(entry.path()).unwrap()).unwrap()
    };
    assert_eq!(read_quiz(&dir_a), read_quiz(&dir_b));

    cleanup(&dir_a);
    cleanup(&dir_b);
}
