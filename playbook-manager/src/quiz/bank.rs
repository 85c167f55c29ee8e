//! Batch quiz generation across a playbook's chapters
//!
//! Writes one quiz snapshot file per chapter, generating chapters
//! concurrently under a semaphore-bounded batch size. Chapters with no
//! eligible steps are skipped, not failed.

use anyhow::{anyhow, bail, Context, Result};
use chrono::Local;
use futures::stream::{FuturesUnordered, StreamExt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::{fs, sync::Semaphore};

use playbook_manager_sdk::{
    log_chapter_complete, log_chapter_skipped, log_state_file, Chapter, Playbook,
};

use crate::quiz::generator::{generate_quiz, generate_quiz_with_rng};
use crate::quiz::types::MIN_QUESTIONS;

/// Configuration for a quiz bank run
#[derive(Debug, Clone)]
pub struct BankConfig {
    /// Directory the quiz snapshot files are written to
    pub output_dir: String,
    /// Maximum number of chapters generated concurrently
    pub batch_size: usize,
    /// Base seed for deterministic generation; each chapter derives its
    /// own seed from base + chapter index
    pub seed: Option<u64>,
    /// Restrict the run to these chapter ids
    pub chapters: Option<Vec<String>>,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            output_dir: "./QUIZZES".to_string(),
            batch_size: 1,
            seed: None,
            chapters: None,
        }
    }
}

/// Counts reported by a completed bank run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Generate quiz files for the selected chapters of a playbook
pub async fn run_bank_generation(playbook: &Playbook, config: &BankConfig) -> Result<BankSummary> {
    let selected = select_chapters(playbook, config.chapters.as_deref())?;

    fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("Failed to create output directory: {}", config.output_dir))?;

    let sem = Arc::new(Semaphore::new(config.batch_size.max(1)));
    let mut tasks = FuturesUnordered::new();

    for (index, chapter) in selected.into_iter().enumerate() {
        let sem = sem.clone();
        let output_dir = config.output_dir.clone();
        let seed = config.seed;

        tasks.push(async move {
            let _permit = sem
                .acquire()
                .await
                .map_err(|_| anyhow!("Semaphore closed"))?;
            write_chapter_quiz(&chapter, index, seed, &output_dir).await
        });
    }

    let mut summary = BankSummary {
        written: 0,
        skipped: 0,
    };
    while let Some(result) = tasks.next().await {
        match result? {
            Some(path) => {
                println!("Quiz saved to: {}", path.display());
                summary.written += 1;
            }
            None => summary.skipped += 1,
        }
    }

    Ok(summary)
}

/// Resolve the chapter subset, rejecting unknown ids
fn select_chapters(playbook: &Playbook, only: Option<&[String]>) -> Result<Vec<Chapter>> {
    match only {
        None => Ok(playbook.chapters.clone()),
        Some(ids) => {
            for id in ids {
                if playbook.chapter(id).is_none() {
                    bail!("Unknown chapter id '{}' in playbook '{}'", id, playbook.id);
                }
            }
            Ok(playbook
                .chapters
                .iter()
                .filter(|c| ids.iter().any(|id| id == &c.id))
                .cloned()
                .collect())
        }
    }
}

async fn write_chapter_quiz(
    chapter: &Chapter,
    index: usize,
    seed: Option<u64>,
    output_dir: &str,
) -> Result<Option<PathBuf>> {
    let quiz = match seed {
        Some(base) => {
            let mut rng = StdRng::seed_from_u64(base.wrapping_add(index as u64));
            generate_quiz_with_rng(&chapter.steps, &chapter.title, &mut rng)
        }
        None => generate_quiz(&chapter.steps, &chapter.title),
    };

    if quiz.is_empty() {
        log_chapter_skipped!(&chapter.id, "no eligible steps");
        println!("Chapter '{}' skipped: no eligible steps", chapter.id);
        return Ok(None);
    }
    if quiz.len() < MIN_QUESTIONS {
        println!(
            "Chapter '{}' produced only {} question(s)",
            chapter.id,
            quiz.len()
        );
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = PathBuf::from(output_dir).join(format!("quiz_{}_{}.yaml", chapter.id, timestamp));
    let quiz_yaml = serde_yaml::to_string(&quiz)?;
    fs::write(&path, &quiz_yaml)
        .await
        .with_context(|| format!("Failed to write quiz file: {}", path.display()))?;

    log_state_file!(&chapter.id, path.display().to_string(), "Chapter quiz snapshot");
    log_chapter_complete!(&chapter.id, quiz.len());

    Ok(Some(path))
}
