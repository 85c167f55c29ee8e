//! Completion ledger for certification gating
//!
//! Pass/fail results are kept in a flat JSON file, one entry per
//! (playbook, chapter) pair holding the latest attempt. Passing a chapter
//! unlocks the next one; the first chapter is always unlocked.

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use playbook_manager_sdk::{ChapterCompletion, CompletionStatus, Playbook};

use crate::quiz::session::QuizReport;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CompletionLedger {
    #[serde(default)]
    chapters: HashMap<String, ChapterCompletion>,
}

/// File-backed store of chapter completions
#[derive(Debug)]
pub struct CompletionStore {
    path: PathBuf,
    ledger: CompletionLedger,
}

impl CompletionStore {
    /// Open the ledger at its default location under the home directory
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Self::open(home.join(".playbook-manager").join("completions.json"))
    }

    /// Open a ledger file, starting empty if it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let ledger = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read completion ledger: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse completion ledger: {}", path.display()))?
        } else {
            CompletionLedger::default()
        };
        Ok(Self { path, ledger })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a scored attempt and save the ledger
    pub fn record_attempt(
        &mut self,
        playbook_id: &str,
        chapter_id: &str,
        report: &QuizReport,
    ) -> Result<()> {
        let entry = self
            .ledger
            .chapters
            .entry(ledger_key(playbook_id, chapter_id))
            .or_insert(ChapterCompletion {
                score_percent: 0,
                passed: false,
                attempts: 0,
                completed_at: Local::now(),
            });
        entry.attempts += 1;
        entry.score_percent = report.score_percent;
        entry.passed = report.passed;
        entry.completed_at = Local::now();

        self.save()
    }

    /// Latest completion entry for a chapter, if any attempt was recorded
    pub fn completion(&self, playbook_id: &str, chapter_id: &str) -> Option<&ChapterCompletion> {
        self.ledger.chapters.get(&ledger_key(playbook_id, chapter_id))
    }

    pub fn status(&self, playbook_id: &str, chapter_id: &str) -> CompletionStatus {
        match self.completion(playbook_id, chapter_id) {
            Some(entry) if entry.passed => CompletionStatus::Passed,
            Some(_) => CompletionStatus::Failed,
            None => CompletionStatus::NotStarted,
        }
    }

    /// A chapter is unlocked once the previous chapter is passed
    pub fn is_unlocked(&self, playbook: &Playbook, chapter_index: usize) -> bool {
        if chapter_index == 0 {
            return true;
        }
        match playbook.chapters.get(chapter_index - 1) {
            Some(previous) => self.status(&playbook.id, &previous.id) == CompletionStatus::Passed,
            None => false,
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create ledger directory: {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(&self.ledger)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write completion ledger: {}", self.path.display()))
    }
}

fn ledger_key(playbook_id: &str, chapter_id: &str) -> String {
    format!("{}/{}", playbook_id, chapter_id)
}
