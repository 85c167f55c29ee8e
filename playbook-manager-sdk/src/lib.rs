use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Step id marking the start node of a chapter's process map
pub const START_STEP_ID: &str = "S";

/// Step id marking the end node of a chapter's process map
pub const END_STEP_ID: &str = "E";

/// RACI role assigned to a process step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaciRole {
    Responsible,
    Accountable,
    Consulted,
    Informed,
}

impl RaciRole {
    /// Roles in answer-selection priority order
    pub const PRIORITY: [RaciRole; 4] = [
        RaciRole::Responsible,
        RaciRole::Accountable,
        RaciRole::Consulted,
        RaciRole::Informed,
    ];

    /// Relation phrase used in question prompts and explanations
    pub fn relation_phrase(&self) -> &'static str {
        match self {
            RaciRole::Responsible => "responsible for executing",
            RaciRole::Accountable => "accountable for the outcome of",
            RaciRole::Consulted => "consulted during",
            RaciRole::Informed => "informed about",
        }
    }
}

/// One row of a chapter's RACI matrix
///
/// Role fields are free text; an absent or empty string both mean the role
/// is unassigned for this step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsibilityRecord {
    pub step_id: String,
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accountable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consulted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informed: Option<String>,
}

impl ResponsibilityRecord {
    /// True for the start/end sentinel nodes of the process map
    pub fn is_boundary(&self) -> bool {
        self.step_id == START_STEP_ID || self.step_id == END_STEP_ID
    }

    /// The role's assignee, if the field is present and non-empty
    pub fn role(&self, role: RaciRole) -> Option<&str> {
        let value = match role {
            RaciRole::Responsible => &self.responsible,
            RaciRole::Accountable => &self.accountable,
            RaciRole::Consulted => &self.consulted,
            RaciRole::Informed => &self.informed,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Populated role assignments in priority order
    pub fn role_assignments(&self) -> Vec<(RaciRole, &str)> {
        RaciRole::PRIORITY
            .iter()
            .filter_map(|&role| self.role(role).map(|name| (role, name)))
            .collect()
    }

    /// A record can back a quiz question only if it has a task, is not a
    /// boundary node, and carries at least one role assignment
    pub fn is_eligible(&self) -> bool {
        !self.task.is_empty()
            && !self.is_boundary()
            && RaciRole::PRIORITY.iter().any(|&role| self.role(role).is_some())
    }
}

/// A chapter: a named phase of the playbook's process with its step rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<ResponsibilityRecord>,
}

/// A complete playbook document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playbook {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Playbook {
    /// Look up a chapter by id
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Position of a chapter within the playbook
    pub fn chapter_index(&self, id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == id)
    }
}

/// Chapter completion state for CLI display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionStatus {
    NotStarted,
    Passed,
    Failed,
}

/// Latest recorded quiz attempt for a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterCompletion {
    pub score_percent: u32,
    pub passed: bool,
    pub attempts: u32,
    pub completed_at: DateTime<Local>,
}

/// Structured logging events emitted by quiz sessions and bank runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionLog {
    /// Quiz session started
    QuizStarted {
        session_id: String,
        phase: String,
        total_questions: usize,
    },
    /// Answer recorded for one question
    AnswerRecorded {
        session_id: String,
        question_id: String,
        correct: bool,
    },
    /// Quiz session scored
    QuizCompleted {
        session_id: String,
        phase: String,
        score_percent: u32,
        passed: bool,
    },
    /// Bank run finished a chapter
    ChapterCompleted {
        chapter_id: String,
        question_count: usize,
    },
    /// Bank run skipped a chapter
    ChapterSkipped {
        chapter_id: String,
        reason: String,
    },
    /// Quiz snapshot file written
    StateFileCreated {
        chapter_id: String,
        file_path: String,
        description: String,
    },
}

impl SessionLog {
    /// Emit this log event to stderr for front-end parsing
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            use std::io::Write;
            eprintln!("__PB_EVENT__:{}", json);
            // Force flush stderr in async/concurrent contexts
            let _ = std::io::stderr().flush();
        }
    }
}

/// Helper macros for session logging
#[macro_export]
macro_rules! log_quiz_start {
    ($session_id:expr, $phase:expr, $total:expr) => {
        $crate::SessionLog::QuizStarted {
            session_id: $session_id.to_string(),
            phase: $phase.to_string(),
            total_questions: $total,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_answer_recorded {
    ($session_id:expr, $question_id:expr, $correct:expr) => {
        $crate::SessionLog::AnswerRecorded {
            session_id: $session_id.to_string(),
            question_id: $question_id.to_string(),
            correct: $correct,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_quiz_complete {
    ($session_id:expr, $phase:expr, $score:expr, $passed:expr) => {
        $crate::SessionLog::QuizCompleted {
            session_id: $session_id.to_string(),
            phase: $phase.to_string(),
            score_percent: $score,
            passed: $passed,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_chapter_complete {
    ($chapter_id:expr, $count:expr) => {
        $crate::SessionLog::ChapterCompleted {
            chapter_id: $chapter_id.to_string(),
            question_count: $count,
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_chapter_skipped {
    ($chapter_id:expr, $reason:expr) => {
        $crate::SessionLog::ChapterSkipped {
            chapter_id: $chapter_id.to_string(),
            reason: $reason.to_string(),
        }
        .emit();
    };
}

#[macro_export]
macro_rules! log_state_file {
    ($chapter_id:expr, $path:expr, $desc:expr) => {
        $crate::SessionLog::StateFileCreated {
            chapter_id: $chapter_id.to_string(),
            file_path: $path.to_string(),
            description: $desc.to_string(),
        }
        .emit();
    };
}

// ============================================================================
// Console Logging Macros (for CLI output)
// ============================================================================
// These macros provide colored console output for human-readable progress,
// complementing the structured SessionLog events.
// ============================================================================

/// Logs the start of a bank run with a header.
///
/// # Example
/// ```
/// use playbook_manager_sdk::log_bank_start_console;
/// log_bank_start_console!("Power Project Execution", 4);
/// ```
#[macro_export]
macro_rules! log_bank_start_console {
    ($title:expr, $total:expr) => {
        println!("\x1b[1;36m═══ QUIZ BANK: {} ═══\x1b[0m", $title);
        println!("\x1b[36m{} chapter(s)\x1b[0m", $total);
    };
}

/// Logs the completion of a bank run.
#[macro_export]
macro_rules! log_bank_complete_console {
    ($written:expr, $skipped:expr) => {
        println!(
            "\x1b[32m✓ Wrote {} quiz file(s), skipped {} chapter(s)\x1b[0m",
            $written, $skipped
        );
    };
}
