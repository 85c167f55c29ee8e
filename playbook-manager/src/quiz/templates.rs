//! Prompt templates driven by task-text keywords
//!
//! Prompts are picked by scanning the lowercased task text against an
//! ordered list of keyword groups; the first matching group wins and an
//! explicit fallback embeds a shortened paraphrase of the task itself.

/// Longest task paraphrase embedded in a responsibility fallback prompt
pub(crate) const RESPONSIBILITY_FALLBACK_LIMIT: usize = 50;

/// Longest task paraphrase embedded in a sequence fallback prompt
pub(crate) const SEQUENCE_FALLBACK_LIMIT: usize = 40;

/// Longest task text shown as an answer option
pub(crate) const OPTION_TEXT_LIMIT: usize = 60;

const ELLIPSIS: &str = "...";

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Keyword group mapped to a prompt builder
struct PromptRule<F> {
    keywords: &'static [&'static str],
    build: F,
}

const RESPONSIBILITY_RULES: &[PromptRule<fn(&str, &str) -> String>] = &[
    PromptRule {
        keywords: &["develop", "create", "establish"],
        build: development_prompt,
    },
    PromptRule {
        keywords: &["review", "approve"],
        build: review_prompt,
    },
    PromptRule {
        keywords: &["coordinate", "manage"],
        build: coordination_prompt,
    },
    PromptRule {
        keywords: &["monitor", "track"],
        build: monitoring_prompt,
    },
];

fn development_prompt(step_id: &str, relation: &str) -> String {
    format!(
        "Who is {} the development and creation work in Step {}?",
        relation, step_id
    )
}

fn review_prompt(step_id: &str, relation: &str) -> String {
    format!(
        "Who is {} the review and approval activities in Step {}?",
        relation, step_id
    )
}

fn coordination_prompt(step_id: &str, relation: &str) -> String {
    format!(
        "Who is {} the coordination and management activities in Step {}?",
        relation, step_id
    )
}

fn monitoring_prompt(step_id: &str, relation: &str) -> String {
    format!(
        "Who is {} the monitoring and tracking activities in Step {}?",
        relation, step_id
    )
}

/// Prompt for a responsibility question; keyword groups are checked in
/// declaration order, first match wins
pub(crate) fn responsibility_prompt(task: &str, step_id: &str, relation: &str) -> String {
    let lowered = task.to_lowercase();
    for rule in RESPONSIBILITY_RULES {
        if rule.keywords.iter().any(|kw| lowered.contains(kw)) {
            return (rule.build)(step_id, relation);
        }
    }
    format!(
        "Who is {} \"{}\" (Step {})?",
        relation,
        shorten(task, RESPONSIBILITY_FALLBACK_LIMIT),
        step_id
    )
}

const SEQUENCE_RULES: &[PromptRule<fn(&str) -> String>] = &[
    PromptRule {
        keywords: &["initiat", "start"],
        build: after_initiation_prompt,
    },
    PromptRule {
        keywords: &["plan", "design"],
        build: after_planning_prompt,
    },
    PromptRule {
        keywords: &["review", "approv"],
        build: after_review_prompt,
    },
];

fn after_initiation_prompt(step_id: &str) -> String {
    format!(
        "The initiation work in Step {} is complete. Which step comes next?",
        step_id
    )
}

fn after_planning_prompt(step_id: &str) -> String {
    format!(
        "Planning and design in Step {} are finished. Which step follows?",
        step_id
    )
}

fn after_review_prompt(step_id: &str) -> String {
    format!(
        "The review and approval in Step {} is done. Which step happens next?",
        step_id
    )
}

/// Prompt for a sequence question, keyed on the current step's task
pub(crate) fn sequence_prompt(task: &str, step_id: &str) -> String {
    let lowered = task.to_lowercase();
    for rule in SEQUENCE_RULES {
        if rule.keywords.iter().any(|kw| lowered.contains(kw)) {
            return (rule.build)(step_id);
        }
    }
    format!(
        "Which step comes immediately after \"{}\" (Step {})?",
        shorten(task, SEQUENCE_FALLBACK_LIMIT),
        step_id
    )
}

/// Task text as shown in a sequence-question answer option
pub(crate) fn simplify_task(task: &str) -> String {
    shorten(task, OPTION_TEXT_LIMIT)
}

/// Shorten a task text to at most `limit` characters
///
/// Trailing punctuation is always stripped; an ellipsis is appended only
/// when the text was actually cut.
pub(crate) fn shorten(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return strip_trailing_punctuation(text).to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}{}", strip_trailing_punctuation(&cut), ELLIPSIS)
}

fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim_end_matches(TRAILING_PUNCTUATION)
}
