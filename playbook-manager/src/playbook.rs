//! Playbook file loading and validation
//!
//! Playbooks are YAML documents (playbook → chapters → steps). Loading
//! parses the document and validates its structure; quiz generation itself
//! never sees a playbook that failed validation.

use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use playbook_manager_sdk::Playbook;

/// Load and validate a playbook YAML file
pub async fn load_playbook(path: impl AsRef<Path>) -> Result<Playbook> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read playbook file: {}", path.display()))?;
    parse_playbook(&content).with_context(|| format!("Invalid playbook: {}", path.display()))
}

/// Parse and validate a playbook from YAML text
pub fn parse_playbook(yaml: &str) -> Result<Playbook> {
    let playbook: Playbook =
        serde_yaml::from_str(yaml).context("Failed to parse playbook YAML")?;
    validate_playbook(&playbook)?;
    Ok(playbook)
}

/// Structural checks on a parsed playbook
///
/// Chapter ids must be unique across the playbook and step ids unique
/// within a chapter (the start/end boundary sentinels are exempt). An
/// empty chapter is valid; it simply yields no quiz questions.
pub fn validate_playbook(playbook: &Playbook) -> Result<()> {
    if playbook.id.is_empty() {
        bail!("Playbook id must not be empty");
    }

    let mut chapter_ids = HashSet::new();
    for chapter in &playbook.chapters {
        if chapter.id.is_empty() {
            bail!("Chapter id must not be empty in playbook '{}'", playbook.id);
        }
        if !chapter_ids.insert(chapter.id.as_str()) {
            bail!(
                "Duplicate chapter id '{}' in playbook '{}'",
                chapter.id,
                playbook.id
            );
        }

        let mut step_ids = HashSet::new();
        for step in &chapter.steps {
            if step.is_boundary() {
                continue;
            }
            if !step_ids.insert(step.step_id.as_str()) {
                bail!(
                    "Duplicate step id '{}' in chapter '{}'",
                    step.step_id,
                    chapter.id
                );
            }
        }
    }

    Ok(())
}

/// List playbook YAML files directly under a directory
pub async fn find_playbook_files(dir: &str) -> Result<Vec<String>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory: {}", dir))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read directory entry in: {}", dir))?
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == "yaml" || ext == "yml")
            .unwrap_or(false);
        if is_yaml {
            files.push(path.display().to_string());
        }
    }

    files.sort();
    Ok(files)
}
