//! Common utilities for playbook tests

use std::env;
use std::fs;
use std::path::PathBuf;

/// Create a fresh temporary test directory
pub fn create_temp_dir(name: &str) -> PathBuf {
    let temp_dir = env::temp_dir().join(format!("playbook_manager_test_{}", name));
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();
    temp_dir
}

/// Clean up a temporary directory
pub fn cleanup_temp_dir(path: &PathBuf) {
    if path.exists() {
        let _ = fs::remove_dir_all(path);
    }
}

/// A small two-chapter playbook document
pub fn sample_yaml() -> &'static str {
    r#"
id: power-project
title: Power Project Execution
chapters:
  - id: initiation
    title: Project Initiation
    steps:
      - step_id: S
        task: Start
      - step_id: P1
        task: Develop the project charter
        responsible: Project Manager
        accountable: Sponsor
      - step_id: P2
        task: Review the stakeholder register
        accountable: Sponsor
        consulted: PMO Analyst
      - step_id: E
        task: End
  - id: planning
    title: Project Planning
    steps:
      - step_id: P1
        task: Establish the baseline schedule
        responsible: Planner
"#
}
