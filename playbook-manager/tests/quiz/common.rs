//! Shared fixtures for quiz tests

use playbook_manager_sdk::ResponsibilityRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic RNG for reproducible shuffles
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn record(
    step_id: &str,
    task: &str,
    responsible: Option<&str>,
    accountable: Option<&str>,
    consulted: Option<&str>,
    informed: Option<&str>,
) -> ResponsibilityRecord {
    ResponsibilityRecord {
        step_id: step_id.to_string(),
        task: task.to_string(),
        responsible: responsible.map(String::from),
        accountable: accountable.map(String::from),
        consulted: consulted.map(String::from),
        informed: informed.map(String::from),
    }
}

/// A realistic chapter: boundary nodes plus four eligible steps with
/// overlapping role names
pub fn mobilization_chapter() -> Vec<ResponsibilityRecord> {
    vec![
        record("S", "Start", None, None, None, None),
        record(
            "P1",
            "Develop the mobilization plan",
            Some("Construction Manager"),
            Some("Project Director"),
            None,
            None,
        ),
        record(
            "P2",
            "Review the mobilization plan for approval",
            None,
            Some("Project Director"),
            Some("Site Engineer"),
            None,
        ),
        record(
            "P3",
            "Coordinate equipment delivery to site",
            Some("Logistics Lead"),
            None,
            None,
            Some("Site Engineer"),
        ),
        record(
            "P4",
            "Monitor site readiness against the schedule",
            Some("HSE Officer"),
            None,
            Some("Construction Manager"),
            None,
        ),
        record("E", "End", None, None, None, None),
    ]
}
