// Playbook loading module
pub mod playbook;

// Quiz generation and scoring module
pub mod quiz;

// Completion ledger module
pub mod completion;

// CLI argument parsing
pub mod cli;
