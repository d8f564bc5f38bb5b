//! # Types
//!
//! Shared data structures used across all modules of the ledger.
//!
//! ## Config / State split
//!
//! A `Project` is internally stored as two separate ledger entries:
//!
//! - [`ProjectConfig`] — written once at creation; never mutated.
//! - [`ProjectState`] — rewritten on every contribution, advance and close.
//!
//! The public API exposes the reconstructed [`Project`] struct.
//!
//! ## Lifecycle
//!
//! ```text
//! Active(phase = k) ──contribute──► Active(phase = k)      funding grows
//! Active(phase = k) ──advance─────► Active(phase = k + 1)  owner only
//! Active(phase = k) ──close───────► Closed                 owner only, terminal
//! ```

use soroban_sdk::{contracttype, Address, String, Vec};

/// Immutable project configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub owner: Address,
    pub contribution_threshold: u128,
}

/// Mutable project state, updated by contributions and owner actions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub total_funding: u128,
    pub current_phase: u64,
    pub is_active: bool,
}

/// Full on-chain representation of a research project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Creator; the only address allowed to advance or close the project.
    pub owner: Address,
    /// Initial funding plus every accepted contribution.
    pub total_funding: u128,
    /// Starts at 1, bumped by one on each advance.
    pub current_phase: u64,
    /// Cleared once by `close_project`; never set again.
    pub is_active: bool,
    /// Minimum value a single contribution must carry.
    pub contribution_threshold: u128,
}

impl Project {
    pub(crate) fn from_parts(config: ProjectConfig, state: ProjectState) -> Self {
        Project {
            id: config.id,
            name: config.name,
            description: config.description,
            owner: config.owner,
            total_funding: state.total_funding,
            current_phase: state.current_phase,
            is_active: state.is_active,
            contribution_threshold: config.contribution_threshold,
        }
    }
}

/// Running totals for one contributor on one project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributorRecord {
    /// Sum of every accepted contribution from this address.
    pub total_contributions: u128,
    /// Phase at which each contribution landed, one entry per contribution.
    pub contribution_phases: Vec<u64>,
}

/// A single accepted contribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    /// Per-project sequence number, starting at 1.
    pub id: u64,
    pub contributor: Address,
    pub description: String,
    pub value: u128,
    pub phase: u64,
}
