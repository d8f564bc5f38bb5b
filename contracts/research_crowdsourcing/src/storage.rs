//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type  | Description                        |
//! |------------------|-------|------------------------------------|
//! | `ProjectCount`   | `u64` | Highest project ID issued so far   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                          | Type                | Description                         |
//! |------------------------------|---------------------|-------------------------------------|
//! | `ProjConfig(id)`             | `ProjectConfig`     | Immutable project configuration     |
//! | `ProjState(id)`              | `ProjectState`      | Funding, phase and active flag      |
//! | `Contributor(id, address)`   | `ContributorRecord` | Per-contributor totals and phases   |
//! | `ContribCount(id)`           | `u64`               | Contributions accepted by a project |
//! | `Contribution(id, seq)`      | `Contribution`      | A single accepted contribution      |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//! Absent keys are never bumped; every loader returns `Option` and only
//! extends the TTL of entries it actually found.

use core::fmt::Debug;

use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val};

use crate::types::{Contribution, ContributorRecord, Project, ProjectConfig, ProjectState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Project ID counter (Instance).
    ProjectCount,
    /// Immutable project configuration keyed by ID (Persistent).
    ProjConfig(u64),
    /// Mutable project state keyed by ID (Persistent).
    ProjState(u64),
    /// Contributor totals keyed by (project ID, contributor) (Persistent).
    Contributor(u64, Address),
    /// Number of contributions accepted by a project (Persistent).
    ContribCount(u64),
    /// A single contribution keyed by (project ID, contribution ID) (Persistent).
    Contribution(u64, u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Number of projects created so far. Also the highest ID issued.
pub fn project_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0)
}

/// Increments the project counter and returns the ID for the new project.
///
/// IDs start at 1. Callers must finish validation first: the counter is
/// written immediately.
pub fn next_project_id(env: &Env) -> u64 {
    let id = project_count(env) + 1;
    env.storage().instance().set(&DataKey::ProjectCount, &id);
    id
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn load<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: Debug,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn store<V>(env: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

/// Save both the immutable config and initial mutable state for a new project.
pub fn save_project(env: &Env, project: &Project) {
    let config = ProjectConfig {
        id: project.id,
        name: project.name.clone(),
        description: project.description.clone(),
        owner: project.owner.clone(),
        contribution_threshold: project.contribution_threshold,
    };

    let state = ProjectState {
        total_funding: project.total_funding,
        current_phase: project.current_phase,
        is_active: project.is_active,
    };

    store(env, &DataKey::ProjConfig(project.id), &config);
    store(env, &DataKey::ProjState(project.id), &state);
}

/// Load the full `Project` by combining config and state.
pub fn load_project(env: &Env, id: u64) -> Option<Project> {
    let config = load_project_config(env, id)?;
    let state = load_project_state(env, id).expect("project state missing for existing config");
    Some(Project::from_parts(config, state))
}

/// Load only the immutable project configuration.
pub fn load_project_config(env: &Env, id: u64) -> Option<ProjectConfig> {
    load(env, &DataKey::ProjConfig(id))
}

/// Load only the mutable project state.
pub fn load_project_state(env: &Env, id: u64) -> Option<ProjectState> {
    load(env, &DataKey::ProjState(id))
}

/// Save only the mutable project state.
pub fn save_project_state(env: &Env, id: u64, state: &ProjectState) {
    store(env, &DataKey::ProjState(id), state);
}

pub fn load_contributor(env: &Env, id: u64, contributor: &Address) -> Option<ContributorRecord> {
    load(env, &DataKey::Contributor(id, contributor.clone()))
}

pub fn save_contributor(env: &Env, id: u64, contributor: &Address, record: &ContributorRecord) {
    store(env, &DataKey::Contributor(id, contributor.clone()), record);
}

/// Number of contributions a project has accepted; 0 for unknown projects.
pub fn contribution_count(env: &Env, id: u64) -> u64 {
    load(env, &DataKey::ContribCount(id)).unwrap_or(0)
}

/// Append a contribution and advance the project's contribution counter
/// to `contribution.id`.
pub fn append_contribution(env: &Env, project_id: u64, contribution: &Contribution) {
    store(
        env,
        &DataKey::Contribution(project_id, contribution.id),
        contribution,
    );
    store(env, &DataKey::ContribCount(project_id), &contribution.id);
}

pub fn load_contribution(env: &Env, project_id: u64, contribution_id: u64) -> Option<Contribution> {
    load(env, &DataKey::Contribution(project_id, contribution_id))
}
