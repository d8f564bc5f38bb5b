//! # Research Crowdsourcing Contract
//!
//! A registry of research projects. Each project is seeded by its owner,
//! accepts contributions above a per-project threshold, moves through
//! owner-advanced phases and is eventually closed by its owner.
//!
//! | Stage        | Entry Point(s)                                               |
//! |--------------|--------------------------------------------------------------|
//! | Creation     | [`ResearchCrowdsourcing::create_project`]                    |
//! | Funding      | [`ResearchCrowdsourcing::contribute_to_project`]             |
//! | Owner admin  | `advance_project_phase`, `close_project`                     |
//! | Queries      | `get_project_details`, `get_contributor_data`, `get_contribution`, `get_contribution_count`, `get_project_count` |
//!
//! ## Architecture
//!
//! Guards live in `validation`, storage access in `storage` and event
//! payloads in [`events`]. This file holds the public entry points and the
//! error code table. Every entry point runs all of its guards before the
//! first storage write, so a rejected call leaves the ledger untouched.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String, Vec};

pub mod events;
mod storage;
mod types;
mod validation;

#[cfg(test)]
mod invariants;

use events::{ContributionMade, ProjectCreated};
use storage::{
    append_contribution, contribution_count, load_contribution, load_contributor, load_project,
    load_project_config, load_project_state, next_project_id, project_count, save_contributor,
    save_project, save_project_state,
};
pub use types::{Contribution, ContributorRecord, Project};
use validation::{
    require_active, require_contribution_text, require_initial_funding, require_owner,
    require_project_text, require_threshold,
};

/// Failure codes. Values are part of the external interface and must not change.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the project owner.
    Unauthorized       = 100,
    /// Project created with zero initial funding.
    InsufficientFunds  = 101,
    ProjectNotFound    = 102,
    /// Contribution value under the project's threshold.
    BelowThreshold     = 103,
    /// Project has been closed.
    ProjectInactive    = 104,
    /// Name or description empty or over its length bound.
    InvalidText        = 105,
    ArithmeticOverflow = 106,
}

#[contract]
pub struct ResearchCrowdsourcing;

#[contractimpl]
impl ResearchCrowdsourcing {
    // ─────────────────────────────────────────────────────────
    // Creation
    // ─────────────────────────────────────────────────────────

    /// Create a project owned by `caller` and return its ID.
    ///
    /// IDs are issued sequentially from 1. The project starts active, in
    /// phase 1, with `total_funding = initial_funding`.
    ///
    /// Fails with `InsufficientFunds` when `initial_funding` is zero and with
    /// `InvalidText` when `name` or `description` is empty or too long.
    pub fn create_project(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        initial_funding: u128,
        contribution_threshold: u128,
    ) -> Result<u64, Error> {
        caller.require_auth();

        require_initial_funding(initial_funding)?;
        require_project_text(&name, &description)?;

        let id = next_project_id(&env);

        let project = Project {
            id,
            name,
            description,
            owner: caller.clone(),
            total_funding: initial_funding,
            current_phase: 1,
            is_active: true,
            contribution_threshold,
        };
        save_project(&env, &project);

        log!(&env, "project created", id, initial_funding);
        events::emit_project_created(
            &env,
            ProjectCreated {
                project_id: id,
                owner: caller,
                initial_funding,
                contribution_threshold,
            },
        );

        Ok(id)
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Contribute `value` to an active project and return the contribution's
    /// per-project sequence number.
    ///
    /// Anyone, the owner included, may contribute. The contribution is
    /// tagged with the project's current phase and folded into the caller's
    /// [`ContributorRecord`].
    ///
    /// Checks run in order: `ProjectNotFound`, `ProjectInactive`,
    /// `BelowThreshold`, then `InvalidText` for an over-long description.
    pub fn contribute_to_project(
        env: Env,
        project_id: u64,
        caller: Address,
        description: String,
        value: u128,
    ) -> Result<u64, Error> {
        caller.require_auth();

        let config = load_project_config(&env, project_id).ok_or(Error::ProjectNotFound)?;
        let mut state = load_project_state(&env, project_id).ok_or(Error::ProjectNotFound)?;

        require_active(&state)?;
        require_threshold(&config, value)?;
        require_contribution_text(&description)?;

        let total_funding = state
            .total_funding
            .checked_add(value)
            .ok_or(Error::ArithmeticOverflow)?;

        let mut record =
            load_contributor(&env, project_id, &caller).unwrap_or_else(|| ContributorRecord {
                total_contributions: 0,
                contribution_phases: Vec::new(&env),
            });
        record.total_contributions = record
            .total_contributions
            .checked_add(value)
            .ok_or(Error::ArithmeticOverflow)?;
        record.contribution_phases.push_back(state.current_phase);

        let contribution = Contribution {
            id: contribution_count(&env, project_id) + 1,
            contributor: caller.clone(),
            description,
            value,
            phase: state.current_phase,
        };

        // All guards passed; commit.
        state.total_funding = total_funding;
        save_project_state(&env, project_id, &state);
        save_contributor(&env, project_id, &caller, &record);
        append_contribution(&env, project_id, &contribution);

        log!(&env, "contribution accepted", project_id, contribution.id, value);
        events::emit_contribution_made(
            &env,
            ContributionMade {
                project_id,
                contribution_id: contribution.id,
                contributor: caller,
                value,
                phase: contribution.phase,
            },
        );

        Ok(contribution.id)
    }

    // ─────────────────────────────────────────────────────────
    // Owner administration
    // ─────────────────────────────────────────────────────────

    /// Move an active project into its next phase.
    ///
    /// Only the owner may advance. Closed projects reject the call with
    /// `ProjectInactive`, so a project's phase is frozen at closure.
    pub fn advance_project_phase(
        env: Env,
        project_id: u64,
        caller: Address,
    ) -> Result<bool, Error> {
        caller.require_auth();

        let config = load_project_config(&env, project_id).ok_or(Error::ProjectNotFound)?;
        require_owner(&config, &caller)?;

        let mut state = load_project_state(&env, project_id).ok_or(Error::ProjectNotFound)?;
        require_active(&state)?;

        state.current_phase = state
            .current_phase
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;
        save_project_state(&env, project_id, &state);

        log!(&env, "phase advanced", project_id, state.current_phase);
        events::emit_phase_advanced(&env, project_id, state.current_phase);

        Ok(true)
    }

    /// Close a project. Closing is terminal: later contributions, advances
    /// and a second close all fail with `ProjectInactive`.
    pub fn close_project(env: Env, project_id: u64, caller: Address) -> Result<bool, Error> {
        caller.require_auth();

        let config = load_project_config(&env, project_id).ok_or(Error::ProjectNotFound)?;
        require_owner(&config, &caller)?;

        let mut state = load_project_state(&env, project_id).ok_or(Error::ProjectNotFound)?;
        require_active(&state)?;

        state.is_active = false;
        save_project_state(&env, project_id, &state);

        log!(&env, "project closed", project_id, state.total_funding);
        events::emit_project_closed(&env, project_id, state.total_funding);

        Ok(true)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Return the project, or `None` if `project_id` was never issued.
    pub fn get_project_details(env: Env, project_id: u64) -> Option<Project> {
        load_project(&env, project_id)
    }

    /// Return the contributor's totals on a project, or `None` if that
    /// address never contributed to it.
    pub fn get_contributor_data(
        env: Env,
        project_id: u64,
        contributor: Address,
    ) -> Option<ContributorRecord> {
        load_contributor(&env, project_id, &contributor)
    }

    pub fn get_contribution(
        env: Env,
        project_id: u64,
        contribution_id: u64,
    ) -> Option<Contribution> {
        load_contribution(&env, project_id, contribution_id)
    }

    /// Number of contributions accepted by a project; 0 for unknown IDs.
    pub fn get_contribution_count(env: Env, project_id: u64) -> u64 {
        contribution_count(&env, project_id)
    }

    /// Number of projects created so far.
    pub fn get_project_count(env: Env) -> u64 {
        project_count(&env)
    }
}
