//! Contract events.
//!
//! Every state transition publishes one event under the topic tuple
//! `(symbol, project_id)` with a typed payload:
//!
//! | Topic      | Payload              |
//! |------------|----------------------|
//! | `created`  | [`ProjectCreated`]   |
//! | `contrib`  | [`ContributionMade`] |
//! | `advanced` | [`PhaseAdvanced`]    |
//! | `closed`   | [`ProjectClosed`]    |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub owner: Address,
    pub initial_funding: u128,
    pub contribution_threshold: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMade {
    pub project_id: u64,
    pub contribution_id: u64,
    pub contributor: Address,
    pub value: u128,
    pub phase: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PhaseAdvanced {
    pub project_id: u64,
    /// Phase the project moved into.
    pub phase: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectClosed {
    pub project_id: u64,
    pub total_funding: u128,
}

pub fn emit_project_created(env: &Env, event: ProjectCreated) {
    env.events()
        .publish((symbol_short!("created"), event.project_id), event);
}

pub fn emit_contribution_made(env: &Env, event: ContributionMade) {
    env.events()
        .publish((symbol_short!("contrib"), event.project_id), event);
}

pub fn emit_phase_advanced(env: &Env, project_id: u64, phase: u64) {
    env.events().publish(
        (symbol_short!("advanced"), project_id),
        PhaseAdvanced { project_id, phase },
    );
}

pub fn emit_project_closed(env: &Env, project_id: u64, total_funding: u128) {
    env.events().publish(
        (symbol_short!("closed"), project_id),
        ProjectClosed {
            project_id,
            total_funding,
        },
    );
}
