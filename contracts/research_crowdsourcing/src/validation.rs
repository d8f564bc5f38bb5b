//! Guards shared by the entry points.
//!
//! Every guard is side-effect free and returns `Err` with the code the
//! caller should surface, so entry points chain them with `?` before the
//! first storage write.

use soroban_sdk::{Address, String};

use crate::types::{ProjectConfig, ProjectState};
use crate::Error;

/// Maximum project name length, in bytes.
pub const MAX_NAME_LEN: u32 = 100;

/// Maximum project or contribution description length, in bytes.
pub const MAX_DESCRIPTION_LEN: u32 = 500;

/// New projects must be seeded with a non-zero amount.
pub fn require_initial_funding(amount: u128) -> Result<(), Error> {
    if amount == 0 {
        return Err(Error::InsufficientFunds);
    }
    Ok(())
}

pub fn require_project_text(name: &String, description: &String) -> Result<(), Error> {
    if name.len() == 0 || name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidText);
    }
    if description.len() == 0 || description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::InvalidText);
    }
    Ok(())
}

/// Contribution notes may be empty but are bounded like project descriptions.
pub fn require_contribution_text(description: &String) -> Result<(), Error> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(Error::InvalidText);
    }
    Ok(())
}

pub fn require_owner(config: &ProjectConfig, caller: &Address) -> Result<(), Error> {
    if config.owner != *caller {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn require_active(state: &ProjectState) -> Result<(), Error> {
    if !state.is_active {
        return Err(Error::ProjectInactive);
    }
    Ok(())
}

pub fn require_threshold(config: &ProjectConfig, value: u128) -> Result<(), Error> {
    if value < config.contribution_threshold {
        return Err(Error::BelowThreshold);
    }
    Ok(())
}
