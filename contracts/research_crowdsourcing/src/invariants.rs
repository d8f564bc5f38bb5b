#![allow(dead_code)]

extern crate std;

use crate::types::{Contribution, ContributorRecord, Project};

/// INV-1: Every live project has a positive phase.
pub fn assert_phase_positive(project: &Project) {
    assert!(
        project.current_phase >= 1,
        "INV-1 violated: project {} has phase 0",
        project.id
    );
}

/// INV-2: Projects are always funded; creation rejects zero and funding
/// never decreases afterwards.
pub fn assert_funding_positive(project: &Project) {
    assert!(
        project.total_funding > 0,
        "INV-2 violated: project {} has zero funding",
        project.id
    );
}

/// INV-3: After an accepted contribution of `value`, funding grows by
/// exactly `value`.
pub fn assert_funding_increased_by(before: &Project, after: &Project, value: u128) {
    assert_eq!(
        after.total_funding,
        before.total_funding + value,
        "INV-3 violated: {} + {} != {}",
        before.total_funding,
        value,
        after.total_funding
    );
}

/// INV-4: Project IDs are sequential starting from 1.
pub fn assert_sequential_ids(projects: &[Project]) {
    for (i, project) in projects.iter().enumerate() {
        assert_eq!(
            project.id,
            i as u64 + 1,
            "INV-4 violated: expected id {}, got {}",
            i + 1,
            project.id
        );
    }
}

/// INV-5: Fields fixed at creation never change.
pub fn assert_project_immutable_fields(original: &Project, current: &Project) {
    assert_eq!(original.id, current.id, "INV-5 violated: project id changed");
    assert_eq!(original.name, current.name, "INV-5 violated: project name changed");
    assert_eq!(
        original.description, current.description,
        "INV-5 violated: project description changed"
    );
    assert_eq!(original.owner, current.owner, "INV-5 violated: project owner changed");
    assert_eq!(
        original.contribution_threshold, current.contribution_threshold,
        "INV-5 violated: project contribution_threshold changed"
    );
}

/// INV-6: A successful advance moves the phase up by one and touches nothing else.
pub fn assert_phase_advanced_by_one(before: &Project, after: &Project) {
    assert_eq!(
        after.current_phase,
        before.current_phase + 1,
        "INV-6 violated: phase went from {} to {}",
        before.current_phase,
        after.current_phase
    );
    assert_project_immutable_fields(before, after);
    assert_eq!(
        before.total_funding, after.total_funding,
        "INV-6 violated: funding changed on advance"
    );
    assert_eq!(
        before.is_active, after.is_active,
        "INV-6 violated: active flag changed on advance"
    );
}

/// INV-7: A rejected call leaves the project exactly as it was.
pub fn assert_unchanged(before: &Project, after: &Project) {
    assert_eq!(before, after, "INV-7 violated: rejected call mutated project {}", before.id);
}

/// INV-8: A contributor's record agrees with their individual contributions.
pub fn assert_record_matches_contributions(record: &ContributorRecord, contributions: &[Contribution]) {
    let total: u128 = contributions.iter().map(|c| c.value).sum();
    assert_eq!(
        record.total_contributions, total,
        "INV-8 violated: record total {} != sum of contributions {}",
        record.total_contributions, total
    );
    assert_eq!(
        record.contribution_phases.len() as usize,
        contributions.len(),
        "INV-8 violated: phase log length does not match contribution count"
    );
    for (i, contribution) in contributions.iter().enumerate() {
        assert_eq!(
            record.contribution_phases.get(i as u32),
            Some(contribution.phase),
            "INV-8 violated: phase log entry {} does not match contribution {}",
            i,
            contribution.id
        );
    }
}

/// Run all stateless project invariants.
pub fn assert_all_project_invariants(project: &Project) {
    assert_phase_positive(project);
    assert_funding_positive(project);
}
