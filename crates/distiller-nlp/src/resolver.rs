//! Span conflict resolution

use crate::matcher::MatchPriority;
use distiller_domain::Entity;

/// A candidate span and the priority of the matcher that produced it
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Matcher priority
    pub priority: MatchPriority,
    /// Candidate span
    pub entity: Entity,
}

/// Resolve overlapping candidates into a non-overlapping entity list
///
/// Candidates are considered by matcher priority (identifiers first), then
/// longest span, then earliest start. A candidate is kept only if it
/// overlaps nothing kept before it. The result is ordered by start offset.
pub fn resolve(mut candidates: Vec<Candidate>) -> Vec<Entity> {
    candidates.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.entity.len().cmp(&a.entity.len()))
            .then_with(|| a.entity.start.cmp(&b.entity.start))
    });

    let mut kept: Vec<Entity> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if kept.iter().any(|e| e.overlaps(&candidate.entity)) {
            continue;
        }
        kept.push(candidate.entity);
    }

    kept.sort_by_key(|e| e.start);
    kept
}
