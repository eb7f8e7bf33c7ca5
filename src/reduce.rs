//! Constraint propagation over possibility patterns

use crate::fields::{FieldKind, KindSet, Pattern};

/// Narrow a pattern to its fixed point: whenever a position is pinned to a
/// single field kind, that kind is eliminated from every other position,
/// which may pin further positions in turn.
///
/// The result is not necessarily fully resolved; positions that no
/// propagation step can settle are returned as-is. Running the reduction on
/// its own output returns it unchanged.
pub fn reduce(mut pattern: Pattern) -> Pattern {
    let mut resolved = KindSet::EMPTY;
    while let Some((pos, kind)) = next_pinned(&pattern, resolved) {
        resolved.insert(kind);
        for (i, set) in pattern.iter_mut().enumerate() {
            if i != pos {
                set.remove(kind);
            }
        }
    }
    pattern
}

/// First position whose set is a singleton of a not-yet-propagated kind
fn next_pinned(pattern: &Pattern, resolved: KindSet) -> Option<(usize, FieldKind)> {
    pattern.iter().enumerate().find_map(|(i, set)| {
        set.as_singleton()
            .filter(|kind| !resolved.contains(*kind))
            .map(|kind| (i, kind))
    })
}

/// A pattern is unambiguous when it is non-empty and every position is
/// pinned to a single valid field kind
pub fn is_unambiguous(pattern: &Pattern) -> bool {
    !pattern.is_empty()
        && pattern
            .iter()
            .all(|set| set.len() == 1 && !set.contains(FieldKind::Invalid))
}

/// Whether the unambiguous pattern `resolved` is one structurally possible
/// reading of `ambiguous`: same length, and each pinned kind is still among
/// the possibilities at its position. Mismatched lengths are never
/// consistent.
pub fn formats_consistent(ambiguous: &Pattern, resolved: &Pattern) -> bool {
    ambiguous.len() == resolved.len()
        && ambiguous
            .iter()
            .zip(resolved.iter())
            .all(|(a, u)| a.intersects(*u))
}
