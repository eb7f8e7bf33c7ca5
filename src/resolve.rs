//! Corpus training and the ambiguous-pattern resolution table

use crate::fields::Pattern;
use crate::reduce::{formats_consistent, is_unambiguous};
use rustc_hash::FxHashMap;

/// An unambiguous pattern with the number of training dates backing it
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub pattern: Pattern,
    pub support: usize,
}

/// Learned mapping from each ambiguous reduced pattern seen in training to
/// the unambiguous patterns structurally consistent with it, ranked by
/// support. Immutable once built.
#[derive(Debug, Default)]
pub(crate) struct ResolutionTable {
    candidates: FxHashMap<Pattern, Vec<Candidate>>,
}

impl ResolutionTable {
    /// Tally reduced training patterns and pair every ambiguous pattern
    /// with the unambiguous ones that could explain it. Ambiguous patterns
    /// with no consistent counterpart are left out and later fail lookup.
    pub fn train(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let mut counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        // First-occurrence order; keeps equal-support ties deterministic
        let mut seen: Vec<Pattern> = Vec::new();
        for pattern in patterns {
            if let Some(count) = counts.get_mut(&pattern) {
                *count += 1;
            } else {
                counts.insert(pattern.clone(), 1);
                seen.push(pattern);
            }
        }

        let unambiguous: Vec<&Pattern> =
            seen.iter().filter(|pattern| is_unambiguous(pattern)).collect();

        let mut candidates: FxHashMap<Pattern, Vec<Candidate>> = FxHashMap::default();
        for pattern in &seen {
            if is_unambiguous(pattern) {
                continue;
            }
            let mut ranked: Vec<Candidate> = Vec::new();
            for &resolved in &unambiguous {
                if formats_consistent(pattern, resolved) {
                    ranked.push(Candidate {
                        pattern: resolved.clone(),
                        support: counts[resolved],
                    });
                }
            }
            // Stable sort keeps first-seen order among equal supports
            ranked.sort_by(|a, b| b.support.cmp(&a.support));
            if !ranked.is_empty() {
                candidates.insert(pattern.clone(), ranked);
            }
        }

        tracing::debug!(
            distinct = seen.len(),
            resolvable = candidates.len(),
            "trained resolution table"
        );
        Self { candidates }
    }

    /// Ranked candidates for an ambiguous pattern, best-supported first
    pub fn lookup(&self, pattern: &Pattern) -> Option<&[Candidate]> {
        self.candidates.get(pattern).map(Vec::as_slice)
    }
}
