//! Character-length filtering of candidates.

use super::Bounds;

/// Whether `candidate`'s character count lies within `bounds`.
pub fn within_length(candidate: &str, bounds: Bounds) -> bool {
    bounds.contains(candidate.chars().count())
}

/// Keep the candidates whose character count lies within `bounds`, in order.
pub fn filter_by_length<I>(candidates: I, bounds: Bounds) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .filter(move |candidate| within_length(candidate, bounds))
}
