//! Favorite filtering and random selection

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Highlight;

/// Tag marking a favorite highlight
pub const FAVORITE_TAG: &str = "favorite";

/// Highlights carrying the favorite tag, in their original order
pub fn favorites(highlights: &[Highlight]) -> Vec<&Highlight> {
    highlights
        .iter()
        .filter(|highlight| highlight.has_tag(FAVORITE_TAG))
        .collect()
}

/// Pick one highlight uniformly at random, `None` when the slice is empty
pub fn pick_random<'a, R>(candidates: &[&'a Highlight], rng: &mut R) -> Option<&'a Highlight>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng).copied()
}
