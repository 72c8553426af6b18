//! Random branch selection for the "surprise me" flow

use rand::seq::SliceRandom;
use rand::Rng;

/// Fewest branches a random pick returns when enough exist
pub const MIN_RANDOM_BRANCHES: usize = 2;

/// Most branches a random pick returns
pub const MAX_RANDOM_BRANCHES: usize = 6;

/// Pick a random subset of `branches`.
///
/// The subset size is drawn uniformly from
/// `[MIN_RANDOM_BRANCHES, min(MAX_RANDOM_BRANCHES, branches.len())]` and the
/// members are sampled without replacement. With fewer than
/// `MIN_RANDOM_BRANCHES` candidates every candidate is returned.
pub fn pick_random_branches<R>(branches: &[String], rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let available = branches.len();
    if available < MIN_RANDOM_BRANCHES {
        return branches.to_vec();
    }

    let upper = available.min(MAX_RANDOM_BRANCHES);
    let count = rng.gen_range(MIN_RANDOM_BRANCHES..=upper);

    branches.choose_multiple(rng, count).cloned().collect()
}
