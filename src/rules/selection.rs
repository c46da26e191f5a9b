//! Random reviewer/assignee sampling.
//!
//! Sampling is without replacement and takes the randomness source as a
//! parameter, so tests can seed it and assert on the eligible pool instead
//! of fighting flakiness.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

/// Sample up to `count` users from `candidates`, excluding `exclude`.
///
/// A count of zero returns the whole eligible pool, as does a pool no
/// larger than the requested count. Neither case is an error.
pub fn choose_users<R: Rng>(
    candidates: &[String],
    count: usize,
    exclude: &str,
    rng: &mut R,
) -> Vec<String> {
    let pool: Vec<&String> = candidates
        .iter()
        .filter(|user| user.as_str() != exclude)
        .collect();

    if count == 0 || pool.len() <= count {
        return pool.into_iter().cloned().collect();
    }

    pool.choose_multiple(rng, count)
        .map(|user| (*user).clone())
        .collect()
}

/// Sample up to `count` users from every named group, concatenated.
///
/// Groups are visited in sorted name order. A user appearing in several
/// groups is selected at most once; the exclusion applies per group.
pub fn choose_from_groups<R: Rng>(
    groups: &BTreeMap<String, Vec<String>>,
    count: usize,
    exclude: &str,
    rng: &mut R,
) -> Vec<String> {
    let mut picked = Vec::new();
    for members in groups.values() {
        for user in choose_users(members, count, exclude, rng) {
            if !picked.contains(&user) {
                picked.push(user);
            }
        }
    }
    picked
}
