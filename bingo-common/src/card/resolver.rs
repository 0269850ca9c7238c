//! Selection resolution
//!
//! Turns a selection policy into exactly 24 phrases.
//!
//! Overlap between the three lists is allowed:
//! - `include` always wins, so a phrase in both `include` and `exclude` is placed
//! - `exclude` beats `maybe`, so excluded text is dropped from the draw pool
//!   before the pool size is checked
//! - `maybe` entries equal to `include` entries are kept; duplicates are not
//!   collapsed

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{CardError, PHRASES_PER_CARD};

/// Include/exclude/maybe selection of phrase texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriState {
    /// Forced in
    pub include: Vec<String>,
    /// Forced out
    pub exclude: Vec<String>,
    /// Eligible for random fill
    pub maybe: Vec<String>,
}

/// Exactly 24 phrases, ready for grid layout
///
/// Only constructed by [`resolve_tri_state`] or by converting a `Vec` of
/// length 24, so grid layout never sees a short or long list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPhrases(Vec<String>);

impl CardPhrases {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for CardPhrases {
    type Error = CardError;

    fn try_from(selected: Vec<String>) -> Result<Self, Self::Error> {
        if selected.len() != PHRASES_PER_CARD {
            return Err(CardError::WrongCount {
                count: selected.len(),
            });
        }
        Ok(Self(selected))
    }
}

/// Resolve a tri-state selection to the 24 phrases for one card
///
/// Validation runs before the generator is touched:
/// 1. more than 24 `include` entries is `TooManyIncluded`
/// 2. fewer eligible `maybe` entries than the remaining cells is
///    `InsufficientPool`
///
/// The draw shuffles the whole eligible pool and keeps its first `needed`
/// entries, which samples uniformly without replacement.
pub fn resolve_tri_state<R: Rng + ?Sized>(
    selection: TriState,
    rng: &mut R,
) -> Result<CardPhrases, CardError> {
    let TriState {
        include,
        exclude,
        maybe,
    } = selection;

    if include.len() > PHRASES_PER_CARD {
        return Err(CardError::TooManyIncluded {
            count: include.len(),
        });
    }

    let needed = PHRASES_PER_CARD
        .checked_sub(include.len())
        .ok_or(CardError::TooManyIncluded {
            count: include.len(),
        })?;

    let excluded: HashSet<&str> = exclude.iter().map(String::as_str).collect();
    let mut pool: Vec<String> = maybe
        .into_iter()
        .filter(|phrase| !excluded.contains(phrase.as_str()))
        .collect();

    if needed > pool.len() {
        return Err(CardError::InsufficientPool {
            needed,
            available: pool.len(),
        });
    }

    pool.shuffle(rng);
    pool.truncate(needed);

    let mut phrases = include;
    phrases.extend(pool);
    Ok(CardPhrases(phrases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn phrases(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_too_many_included() {
        let selection = TriState {
            include: phrases("in", 25),
            ..Default::default()
        };
        let err = resolve_tri_state(selection, &mut rng()).unwrap_err();
        assert_eq!(err, CardError::TooManyIncluded { count: 25 });
    }

    #[test]
    fn test_insufficient_pool() {
        let selection = TriState {
            include: phrases("in", 10),
            exclude: vec![],
            maybe: phrases("maybe", 5),
        };
        let err = resolve_tri_state(selection, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            CardError::InsufficientPool {
                needed: 14,
                available: 5
            }
        );
    }

    #[test]
    fn test_full_include_needs_no_draw() {
        let include = phrases("in", 24);
        let selection = TriState {
            include: include.clone(),
            ..Default::default()
        };
        let resolved = resolve_tri_state(selection, &mut rng()).unwrap();
        assert_eq!(resolved.as_slice(), include.as_slice());
    }

    #[test]
    fn test_empty_include_draws_all_maybe() {
        let maybe = phrases("maybe", 24);
        let selection = TriState {
            maybe: maybe.clone(),
            ..Default::default()
        };
        let mut resolved = resolve_tri_state(selection, &mut rng()).unwrap().into_inner();
        resolved.sort();
        let mut expected = maybe;
        expected.sort();
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_include_first_then_drawn_from_maybe() {
        let include = phrases("in", 20);
        let maybe = phrases("maybe", 10);
        let selection = TriState {
            include: include.clone(),
            exclude: vec![],
            maybe: maybe.clone(),
        };
        let resolved = resolve_tri_state(selection, &mut rng()).unwrap().into_inner();
        assert_eq!(resolved.len(), PHRASES_PER_CARD);
        assert_eq!(&resolved[..20], include.as_slice());
        assert!(resolved[20..].iter().all(|p| maybe.contains(p)));

        let drawn: HashSet<&String> = resolved[20..].iter().collect();
        assert_eq!(drawn.len(), 4, "draw is without replacement");
    }

    #[test]
    fn test_include_wins_over_exclude() {
        let mut include = phrases("in", 23);
        include.push("Both".to_string());
        let selection = TriState {
            include,
            exclude: vec!["Both".to_string()],
            maybe: vec![],
        };
        let resolved = resolve_tri_state(selection, &mut rng()).unwrap();
        assert!(resolved.as_slice().contains(&"Both".to_string()));
    }

    #[test]
    fn test_exclude_removes_from_maybe_pool() {
        let mut maybe = phrases("maybe", 24);
        maybe.push("Banned".to_string());
        let selection = TriState {
            include: vec![],
            exclude: vec!["Banned".to_string()],
            maybe,
        };
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let resolved = resolve_tri_state(selection.clone(), &mut rng).unwrap();
            assert!(!resolved.as_slice().contains(&"Banned".to_string()));
        }
    }

    #[test]
    fn test_excluded_maybe_entries_do_not_count_toward_pool() {
        let selection = TriState {
            include: vec![],
            exclude: vec!["maybe0".to_string()],
            maybe: phrases("maybe", 24),
        };
        let err = resolve_tri_state(selection, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            CardError::InsufficientPool {
                needed: 24,
                available: 23
            }
        );
    }

    #[test]
    fn test_maybe_duplicating_include_is_kept() {
        let include = phrases("p", 23);
        let selection = TriState {
            include,
            exclude: vec![],
            maybe: vec!["p0".to_string()],
        };
        let resolved = resolve_tri_state(selection, &mut rng()).unwrap();
        let count = resolved.as_slice().iter().filter(|p| *p == "p0").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_wrong_count_conversion() {
        let err = CardPhrases::try_from(phrases("p", 25)).unwrap_err();
        assert_eq!(err, CardError::WrongCount { count: 25 });
        assert!(CardPhrases::try_from(phrases("p", 24)).is_ok());
    }
}
