//! Constructing a bijection from input that may contain duplicates.
//!
//! Unlike [`BijectiveMap::set_by_left`], which overwrites and evicts,
//! [`BijectiveMap::build`] never discards a pair silently: the first pair to
//! claim a value on either side wins, and every later pair touching a
//! consumed value is handed back to the caller in input order.

use std::hash::Hash;

use ahash::HashSet;
use itertools::Itertools;
use tracing::debug;

use crate::map::BijectiveMap;

/// The outcome of [`BijectiveMap::build`].
#[derive(Debug, Clone)]
pub enum BuildResult<L, R> {
    /// Every input pair was accepted.
    Success(BijectiveMap<L, R>),
    /// Some pairs collided with earlier ones and were rejected.
    Partial {
        /// The bijection over the accepted pairs.
        map: BijectiveMap<L, R>,
        /// The rejected pairs, in input order.
        rejected: Vec<(L, R)>,
    },
}

impl<L, R> BuildResult<L, R> {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildResult::Success(_))
    }

    /// The accepted bijection, complete or not.
    pub fn map(&self) -> &BijectiveMap<L, R> {
        match self {
            BuildResult::Success(map) => map,
            BuildResult::Partial { map, .. } => map,
        }
    }

    pub fn into_map(self) -> BijectiveMap<L, R> {
        match self {
            BuildResult::Success(map) => map,
            BuildResult::Partial { map, .. } => map,
        }
    }

    /// The rejected pairs; empty on success.
    pub fn rejected(&self) -> &[(L, R)] {
        match self {
            BuildResult::Success(_) => &[],
            BuildResult::Partial { rejected, .. } => rejected,
        }
    }
}

impl<L: Eq + Hash, R: PartialEq> PartialEq for BuildResult<L, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BuildResult::Success(a), BuildResult::Success(b)) => a == b,
            (
                BuildResult::Partial {
                    map: a,
                    rejected: a_rejected,
                },
                BuildResult::Partial {
                    map: b,
                    rejected: b_rejected,
                },
            ) => a == b && a_rejected == b_rejected,
            _ => false,
        }
    }
}

impl<L: Eq + Hash, R: Eq> Eq for BuildResult<L, R> {}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> BijectiveMap<L, R> {
    /// Builds a bijection from a sequence of candidate pairs.
    ///
    /// A pre-scan checks whether any left or right value repeats. Clean
    /// input is bulk-inserted and returned as [`BuildResult::Success`].
    /// Otherwise pairs are taken in input order and accepted only when both
    /// sides are still unclaimed; a pair that collides on either side is
    /// rejected wholesale, never merged or overwritten, and returned in
    /// [`BuildResult::Partial`] for the caller to resolve.
    pub fn build<I>(pairs: I) -> BuildResult<L, R>
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let pairs: Vec<(L, R)> = pairs.into_iter().collect();
        let clean = pairs.iter().map(|(left, _)| left).all_unique()
            && pairs.iter().map(|(_, right)| right).all_unique();

        let mut map = Self::with_capacity(pairs.len());
        if clean {
            for (left, right) in pairs {
                map.forward.insert(left.clone(), right.clone());
                map.reverse.insert(right, left);
            }
            map.check_invariants();
            return BuildResult::Success(map);
        }

        let mut consumed_lefts: HashSet<L> = HashSet::default();
        let mut consumed_rights: HashSet<R> = HashSet::default();
        let mut rejected = Vec::new();
        for (left, right) in pairs {
            if consumed_lefts.contains(&left) || consumed_rights.contains(&right) {
                rejected.push((left, right));
                continue;
            }
            consumed_lefts.insert(left.clone());
            consumed_rights.insert(right.clone());
            map.forward.insert(left.clone(), right.clone());
            map.reverse.insert(right, left);
        }
        debug!(
            accepted = map.len(),
            rejected = rejected.len(),
            "batch build rejected conflicting pairs"
        );
        map.check_invariants();
        BuildResult::Partial { map, rejected }
    }
}

#[cfg(test)]
mod tests {
    use super::BuildResult;
    use crate::bijective_map;
    use crate::map::BijectiveMap;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    }

    #[test]
    fn no_conflicts() {
        init_tracing();
        let result = BijectiveMap::build([("A", 1), ("B", 2), ("C", 3), ("D", 4)]);
        let expected =
            BuildResult::Success(bijective_map! { "A" => 1, "B" => 2, "C" => 3, "D" => 4 });
        assert_eq!(result, expected);
        assert!(result.is_success());
        assert!(result.rejected().is_empty());
    }

    #[test]
    fn duplicate_left_rejected() {
        init_tracing();
        let result = BijectiveMap::build([("A", 1), ("B", 2), ("C", 3), ("A", 4)]);
        let expected = BuildResult::Partial {
            map: bijective_map! { "A" => 1, "B" => 2, "C" => 3 },
            rejected: vec![("A", 4)],
        };
        assert_eq!(result, expected);
    }

    #[test]
    fn collisions_on_either_side_rejected() {
        init_tracing();
        // ("A", 2) loses on the left, ("D", 3) loses on the right; a single
        // colliding side is enough to reject the whole pair.
        let result = BijectiveMap::build([("A", 1), ("A", 2), ("C", 3), ("D", 3)]);
        let expected = BuildResult::Partial {
            map: bijective_map! { "A" => 1, "C" => 3 },
            rejected: vec![("A", 2), ("D", 3)],
        };
        assert_eq!(result, expected);
    }

    #[test]
    fn first_occurrence_wins_in_input_order() {
        let result = BijectiveMap::build([("X", 1), ("Y", 1), ("Y", 2)]);
        // ("Y", 1) collides on the right, and having been rejected it does
        // not consume "Y", so ("Y", 2) is accepted.
        let expected = BuildResult::Partial {
            map: bijective_map! { "X" => 1, "Y" => 2 },
            rejected: vec![("Y", 1)],
        };
        assert_eq!(result, expected);
    }

    #[test]
    fn empty_input() {
        let result = BijectiveMap::<&str, i32>::build([]);
        assert!(result.is_success());
        assert!(result.map().is_empty());
    }

    #[test]
    fn success_never_equals_partial() {
        let success = BuildResult::Success(bijective_map! { "A" => 1 });
        let partial = BuildResult::Partial {
            map: bijective_map! { "A" => 1 },
            rejected: vec![],
        };
        assert_ne!(success, partial);
    }
}
