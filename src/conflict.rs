//! Classification of why a candidate pair cannot be inserted cleanly.

use std::hash::Hash;

use crate::map::BijectiveMap;

/// The result of a conflict check, borrowing from the map it was checked
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict<'a, L, R> {
    /// The left value is already present.
    Left,
    /// The right value is already present.
    Right,
    /// Both values are already present in the same pair.
    Pair,
    /// Both values are already present, across two different pairs.
    Both {
        /// The left value currently paired with the candidate's right value.
        other_left: &'a L,
        /// The right value currently paired with the candidate's left value.
        other_right: &'a R,
    },
}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> BijectiveMap<L, R> {
    /// Checks whether inserting the given pair would overwrite an existing
    /// pair or break the one-to-one property. `None` means neither side is
    /// present and the pair would insert cleanly. O(1) expected, no
    /// mutation.
    ///
    /// ```
    /// use bijective_map::{bijective_map, Conflict};
    ///
    /// let elements = bijective_map! { "Ti" => 22, "Si" => 14, "He" => 2 };
    /// assert_eq!(
    ///     elements.conflict((&"Ti", &2)),
    ///     Some(Conflict::Both { other_left: &"He", other_right: &22 }),
    /// );
    /// ```
    pub fn conflict(&self, pair: (&L, &R)) -> Option<Conflict<'_, L, R>> {
        let (left, right) = pair;
        match (self.find_pair_by_left(left), self.find_pair_by_right(right)) {
            (None, None) => None,
            (None, Some(_)) => Some(Conflict::Right),
            (Some(_), None) => Some(Conflict::Left),
            (Some(by_left), Some(by_right)) => {
                if by_left == by_right {
                    Some(Conflict::Pair)
                } else {
                    // Each side reports the *other* pair's partner: the left
                    // comes from the pair found by right lookup and the
                    // right from the pair found by left lookup.
                    Some(Conflict::Both {
                        other_left: by_right.0,
                        other_right: by_left.1,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Conflict;
    use crate::bijective_map;

    #[test]
    fn classification() {
        let map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };

        assert_eq!(map.conflict((&"D", &4)), None);
        assert_eq!(map.conflict((&"A", &0)), Some(Conflict::Left));
        assert_eq!(map.conflict((&"E", &1)), Some(Conflict::Right));
        assert_eq!(map.conflict((&"A", &1)), Some(Conflict::Pair));
        assert_eq!(
            map.conflict((&"A", &3)),
            Some(Conflict::Both {
                other_left: &"C",
                other_right: &1,
            })
        );
    }

    #[test]
    fn empty_map_never_conflicts() {
        let map: crate::BijectiveMap<&str, i32> = bijective_map! {};
        assert_eq!(map.conflict((&"A", &1)), None);
    }
}
