//! Positional access into a bijective map.
//!
//! A [`Position`] is a cheap, comparable token for a slot in the forward
//! map. Positions are only meaningful while the map's structure is
//! unchanged: any insertion of a new left value or any removal invalidates
//! every previously obtained position. Using a stale position is a caller
//! error; the map does not track generations, it simply resolves whatever
//! pair currently sits at that slot (or `None` past the end).

use std::hash::Hash;

use crate::map::BijectiveMap;

/// The position of a left-right pair within a map's iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub(crate) usize);

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> BijectiveMap<L, R> {
    /// The position of the first pair, equal to
    /// [`end_position`](Self::end_position) when the map is empty.
    pub fn start_position(&self) -> Position {
        Position(0)
    }

    /// The exclusive past-the-end sentinel. Not a valid argument to
    /// [`get_at`](Self::get_at) or [`remove_at`](Self::remove_at).
    pub fn end_position(&self) -> Position {
        Position(self.len())
    }

    /// The position immediately after `position`.
    pub fn position_after(&self, position: Position) -> Position {
        Position(position.0 + 1)
    }

    /// Returns the pair at `position`, or `None` at or past the end.
    pub fn get_at(&self, position: Position) -> Option<(&L, &R)> {
        self.forward.get_index(position.0)
    }

    /// Returns the position of exactly this pair.
    ///
    /// Both sides must match: a left value that is present but paired with a
    /// different right value yields `None`.
    pub fn position_of(&self, pair: (&L, &R)) -> Option<Position> {
        let (index, _, right) = self.forward.get_full(pair.0)?;
        if right == pair.1 {
            Some(Position(index))
        } else {
            None
        }
    }

    /// Returns the position of the pair holding the given left value.
    pub fn position_for_left(&self, left: &L) -> Option<Position> {
        self.forward.get_index_of(left).map(Position)
    }

    /// Returns the position of the pair holding the given right value. Two
    /// hops: the reverse map resolves the left value, the forward map
    /// resolves its position.
    pub fn position_for_right(&self, right: &R) -> Option<Position> {
        let left = self.get_by_right(right)?;
        self.forward.get_index_of(left).map(Position)
    }

    /// Removes and returns the pair at `position`, keeping the relative
    /// order of the remaining pairs. O(n). Invalidates all previously
    /// obtained positions.
    pub fn remove_at(&mut self, position: Position) -> Option<(L, R)> {
        let (left, right) = self.forward.shift_remove_index(position.0)?;
        self.reverse.remove(&right);
        self.check_invariants();
        Some((left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::bijective_map;
    use crate::map::BijectiveMap;

    #[test]
    fn start_and_end() {
        let empty: BijectiveMap<&str, i32> = BijectiveMap::new();
        assert_eq!(empty.start_position(), empty.end_position());

        let map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };
        assert!(map.start_position() < map.end_position());
        assert_eq!(map.end_position(), Position(3));
    }

    #[test]
    fn walk_by_position() {
        let map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };
        let mut seen = Vec::new();
        let mut position = map.start_position();
        while position < map.end_position() {
            let (left, right) = map.get_at(position).unwrap();
            seen.push((*left, *right));
            position = map.position_after(position);
        }
        assert_eq!(seen, vec![("A", 1), ("B", 2), ("C", 3)]);
        assert_eq!(map.get_at(map.end_position()), None);
    }

    #[test]
    fn position_of_requires_exact_pair() {
        let map = bijective_map! { "A" => 1, "B" => 2 };
        assert_eq!(map.position_of((&"A", &1)), Some(Position(0)));
        assert_eq!(map.position_of((&"A", &2)), None, "left alone is not enough");
        assert_eq!(map.position_of((&"Z", &1)), None);
    }

    #[test]
    fn position_by_one_side() {
        let map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };
        assert_eq!(map.position_for_left(&"B"), Some(Position(1)));
        assert_eq!(map.position_for_left(&"D"), None);
        assert_eq!(map.position_for_right(&3), Some(Position(2)));
        assert_eq!(map.position_for_right(&4), None);
    }

    #[test]
    fn remove_at_keeps_order_and_reverse_map() {
        let mut map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };
        let position = map.position_for_left(&"B").unwrap();
        assert_eq!(map.remove_at(position), Some(("B", 2)));
        assert_eq!(map.get_by_right(&2), None);

        let pairs: Vec<_> = map.iter().map(|(l, r)| (*l, *r)).collect();
        assert_eq!(pairs, vec![("A", 1), ("C", 3)]);

        assert_eq!(map.remove_at(map.end_position()), None);
    }
}
