//! Lazy iteration over a map's pairs and over each side on its own.
//!
//! Every view walks the forward map, so pairs, left values, and right values
//! all share one iteration order: zipping [`BijectiveMap::left_values`] with
//! [`BijectiveMap::right_values`] reproduces [`BijectiveMap::iter`] exactly.

use indexmap::map;

use crate::map::BijectiveMap;

impl<L, R> BijectiveMap<L, R> {
    /// Iterates over left-right pairs in the forward map's order. Each call
    /// starts a fresh iterator.
    pub fn iter(&self) -> Iter<'_, L, R> {
        Iter {
            inner: self.forward.iter(),
        }
    }

    /// A view of just the left values, one per pair, in iteration order.
    pub fn left_values(&self) -> LeftValues<'_, L, R> {
        LeftValues {
            inner: self.forward.keys(),
        }
    }

    /// A view of just the right values, one per pair, in iteration order.
    pub fn right_values(&self) -> RightValues<'_, L, R> {
        RightValues {
            inner: self.forward.values(),
        }
    }
}

pub struct Iter<'a, L, R> {
    inner: map::Iter<'a, L, R>,
}

impl<'a, L, R> Iterator for Iter<'a, L, R> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> ExactSizeIterator for Iter<'_, L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

pub struct LeftValues<'a, L, R> {
    inner: map::Keys<'a, L, R>,
}

impl<'a, L, R> Iterator for LeftValues<'a, L, R> {
    type Item = &'a L;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> ExactSizeIterator for LeftValues<'_, L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

pub struct RightValues<'a, L, R> {
    inner: map::Values<'a, L, R>,
}

impl<'a, L, R> Iterator for RightValues<'a, L, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> ExactSizeIterator for RightValues<'_, L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

pub struct IntoIter<L, R> {
    inner: map::IntoIter<L, R>,
}

impl<L, R> Iterator for IntoIter<L, R> {
    type Item = (L, R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R> ExactSizeIterator for IntoIter<L, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, L, R> IntoIterator for &'a BijectiveMap<L, R> {
    type Item = (&'a L, &'a R);
    type IntoIter = Iter<'a, L, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<L, R> IntoIterator for BijectiveMap<L, R> {
    type Item = (L, R);
    type IntoIter = IntoIter<L, R>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.forward.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bijective_map;
    use crate::map::BijectiveMap;

    #[test]
    fn iteration_follows_insertion_order() {
        let map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };
        let pairs: Vec<_> = map.iter().map(|(l, r)| (*l, *r)).collect();
        assert_eq!(pairs, vec![("A", 1), ("B", 2), ("C", 3)]);
    }

    #[test]
    fn iteration_is_restartable() {
        let map = bijective_map! { "A" => 1, "B" => 2 };
        let first: Vec<_> = map.iter().collect();
        let second: Vec<_> = map.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pairs_resolve_both_ways() {
        let map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };
        for (left, right) in &map {
            assert_eq!(map.get_by_left(left), Some(right));
            assert_eq!(map.get_by_right(right), Some(left));
        }
    }

    #[test]
    fn left_values() {
        let map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };
        let lefts: Vec<_> = map.left_values().copied().collect();
        assert_eq!(lefts, vec!["A", "B", "C"]);
        assert_eq!(map.left_values().len(), 3);
    }

    #[test]
    fn right_values() {
        let map = bijective_map! { "A" => 1, "B" => 2, "C" => 3 };
        let rights: Vec<_> = map.right_values().copied().collect();
        assert_eq!(rights, vec![1, 2, 3]);
    }

    #[test]
    fn value_views_share_one_order() {
        let mut map = BijectiveMap::with_capacity(100);
        for index in 0..100 {
            map.set_by_left(index, index.to_string());
        }
        // Perturb the order with some removals and re-inserts.
        map.remove_by_left(&17);
        map.remove_by_right(&"40".to_string());
        map.set_by_left(17, "seventeen".to_string());

        let zipped: Vec<_> = map
            .left_values()
            .zip(map.right_values())
            .map(|(l, r)| (*l, r.clone()))
            .collect();
        let direct: Vec<_> = map.iter().map(|(l, r)| (*l, r.clone())).collect();
        assert_eq!(zipped, direct);
    }

    #[test]
    fn owned_iteration() {
        let map = bijective_map! { "A" => 1, "B" => 2 };
        let pairs: Vec<_> = map.into_iter().collect();
        assert_eq!(pairs, vec![("A", 1), ("B", 2)]);
    }
}
