use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use ahash::{HashMap, RandomState};
use indexmap::IndexMap;
use tracing::trace;

/// Left-to-right backing map. Insertion-ordered so the positional API and
/// the value views get a stable, shared iteration order.
pub(crate) type ForwardMap<L, R> = IndexMap<L, R, RandomState>;

/// Right-to-left backing map. Pure lookup table, order irrelevant.
pub(crate) type ReverseMap<R, L> = HashMap<R, L>;

/// A map whose elements are left-right pairs, with O(1) expected lookup in
/// either direction.
///
/// A bijective map keeps two synchronized hash maps, one per direction, so
/// either side of a pair can be used as the key for the other. The cost is
/// roughly double the memory of a plain map; the payoff is that reverse
/// lookup never degrades to a scan. Keys and values are called "left values"
/// and "right values" since either can play the key role.
///
/// Both sides must be unique: inserting a pair whose left *or* right value is
/// already present evicts the stale partner pair so that the one-to-one
/// property always holds. See [`set_by_left`](Self::set_by_left) for the
/// exact eviction rules, and [`BijectiveMap::build`] for a bulk constructor
/// that rejects conflicting pairs instead of overwriting.
///
/// ```
/// use bijective_map::bijective_map;
///
/// let mut zones = bijective_map! {
///     "America/Los_Angeles" => -8,
///     "Europe/London" => 0,
///     "Asia/Singapore" => 8,
/// };
/// assert_eq!(zones.get_by_left(&"Europe/London"), Some(&0));
/// assert_eq!(zones.get_by_right(&8), Some(&"Asia/Singapore"));
/// ```
#[derive(Clone)]
pub struct BijectiveMap<L, R> {
    pub(crate) forward: ForwardMap<L, R>,
    pub(crate) reverse: ReverseMap<R, L>,
}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> Default for BijectiveMap<L, R> {
    fn default() -> Self {
        BijectiveMap {
            forward: ForwardMap::default(),
            reverse: ReverseMap::default(),
        }
    }
}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> BijectiveMap<L, R> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with preallocated space for at least `capacity`
    /// pairs in both directions.
    pub fn with_capacity(capacity: usize) -> Self {
        BijectiveMap {
            forward: ForwardMap::with_capacity_and_hasher(capacity, RandomState::new()),
            reverse: ReverseMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Creates a map from pairs that are already unique on both sides.
    ///
    /// # Panics
    ///
    /// Panics if any left or right value repeats. Use
    /// [`BijectiveMap::build`] when the input may contain duplicates.
    pub fn from_unique_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let pairs = pairs.into_iter();
        let mut map = Self::with_capacity(pairs.size_hint().0);
        for (left, right) in pairs {
            let prev = map.forward.insert(left.clone(), right.clone());
            assert!(prev.is_none(), "duplicate left value in unique pairs");
            let prev = map.reverse.insert(right, left);
            assert!(prev.is_none(), "duplicate right value in unique pairs");
        }
        map.check_invariants();
        map
    }

    /// Creates a bijective map from a plain map.
    ///
    /// A plain map only guarantees unique keys. If its values repeat, no
    /// bijection exists and this returns `None`. O(n).
    pub fn from_map<S: BuildHasher>(map: std::collections::HashMap<L, R, S>) -> Option<Self> {
        let mut out = Self::with_capacity(map.len());
        for (left, right) in map {
            if out.reverse.insert(right.clone(), left.clone()).is_some() {
                return None;
            }
            out.forward.insert(left, right);
        }
        out.check_invariants();
        Some(out)
    }

    /// The number of left-right pairs in the map.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.forward.len(), self.reverse.len());
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.forward.is_empty(), self.reverse.is_empty());
        self.forward.is_empty()
    }

    /// Pairs the map can hold before either direction reallocates.
    pub fn capacity(&self) -> usize {
        self.forward.capacity().min(self.reverse.capacity())
    }

    /// Reserves capacity for at least `additional` more pairs in both
    /// directions.
    pub fn reserve(&mut self, additional: usize) {
        self.forward.reserve(additional);
        self.reverse.reserve(additional);
    }

    /// Returns the right value paired with the given left value. O(1)
    /// expected.
    pub fn get_by_left(&self, left: &L) -> Option<&R> {
        self.forward.get(left)
    }

    /// Returns the left value paired with the given right value. O(1)
    /// expected.
    pub fn get_by_right(&self, right: &R) -> Option<&L> {
        self.reverse.get(right)
    }

    /// Returns the right value for `left`, or `default` if `left` is absent.
    pub fn get_by_left_or<'a>(&'a self, left: &L, default: &'a R) -> &'a R {
        self.get_by_left(left).unwrap_or(default)
    }

    /// Returns the left value for `right`, or `default` if `right` is absent.
    pub fn get_by_right_or<'a>(&'a self, right: &R, default: &'a L) -> &'a L {
        self.get_by_right(right).unwrap_or(default)
    }

    pub fn contains_left(&self, left: &L) -> bool {
        self.forward.contains_key(left)
    }

    pub fn contains_right(&self, right: &R) -> bool {
        self.reverse.contains_key(right)
    }

    /// Finds the full pair holding the given left value.
    pub fn find_pair_by_left(&self, left: &L) -> Option<(&L, &R)> {
        self.forward.get_key_value(left)
    }

    /// Finds the full pair holding the given right value. Two lookups: the
    /// reverse map resolves the left value, the forward map holds the pair.
    pub fn find_pair_by_right(&self, right: &R) -> Option<(&L, &R)> {
        let left = self.reverse.get(right)?;
        self.forward.get_key_value(left)
    }

    /// Inserts or replaces the pair for `left`, returning the right value it
    /// previously mapped to.
    ///
    /// Both maps stay synchronized: if `right` was already paired with some
    /// other left value, that whole pair is evicted first, and likewise the
    /// right value `left` previously mapped to is dropped from the reverse
    /// map. A plain one-sided overwrite would leave a stale reverse entry
    /// behind.
    pub fn set_by_left(&mut self, left: L, right: R) -> Option<R> {
        if let Some(prev_left) = self.reverse.insert(right.clone(), left.clone()) {
            if prev_left != left {
                trace!("set_by_left evicting forward entry whose right value was reassigned");
                self.forward.shift_remove(&prev_left);
            }
        }
        let displaced = match self.forward.insert(left, right.clone()) {
            Some(prev_right) if prev_right != right => {
                self.reverse.remove(&prev_right);
                Some(prev_right)
            }
            other => other,
        };
        self.check_invariants();
        displaced
    }

    /// Inserts or replaces the pair for `right`, returning the left value it
    /// previously mapped to. Mirror of [`set_by_left`](Self::set_by_left).
    pub fn set_by_right(&mut self, right: R, left: L) -> Option<L> {
        if let Some(prev_right) = self.forward.insert(left.clone(), right.clone()) {
            if prev_right != right {
                trace!("set_by_right evicting reverse entry whose left value was reassigned");
                self.reverse.remove(&prev_right);
            }
        }
        let displaced = match self.reverse.insert(right, left.clone()) {
            Some(prev_left) if prev_left != left => {
                self.forward.shift_remove(&prev_left);
                Some(prev_left)
            }
            other => other,
        };
        self.check_invariants();
        displaced
    }

    /// Looks up the right value for `left` (or starts from `default`),
    /// applies `f` to it, and stores the result back through the normal
    /// eviction rules. Returns the stored value.
    ///
    /// This is the read-modify-write companion to
    /// [`get_by_left_or`](Self::get_by_left_or); mutating a right value in
    /// place is not offered because it could silently collide with another
    /// pair.
    pub fn update_by_left<F>(&mut self, left: L, default: R, f: F) -> R
    where
        F: FnOnce(&mut R),
    {
        let mut right = self.get_by_left(&left).cloned().unwrap_or(default);
        f(&mut right);
        self.set_by_left(left, right.clone());
        right
    }

    /// Mirror of [`update_by_left`](Self::update_by_left).
    pub fn update_by_right<F>(&mut self, right: R, default: L, f: F) -> L
    where
        F: FnOnce(&mut L),
    {
        let mut left = self.get_by_right(&right).cloned().unwrap_or(default);
        f(&mut left);
        self.set_by_right(right, left.clone());
        left
    }

    /// Removes the pair holding the given left value, returning its right
    /// value, or `None` if absent. Bounded by the forward map's
    /// order-preserving removal, O(n).
    pub fn remove_by_left(&mut self, left: &L) -> Option<R> {
        let right = self.forward.shift_remove(left)?;
        self.reverse.remove(&right);
        self.check_invariants();
        Some(right)
    }

    /// Removes the pair holding the given right value, returning its left
    /// value, or `None` if absent.
    pub fn remove_by_right(&mut self, right: &R) -> Option<L> {
        let left = self.reverse.remove(right)?;
        self.forward.shift_remove(&left);
        self.check_invariants();
        Some(left)
    }

    /// Removes every pair. With `keep_capacity` the backing storage is
    /// retained for reuse, otherwise it is released.
    pub fn remove_all(&mut self, keep_capacity: bool) {
        if keep_capacity {
            self.forward.clear();
            self.reverse.clear();
        } else {
            self.forward = ForwardMap::default();
            self.reverse = ReverseMap::default();
        }
        self.check_invariants();
    }

    /// Cross-validates the two maps: equal length, and each an exact mirror
    /// of the other. Runs after every mutation in debug builds, compiles to
    /// nothing in release builds.
    #[cfg(debug_assertions)]
    pub(crate) fn check_invariants(&self) {
        assert_eq!(
            self.forward.len(),
            self.reverse.len(),
            "forward and reverse maps must have the same length after every mutation"
        );
        for (left, right) in &self.forward {
            assert!(
                self.reverse.get(right) == Some(left),
                "reverse map out of sync with forward map"
            );
        }
        for (right, left) in &self.reverse {
            assert!(
                self.forward.get(left) == Some(right),
                "forward map out of sync with reverse map"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub(crate) fn check_invariants(&self) {}
}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> FromIterator<(L, R)> for BijectiveMap<L, R> {
    /// Collects pairs with overwrite semantics: a later pair sharing a side
    /// with an earlier one evicts it, like `HashMap::from_iter` last-wins.
    fn from_iter<I: IntoIterator<Item = (L, R)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<L: Eq + Hash + Clone, R: Eq + Hash + Clone> Extend<(L, R)> for BijectiveMap<L, R> {
    fn extend<I: IntoIterator<Item = (L, R)>>(&mut self, iter: I) {
        for (left, right) in iter {
            self.set_by_left(left, right);
        }
    }
}

// Equality and hashing look at the forward map only; the reverse map is a
// derived mirror of it.

impl<L: Eq + Hash, R: PartialEq> PartialEq for BijectiveMap<L, R> {
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<L: Eq + Hash, R: Eq> Eq for BijectiveMap<L, R> {}

impl<L: Eq + Hash, R: PartialEq, S: BuildHasher> PartialEq<std::collections::HashMap<L, R, S>>
    for BijectiveMap<L, R>
{
    fn eq(&self, other: &std::collections::HashMap<L, R, S>) -> bool {
        self.forward.len() == other.len()
            && other.iter().all(|(l, r)| self.forward.get(l) == Some(r))
    }
}

impl<L: Eq + Hash, R: PartialEq, S: BuildHasher> PartialEq<BijectiveMap<L, R>>
    for std::collections::HashMap<L, R, S>
{
    fn eq(&self, other: &BijectiveMap<L, R>) -> bool {
        other == self
    }
}

impl<L: Eq + Hash, R: Hash> Hash for BijectiveMap<L, R> {
    /// Order-independent digest of the forward entries, so equal maps hash
    /// equal regardless of insertion history.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut digest: u64 = 0;
        for (left, right) in &self.forward {
            let mut entry = DefaultHasher::new();
            left.hash(&mut entry);
            right.hash(&mut entry);
            digest ^= entry.finish();
        }
        state.write_usize(self.forward.len());
        state.write_u64(digest);
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for BijectiveMap<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.forward.iter()).finish()
    }
}
