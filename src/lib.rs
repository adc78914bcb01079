//! A bijective map: a dictionary keeping a one-to-one correspondence
//! between two value domains, with O(1) expected lookup from either side.
//!
//! The core is [`BijectiveMap`], two synchronized hash maps (left-to-right
//! and right-to-left) behind a single type. Every mutation goes through a
//! paired-eviction protocol so neither map can hold a stale entry for the
//! other; in debug builds each mutation is followed by a full cross-check of
//! the two maps.
//!
//! On top of the store sit a positional layer ([`Position`], insertion-order
//! iteration, per-side value views), a pure conflict classifier
//! ([`Conflict`]), and a batch builder ([`BuildResult`]) that turns
//! arbitrary, possibly duplicate-containing input into a maximal bijection
//! plus the rejected remainder. Serialization mirrors a plain map: only the
//! forward direction crosses the wire.

pub mod build;
pub mod conflict;
pub mod map;
pub mod position;
mod serde_impls;
pub mod views;

pub use build::BuildResult;
pub use conflict::Conflict;
pub use map::BijectiveMap;
pub use position::Position;
pub use views::{IntoIter, Iter, LeftValues, RightValues};

/// Builds a [`BijectiveMap`] from literal pairs.
///
/// Panics if a left or right value repeats; a literal with duplicates is a
/// programming error, not input to recover from. Use
/// [`BijectiveMap::build`] for untrusted pair sequences.
///
/// ```
/// use bijective_map::bijective_map;
///
/// let codes = bijective_map! {
///     "TW" => "Taiwan",
///     "AR" => "Argentina",
/// };
/// assert_eq!(codes.get_by_right(&"Taiwan"), Some(&"TW"));
/// ```
#[macro_export]
macro_rules! bijective_map {
    () => {
        $crate::BijectiveMap::new()
    };
    ($($left:expr => $right:expr),+ $(,)?) => {
        $crate::BijectiveMap::from_unique_pairs([$(($left, $right)),+])
    };
}
