//! Interchange format: a bijective map serializes as a plain left-to-right
//! map. Only the forward direction is encoded; the reverse map is rebuilt on
//! decode, which is also where a payload with repeated right values is
//! rejected as corrupt instead of silently dropping a pair.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::map::BijectiveMap;

impl<L, R> Serialize for BijectiveMap<L, R>
where
    L: Serialize,
    R: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.forward.iter())
    }
}

struct BijectiveMapVisitor<L, R> {
    marker: PhantomData<BijectiveMap<L, R>>,
}

impl<'de, L, R> Visitor<'de> for BijectiveMapVisitor<L, R>
where
    L: Deserialize<'de> + Eq + Hash + Clone,
    R: Deserialize<'de> + Eq + Hash + Clone,
{
    type Value = BijectiveMap<L, R>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys and unique values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = BijectiveMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((left, right)) = access.next_entry::<L, R>()? {
            if map.reverse.insert(right.clone(), left.clone()).is_some() {
                return Err(de::Error::custom(
                    "bijective map values are not unique",
                ));
            }
            if map.forward.insert(left, right).is_some() {
                return Err(de::Error::custom("bijective map keys are not unique"));
            }
        }
        map.check_invariants();
        Ok(map)
    }
}

impl<'de, L, R> Deserialize<'de> for BijectiveMap<L, R>
where
    L: Deserialize<'de> + Eq + Hash + Clone,
    R: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BijectiveMapVisitor {
            marker: PhantomData,
        })
    }
}
