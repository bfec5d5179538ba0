//! Serde support: a ratio travels as its text form, `"N"` or `"N/D"`.

use crate::{Ratio, RatioInteger};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: RatioInteger> Serialize for Ratio<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct RatioVisitor<T>(PhantomData<T>);

impl<'de, T: RatioInteger> Visitor<'de> for RatioVisitor<T> {
    type Value = Ratio<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rational in the form \"N\" or \"N/D\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }
}

impl<'de, T: RatioInteger> Deserialize<'de> for Ratio<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RatioVisitor(PhantomData))
    }
}
