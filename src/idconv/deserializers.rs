//! Custom serde deserializers for ID converter JSON fields
//!
//! The service normally returns identifiers as strings, but numeric values
//! show up for `pmid` in some API versions. Values that cannot be an
//! identifier (booleans, objects, arrays) are treated as absent so that one
//! odd field does not fail the whole chunk.

use serde::Deserializer;
use std::fmt;
use std::result;

/// Deserialize an optional identifier that may be a string, a number, or null
pub(super) fn deserialize_optional_id<'de, D>(
    deserializer: D,
) -> result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct OptionalIdVisitor;

    impl<'de> Visitor<'de> for OptionalIdVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an identifier string, number, or null")
        }

        fn visit_bool<E>(self, _value: bool) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_str<E>(self, value: &str) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E>(self, value: String) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_seq<A>(self, mut seq: A) -> result::Result<Option<String>, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_map<M>(self, mut map: M) -> result::Result<Option<String>, M::Error>
        where
            M: de::MapAccess<'de>,
        {
            while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_unit<E>(self) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> result::Result<Option<String>, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(OptionalIdVisitor)
}
