// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::{is_zero_value, DeserializeError, SerializeError, Serializer};
use serde::{de::DeserializeOwned, Serialize};

/// JSON serializer (UTF-8 text)
///
/// Standard structural mapping with no formatting hooks. The slowest and
/// largest of the variants, but human-readable, which makes cache entries
/// trivially inspectable.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize<T: Serialize + Default + PartialEq>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, SerializeError> {
        if is_zero_value(value) {
            return Ok(Vec::new());
        }

        serde_json::to_vec(value).map_err(SerializeError::Json)
    }

    fn deserialize<T: DeserializeOwned + Default>(
        &self,
        bytes: &[u8],
    ) -> Result<T, DeserializeError> {
        if bytes.is_empty() {
            return Ok(T::default());
        }

        serde_json::from_slice(bytes).map_err(DeserializeError::Json)
    }
}

impl std::fmt::Display for JsonSerializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "json")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use test_log::test;

    #[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
    struct Person {
        name: String,
        age: u32,
    }

    #[test]
    fn json_round_trip() -> crate::Result<()> {
        let serializer = JsonSerializer;

        let person = Person {
            name: "Ada".to_string(),
            age: 30,
        };

        let bytes = serializer.serialize(&person)?;
        assert_eq!(bytes, br#"{"name":"Ada","age":30}"#);

        let decoded: Person = serializer.deserialize(&bytes)?;
        assert_eq!(decoded, person);

        Ok(())
    }

    #[test]
    fn json_round_trip_primitives() -> crate::Result<()> {
        let serializer = JsonSerializer;

        let n: u64 = 42;
        assert_eq!(serializer.deserialize::<u64>(&serializer.serialize(&n)?)?, n);

        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            serializer.deserialize::<Vec<String>>(&serializer.serialize(&items)?)?,
            items,
        );

        Ok(())
    }

    #[test]
    fn json_zero_value_is_empty_buffer() -> crate::Result<()> {
        let serializer = JsonSerializer;

        assert!(serializer.serialize(&Person::default())?.is_empty());
        assert!(serializer.serialize(&String::new())?.is_empty());
        assert!(serializer.serialize(&Option::<Person>::None)?.is_empty());

        assert_eq!(serializer.deserialize::<Person>(b"")?, Person::default());
        assert_eq!(serializer.deserialize::<u64>(b"")?, 0);

        Ok(())
    }

    #[test]
    fn json_rejects_malformed_input() {
        let serializer = JsonSerializer;

        assert!(serializer.deserialize::<Person>(b"{\"name\":").is_err());
        assert!(serializer.deserialize::<Person>(&[0xFF, 0xFE]).is_err());
    }
}
