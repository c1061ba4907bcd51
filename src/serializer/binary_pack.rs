// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::{is_zero_value, DeserializeError, SerializeError, Serializer};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Top-level frame handed to the packing engine.
///
/// The engine operates on a concrete container value, so `T` is boxed into
/// this wrapper on the way in and unboxed on the way out. Callers only ever
/// observe plain `T`.
#[derive(Deserialize, Serialize)]
struct Packed<T> {
    value: T,
}

/// Binary-pack serializer (compact positional encoding)
///
/// No field names, no self-description - just values in declaration order.
/// The smallest and fastest of the variants, best suited for simple
/// POD-like shapes where wire size matters more than inspectability.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BinaryPackSerializer;

impl Serializer for BinaryPackSerializer {
    fn serialize<T: Serialize + Default + PartialEq>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, SerializeError> {
        if is_zero_value(value) {
            return Ok(Vec::new());
        }

        bincode::serialize(&Packed { value }).map_err(SerializeError::BinaryPack)
    }

    fn deserialize<T: DeserializeOwned + Default>(
        &self,
        bytes: &[u8],
    ) -> Result<T, DeserializeError> {
        if bytes.is_empty() {
            return Ok(T::default());
        }

        bincode::deserialize::<Packed<T>>(bytes)
            .map(|packed| packed.value)
            .map_err(DeserializeError::BinaryPack)
    }
}

impl std::fmt::Display for BinaryPackSerializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "binary-pack")
    }
}
