// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

pub(crate) mod binary_pack;
pub(crate) mod bson;
pub(crate) mod json;

use serde::{de::DeserializeOwned, Serialize};

/// Error during serialization
#[derive(Debug)]
pub enum SerializeError {
    /// JSON encoding failed
    Json(serde_json::Error),

    /// BSON encoding failed (e.g. the value does not map to a document)
    Bson(::bson::ser::Error),

    /// Binary-pack encoding failed
    BinaryPack(bincode::Error),
}

impl std::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SerializeError: {self:?}")
    }
}

impl std::error::Error for SerializeError {}

/// Error during deserialization
///
/// Raised when the input bytes are not valid for the variant's wire format,
/// or do not match the requested type's shape. Never raised for an empty
/// buffer (see [`Serializer::deserialize`]).
#[derive(Debug)]
pub enum DeserializeError {
    /// JSON decoding failed
    Json(serde_json::Error),

    /// BSON decoding failed
    Bson(::bson::de::Error),

    /// Binary-pack decoding failed
    BinaryPack(bincode::Error),
}

impl std::fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DeserializeError: {self:?}")
    }
}

impl std::error::Error for DeserializeError {}

/// Generic serialization strategy
///
/// Implementations are stateless aside from configuration captured at
/// construction, so they are safe to share across threads.
///
/// # Zero-value policy
///
/// A value equal to `T::default()` serializes to the *empty* buffer, and the
/// empty buffer deserializes back to `T::default()` - "default value" and
/// "nothing stored" are deliberately the same wire state. This can mask
/// "stored empty" vs "stored nothing" for types whose default is meaningful;
/// express genuine absence as `Option<T>` where that distinction matters.
pub trait Serializer {
    /// Serializes a value into the variant's wire format.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the value cannot be represented in the format.
    fn serialize<T: Serialize + Default + PartialEq>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, SerializeError>;

    /// Deserializes a value previously produced by [`Serializer::serialize`]
    /// of the same variant.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the bytes are not valid for the format or do not
    /// match `T`'s shape.
    fn deserialize<T: DeserializeOwned + Default>(
        &self,
        bytes: &[u8],
    ) -> Result<T, DeserializeError>;
}

/// Whether a value hits the zero-value policy and skips encoding entirely.
pub(crate) fn is_zero_value<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
