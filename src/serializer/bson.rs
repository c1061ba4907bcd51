// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::{is_zero_value, DeserializeError, SerializeError, Serializer};
use bson::Document;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Context hook, applied to every document passing through the serializer
type ContextHook = Arc<dyn Fn(&mut Document) + Send + Sync>;

/// BSON serializer (binary document format)
///
/// Preserves BSON-specific types (datetimes, decimal128, object IDs), which
/// makes it the natural choice for values already round-tripping through a
/// MongoDB-shaped pipeline. Requires `T` to map to a document; scalars and
/// sequences at the top level are a [`SerializeError`].
///
/// Optional context hooks can be bound at construction; they run on the
/// intermediate [`Document`] of every call (after encoding, before decoding)
/// and are immutable thereafter.
#[derive(Clone, Default)]
pub struct BsonSerializer {
    encode_hook: Option<ContextHook>,
    decode_hook: Option<ContextHook>,
}

impl std::fmt::Debug for BsonSerializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BsonSerializer<encode_hook: {}, decode_hook: {}>",
            self.encode_hook.is_some(),
            self.decode_hook.is_some(),
        )
    }
}

impl BsonSerializer {
    /// Creates a new BSON serializer without context hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hook applied to every document after encoding.
    #[must_use]
    pub fn with_encode_hook(mut self, hook: impl Fn(&mut Document) + Send + Sync + 'static) -> Self {
        self.encode_hook = Some(Arc::new(hook));
        self
    }

    /// Sets the hook applied to every document before decoding.
    #[must_use]
    pub fn with_decode_hook(mut self, hook: impl Fn(&mut Document) + Send + Sync + 'static) -> Self {
        self.decode_hook = Some(Arc::new(hook));
        self
    }
}

impl Serializer for BsonSerializer {
    fn serialize<T: Serialize + Default + PartialEq>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, SerializeError> {
        if is_zero_value(value) {
            return Ok(Vec::new());
        }

        let mut doc = bson::to_document(value).map_err(SerializeError::Bson)?;

        if let Some(hook) = &self.encode_hook {
            hook(&mut doc);
        }

        bson::to_vec(&doc).map_err(SerializeError::Bson)
    }

    fn deserialize<T: DeserializeOwned + Default>(
        &self,
        bytes: &[u8],
    ) -> Result<T, DeserializeError> {
        if bytes.is_empty() {
            return Ok(T::default());
        }

        let mut doc: Document = bson::from_slice(bytes).map_err(DeserializeError::Bson)?;

        if let Some(hook) = &self.decode_hook {
            hook(&mut doc);
        }

        bson::from_document(doc).map_err(DeserializeError::Bson)
    }
}

impl std::fmt::Display for BsonSerializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bson")
    }
}
