// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::{CompressError, Compressor, DecompressError};

/// No compression
///
/// Identity in both directions, at zero runtime cost. Exists so a
/// [`CacheCodec`](crate::CacheCodec) can be configured uniformly whether or
/// not compression is desired.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NoCompression;

impl Compressor for NoCompression {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressError> {
        Ok(bytes.into())
    }

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, DecompressError> {
        Ok(bytes.into())
    }
}

impl std::fmt::Display for NoCompression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no compression")
    }
}
