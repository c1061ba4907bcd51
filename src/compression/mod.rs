// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

#[cfg(feature = "lz4")]
pub(crate) mod lz4;

pub(crate) mod none;

use std::sync::Arc;

/// Error during compression
#[derive(Debug)]
pub struct CompressError(pub String);

impl std::fmt::Display for CompressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompressError({})", self.0)
    }
}

impl std::error::Error for CompressError {}

/// Error during decompression
///
/// Raised when the input bytes were not produced by the matching
/// [`Compressor::compress`] (truncated frame, corrupted block, ...).
#[derive(Debug)]
pub struct DecompressError(pub String);

impl std::fmt::Display for DecompressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DecompressError({})", self.0)
    }
}

impl std::error::Error for DecompressError {}

/// Generic compression strategy
///
/// Implementations are stateless after construction and safe to share
/// across threads. Both directions are lossless:
/// `decompress(compress(x)) == x` for every byte sequence `x`, the empty
/// sequence included (empty in, empty out, no framing emitted).
pub trait Compressor {
    /// Compresses a byte buffer.
    ///
    /// The output must embed enough framing to be reversed by
    /// [`Compressor::decompress`] without external metadata.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the input cannot be represented by the scheme.
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressError>;

    /// Reverses [`Compressor::compress`], reconstructing the original
    /// bytes exactly.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the input is not a valid frame for the scheme.
    /// No partial recovery is attempted.
    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, DecompressError>;

    /// Compresses an optional buffer, preserving absence.
    ///
    /// `None` stays `None` - absence is not converted into an empty buffer.
    ///
    /// # Errors
    ///
    /// Will return `Err` if [`Compressor::compress`] fails.
    fn compress_opt(&self, bytes: Option<&[u8]>) -> Result<Option<Vec<u8>>, CompressError> {
        bytes.map(|bytes| self.compress(bytes)).transpose()
    }

    /// Decompresses an optional buffer, preserving absence.
    ///
    /// # Errors
    ///
    /// Will return `Err` if [`Compressor::decompress`] fails.
    fn decompress_opt(&self, bytes: Option<&[u8]>) -> Result<Option<Vec<u8>>, DecompressError> {
        bytes.map(|bytes| self.decompress(bytes)).transpose()
    }
}

// Allows sharing one strategy between multiple cache clients.
impl<C: Compressor + ?Sized> Compressor for Arc<C> {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressError> {
        (**self).compress(bytes)
    }

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, DecompressError> {
        (**self).decompress(bytes)
    }
}
