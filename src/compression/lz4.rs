// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use super::{CompressError, Compressor, DecompressError};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

/// LZ4 compression (speed-optimized)
///
/// Frame layout: 4-byte big-endian decoded length, followed by a raw LZ4
/// block. The decoded length lives inside the frame itself, so decompression
/// needs no metadata beyond the compressed bytes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Lz4Compression;

impl Compressor for Lz4Compression {
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>, CompressError> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let decoded_len = u32::try_from(bytes.len())
            .map_err(|_| CompressError("input exceeds u32::MAX bytes".to_string()))?;

        let block = lz4_flex::compress(bytes);

        let mut frame = Vec::with_capacity(std::mem::size_of::<u32>() + block.len());
        frame
            .write_u32::<BigEndian>(decoded_len)
            .map_err(|e| CompressError(e.to_string()))?;
        frame.extend_from_slice(&block);

        Ok(frame)
    }

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>, DecompressError> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = bytes;

        let decoded_len = reader
            .read_u32::<BigEndian>()
            .map_err(|_| DecompressError("truncated frame header".to_string()))?;

        // An LZ4 block cannot expand by more than 255x, so a larger claim is
        // a corrupt frame - reject it before allocating the output buffer
        if decoded_len as usize > reader.len().saturating_mul(255) {
            return Err(DecompressError("implausible decoded length".to_string()));
        }

        let decoded = lz4_flex::decompress(reader, decoded_len as usize)
            .map_err(|e| DecompressError(e.to_string()))?;

        if decoded.len() != decoded_len as usize {
            return Err(DecompressError("decoded length mismatch".to_string()));
        }

        Ok(decoded)
    }
}

impl std::fmt::Display for Lz4Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lz4")
    }
}
