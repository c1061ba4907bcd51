//! Pluggable serialization & compression pipeline for cache values.
//!
//! When a typed value is written to a cache entry, it passes through two
//! independent strategy objects:
//!
//! serialize -> compress -> \[cache\] -> decompress -> deserialize
//!
//! Each stage is a pure, synchronous, CPU-only transform of an in-memory
//! buffer, so both strategy families are freely shareable across threads
//! and introduce no locking or I/O of their own. The cache round trip
//! itself (Redis, disk, ...) is the caller's concern.
//!
//! Three serializers are provided:
//! - [`JsonSerializer`]: UTF-8 JSON text, favors interop & debuggability
//! - [`BsonSerializer`]: BSON documents, favors MongoDB-shaped pipelines
//! - [`BinaryPackSerializer`]: compact positional binary, favors throughput
//!
//! and two compressors:
//! - [`NoCompression`]: identity passthrough
//! - [`Lz4Compression`]: speed-optimized LZ4 block compression
//!
//! A [`CacheCodec`] fixes one strategy of each family for the lifetime of a
//! cache client:
//!
//! ```
//! use cache_codec::{CacheCodec, JsonSerializer, Lz4Compression};
//!
//! # fn main() -> cache_codec::Result<()> {
//! let codec = CacheCodec::new(JsonSerializer, Lz4Compression);
//!
//! let bytes = codec.encode(&String::from("hello world"))?;
//! let value: String = codec.decode(&bytes)?;
//!
//! assert_eq!(value, "hello world");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used, clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]

mod codec;
mod compression;
mod error;
mod serializer;

#[cfg(feature = "lz4")]
pub use compression::lz4::Lz4Compression;

pub use {
    codec::CacheCodec,
    compression::{none::NoCompression, CompressError, Compressor, DecompressError},
    error::{Error, Result},
    serializer::{
        binary_pack::BinaryPackSerializer, bson::BsonSerializer, json::JsonSerializer,
        DeserializeError, SerializeError, Serializer,
    },
};
