use cache_codec::{
    BinaryPackSerializer, BsonSerializer, CacheCodec, Compressor, JsonSerializer, NoCompression,
    Serializer,
};
use criterion::{criterion_group, criterion_main, Criterion};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
struct Entry {
    key: String,
    payload: Vec<String>,
    hits: u64,
}

fn sample_entry(items: usize) -> Entry {
    Entry {
        key: "user:12345:profile".to_string(),
        payload: (0..items).map(|i| format!("payload-item-{i}")).collect(),
        hits: 42,
    }
}

fn serializers(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let entry = sample_entry(100);

    group.bench_function("json", |b| {
        b.iter(|| JsonSerializer.serialize(&entry).unwrap());
    });

    group.bench_function("bson", |b| {
        let serializer = BsonSerializer::new();
        b.iter(|| serializer.serialize(&entry).unwrap());
    });

    group.bench_function("binary-pack", |b| {
        b.iter(|| BinaryPackSerializer.serialize(&entry).unwrap());
    });
}

fn deserializers(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize");

    let entry = sample_entry(100);

    {
        let bytes = JsonSerializer.serialize(&entry).unwrap();
        group.bench_function("json", |b| {
            b.iter(|| JsonSerializer.deserialize::<Entry>(&bytes).unwrap());
        });
    }

    {
        let serializer = BsonSerializer::new();
        let bytes = serializer.serialize(&entry).unwrap();
        group.bench_function("bson", |b| {
            b.iter(|| serializer.deserialize::<Entry>(&bytes).unwrap());
        });
    }

    {
        let bytes = BinaryPackSerializer.serialize(&entry).unwrap();
        group.bench_function("binary-pack", |b| {
            b.iter(|| BinaryPackSerializer.deserialize::<Entry>(&bytes).unwrap());
        });
    }
}

fn compressors(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    let bytes = JsonSerializer.serialize(&sample_entry(1_000)).unwrap();

    group.bench_function("none", |b| {
        b.iter(|| NoCompression.compress(&bytes).unwrap());
    });

    #[cfg(feature = "lz4")]
    group.bench_function("lz4", |b| {
        use cache_codec::Lz4Compression;
        b.iter(|| Lz4Compression.compress(&bytes).unwrap());
    });
}

fn pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let entry = sample_entry(1_000);

    {
        let codec = CacheCodec::new(JsonSerializer, NoCompression);
        group.bench_function("json + none", |b| {
            b.iter(|| {
                let bytes = codec.encode(&entry).unwrap();
                codec.decode::<Entry>(&bytes).unwrap()
            });
        });
    }

    #[cfg(feature = "lz4")]
    {
        use cache_codec::Lz4Compression;

        let codec = CacheCodec::new(JsonSerializer, Lz4Compression);
        group.bench_function("json + lz4", |b| {
            b.iter(|| {
                let bytes = codec.encode(&entry).unwrap();
                codec.decode::<Entry>(&bytes).unwrap()
            });
        });

        let codec = CacheCodec::new(BinaryPackSerializer, Lz4Compression);
        group.bench_function("binary-pack + lz4", |b| {
            b.iter(|| {
                let bytes = codec.encode(&entry).unwrap();
                codec.decode::<Entry>(&bytes).unwrap()
            });
        });
    }
}

criterion_group!(benches, serializers, deserializers, compressors, pipeline);
criterion_main!(benches);
