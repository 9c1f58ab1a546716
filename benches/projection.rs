//! Benchmarks for projecting declarations into Backlang.
//!
//! Covers the three hot paths of a decompiler host:
//! - Opcode decoding of a large method body
//! - Projection of a single type with many members
//! - Parallel projection of a batch of types

extern crate backscope;

use backscope::{disassembler::decode_opcodes, prelude::*};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

/// A body mixing one- and two-byte opcodes
fn body(len: usize) -> Vec<u8> {
    [0x00, 0x02, 0xFE, 0x01, 0x2A]
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

/// A type with `members` fields and as many methods with bodies
fn wide_type(name: &str, members: usize) -> TypeDeclaration {
    let mut builder = TypeBuilder::new(name)
        .namespace("Bench")
        .public()
        .base(TypeRef::system("Object"))
        .base(TypeRef::new("Bench", "IWorker"));

    for index in 0..members {
        builder = builder
            .field(
                FieldBuilder::new(&format!("field{index}"), TypeRef::system("Int32"))
                    .private()
                    .build(),
            )
            .method(
                MethodBuilder::new(&format!("Method{index}"))
                    .public()
                    .parameter("value", TypeRef::system("String"))
                    .returns(TypeRef::system("Boolean"))
                    .code(body(64))
                    .build(),
            );
    }

    builder.build()
}

/// Benchmark decoding a 64 KiB method body.
fn bench_decode_opcodes(c: &mut Criterion) {
    let code = body(64 * 1024);

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(code.len() as u64));
    group.bench_function("decode_opcodes", |b| {
        b.iter(|| {
            let count = decode_opcodes(black_box(&code)).filter(|result| result.is_ok()).count();
            black_box(count)
        });
    });
    group.finish();
}

/// Benchmark projecting one type with 200 fields and 200 methods.
fn bench_decompile_type(c: &mut Criterion) {
    let declaration = wide_type("Wide", 200);
    let backlang = Backlang::default();

    c.bench_function("decompile_type", |b| {
        b.iter(|| {
            let mut output = PlainTextOutput::new();
            backlang.decompile_type(black_box(&declaration), &mut output);
            black_box(output.into_text())
        });
    });
}

/// Benchmark projecting 256 types in parallel.
fn bench_decompile_types(c: &mut Criterion) {
    let declarations: Vec<_> = (0..256)
        .map(|index| wide_type(&format!("Type{index}"), 16))
        .collect();
    let backlang = Backlang::default();

    c.bench_function("decompile_types_parallel", |b| {
        b.iter(|| black_box(backlang.decompile_types(black_box(&declarations))));
    });
}

criterion_group!(
    benches,
    bench_decode_opcodes,
    bench_decompile_type,
    bench_decompile_types
);
criterion_main!(benches);
