use criterion::{criterion_main, criterion_group, Criterion, black_box};

use texfmt_format::*;

fn query_benchmark(c: &mut Criterion) {
    c.bench_function("Format::components", |b| b.iter(|| {
        Format::iter().map(|format| black_box(format).component_count()).sum::<u32>()
    }));
    c.bench_function("Format::component_precision", |b| b.iter(|| {
        Format::iter().skip(1).map(|format| black_box(format).component_precision()).sum::<u32>()
    }));
    c.bench_function("Format::as_srgb_format", |b| b.iter(|| {
        black_box(Format::BC7UNorm).as_srgb_format()
    }));
    c.bench_function("Format::as_typeless_format", |b| b.iter(|| {
        black_box(Format::D24UNormS8UInt).as_typeless_format()
    }));
    c.bench_function("Format::resolve", |b| b.iter(|| {
        black_box(Format::R24G8Typeless).resolve(AspectFilter::Stencil, FormatUsage::ShaderResource)
    }));
}

fn find_benchmark(c: &mut Criterion) {
    c.bench_function("find_format: first", |b| b.iter(|| {
        find_format(CompressionType::None, black_box(FormatComponents::RGBAlpha), ComponentType::Typeless, 32)
    }));
    c.bench_function("find_format: last", |b| b.iter(|| {
        find_format(CompressionType::None, black_box(FormatComponents::Stencil), ComponentType::UInt, 8)
    }));
    c.bench_function("find_format: RGB fallback", |b| b.iter(|| {
        find_format(CompressionType::None, black_box(FormatComponents::RGB), ComponentType::UNorm, 8)
    }));
    c.bench_function("find_format: no match", |b| b.iter(|| {
        find_format(CompressionType::None, black_box(FormatComponents::RGBAlpha), ComponentType::Float, 7)
    }));
}

fn name_benchmark(c: &mut Criterion) {
    c.bench_function("Format::from_name", |b| b.iter(|| {
        Format::from_name(black_box("BC7_UNORM_SRGB"))
    }));
    c.bench_function("Format::from_name: lowercase", |b| b.iter(|| {
        Format::from_name(black_box("bc7_unorm_srgb"))
    }));
    c.bench_function("Format::as_str", |b| b.iter(|| {
        black_box(Format::D32FloatS8UInt).as_str()
    }));
    c.bench_function("as_format", |b| b.iter(|| {
        as_format(black_box(ElementType::new(TypeCat::UInt8, 4)), NormalizationMode::Normalized)
    }));
}

criterion_group!(benches, query_benchmark, find_benchmark, name_benchmark);
criterion_main!(benches);
