use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use texel_layout::{
    copy_element_sizes_match, element_size, image_byte_size, region_byte_size,
    texel_block_extent, CopyRegion, Format, ImageAspects,
};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Layout Queries (all formats)");
    let formats = Format::all();
    group.throughput(criterion::Throughput::Elements(formats.len() as u64));

    group.bench_function("element_size", |b| {
        b.iter(|| {
            formats
                .iter()
                .map(|&format| element_size(black_box(format), ImageAspects::COLOR))
                .sum::<u32>()
        })
    });

    group.bench_function("texel_block_extent", |b| {
        b.iter(|| {
            formats
                .iter()
                .map(|&format| texel_block_extent(black_box(format)).texel_count())
                .sum::<u32>()
        })
    });

    // 240 is a multiple of every block extent
    group.bench_function("region_byte_size_240x240", |b| {
        b.iter(|| {
            formats
                .iter()
                .map(|&format| region_byte_size(black_box(format), 240, 240, 1))
                .sum::<u64>()
        })
    });

    group.bench_function("image_byte_size_1920x1080", |b| {
        b.iter(|| {
            formats
                .iter()
                .map(|&format| image_byte_size(black_box(format), 1920, 1080, 1))
                .sum::<u64>()
        })
    });

    group.bench_function("copy_element_sizes_match", |b| {
        let regions = [CopyRegion::color(); 8];
        b.iter(|| {
            formats
                .iter()
                .filter(|&&format| {
                    copy_element_sizes_match(black_box(format), Format::R32Uint, &regions)
                })
                .count()
        })
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
