use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cp_contact::{ContactScanConfig, find_contact_points, find_contact_points3d};
use cp_core::Volume;

/// Two interleaved slabs with a background border so most voxels are skipped
/// and a dense interface remains.
fn slab_volume(s: usize) -> Volume<u32> {
    let mut vol = Volume::new_fill(s, s, s, 0u32);
    vol.fill_box([1, 1, 1], [s / 2, s - 1, s - 1], 7);
    vol.fill_box([s / 2, 1, 1], [s - 1, s - 1, s - 1], 9);
    vol
}

fn bench_scan_flat(c: &mut Criterion) {
    let s = 256usize;
    let vol = slab_volume(s);

    c.bench_function("find_contact_points3d_u32_256^3", |b| {
        b.iter(|| {
            let out = find_contact_points3d(black_box(vol.data()), 7u32, 9, s, s, s, 6)
                .expect("supported connectivity");
            black_box(out);
        });
    });
}

fn bench_scan_typed(c: &mut Criterion) {
    let s = 128usize;
    let vol = slab_volume(s);
    let view = vol.as_view();
    let cfg = ContactScanConfig::default();

    c.bench_function("find_contact_points_typed_u32_128^3", |b| {
        b.iter(|| {
            let out = find_contact_points(black_box(&view), 7u32, 9, &cfg)
                .expect("supported connectivity");
            black_box(out);
        });
    });
}

fn bench_scan_u8_noise(c: &mut Criterion) {
    let s = 192usize;
    let mut data = Vec::with_capacity(s * s * s);
    for i in 0..(s * s * s) {
        data.push((i.wrapping_mul(2_654_435_761) >> 7) as u8 % 4);
    }

    c.bench_function("find_contact_points3d_u8_noise_192^3", |b| {
        b.iter(|| {
            let out = find_contact_points3d(black_box(&data), 1u8, 2, s, s, s, 6)
                .expect("supported connectivity");
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_scan_flat, bench_scan_typed, bench_scan_u8_noise);
criterion_main!(benches);
