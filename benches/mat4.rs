//! Matrix and vector kernels: scalar reference set against the set selected for this build.
//!
//! ```text
//! RUSTFLAGS="-C target-cpu=native" cargo bench --bench mat4
//! LOCOMATH_BACKEND=sse RUSTFLAGS="-C target-cpu=native" cargo bench --bench mat4
//! ```

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use locomath::kernels::scalar::ScalarKernels;
use locomath::kernels::{matrix, KernelSet};
use locomath::{backend, Matrix4, Scalar, Vector4};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_matrix<T: Scalar>(rng: &mut StdRng) -> [T; 16]
where
    StandardUniform: Distribution<T>,
{
    std::array::from_fn(|_| rng.random::<T>())
}

fn benchmark_matmul<T: Scalar>(c: &mut Criterion, type_name: &str)
where
    StandardUniform: Distribution<T>,
{
    let mut rng = StdRng::seed_from_u64(42);
    let (a, b) = (generate_matrix::<T>(&mut rng), generate_matrix::<T>(&mut rng));
    let (ma, mb) = (Matrix4::from_column_major(a), Matrix4::from_column_major(b));

    let mut group = c.benchmark_group(format!("Matrix4<{type_name}>"));
    group.throughput(Throughput::Elements(1));

    group.bench_function(BenchmarkId::new("matmul", "scalar"), |bench| {
        let mut dst = [T::zero(); 16];
        bench.iter(|| {
            ScalarKernels::matmul_mat4(&mut dst, black_box(&a), black_box(&b));
            black_box(dst)
        })
    });

    group.bench_function(BenchmarkId::new("matmul", backend()), |bench| {
        bench.iter(|| black_box(black_box(ma) * black_box(mb)))
    });

    let v = [T::one(); 4];
    group.bench_function(BenchmarkId::new("matmul_vec", "scalar"), |bench| {
        let mut dst = [T::zero(); 4];
        bench.iter(|| {
            ScalarKernels::matmul_vec_mat4(&mut dst, black_box(&a), black_box(&v));
            black_box(dst)
        })
    });

    group.bench_function(BenchmarkId::new("matmul_vec", backend()), |bench| {
        let vec = Vector4::from_array(v);
        bench.iter(|| black_box(black_box(ma) * black_box(vec)))
    });

    group.bench_function(BenchmarkId::new("add", "scalar"), |bench| {
        let mut dst = [T::zero(); 16];
        bench.iter(|| {
            ScalarKernels::add(&mut dst, black_box(&a), black_box(&b));
            black_box(dst)
        })
    });

    group.bench_function(BenchmarkId::new("add", backend()), |bench| {
        bench.iter(|| black_box(black_box(ma) + black_box(mb)))
    });

    // Shared by every kernel set
    group.bench_function("inverse", |bench| {
        let mut dst = [T::zero(); 16];
        bench.iter(|| {
            matrix::inverse_mat4(&mut dst, black_box(&a));
            black_box(dst)
        })
    });

    group.finish();
}

fn benchmark_mat4(c: &mut Criterion) {
    benchmark_matmul::<f32>(c, "f32");
    benchmark_matmul::<f64>(c, "f64");
}

criterion_group!(benches, benchmark_mat4);
criterion_main!(benches);
