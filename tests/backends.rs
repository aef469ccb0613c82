//! The kernel set selected for this build against the scalar reference kernels,
//! and concurrent use of the value types from rayon workers.

use locomath::dispatch::{vector2_backend, Backend};
use locomath::kernels::scalar::ScalarKernels;
use locomath::kernels::{matrix, KernelSet};
use locomath::{backend, Matrix4, Matrix4d, Matrix4f, Vector2, Vector4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const SAMPLES: usize = 1_000;

fn random_array<const N: usize>(rng: &mut StdRng) -> [f64; N] {
    std::array::from_fn(|_| rng.random_range(-50.0..50.0))
}

fn assert_close<const N: usize>(expected: &[f64; N], actual: &[f64; N], context: &str) {
    for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
        assert!(
            (e - a).abs() <= 1e-12 * e.abs().max(1.0),
            "{context}[{i}]: scalar={e}, {}={a}",
            backend()
        );
    }
}

#[test]
fn test_backend_report() {
    println!("wide kernels: {}, vector2 kernels: {}", backend(), vector2_backend());
    assert!(matches!(
        backend(),
        Backend::Scalar | Backend::Sse | Backend::Neon | Backend::Avx
    ));
    assert!(vector2_backend().lane_bits() <= backend().lane_bits());
}

#[test]
fn test_vector4_matches_scalar_kernels() {
    let mut rng = StdRng::seed_from_u64(100);

    for _ in 0..SAMPLES {
        let (a, b) = (random_array::<4>(&mut rng), random_array::<4>(&mut rng));
        let (va, vb) = (Vector4::from_array(a), Vector4::from_array(b));
        let mut expected = [0.0; 4];

        ScalarKernels::add(&mut expected, &a, &b);
        assert_close(&expected, (va + vb).elements(), "add");

        ScalarKernels::sub(&mut expected, &a, &b);
        assert_close(&expected, (va - vb).elements(), "sub");

        ScalarKernels::hadamard(&mut expected, &a, &b);
        assert_close(&expected, va.hadamard(&vb).elements(), "hadamard");

        ScalarKernels::scale(&mut expected, 0.75, &a);
        assert_close(&expected, (va * 0.75).elements(), "scale");

        expected = a;
        ScalarKernels::normalize_in_place(&mut expected);
        assert_close(&expected, va.normalized().elements(), "normalize");

        let dot = ScalarKernels::dot(&a, &b);
        assert!((dot - va.dot(&vb)).abs() <= 1e-10, "dot: {dot} vs {}", va.dot(&vb));
    }
}

#[test]
fn test_vector2_matches_scalar_kernels() {
    let mut rng = StdRng::seed_from_u64(101);

    for _ in 0..SAMPLES {
        let (a, b) = (random_array::<2>(&mut rng), random_array::<2>(&mut rng));
        let (va, vb) = (Vector2::from_array(a), Vector2::from_array(b));
        let mut expected = [0.0; 2];

        ScalarKernels::add(&mut expected, &a, &b);
        assert_close(&expected, (va + vb).elements(), "add");

        ScalarKernels::hadamard(&mut expected, &a, &b);
        assert_close(&expected, va.hadamard(&vb).elements(), "hadamard");

        assert!((ScalarKernels::dot(&a, &b) - va.dot(&vb)).abs() <= 1e-10);
    }
}

#[test]
fn test_matrix4_matches_scalar_kernels() {
    let mut rng = StdRng::seed_from_u64(102);

    for _ in 0..SAMPLES {
        let (a, b) = (random_array::<16>(&mut rng), random_array::<16>(&mut rng));
        let v = random_array::<4>(&mut rng);
        let (ma, mb) = (Matrix4::from_column_major(a), Matrix4::from_column_major(b));

        let mut expected = [0.0; 16];
        ScalarKernels::add(&mut expected, &a, &b);
        assert_close(&expected, (ma + mb).elements(), "add");

        ScalarKernels::scale(&mut expected, -2.5, &a);
        assert_close(&expected, (ma * -2.5).elements(), "scale");

        ScalarKernels::matmul_mat4(&mut expected, &a, &b);
        assert_close(&expected, (ma * mb).elements(), "matmul");

        let mut expected_vec = [0.0; 4];
        ScalarKernels::matmul_vec_mat4(&mut expected_vec, &a, &v);
        assert_close(
            &expected_vec,
            (ma * Vector4::from_array(v)).elements(),
            "matmul_vec",
        );

        assert_eq!(ma.determinant(), matrix::determinant_mat4(&a));
    }
}

#[test]
fn test_single_precision_matmul_matches_scalar_kernels() {
    let mut rng = StdRng::seed_from_u64(103);

    for _ in 0..SAMPLES {
        let a: [f32; 16] = std::array::from_fn(|_| rng.random_range(-1.0..1.0));
        let b: [f32; 16] = std::array::from_fn(|_| rng.random_range(-1.0..1.0));

        let mut expected = [0.0f32; 16];
        ScalarKernels::matmul_mat4(&mut expected, &a, &b);
        let product = Matrix4f::from_column_major(a) * Matrix4f::from_column_major(b);

        // |entries| <= 4, the default tolerance applies as-is
        assert_eq!(product, Matrix4f::from_column_major(expected));
    }
}

#[test]
fn test_parallel_use_matches_sequential() {
    let inputs: Vec<Matrix4d> = {
        let mut rng = StdRng::seed_from_u64(104);
        (0..10_000)
            .map(|_| {
                let noise: [f64; 16] = std::array::from_fn(|_| rng.random_range(-1.0..1.0));
                Matrix4::from_column_major(noise) + Matrix4::from_diagonal(4.0, 4.0, 4.0, 4.0)
            })
            .collect()
    };

    let work = |m: &Matrix4d| {
        let v = Vector4::new(1.0, 2.0, 3.0, 1.0);
        let inverse = m.inverse();
        (inverse * m.transpose() * v, (inverse * *m).trace())
    };

    let sequential: Vec<_> = inputs.iter().map(work).collect();
    let parallel: Vec<_> = inputs.par_iter().map(work).collect();

    // Pure functions: bit-identical whatever the thread
    for (s, p) in sequential.iter().zip(parallel.iter()) {
        assert_eq!(s.0.elements(), p.0.elements());
        assert_eq!(s.1.to_bits(), p.1.to_bits());
        assert!((s.1 - 4.0).abs() < 1e-9);
    }
}
