//! Algebraic properties of `Vector2` and `Vector4` on seeded random input.

use locomath::{Vector2, Vector2d, Vector2f, Vector4, Vector4d, Vector4f, EPS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 1_000;

fn random_vec4(rng: &mut StdRng) -> Vector4d {
    Vector4::from_array(std::array::from_fn(|_| rng.random_range(-100.0..100.0)))
}

fn random_vec2(rng: &mut StdRng) -> Vector2d {
    Vector2::from_array(std::array::from_fn(|_| rng.random_range(-100.0..100.0)))
}

#[test]
fn test_vec4_commutativity() {
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..SAMPLES {
        let (a, b) = (random_vec4(&mut rng), random_vec4(&mut rng));
        assert_eq!(a + b, b + a);
        assert_eq!(a.hadamard(&b), b.hadamard(&a));
        assert_eq!(a.dot(&b), b.dot(&a));
    }
}

#[test]
fn test_vec2_commutativity() {
    let mut rng = StdRng::seed_from_u64(2);

    for _ in 0..SAMPLES {
        let (a, b) = (random_vec2(&mut rng), random_vec2(&mut rng));
        assert_eq!(a + b, b + a);
        assert_eq!(a.dot(&b), b.dot(&a));
    }
}

#[test]
fn test_scale_identities() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..SAMPLES {
        let v = random_vec4(&mut rng);
        assert_eq!(v.scale(1.0), v);
        assert_eq!(v.scale(0.0), Vector4::zeros());
        assert_eq!(v - v, Vector4::zeros());
        assert_eq!(-(-v), v);

        let u = random_vec2(&mut rng);
        assert_eq!(u.scale(1.0), u);
        assert_eq!(u.scale(0.0), Vector2::zeros());
    }
}

#[test]
fn test_normalized_has_unit_length() {
    let mut rng = StdRng::seed_from_u64(4);

    for _ in 0..SAMPLES {
        let v = random_vec4(&mut rng);
        assert!((v.normalized().length_square() - 1.0).abs() < EPS);

        let u = random_vec2(&mut rng);
        assert!((u.normalized().length_square() - 1.0).abs() < EPS);

        let single = Vector4f::from_array(v.elements().map(|x| x as f32));
        assert!((single.normalized().length_square() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn test_equality_is_componentwise() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..SAMPLES {
        let v = random_vec4(&mut rng);
        assert_eq!(v, v);

        for i in 0..4 {
            let mut perturbed = v;
            perturbed[i] += 4.0 * EPS;
            assert_ne!(v, perturbed, "component {i}");

            let mut close = v;
            close[i] += 0.25 * EPS;
            assert_eq!(v, close, "component {i}");
        }
    }

    // Every component within tolerance, so equal, even though the euclidean
    // distance is 1.8 * EPS
    let base = Vector4d::zeros();
    let shifted = Vector4d::splat(0.9 * EPS);
    assert_eq!(base, shifted);
    assert!((shifted - base).length() > EPS);
}

#[test]
fn test_equality_is_reflexive_with_nan() {
    let v = Vector2f::new(f32::NAN, 1.0);
    assert_eq!(v, v);
    assert_ne!(v, Vector2f::new(f32::NAN, 2.0));

    // Zero vector normalized: every component NaN, still equal to itself
    let u = Vector4f::zeros().normalized();
    assert_eq!(u, u);
}

#[test]
fn test_concrete_scenarios() {
    let sum = Vector4f::new(1.0, 2.0, 3.0, 4.0) + Vector4f::new(4.0, 3.0, 2.0, 1.0);
    assert_eq!(sum, Vector4f::splat(5.0));

    let unit = Vector4d::new(3.0, 4.0, 0.0, 0.0).normalized();
    assert_eq!(unit, Vector4d::new(0.6, 0.8, 0.0, 0.0));
    assert!((unit.length() - 1.0).abs() < EPS);
}

#[test]
fn test_zero_vector_normalizes_to_nan() {
    let v = Vector4f::zeros().normalized();
    assert!(v.elements().iter().all(|x| x.is_nan()));

    let mut u = Vector2d::zeros();
    u.normalize_in_place();
    assert!(u.x().is_nan() && u.y().is_nan());
}

#[test]
fn test_vec2_and_vec4_agree() {
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..SAMPLES {
        let (a, b) = (random_vec2(&mut rng), random_vec2(&mut rng));
        let (a4, b4) = (Vector4::from_vec2(a, 0.0, 0.0), Vector4::from_vec2(b, 0.0, 0.0));

        assert_eq!((a4 + b4).xy(), a + b);
        assert_eq!((a4.hadamard(&b4)).xy(), a.hadamard(&b));
        assert!((a4.dot(&b4) - a.dot(&b)).abs() < 1e-9);
    }
}
