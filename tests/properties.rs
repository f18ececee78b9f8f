//! Randomized checks of properties that must hold for arbitrary inputs.

use fastrand::Rng;
use zaru_tensors::*;

const ITERATIONS: usize = 500;

fn rng() -> Rng {
    Rng::with_seed(0x3b1f_92d0_6c4e_a57d)
}

fn random_f64(rng: &mut Rng) -> f64 {
    rng.f64() * 200.0 - 100.0
}

fn random_vec3(rng: &mut Rng) -> Vec3d {
    Vec3d::from_fn(|_| random_f64(rng))
}

fn random_vec4(rng: &mut Rng) -> Vec4d {
    Vec4d::from_fn(|_| random_f64(rng))
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        if v.magnitude_squared().into_value() < 1e-6 {
            continue;
        }

        let n = v.normalize();
        assert_approx_eq!(n.magnitude().into_value(), 1.0).abs(1e-12);
        assert_approx_eq!(n.angle(v), 0.0).abs(1e-6);

        let mut m = v;
        m.normalize_in_place();
        assert_eq!(m, n);
    }
}

#[test]
fn interpolation_reproduces_endpoints() -> anyhow::Result<()> {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_vec4(&mut rng);
        let b = random_vec4(&mut rng);
        assert_eq!(a.interpolate_linear(b, 0.0).into_value(), a);
        assert_eq!(a.interpolate_linear(b, 1.0).into_value(), b);

        let (x, y) = (rng.i32(-1000..1000), rng.i32(-1000..1000));
        let (ai, bi) = (vec2(x, y), vec2(y, x));
        assert_eq!(ai.interpolate_linear(bi, 0.0)?, ai);
        assert_eq!(ai.interpolate_linear(bi, 1.0)?, bi);

        let alpha = rng.f64() * 4.0 - 2.0;
        assert_eq!(ai.interpolate_linear(ai, alpha)?, ai);
        assert_eq!(a.interpolate_linear(a, 0.5).into_value(), a);
    }
    Ok(())
}

#[test]
fn distance_is_a_metric() -> anyhow::Result<()> {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        assert_eq!(a.distance(a).into_value(), 0.0);
        assert_eq!(a.distance(b).into_value(), b.distance(a).into_value());

        let ai = Vec3i::from_fn(|_| rng.i32(-10_000..10_000));
        let bi = Vec3i::from_fn(|_| rng.i32(-10_000..10_000));
        assert_eq!(ai.distance(ai)?, 0);
        assert_eq!(ai.distance(bi)?, bi.distance(ai)?);
    }
    Ok(())
}

#[test]
fn projection_leaves_orthogonal_remainder() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let p = random_vec3(&mut rng);
        let q = random_vec3(&mut rng);
        if p.magnitude_squared().into_value() < 1e-3 || q.magnitude_squared().into_value() < 1e-3 {
            continue;
        }

        let proj = p.projection(q).into_value();
        let rest = p - proj;
        let scale = p.magnitude().into_value() * q.magnitude().into_value();
        assert_approx_eq!(rest.dot(q).into_value() / scale, 0.0).abs(1e-9);
    }
}

#[test]
fn cross_product_is_orthogonal() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let a = Vec3i::from_fn(|_| rng.i32(-1000..1000));
        let b = Vec3i::from_fn(|_| rng.i32(-1000..1000));
        let c = a.cross(b).unwrap();
        assert_eq!(c.dot(a).unwrap(), 0);
        assert_eq!(c.dot(b).unwrap(), 0);
        assert_eq!(b.cross(a).unwrap(), c.scale(-1.0).unwrap());
    }
}

#[test]
fn failed_in_place_operations_leave_receiver_unmodified() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let original = Vec4i::from_fn(|_| rng.i32(..));
        let mut v = original;

        // Put the overflowing component at a random position, so earlier components have already
        // been computed when the overflow is detected.
        let at = rng.usize(..4);
        if original[at] == 0 {
            continue;
        }
        let mut rhs = Vec4i::ZERO;
        rhs[at] = if original[at] > 0 { i32::MAX } else { i32::MIN };

        assert!(v.add_in_place(rhs).is_err());
        assert_eq!(v, original);
        assert!(v.add_scaled_in_place(rhs, 1.0).is_err());
        assert_eq!(v, original);

        // Extrapolating twice as far away from `original` pushes that component out of range.
        let mut away = Vec4i::ZERO;
        away[at] = if original[at] > 0 { i32::MIN } else { i32::MAX };
        assert!(v.interpolate_linear_in_place(away, 2.0).is_err());
        assert_eq!(v, original);
    }
}

#[test]
fn integer_overflow_is_reported_in_every_operation() {
    let big = vec3(i64::MAX, 1, 1);
    assert!(big.add(Vec3l::X).is_err());
    assert!(big.scale(2.0).is_err());
    assert!(big.dot(big).is_err());
    assert!(big.magnitude_squared().is_err());
    assert!(vec3(i64::MIN, 0, 0).absolute().is_err());
    assert!(big.cross(vec3(1, i64::MAX, 0)).is_err());
    assert!(vec2(i32::MIN, 0).interpolate_linear(vec2(i32::MAX, 0), 0.5).is_ok());
    assert!(vec2(i32::MAX, 0).interpolate_linear(vec2(0, 0), -1.0).is_err());
    assert_eq!(vec2(i32::MAX, 0).interpolate_linear(vec2(i32::MAX, 0), 2.0), Ok(vec2(i32::MAX, 0)));

    let m = Mat2l::from_diagonal([i64::MAX, 0]);
    assert!(m.add(m).is_err());
    assert!(m.multiply(m).is_err());
    assert!(m.trace().is_ok());
    assert!(m.determinant().is_ok());
    assert!(Mat2l::from_diagonal([i64::MAX, 2]).determinant().is_err());

    let q = Quat::from_components(i32::MAX, 0, 0, 1);
    assert!(q.magnitude_squared().is_err());
    assert!(q.rotation_matrix().is_err());
    assert!(Quat::from_components(i32::MIN, 0, 0, 1).conjugate().is_err());
}

#[test]
fn matrix_inverse_roundtrip() -> anyhow::Result<()> {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let m = Mat4d::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
        if m.determinant().into_value().abs() < 1e-2 {
            continue;
        }
        let inv = m.invert()?;

        assert_approx_eq!(m * inv, Mat4d::IDENTITY).abs(1e-6);
        assert_approx_eq!(inv * m, Mat4d::IDENTITY).abs(1e-6);
        assert_approx_eq!(m.determinant().into_value() * inv.determinant().into_value(), 1.0).abs(1e-6);
    }
    Ok(())
}

#[test]
fn rotation_matrices_are_orthonormal() {
    let mut rng = rng();
    for _ in 0..ITERATIONS {
        let q = random_vec4(&mut rng);
        if q.magnitude_squared().into_value() < 1e-3 {
            continue;
        }
        let q = Quat::from_vec(q).normalize();
        let m = q.rotation_matrix().into_value();

        assert_approx_eq!(m.transpose() * m, Mat4d::IDENTITY).abs(1e-12);
        assert_approx_eq!(m.determinant().into_value(), 1.0).abs(1e-12);

        // `q` and `-q` describe the same rotation.
        let back = Quat::from_rotation_matrix(&m);
        let same = if back.dot(q).into_value() < 0.0 { -back.into_vec() } else { back.into_vec() };
        assert_approx_eq!(same, q.into_vec()).abs(1e-9);
    }
}
