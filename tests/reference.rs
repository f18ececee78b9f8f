//! Cross-checks against `nalgebra`.

use ::approx::assert_relative_eq;
use fastrand::Rng;
use nalgebra::{Matrix3, Matrix4, Unit, UnitQuaternion, Vector3};
use zaru_tensors::*;

const ITERATIONS: usize = 200;
const EPSILON: f64 = 1e-9;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_mat4(rng: &mut Rng) -> (Mat4d, Matrix4<f64>) {
    let ours = Mat4d::from_fn(|_, _| rng.f64() * 20.0 - 10.0);
    let theirs = Matrix4::from_fn(|row, col| ours[(row, col)]);
    (ours, theirs)
}

fn assert_same_mat4(ours: &Mat4d, theirs: &Matrix4<f64>, epsilon: f64) {
    for row in 0..4 {
        for col in 0..4 {
            assert_relative_eq!(
                ours[(row, col)],
                theirs[(row, col)],
                epsilon = epsilon,
                max_relative = epsilon,
            );
        }
    }
}

#[test]
fn determinants() {
    init_logger();
    let mut rng = Rng::with_seed(0x71c0_5f3a_d2b8_e649);
    for _ in 0..ITERATIONS {
        let (ours, theirs) = random_mat4(&mut rng);
        assert_relative_eq!(
            ours.determinant().into_value(),
            theirs.determinant(),
            max_relative = EPSILON,
            epsilon = EPSILON,
        );

        let ours3 = Mat3d::from_fn(|row, col| ours[(row, col)]);
        let theirs3 = Matrix3::from_fn(|row, col| theirs[(row, col)]);
        assert_relative_eq!(
            ours3.determinant().into_value(),
            theirs3.determinant(),
            max_relative = EPSILON,
            epsilon = EPSILON,
        );
    }
}

#[test]
fn inverses() -> anyhow::Result<()> {
    init_logger();
    let mut rng = Rng::with_seed(0x0be4_9d27_16fa_c385);
    for _ in 0..ITERATIONS {
        let (ours, theirs) = random_mat4(&mut rng);
        if theirs.determinant().abs() < 100.0 {
            continue;
        }

        let Some(expected) = theirs.try_inverse() else {
            continue;
        };
        assert_same_mat4(&ours.invert()?, &expected, 1e-6);
    }

    let singular = Mat4d::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 4.0, 6.0, 8.0],
        [0.0, 1.0, 0.0, 1.0],
        [5.0, 0.0, 5.0, 0.0],
    ]);
    assert_eq!(singular.invert(), Err(SingularMatrix));
    Ok(())
}

#[test]
fn products() {
    let mut rng = Rng::with_seed(0x94d3_0a6e_27cb_518f);
    for _ in 0..ITERATIONS {
        let (a, na) = random_mat4(&mut rng);
        let (b, nb) = random_mat4(&mut rng);
        assert_same_mat4(&(a * b), &(na * nb), EPSILON);
        assert_same_mat4(&a.transpose(), &na.transpose(), 0.0);

        let v = Vec4d::from_fn(|_| rng.f64());
        let nv = na * nalgebra::Vector4::from(v.into_array());
        let w = a * v;
        for i in 0..4 {
            assert_relative_eq!(w[i], nv[i], epsilon = EPSILON);
        }
    }
}

#[test]
fn quaternion_rotations() {
    let mut rng = Rng::with_seed(0x5a17_c8e2_b4f0_6d93);
    for _ in 0..ITERATIONS {
        let axis = Vector3::new(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5);
        if axis.norm() < 1e-3 {
            continue;
        }
        let axis = Unit::new_normalize(axis);
        let angle = rng.f64() * std::f64::consts::TAU;

        let theirs = UnitQuaternion::from_axis_angle(&axis, angle);
        let ours = Quat::from_axis_angle(vec3(axis.x, axis.y, axis.z), angle);
        assert_relative_eq!(ours.x, theirs.i, epsilon = EPSILON);
        assert_relative_eq!(ours.y, theirs.j, epsilon = EPSILON);
        assert_relative_eq!(ours.z, theirs.k, epsilon = EPSILON);
        assert_relative_eq!(ours.w, theirs.w, epsilon = EPSILON);

        assert_same_mat4(&ours.rotation_matrix().into_value(), &theirs.to_homogeneous(), EPSILON);
        let rotation = Mat4d::rotation(vec3(axis.x, axis.y, axis.z), angle);
        assert_same_mat4(&rotation, &theirs.to_homogeneous(), EPSILON);

        // Hamilton product composes rotations the same way.
        let other = UnitQuaternion::from_euler_angles(rng.f64(), rng.f64(), rng.f64());
        let ours_other = Quat::from_components(other.i, other.j, other.k, other.w);
        let product = (ours * ours_other).rotation_matrix().into_value();
        assert_same_mat4(&product, &(theirs * other).to_homogeneous(), EPSILON);
    }
}
