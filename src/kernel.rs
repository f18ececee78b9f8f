//! The algebraic core.
//!
//! Everything in here is a pure function over plain component arrays. [`Vector`], [`Matrix`] and
//! [`Quat`] wrap these functions, once returning new values and once writing results back into
//! `&mut self`, so both forms share the exact same arithmetic.
//!
//! Matrices are passed as arrays of columns (`m[col][row]`). The determinant and inverse helpers
//! don't care about the storage order, since `det(Mᵀ) = det(M)` and `inv(Mᵀ) = inv(M)ᵀ`.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix
//! [`Quat`]: crate::Quat

use crate::{IntoValue, Real, Scalar, Zero};

type Checked<T, U> = Result<U, <T as Scalar>::Overflow>;

/// Fallible version of [`std::array::from_fn`].
fn try_from_fn<T, const N: usize, E>(mut f: impl FnMut(usize) -> Result<T, E>) -> Result<[T; N], E>
where
    T: Copy + Zero,
{
    let mut out = [T::ZERO; N];
    for (i, elem) in out.iter_mut().enumerate() {
        *elem = f(i)?;
    }
    Ok(out)
}

pub(crate) fn add<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> Checked<T, [T; N]> {
    try_from_fn(|i| Scalar::add(a[i], b[i]))
}

pub(crate) fn subtract<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> Checked<T, [T; N]> {
    try_from_fn(|i| a[i].subtract(b[i]))
}

pub(crate) fn scale<T: Scalar, const N: usize>(a: [T; N], r: T::Factor) -> Checked<T, [T; N]> {
    try_from_fn(|i| a[i].scale(r))
}

pub(crate) fn add_scaled<T: Scalar, const N: usize>(
    a: [T; N],
    b: [T; N],
    r: T::Factor,
) -> Checked<T, [T; N]> {
    add(a, scale(b, r)?)
}

pub(crate) fn absolute<T: Scalar, const N: usize>(a: [T; N]) -> Checked<T, [T; N]> {
    try_from_fn(|i| a[i].absolute())
}

pub(crate) fn negate<T: Scalar, const N: usize>(a: [T; N]) -> Checked<T, [T; N]> {
    try_from_fn(|i| a[i].negate())
}

/// Dot product, accumulated strictly in index order (x, y, z, w).
pub(crate) fn dot<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> Checked<T, T> {
    let mut products = a.into_iter().zip(b).map(|(a, b)| a.multiply(b));
    let Some(first) = products.next() else {
        return Ok(T::ZERO);
    };
    products.try_fold(first?, |acc, product| product.and_then(|p| Scalar::add(acc, p)))
}

pub(crate) fn magnitude_squared<T: Scalar, const N: usize>(a: [T; N]) -> Checked<T, T> {
    dot(a, a)
}

pub(crate) fn magnitude<T: Scalar, const N: usize>(a: [T; N]) -> Checked<T, T> {
    Ok(magnitude_squared(a)?.square_root())
}

pub(crate) fn distance<T: Scalar, const N: usize>(a: [T; N], b: [T; N]) -> Checked<T, T> {
    magnitude(subtract(a, b)?)
}

/// `a * (1 - alpha) + b * alpha`, blended element by element with a single rounding step.
pub(crate) fn interpolate_linear<T: Scalar, const N: usize>(
    a: [T; N],
    b: [T; N],
    alpha: T::Factor,
) -> Checked<T, [T; N]> {
    try_from_fn(|i| a[i].interpolate_linear(b[i], alpha))
}

/// Projection of `p` onto `q`: `(dot(p, q) / |q|²) * q`.
pub(crate) fn projection<T: Scalar, const N: usize>(p: [T; N], q: [T; N]) -> Checked<T, [T; N]> {
    let ratio = dot(p, q)?.to_factor() / magnitude_squared(q)?.to_factor();
    scale(q, ratio)
}

pub(crate) fn clamp<T: Scalar, const N: usize>(a: [T; N], min: T, max: T) -> [T; N] {
    a.map(|x| x.clamp(min, max))
}

pub(crate) fn clamp_by<T: Scalar, const N: usize>(a: [T; N], min: [T; N], max: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].clamp(min[i], max[i]))
}

pub(crate) fn clamp_minimum<T: Scalar, const N: usize>(a: [T; N], min: T) -> [T; N] {
    a.map(|x| x.max(min))
}

pub(crate) fn clamp_minimum_by<T: Scalar, const N: usize>(a: [T; N], min: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].max(min[i]))
}

pub(crate) fn clamp_maximum<T: Scalar, const N: usize>(a: [T; N], max: T) -> [T; N] {
    a.map(|x| x.min(max))
}

pub(crate) fn clamp_maximum_by<T: Scalar, const N: usize>(a: [T; N], max: [T; N]) -> [T; N] {
    std::array::from_fn(|i| a[i].min(max[i]))
}

pub(crate) fn cross<T: Scalar>(a: [T; 3], b: [T; 3]) -> Checked<T, [T; 3]> {
    let [a1, a2, a3] = a;
    let [b1, b2, b3] = b;
    Ok([
        a2.multiply(b3)?.subtract(a3.multiply(b2)?)?,
        a3.multiply(b1)?.subtract(a1.multiply(b3)?)?,
        a1.multiply(b2)?.subtract(a2.multiply(b1)?)?,
    ])
}

/// Scales `a` to unit length, or returns it unchanged if its squared magnitude isn't positive.
pub(crate) fn normalize<T: Real, const N: usize>(a: [T; N]) -> [T; N] {
    let m2 = magnitude_squared(a).into_value();
    if m2 > T::ZERO {
        let reciprocal = T::ONE / m2.sqrt();
        a.map(|x| x * reciprocal)
    } else {
        a
    }
}

pub(crate) fn angle<T: Real, const N: usize>(a: [T; N], b: [T; N]) -> T {
    let m = magnitude(a).into_value() * magnitude(b).into_value();
    let cos = dot(a, b).into_value() / m;
    cos.clamp(-T::ONE, T::ONE).acos()
}

/// Gram-Schmidt orthonormalization of the pair `(a, b)`.
pub(crate) fn ortho_normalize<T: Real, const N: usize>(a: [T; N], b: [T; N]) -> ([T; N], [T; N]) {
    let a = normalize(a);
    let b_dot_a = dot(b, a).into_value();
    let along_a = a.map(|x| x * b_dot_a);
    let b = normalize(subtract(b, along_a).into_value());
    (a, b)
}

// Matrices.

pub(crate) fn mat_add<T: Scalar, const N: usize>(
    a: [[T; N]; N],
    b: [[T; N]; N],
) -> Checked<T, [[T; N]; N]> {
    try_columns(|c| add(a[c], b[c]))
}

pub(crate) fn mat_subtract<T: Scalar, const N: usize>(
    a: [[T; N]; N],
    b: [[T; N]; N],
) -> Checked<T, [[T; N]; N]> {
    try_columns(|c| subtract(a[c], b[c]))
}

pub(crate) fn mat_scale<T: Scalar, const N: usize>(
    a: [[T; N]; N],
    r: T::Factor,
) -> Checked<T, [[T; N]; N]> {
    try_columns(|c| scale(a[c], r))
}

/// `a * b`, where both are column-major.
pub(crate) fn mat_multiply<T: Scalar, const N: usize>(
    a: [[T; N]; N],
    b: [[T; N]; N],
) -> Checked<T, [[T; N]; N]> {
    try_columns(|c| mat_multiply_vector(a, b[c]))
}

/// `m * v`, where `m` is column-major and `v` a column vector.
pub(crate) fn mat_multiply_vector<T: Scalar, const N: usize>(
    m: [[T; N]; N],
    v: [T; N],
) -> Checked<T, [T; N]> {
    try_from_fn(|row| dot(std::array::from_fn(|col| m[col][row]), v))
}

pub(crate) fn transpose<T: Copy, const N: usize>(m: [[T; N]; N]) -> [[T; N]; N] {
    std::array::from_fn(|c| std::array::from_fn(|r| m[r][c]))
}

pub(crate) fn trace<T: Scalar, const N: usize>(m: [[T; N]; N]) -> Checked<T, T> {
    (0..N).try_fold(T::ZERO, |acc, i| Scalar::add(acc, m[i][i]))
}

fn try_columns<T: Scalar, const N: usize>(
    mut f: impl FnMut(usize) -> Checked<T, [T; N]>,
) -> Checked<T, [[T; N]; N]> {
    let mut out = [[T::ZERO; N]; N];
    for (c, column) in out.iter_mut().enumerate() {
        *column = f(c)?;
    }
    Ok(out)
}

/// Removes row `skip_r` and column `skip_c` from `m`. `M` must be `N - 1`.
fn minor<T: Copy + Zero, const N: usize, const M: usize>(
    m: &[[T; N]; N],
    skip_r: usize,
    skip_c: usize,
) -> [[T; M]; M] {
    debug_assert_eq!(M + 1, N);
    let mut out = [[T::ZERO; M]; M];
    for (r, out_row) in (0..N).filter(|&r| r != skip_r).zip(out.iter_mut()) {
        for (c, elem) in (0..N).filter(|&c| c != skip_c).zip(out_row.iter_mut()) {
            *elem = m[r][c];
        }
    }
    out
}

/// Laplace expansion along the first row, using `det_minor` for the `M×M` minors.
fn expand<T: Scalar, const N: usize, const M: usize>(
    m: &[[T; N]; N],
    det_minor: impl Fn(&[[T; M]; M]) -> Checked<T, T>,
) -> Checked<T, T> {
    let mut det = T::ZERO;
    for col in 0..N {
        let term = m[0][col].multiply(det_minor(&minor(m, 0, col))?)?;
        det = if col % 2 == 0 {
            Scalar::add(det, term)?
        } else {
            det.subtract(term)?
        };
    }
    Ok(det)
}

pub(crate) fn determinant2<T: Scalar>(m: &[[T; 2]; 2]) -> Checked<T, T> {
    m[0][0].multiply(m[1][1])?.subtract(m[0][1].multiply(m[1][0])?)
}

pub(crate) fn determinant3<T: Scalar>(m: &[[T; 3]; 3]) -> Checked<T, T> {
    expand(m, determinant2)
}

pub(crate) fn determinant4<T: Scalar>(m: &[[T; 4]; 4]) -> Checked<T, T> {
    expand(m, determinant3)
}

/// Inverse via the adjugate: `inv[i][j] = cofactor(j, i) / det`.
///
/// `det` must be the (non-zero) determinant of `m`.
pub(crate) fn adjugate_inverse<T: Real, const N: usize, const M: usize>(
    m: &[[T; N]; N],
    det: T,
    det_minor: impl Fn(&[[T; M]; M]) -> T,
) -> [[T; N]; N] {
    let reciprocal = T::ONE / det;
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            let cofactor = det_minor(&minor(m, j, i));
            let cofactor = if (i + j) % 2 == 0 { cofactor } else { -cofactor };
            cofactor * reciprocal
        })
    })
}

// Quaternions, as `[x, y, z, w]`.

/// Hamilton product `a * b`.
pub(crate) fn quat_multiply<T: Scalar>(a: [T; 4], b: [T; 4]) -> Checked<T, [T; 4]> {
    let [x0, y0, z0, w0] = a;
    let [x1, y1, z1, w1] = b;

    let x = dot([w0, x0, y0], [x1, w1, z1])?.subtract(z0.multiply(y1)?)?;
    let y = w0
        .multiply(y1)?
        .subtract(x0.multiply(z1)?)?
        .add(y0.multiply(w1)?)?
        .add(z0.multiply(x1)?)?;
    let z = dot([w0, x0], [z1, y1])?
        .subtract(y0.multiply(x1)?)?
        .add(z0.multiply(w1)?)?;
    let w = w0
        .multiply(w1)?
        .subtract(x0.multiply(x1)?)?
        .subtract(y0.multiply(y1)?)?
        .subtract(z0.multiply(z1)?)?;
    Ok([x, y, z, w])
}

pub(crate) fn quat_conjugate<T: Scalar>(q: [T; 4]) -> Checked<T, [T; 4]> {
    let [x, y, z, w] = q;
    Ok([x.negate()?, y.negate()?, z.negate()?, w])
}

/// The column-major 4×4 rotation matrix of the quaternion `q`.
///
/// For a unit quaternion this is a pure rotation acting on column vectors, with the last row and
/// column equal to `(0, 0, 0, 1)`.
pub(crate) fn quat_rotation_matrix<T: Scalar>(q: [T; 4]) -> Checked<T, [[T; 4]; 4]> {
    let [x, y, z, w] = q;
    let two = Scalar::add(T::ONE, T::ONE)?;
    let twice = |a: T, b: T| -> Checked<T, T> { two.multiply(a.multiply(b)?) };

    let xx = twice(x, x)?;
    let yy = twice(y, y)?;
    let zz = twice(z, z)?;
    let xy = twice(x, y)?;
    let xz = twice(x, z)?;
    let yz = twice(y, z)?;
    let xw = twice(x, w)?;
    let yw = twice(y, w)?;
    let zw = twice(z, w)?;

    let one_minus = |a: T, b: T| -> Checked<T, T> { T::ONE.subtract(Scalar::add(a, b)?) };

    let (o, i) = (T::ZERO, T::ONE);
    #[rustfmt::skip]
    let columns = [
        [one_minus(yy, zz)?,     Scalar::add(xy, zw)?,  xz.subtract(yw)?,      o],
        [xy.subtract(zw)?,       one_minus(xx, zz)?,    Scalar::add(yz, xw)?,  o],
        [Scalar::add(xz, yw)?,   yz.subtract(xw)?,      one_minus(xx, yy)?,    o],
        [o,                      o,                     o,                     i],
    ];
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn dot_order() {
        assert_eq!(dot([1, 3, -5], [4, -2, -1]), Ok(3));
        assert_eq!(dot::<f32, 0>([], []).into_value(), 0.0);
        assert!(dot([i32::MAX, 1], [2, 1]).is_err());
        // The intermediate sum overflows even though the exact result would fit.
        assert!(dot([i32::MAX, 1, -1], [1, 1, 1]).is_err());
    }

    #[test]
    fn minors() {
        #[rustfmt::skip]
        let m = [
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ];
        assert_eq!(minor::<_, 3, 2>(&m, 0, 0), [[5, 6], [8, 9]]);
        assert_eq!(minor::<_, 3, 2>(&m, 1, 2), [[1, 2], [7, 8]]);
        assert_eq!(minor::<_, 3, 2>(&m, 2, 1), [[1, 3], [4, 6]]);
    }

    #[test]
    fn determinants() {
        assert_eq!(determinant2(&[[1, 2], [3, 4]]), Ok(-2));
        #[rustfmt::skip]
        let m = [
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ];
        assert_eq!(determinant3(&m), Ok(54));
        assert_eq!(determinant3(&transpose(m)), Ok(54));

        #[rustfmt::skip]
        let m = [
            [1, 0, 2, -1],
            [3, 0, 0,  5],
            [2, 1, 4, -3],
            [1, 0, 5,  0],
        ];
        assert_eq!(determinant4(&m), Ok(30));
        assert_eq!(determinant4(&transpose(m)), Ok(30));
    }

    #[test]
    fn determinant_overflow() {
        let big = i32::MAX;
        assert!(determinant2(&[[big, 0], [0, 2]]).is_err());
    }

    #[test]
    fn adjugate() {
        let m = [[4.0, 7.0], [2.0, 6.0]];
        let det = determinant2(&m).into_value();
        let inv = adjugate_inverse::<f64, 2, 1>(&m, det, |m| m[0][0]);
        assert_approx_eq!(inv, [[0.6, -0.7], [-0.2, 0.4]]);
    }

    #[test]
    fn hamilton_product_basis() {
        let i = [1, 0, 0, 0];
        let j = [0, 1, 0, 0];
        let k = [0, 0, 1, 0];
        let one = [0, 0, 0, 1];
        assert_eq!(quat_multiply(i, j), Ok(k));
        assert_eq!(quat_multiply(j, k), Ok(i));
        assert_eq!(quat_multiply(k, i), Ok(j));
        assert_eq!(quat_multiply(j, i), Ok([0, 0, -1, 0]));
        assert_eq!(quat_multiply(i, i), Ok([0, 0, 0, -1]));
        assert_eq!(quat_multiply(one, k), Ok(k));
    }
}
