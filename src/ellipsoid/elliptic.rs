// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The elliptic module contains the elliptic integrals required to calculate
//! distances along a meridian of an ellipsoid.
//!
//! It uses Carlson's symmetric integrals, see BC Carlson
//! [Numerical computation of real or complex elliptic integrals](https://arxiv.org/abs/math/9409227)
//! and [DLMF 19.36](https://dlmf.nist.gov/19.36).

#![allow(
    clippy::many_single_char_names,
    clippy::suboptimal_flops,
    clippy::while_float
)]

use angle_sc::Angle;

/// The symmetric integral of the first kind `R_F(x, y, z)`.
/// At most one of `x`, `y` and `z` may be zero.
/// * `x`, `y`, `z` - non-negative arguments.
#[must_use]
pub fn rf(x: f64, y: f64, z: f64) -> f64 {
    let tolerance = libm::pow(3.0 * f64::EPSILON * 0.01, 1.0 / 8.0);

    let a0 = (x + y + z) / 3.0;
    let q = (a0 - x).abs().max((a0 - y).abs()).max((a0 - z).abs()) / tolerance;
    let (mut an, mut x0, mut y0, mut z0, mut mul) = (a0, x, y, z, 1.0);
    while q >= mul * an.abs() {
        let lambda = libm::sqrt(x0) * libm::sqrt(y0)
            + libm::sqrt(y0) * libm::sqrt(z0)
            + libm::sqrt(z0) * libm::sqrt(x0);
        an = (an + lambda) / 4.0;
        x0 = (x0 + lambda) / 4.0;
        y0 = (y0 + lambda) / 4.0;
        z0 = (z0 + lambda) / 4.0;
        mul *= 4.0;
    }

    let xx = (a0 - x) / (mul * an);
    let yy = (a0 - y) / (mul * an);
    let zz = -(xx + yy);
    let e2 = xx * yy - zz * zz;
    let e3 = xx * yy * zz;
    (e3 * (6930.0 * e3 + e2 * (15015.0 * e2 - 16380.0) + 17160.0)
        + e2 * ((10010.0 - 5775.0 * e2) * e2 - 24024.0)
        + 240_240.0)
        / (240_240.0 * libm::sqrt(an))
}

/// The symmetric integral of the second kind `R_D(x, y, z)`.
/// At most one of `x` and `y` may be zero.
/// * `x`, `y` - non-negative arguments.
/// * `z` - a positive argument.
#[must_use]
pub fn rd(x: f64, y: f64, z: f64) -> f64 {
    let tolerance = libm::pow(0.2 * f64::EPSILON * 0.01, 1.0 / 8.0);

    let a0 = (x + y + 3.0 * z) / 5.0;
    let q = (a0 - x).abs().max((a0 - y).abs()).max((a0 - z).abs()) / tolerance;
    let (mut an, mut x0, mut y0, mut z0, mut mul, mut sum) = (a0, x, y, z, 1.0, 0.0);
    while q >= mul * an.abs() {
        let lambda = libm::sqrt(x0) * libm::sqrt(y0)
            + libm::sqrt(y0) * libm::sqrt(z0)
            + libm::sqrt(z0) * libm::sqrt(x0);
        sum += 1.0 / (mul * libm::sqrt(z0) * (z0 + lambda));
        an = (an + lambda) / 4.0;
        x0 = (x0 + lambda) / 4.0;
        y0 = (y0 + lambda) / 4.0;
        z0 = (z0 + lambda) / 4.0;
        mul *= 4.0;
    }

    let xx = (a0 - x) / (mul * an);
    let yy = (a0 - y) / (mul * an);
    let zz = -(xx + yy) / 3.0;
    let e2 = xx * yy - 6.0 * zz * zz;
    let e3 = (3.0 * xx * yy - 8.0 * zz * zz) * zz;
    let e4 = 3.0 * (xx * yy - zz * zz) * zz * zz;
    let e5 = xx * yy * zz * zz * zz;
    ((471_240.0 - 540_540.0 * e2) * e5
        + (612_612.0 * e2 - 540_540.0 * e3 - 556_920.0) * e4
        + e3 * (306_306.0 * e3 + e2 * (675_675.0 * e2 - 706_860.0) + 680_680.0)
        + e2 * ((417_690.0 - 255_255.0 * e2) * e2 - 875_160.0)
        + 4_084_080.0)
        / (4_084_080.0 * mul * an * libm::sqrt(an))
        + 3.0 * sum
}

/// The complete elliptic integral of the second kind `E(k)`.
/// * `k2` - the square of the modulus, in the range [0, 1).
/// # Examples
/// ```
/// use geo_ellipsoid::ellipsoid::elliptic::complete_e;
///
/// // the quarter circumference of a unit circle
/// assert!((core::f64::consts::FRAC_PI_2 - complete_e(0.0)).abs() < 1.0e-15);
/// ```
#[must_use]
pub fn complete_e(k2: f64) -> f64 {
    let kp2 = 1.0 - k2;
    rf(0.0, kp2, 1.0) - k2 / 3.0 * rd(0.0, kp2, 1.0)
}

/// The incomplete elliptic integral of the third kind `Π(φ, n, k)` where the
/// characteristic equals the square of the modulus: `n = k^2`.
///
/// This is the integral from 0 to `φ` of `1 / (1 - k^2 sin^2 θ)^(3/2)`,
/// i.e. the meridian distance divided by `a(1 - e^2)` when `k = e`.
/// * `phi` - the amplitude, in the range [-π/2, π/2].
/// * `k2` - the square of the modulus, in the range [0, 1).
#[must_use]
pub fn meridian_pi(phi: Angle, k2: f64) -> f64 {
    let s = phi.sin().0;
    let c = phi.cos().0;
    let c2 = c * c;
    let delta2 = 1.0 - k2 * s * s;
    // R_J(x, y, z, y) = R_D(x, z, y)
    s * rf(c2, delta2, 1.0) + k2 / 3.0 * s * s * s * rd(c2, 1.0, delta2)
}
