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

//! The ellipsoid module contains functions for calculating the shape
//! parameters of an ellipsoid of revolution from its Semimajor axis and
//! flattening ratio, converting geodetic latitudes to and from auxiliary
//! latitudes and calculating radii of curvature.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod elliptic;
pub mod reference;

use crate::Metres;
use angle_sc::Angle;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geo_ellipsoid::Metres;
/// use geo_ellipsoid::ellipsoid::calculate_minor_axis;
/// use geo_ellipsoid::ellipsoid::reference::{WGS84_A, WGS84_F};
///
/// // The WGS 84 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(WGS84_A, WGS84_F));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the flattening ratio of an ellipsoid from its axes.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
#[must_use]
pub fn calculate_flattening(a: Metres, b: Metres) -> f64 {
    (a.0 - b.0) / a.0
}

/// Calculate the second flattening of an ellipsoid: `(a - b) / b`.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_2nd_flattening(f: f64) -> f64 {
    f / (1.0 - f)
}

/// Calculate the third flattening of an ellipsoid: `(a - b) / (a + b)`.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geo_ellipsoid::ellipsoid::calculate_3rd_flattening;
/// use geo_ellipsoid::ellipsoid::reference::WGS84_F;
///
/// // The WGS 84 3rd flattening.
/// assert_eq!(0.0016792203863837047, calculate_3rd_flattening(WGS84_F));
/// ```
#[must_use]
pub fn calculate_3rd_flattening(f: f64) -> f64 {
    f / (2.0 - f)
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use geo_ellipsoid::ellipsoid::calculate_sq_eccentricity;
/// use geo_ellipsoid::ellipsoid::reference::WGS84_F;
///
/// // The WGS 84 sq_eccentricity.
/// assert_eq!(0.0066943799901413165, calculate_sq_eccentricity(WGS84_F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the square of the second Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
#[must_use]
pub fn calculate_sq_2nd_eccentricity(f: f64) -> f64 {
    let one_minus_f = 1.0 - f;
    calculate_sq_eccentricity(f) / (one_minus_f * one_minus_f)
}

/// Convert a geodetic Latitude to an auxiliary Latitude whose tangent is
/// `ratio` times the tangent of the geodetic Latitude.
fn scale_latitude(lat: Angle, ratio: f64) -> Angle {
    Angle::from_y_x(ratio * lat.sin().0, lat.cos().0)
}

/// The inverse of `scale_latitude`.
fn unscale_latitude(lat: Angle, ratio: f64) -> Angle {
    Angle::from_y_x(lat.sin().0 / ratio, lat.cos().0)
}

/// Convert a geodetic Latitude to a `parametric` (reduced) Latitude.
/// * `lat` - the geodetic Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_parametric_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    scale_latitude(lat, one_minus_f)
}

/// Convert a `parametric` Latitude to a geodetic Latitude.
/// * `beta` - the parametric Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_geodetic_from_parametric_latitude(beta: Angle, one_minus_f: f64) -> Angle {
    unscale_latitude(beta, one_minus_f)
}

/// Convert a geodetic Latitude to a `geocentric` Latitude.
/// * `lat` - the geodetic Latitude
/// * `one_minus_e_2` - one minus the square of the Eccentricity.
#[must_use]
pub fn calculate_geocentric_latitude(lat: Angle, one_minus_e_2: f64) -> Angle {
    scale_latitude(lat, one_minus_e_2)
}

/// Convert a `geocentric` Latitude to a geodetic Latitude.
/// * `theta` - the geocentric Latitude
/// * `one_minus_e_2` - one minus the square of the Eccentricity.
#[must_use]
pub fn calculate_geodetic_from_geocentric_latitude(theta: Angle, one_minus_e_2: f64) -> Angle {
    unscale_latitude(theta, one_minus_e_2)
}

/// Calculate `atanh(e * x) / e`, which tends to `x` as `e` tends to zero.
/// * `x` - the variable, in the range [-1, 1].
/// * `e` - the Eccentricity of the ellipsoid.
#[must_use]
fn eatanhe(x: f64, e: f64) -> f64 {
    if e > 0.0 {
        libm::atanh(e * x) / e
    } else {
        x
    }
}

/// Calculate the isometric Latitude: `atanh(sin φ) - e atanh(e sin φ)`.
/// It is infinite at the poles.
/// * `lat` - the geodetic Latitude
/// * `e` - the Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_isometric_latitude(lat: Angle, e: f64) -> f64 {
    let sin_lat = lat.sin().0;
    libm::atanh(sin_lat) - e * e * eatanhe(sin_lat, e)
}

/// Calculate the conformal Latitude.
///
/// Uses `tan χ = sinh ψ` where `ψ` is the isometric Latitude, see
/// CFF Karney [Transverse Mercator with an accuracy of a few nanometers](https://arxiv.org/abs/1002.1417)
/// Eq. 7.
/// * `lat` - the geodetic Latitude
/// * `e` - the Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_conformal_latitude(lat: Angle, e: f64) -> Angle {
    let sin_lat = lat.sin().0;
    let sigma = libm::sinh(e * e * eatanhe(sin_lat, e));
    Angle::from_y_x(sin_lat * libm::hypot(1.0, sigma) - sigma, lat.cos().0)
}

/// Calculate the authalic `q` function of a geodetic Latitude.
/// * `sin_lat` - the sine of the geodetic Latitude
/// * `e` - the Eccentricity of the ellipsoid.
/// * `one_minus_e_2` - one minus the square of the Eccentricity.
#[must_use]
pub fn calculate_authalic_q(sin_lat: f64, e: f64, one_minus_e_2: f64) -> f64 {
    let e_2 = e * e;
    one_minus_e_2 * (sin_lat / (1.0 - e_2 * sin_lat * sin_lat) + eatanhe(sin_lat, e))
}

/// Calculate the authalic Latitude: `asin(q(φ) / q(π/2))`.
///
/// The cosine of the authalic Latitude is calculated from `q(π/2) - q(φ)`
/// in closed form, so the result is accurate near the poles.
/// * `lat` - the geodetic Latitude
/// * `e` - the Eccentricity of the ellipsoid.
/// * `one_minus_e_2` - one minus the square of the Eccentricity.
/// * `qp` - the authalic `q` function at a pole.
#[must_use]
pub fn calculate_authalic_latitude(lat: Angle, e: f64, one_minus_e_2: f64, qp: f64) -> Angle {
    if e > 0.0 {
        let sin_lat = lat.sin().0;
        let cos_lat = lat.cos().0;
        let abs_sin = libm::fabs(sin_lat);
        let e_2 = e * e;

        // 1 - |sin φ| without cancellation
        let one_minus_sin = cos_lat * cos_lat / (1.0 + abs_sin);
        let q = calculate_authalic_q(abs_sin, e, one_minus_e_2);
        let delta_q = one_minus_sin * (1.0 + e_2 * abs_sin) / (1.0 - e_2 * abs_sin * abs_sin)
            + one_minus_e_2 * eatanhe(one_minus_sin / (1.0 - e_2 * abs_sin), e);
        Angle::from_y_x(libm::copysign(q, sin_lat), libm::sqrt(delta_q * (qp + q)))
    } else {
        lat
    }
}

/// Calculate the radius of curvature of the ellipsoid along a meridian.
/// * `lat` - the geodetic Latitude
/// * `a_one_minus_e_2` - the Semimajor axis times one minus the square of the Eccentricity.
/// * `e_2` - the square of the Eccentricity.
#[must_use]
pub fn calculate_meridian_curvature_radius(lat: Angle, a_one_minus_e_2: Metres, e_2: f64) -> Metres {
    let sin_lat = lat.sin().0;
    let w_2 = 1.0 - e_2 * sin_lat * sin_lat;
    Metres(a_one_minus_e_2.0 / (w_2 * libm::sqrt(w_2)))
}

/// Calculate the radius of curvature of the ellipsoid in the prime vertical,
/// i.e. perpendicular to the meridian.
/// * `lat` - the geodetic Latitude
/// * `a` - the Semimajor axis.
/// * `e_2` - the square of the Eccentricity.
#[must_use]
pub fn calculate_prime_vertical_curvature_radius(lat: Angle, a: Metres, e_2: f64) -> Metres {
    let sin_lat = lat.sin().0;
    Metres(a.0 / libm::sqrt(1.0 - e_2 * sin_lat * sin_lat))
}

/// Calculate the radius of curvature of a normal section of the ellipsoid
/// with Euler's formula: `1/R = cos²α/ρ + sin²α/ν`.
/// * `rho` - the meridian radius of curvature.
/// * `nu` - the prime vertical radius of curvature.
/// * `azimuth` - the azimuth of the normal section.
#[must_use]
pub fn calculate_curvature_radius(rho: Metres, nu: Metres, azimuth: Angle) -> Metres {
    let cos_alpha = azimuth.cos().0;
    let sin_alpha = azimuth.sin().0;
    Metres(rho.0 * nu.0 / (nu.0 * cos_alpha * cos_alpha + rho.0 * sin_alpha * sin_alpha))
}
