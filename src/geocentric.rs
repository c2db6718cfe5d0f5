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

//! The geocentric module contains functions for converting between geodetic
//! coordinates (longitude, latitude and height) and geocentric Cartesian
//! coordinates on an `Ellipsoid`.
//!
//! The geocentric to geodetic conversion uses the latitude approximation from
//! B. R. Bowring, "The accuracy of geodetic latitude and height equations",
//! Survey Review, 1985, followed by fixed point iteration of the latitude.

#![allow(clippy::suboptimal_flops)]

use crate::{Angle, Degrees, Ellipsoid, Error, Metres, Radians, Result};
use glam::DVec3;

/// The default maximum number of latitude iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// The distance from the polar axis in metres within which a point is
/// treated as being on the polar axis.
pub const POLAR_AXIS_DISTANCE: f64 = 1.0e-12;

/// Convert geodetic coordinates to geocentric coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `lon` - the longitude.
/// * `lat` - the geodetic Latitude.
/// * `alt` - the height above the ellipsoid.
///
/// returns the geocentric coordinates in metres.
/// # Examples
/// ```
/// use geo_ellipsoid::{Angle, Degrees, Metres, WGS84_ELLIPSOID};
/// use geo_ellipsoid::geocentric::geodetic_to_geocentric;
///
/// let lon = Angle::from(Degrees(0.0));
/// let lat = Angle::from(Degrees(0.0));
/// let xyz = geodetic_to_geocentric(&WGS84_ELLIPSOID, lon, lat, Metres(0.0));
/// assert_eq!(6_378_137.0, xyz.x);
/// ```
#[must_use]
pub fn geodetic_to_geocentric(ellipsoid: &Ellipsoid, lon: Angle, lat: Angle, alt: Metres) -> DVec3 {
    let nu = ellipsoid.prime_vertical_curvature_radius(lat).0;
    let sin_lat = lat.sin().0;
    let cos_lat = lat.cos().0;
    let r = (nu + alt.0) * cos_lat;
    DVec3::new(
        r * lon.cos().0,
        r * lon.sin().0,
        (ellipsoid.one_minus_e_2() * nu + alt.0) * sin_lat,
    )
}

/// The height of a point above the ellipsoid.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `r_xy` - the distance of the point from the polar axis.
/// * `z` - the distance of the point from the equatorial plane.
/// * `lat` - the geodetic Latitude of the point.
fn calculate_height(ellipsoid: &Ellipsoid, r_xy: f64, z: f64, lat: Angle) -> Metres {
    let sin_lat = lat.sin().0;
    // a * sqrt(w_2) == nu * w_2, the latter rounds less
    let w_2 = 1.0 - ellipsoid.e_2() * sin_lat * sin_lat;
    let nu = ellipsoid.prime_vertical_curvature_radius(lat).0;
    Metres(r_xy * lat.cos().0 + z * sin_lat - nu * w_2)
}

/// Whether the change in Latitude between iterations is within rounding error.
///
/// The tolerance is two units in the last place of the Latitude in radians:
/// near the poles successive iterates may alternate between neighbouring values.
/// * `residual` - the change in Latitude in radians.
/// * `lat` - the latest Latitude.
fn is_converged(residual: f64, lat: Angle) -> bool {
    residual <= 2.0 * f64::EPSILON * libm::fabs(Radians::from(lat).0).max(1.0)
}

/// The result of the latitude iteration.
struct Solution {
    lon: Angle,
    lat: Angle,
    alt: Metres,
    iterations: u32,
    residual: f64,
    converged: bool,
}

/// Solve for the geodetic coordinates of a geocentric point.
/// At least one iteration is performed unless the point is on the polar axis.
fn solve(ellipsoid: &Ellipsoid, xyz: &DVec3, max_iterations: u32) -> Solution {
    let lon = Angle::from_y_x(xyz.y, xyz.x);
    let r_xy = libm::hypot(xyz.x, xyz.y);
    let z = xyz.z;

    if r_xy < POLAR_AXIS_DISTANCE {
        let lat = Angle::from(Degrees(if z < 0.0 { -90.0 } else { 90.0 }));
        return Solution {
            lon,
            lat,
            alt: Metres(libm::fabs(z) - ellipsoid.b().0),
            iterations: 0,
            residual: 0.0,
            converged: true,
        };
    }

    let a = ellipsoid.a().0;
    let e_2 = ellipsoid.e_2();
    let one_minus_f = ellipsoid.one_minus_f();

    // Bowring's approximation
    let r = xyz.length();
    let u = Angle::from_y_x(z * (one_minus_f + a * e_2 / r), r_xy);
    let sin_u = u.sin().0;
    let cos_u = u.cos().0;
    let mut lat = Angle::from_y_x(
        one_minus_f * z + a * e_2 * sin_u * sin_u * sin_u,
        one_minus_f * (r_xy - a * e_2 * cos_u * cos_u * cos_u),
    );

    let mut iterations = 0;
    let mut residual;
    let mut converged;
    loop {
        let nu = ellipsoid.prime_vertical_curvature_radius(lat).0;
        let next = Angle::from_y_x(z + e_2 * nu * lat.sin().0, r_xy);
        residual = libm::fabs(Radians::from(next).0 - Radians::from(lat).0);
        lat = next;
        iterations += 1;
        converged = is_converged(residual, lat);

        if converged || iterations >= max_iterations {
            break;
        }
    }
    tracing::trace!(iterations, residual, "geodetic latitude iterations");

    Solution {
        lon,
        lat,
        alt: calculate_height(ellipsoid, r_xy, z, lat),
        iterations,
        residual,
        converged,
    }
}

/// Convert geocentric coordinates to geodetic coordinates.
///
/// If the Latitude has not converged after `max_iterations` a warning is
/// logged and the last Latitude is used.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `xyz` - the geocentric coordinates in metres.
/// * `max_iterations` - the maximum number of latitude iterations.
///
/// returns the longitude, geodetic Latitude and height above the ellipsoid.
#[must_use]
pub fn geocentric_to_geodetic(
    ellipsoid: &Ellipsoid,
    xyz: &DVec3,
    max_iterations: u32,
) -> (Angle, Angle, Metres) {
    let solution = solve(ellipsoid, xyz, max_iterations);
    if !solution.converged {
        tracing::warn!(
            iterations = solution.iterations,
            residual = solution.residual,
            "geodetic latitude did not converge"
        );
    }
    (solution.lon, solution.lat, solution.alt)
}

/// Convert geocentric coordinates to geodetic coordinates.
/// * `ellipsoid` - the `Ellipsoid`.
/// * `xyz` - the geocentric coordinates in metres.
/// * `max_iterations` - the maximum number of latitude iterations.
///
/// returns the longitude, geodetic Latitude, height above the ellipsoid and
/// the number of iterations performed.
///
/// # Errors
///
/// `Error::NotConverged` if the Latitude has not converged after
/// `max_iterations`.
pub fn try_geocentric_to_geodetic(
    ellipsoid: &Ellipsoid,
    xyz: &DVec3,
    max_iterations: u32,
) -> Result<(Angle, Angle, Metres, u32)> {
    let solution = solve(ellipsoid, xyz, max_iterations);
    if !solution.converged {
        Err(Error::NotConverged {
            iterations: solution.iterations,
            residual: solution.residual,
        })
    } else {
        Ok((solution.lon, solution.lat, solution.alt, solution.iterations))
    }
}
