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

//! geo-ellipsoid
//!
//! A library for performing coordinate conversions on a reference
//! [ellipsoid of revolution](https://en.wikipedia.org/wiki/Earth_ellipsoid),
//! e.g. [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf).
//!
//! ## Auxiliary latitudes
//!
//! The geodetic latitude of a point is the angle between the equatorial plane
//! and the normal to the ellipsoid at the point.
//! Other [latitudes](https://en.wikipedia.org/wiki/Latitude#Auxiliary_latitudes)
//! are used to map the ellipsoid onto a sphere:
//!
//! - geocentric: the angle between the equatorial plane and the radius;
//! - parametric: the latitude on the auxiliary sphere of radius `a`;
//! - rectifying: proportional to the distance along a meridian;
//! - authalic: preserves areas;
//! - conformal: preserves angles;
//! - isometric: the Mercator ordinate, unbounded at the poles.
//!
//! The geocentric and parametric latitudes are converted in closed form.
//! The rectifying, authalic and conformal latitudes are converted back to
//! geodetic latitudes with 10 term Fourier series in the third flattening `n`,
//! see CFF Karney [On auxiliary latitudes](https://arxiv.org/abs/2212.05818).
//!
//! ## Geocentric coordinates
//!
//! Geodetic coordinates (longitude, latitude, height) are converted to
//! Earth Centred Earth Fixed (ECEF) Cartesian coordinates in closed form.
//! The inverse conversion starts from Bowring's 1985 approximation and iterates
//! the latitude to machine precision.
//!
//! A `GeoPoint` holds both representations of a position on an `Ellipsoid`
//! and may be transformed to another `Ellipsoid` with a 7 parameter
//! [Helmert transformation](https://en.wikipedia.org/wiki/Helmert_transformation).
//!
//! ## Design
//!
//! The `Ellipsoid` struct represents an ellipsoid of revolution.
//! The statics `WGS84_ELLIPSOID`, `GRS80_ELLIPSOID` and
//! `CLARKE_1880_IGN_ELLIPSOID` represent commonly used ellipsoids.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [glam](https://crates.io/crates/glam) - to define the `DVec3` geocentric
//!   coordinates and `DMat3` rotation matrices;
//! - [thiserror](https://crates.io/crates/thiserror) - to define `Error`;
//! - [tracing](https://crates.io/crates/tracing) - to log diagnostics.

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod ellipsoid;
pub mod error;
pub mod geocentric;
pub mod geopoint;
pub mod helmert;

pub use angle_sc::{Angle, Degrees, Radians};
pub use error::{Error, Result};
pub use geocentric::DEFAULT_MAX_ITERATIONS;
pub use geopoint::{GeoPoint, GeoPointInit};
pub use glam::DVec3;
pub use helmert::{HelmertTransform, RotationModel};
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use core::str::FromStr;
use ellipsoid::coefficients::{self, sin_series, SERIES_ORDER};
use ellipsoid::reference::{self, Definition};
use once_cell::sync::Lazy;

/// The absolute tolerance used to compare `Ellipsoid` parameters and
/// geocentric coordinates.
pub const NUMERIC_TOLERANCE: f64 = 1.0e-14;

/// How to interpret the second parameter of an `Ellipsoid` constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EllipsoidInit {
    /// The Semimajor axis and the flattening ratio.
    FromRadiusAndFlattening,
    /// The Semimajor and Semiminor axes.
    FromRadiusAndRadius,
}

impl FromStr for EllipsoidInit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "flattening" | "radius-and-flattening" => Ok(Self::FromRadiusAndFlattening),
            "radii" | "radius-and-radius" => Ok(Self::FromRadiusAndRadius),
            _ => Err(Error::InvalidEllipsoidInit(s.to_owned())),
        }
    }
}

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The second flattening of the ellipsoid.
    f2: f64,
    /// The third flattening of the ellipsoid.
    n: f64,
    /// The Eccentricity of the ellipsoid.
    e: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// One minus the square of the Eccentricity.
    one_minus_e_2: f64,
    /// The Semimajor axis times one minus the square of the Eccentricity.
    a_one_minus_e_2: Metres,
    /// The distance from the equator to a pole along a meridian.
    mp: Metres,
    /// The authalic `q` function at a pole.
    qp: f64,

    /// The rectifying to geodetic latitude series `coefficients`.
    phimu: [f64; SERIES_ORDER],
    /// The authalic to geodetic latitude series `coefficients`.
    phixi: [f64; SERIES_ORDER],
    /// The conformal to geodetic latitude series `coefficients`.
    phichi: [f64; SERIES_ORDER],
}

impl Ellipsoid {
    /// Construct an `Ellipsoid` from validated parameters.
    fn build(a: Metres, f: f64, b: Metres) -> Self {
        let n = ellipsoid::calculate_3rd_flattening(f);
        let e_2 = ellipsoid::calculate_sq_eccentricity(f);
        let e = libm::sqrt(e_2);
        let one_minus_e_2 = 1.0 - e_2;
        let mp = Metres(a.0 * ellipsoid::elliptic::complete_e(e_2));
        tracing::debug!(a = a.0, f, n, mp = mp.0, "ellipsoid constructed");

        Self {
            a,
            b,
            f,
            f2: ellipsoid::calculate_2nd_flattening(f),
            n,
            e,
            e_2,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(f),
            one_minus_f: 1.0 - f,
            one_minus_e_2,
            a_one_minus_e_2: Metres(a.0 * one_minus_e_2),
            mp,
            qp: ellipsoid::calculate_authalic_q(1.0, e, one_minus_e_2),
            phimu: coefficients::evaluate_coeffs_phimu(n),
            phixi: coefficients::evaluate_coeffs_phixi(n),
            phichi: coefficients::evaluate_coeffs_phichi(n),
        }
    }

    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `value` - the flattening ratio or the Semiminor axis in metres,
    ///   according to `init`.
    /// * `init` - how to interpret `value`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidEquatorialRadius` if `a` is not finite and positive,
    /// `Error::InvalidFlattening` if the flattening is not in the range [0, 1),
    /// `Error::InvalidPolarRadius` if the Semiminor axis is not in the range (0, a].
    /// # Examples
    /// ```
    /// use geo_ellipsoid::{Ellipsoid, EllipsoidInit, Metres};
    ///
    /// let sphere = Ellipsoid::new(Metres(6_371_000.0), 0.0, EllipsoidInit::FromRadiusAndFlattening).unwrap();
    /// assert_eq!(Metres(6_371_000.0), sphere.b());
    ///
    /// let error = Ellipsoid::new(Metres(6_371_000.0), 7_000_000.0, EllipsoidInit::FromRadiusAndRadius);
    /// assert!(error.is_err());
    /// ```
    pub fn new(a: Metres, value: f64, init: EllipsoidInit) -> Result<Self> {
        if !(a.0.is_finite() && 0.0 < a.0) {
            return Err(Error::InvalidEquatorialRadius(a.0));
        }

        match init {
            EllipsoidInit::FromRadiusAndFlattening => {
                if !(0.0..1.0).contains(&value) {
                    return Err(Error::InvalidFlattening(value));
                }
                Ok(Self::build(a, value, ellipsoid::calculate_minor_axis(a, value)))
            }
            EllipsoidInit::FromRadiusAndRadius => {
                if !(0.0 < value && value <= a.0) {
                    return Err(Error::InvalidPolarRadius(value));
                }
                let b = Metres(value);
                Ok(Self::build(a, ellipsoid::calculate_flattening(a, b), b))
            }
        }
    }

    /// Construct an `Ellipsoid` from its Semimajor axis and flattening.
    ///
    /// # Errors
    ///
    /// See `Ellipsoid::new`.
    pub fn from_flattening(a: Metres, f: f64) -> Result<Self> {
        Self::new(a, f, EllipsoidInit::FromRadiusAndFlattening)
    }

    /// Construct an `Ellipsoid` from its Semimajor and Semiminor axes.
    ///
    /// # Errors
    ///
    /// See `Ellipsoid::new`.
    pub fn from_radii(a: Metres, b: Metres) -> Result<Self> {
        Self::new(a, b.0, EllipsoidInit::FromRadiusAndRadius)
    }

    /// Construct a named reference `Ellipsoid`, e.g. "WGS84" or "Bessel 1841".
    ///
    /// # Errors
    ///
    /// `Error::UnknownEllipsoid` if the name is not a known reference ellipsoid.
    pub fn named(name: &str) -> Result<Self> {
        match reference::find(name) {
            Some(Definition::Flattening(a, f)) => Self::from_flattening(a, f),
            Some(Definition::Radii(a, b)) => Self::from_radii(a, b),
            None => Err(Error::UnknownEllipsoid(name.to_owned())),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::build(
            reference::WGS84_A,
            reference::WGS84_F,
            ellipsoid::calculate_minor_axis(reference::WGS84_A, reference::WGS84_F),
        )
    }

    /// Construct an `Ellipsoid` with the GRS 80 parameters.
    #[must_use]
    pub fn grs80() -> Self {
        Self::build(
            reference::GRS80_A,
            reference::GRS80_F,
            ellipsoid::calculate_minor_axis(reference::GRS80_A, reference::GRS80_F),
        )
    }

    /// Construct an `Ellipsoid` with the Clarke 1880 (IGN) parameters.
    #[must_use]
    pub fn clarke_1880_ign() -> Self {
        Self::build(
            reference::CLARKE_1880_IGN_A,
            ellipsoid::calculate_flattening(
                reference::CLARKE_1880_IGN_A,
                reference::CLARKE_1880_IGN_B,
            ),
            reference::CLARKE_1880_IGN_B,
        )
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The second flattening of the ellipsoid.
    #[must_use]
    pub const fn f2(&self) -> f64 {
        self.f2
    }

    /// The third flattening of the ellipsoid.
    #[must_use]
    pub const fn n(&self) -> f64 {
        self.n
    }

    /// The Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e(&self) -> f64 {
        self.e
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// One minus the square of the Eccentricity.
    #[must_use]
    pub const fn one_minus_e_2(&self) -> f64 {
        self.one_minus_e_2
    }

    /// The distance from the equator to a pole along a meridian.
    #[must_use]
    pub const fn quarter_meridian(&self) -> Metres {
        self.mp
    }

    /// The rectifying to geodetic latitude series `coefficients`.
    #[must_use]
    pub const fn phimu(&self) -> &[f64; SERIES_ORDER] {
        &self.phimu
    }

    /// The authalic to geodetic latitude series `coefficients`.
    #[must_use]
    pub const fn phixi(&self) -> &[f64; SERIES_ORDER] {
        &self.phixi
    }

    /// The conformal to geodetic latitude series `coefficients`.
    #[must_use]
    pub const fn phichi(&self) -> &[f64; SERIES_ORDER] {
        &self.phichi
    }

    /// Convert a geodetic Latitude to a geocentric Latitude.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn geocentric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_geocentric_latitude(lat, self.one_minus_e_2)
    }

    /// Convert a geocentric Latitude to a geodetic Latitude.
    /// * `theta` - the geocentric Latitude
    #[must_use]
    pub fn inverse_geocentric_latitude(&self, theta: Angle) -> Angle {
        ellipsoid::calculate_geodetic_from_geocentric_latitude(theta, self.one_minus_e_2)
    }

    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn parametric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }

    /// Convert a parametric Latitude on the auxiliary sphere to a
    /// geodetic Latitude.
    /// * `beta` - the parametric Latitude
    #[must_use]
    pub fn inverse_parametric_latitude(&self, beta: Angle) -> Angle {
        ellipsoid::calculate_geodetic_from_parametric_latitude(beta, self.one_minus_f)
    }

    /// Convert a geodetic Latitude to a rectifying Latitude.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn rectifying_latitude(&self, lat: Angle) -> Angle {
        let distance = self.meridian_distance(lat);
        Angle::from(Radians(
            core::f64::consts::FRAC_PI_2 * distance.0 / self.mp.0,
        ))
    }

    /// Convert a rectifying Latitude to a geodetic Latitude.
    /// * `mu` - the rectifying Latitude
    #[must_use]
    pub fn inverse_rectifying_latitude(&self, mu: Angle) -> Angle {
        mu + Angle::from(sin_series(&self.phimu, mu))
    }

    /// Convert a geodetic Latitude to an authalic Latitude.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn authalic_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_authalic_latitude(lat, self.e, self.one_minus_e_2, self.qp)
    }

    /// Convert an authalic Latitude to a geodetic Latitude.
    /// * `xi` - the authalic Latitude
    #[must_use]
    pub fn inverse_authalic_latitude(&self, xi: Angle) -> Angle {
        xi + Angle::from(sin_series(&self.phixi, xi))
    }

    /// Convert a geodetic Latitude to a conformal Latitude.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn conformal_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_conformal_latitude(lat, self.e)
    }

    /// Convert a conformal Latitude to a geodetic Latitude.
    /// * `chi` - the conformal Latitude
    #[must_use]
    pub fn inverse_conformal_latitude(&self, chi: Angle) -> Angle {
        chi + Angle::from(sin_series(&self.phichi, chi))
    }

    /// Convert a geodetic Latitude to an isometric Latitude.
    /// * `lat` - the geodetic Latitude
    ///
    /// returns the isometric Latitude, infinite at the poles.
    #[must_use]
    pub fn isometric_latitude(&self, lat: Angle) -> f64 {
        ellipsoid::calculate_isometric_latitude(lat, self.e)
    }

    /// Convert an isometric Latitude to a geodetic Latitude.
    /// * `psi` - the isometric Latitude
    #[must_use]
    pub fn inverse_isometric_latitude(&self, psi: f64) -> Angle {
        // sin chi = tanh psi, cos chi = sech psi
        let chi = Angle::from_y_x(libm::tanh(psi), 1.0 / libm::cosh(psi));
        self.inverse_conformal_latitude(chi)
    }

    /// The radius of curvature along a meridian at a geodetic Latitude.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn meridian_curvature_radius(&self, lat: Angle) -> Metres {
        ellipsoid::calculate_meridian_curvature_radius(lat, self.a_one_minus_e_2, self.e_2)
    }

    /// The radius of curvature in the prime vertical at a geodetic Latitude.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn prime_vertical_curvature_radius(&self, lat: Angle) -> Metres {
        ellipsoid::calculate_prime_vertical_curvature_radius(lat, self.a, self.e_2)
    }

    /// The radius of curvature of the normal section at a geodetic Latitude
    /// along an azimuth.
    /// * `lat` - the geodetic Latitude
    /// * `azimuth` - the azimuth of the normal section, clockwise from North.
    #[must_use]
    pub fn curvature_radius(&self, lat: Angle, azimuth: Angle) -> Metres {
        ellipsoid::calculate_curvature_radius(
            self.meridian_curvature_radius(lat),
            self.prime_vertical_curvature_radius(lat),
            azimuth,
        )
    }

    /// The distance along a meridian from the equator to a geodetic Latitude.
    /// * `lat` - the geodetic Latitude
    ///
    /// returns the distance, negative in the Southern hemisphere.
    #[must_use]
    pub fn meridian_distance(&self, lat: Angle) -> Metres {
        Metres(self.a_one_minus_e_2.0 * ellipsoid::elliptic::meridian_pi(lat, self.e_2))
    }

    /// Convert geodetic coordinates to geocentric coordinates.
    /// * `lon` - the longitude.
    /// * `lat` - the geodetic Latitude.
    /// * `alt` - the height above the ellipsoid.
    #[must_use]
    pub fn geodetic_to_geocentric(&self, lon: Angle, lat: Angle, alt: Metres) -> DVec3 {
        geocentric::geodetic_to_geocentric(self, lon, lat, alt)
    }

    /// Convert geocentric coordinates to geodetic coordinates.
    /// * `xyz` - the geocentric coordinates in metres.
    /// * `max_iterations` - the maximum number of latitude iterations.
    ///
    /// returns the longitude, geodetic Latitude and height above the ellipsoid.
    #[must_use]
    pub fn geocentric_to_geodetic(&self, xyz: &DVec3, max_iterations: u32) -> (Angle, Angle, Metres) {
        geocentric::geocentric_to_geodetic(self, xyz, max_iterations)
    }

    /// Convert geocentric coordinates to geodetic coordinates, failing if
    /// the Latitude does not converge.
    /// * `xyz` - the geocentric coordinates in metres.
    /// * `max_iterations` - the maximum number of latitude iterations.
    ///
    /// # Errors
    ///
    /// `Error::NotConverged` if the Latitude did not converge within
    /// `max_iterations`.
    pub fn try_geocentric_to_geodetic(
        &self,
        xyz: &DVec3,
        max_iterations: u32,
    ) -> Result<(Angle, Angle, Metres, u32)> {
        geocentric::try_geocentric_to_geodetic(self, xyz, max_iterations)
    }
}

impl PartialEq for Ellipsoid {
    /// Ellipsoids are equal if their Semimajor axes and flattenings are
    /// within `NUMERIC_TOLERANCE`.
    fn eq(&self, other: &Self) -> bool {
        libm::fabs(self.a.0 - other.a.0) <= NUMERIC_TOLERANCE
            && libm::fabs(self.f - other.f) <= NUMERIC_TOLERANCE
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
#[allow(clippy::non_std_lazy_statics)]
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// A static instance of the GRS 80 `Ellipsoid`.
#[allow(clippy::non_std_lazy_statics)]
pub static GRS80_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::grs80);

/// A static instance of the Clarke 1880 (IGN) `Ellipsoid`.
#[allow(clippy::non_std_lazy_statics)]
pub static CLARKE_1880_IGN_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::clarke_1880_ign);

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    const LATITUDES: [f64; 15] = [
        -90.0, -80.0, -60.0, -45.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 45.0, 60.0, 80.0,
        90.0,
    ];

    #[test]
    fn test_ellipsoid_wgs84() {
        let geoid = Ellipsoid::wgs84();
        assert_eq!(reference::WGS84_A, geoid.a());
        assert_eq!(reference::WGS84_F, geoid.f());
        assert_eq!(
            ellipsoid::calculate_minor_axis(reference::WGS84_A, reference::WGS84_F),
            geoid.b()
        );
        assert_eq!(1.0 - reference::WGS84_F, geoid.one_minus_f());
        assert_eq!(
            ellipsoid::calculate_sq_eccentricity(reference::WGS84_F),
            geoid.e_2()
        );
        assert_eq!(libm::sqrt(geoid.e_2()), geoid.e());
        assert_eq!(1.0 - geoid.e_2(), geoid.one_minus_e_2());
        assert_eq!(
            ellipsoid::calculate_sq_2nd_eccentricity(reference::WGS84_F),
            geoid.ep_2()
        );
        assert_eq!(
            ellipsoid::calculate_3rd_flattening(reference::WGS84_F),
            geoid.n()
        );
        assert!(is_within_tolerance(
            0.0033640898209764189,
            geoid.f2(),
            f64::EPSILON
        ));
        assert!(is_within_tolerance(
            10_001_965.729_312_723,
            geoid.quarter_meridian().0,
            1.0e-8
        ));

        assert_eq!(&coefficients::evaluate_coeffs_phimu(geoid.n()), geoid.phimu());
        assert_eq!(&coefficients::evaluate_coeffs_phixi(geoid.n()), geoid.phixi());
        assert_eq!(&coefficients::evaluate_coeffs_phichi(geoid.n()), geoid.phichi());
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::wgs84();

        let geoid_clone = geoid.clone();
        assert!(geoid_clone == geoid);
        assert!(*WGS84_ELLIPSOID == geoid);
        assert!(*GRS80_ELLIPSOID != geoid);

        println!("Ellipsoid: {:?}", geoid);
    }

    #[test]
    fn test_ellipsoid_new() {
        let a = Metres(6_378_137.0);
        let from_f = Ellipsoid::from_flattening(a, reference::WGS84_F).unwrap();
        let from_b = Ellipsoid::from_radii(a, from_f.b()).unwrap();
        assert_eq!(from_f, from_b);
        assert!(is_within_tolerance(from_f.n(), from_b.n(), 1.0e-15));
        assert!(is_within_tolerance(from_f.e_2(), from_b.e_2(), 1.0e-15));
        assert!(is_within_tolerance(
            from_f.quarter_meridian().0,
            from_b.quarter_meridian().0,
            1.0e-6
        ));

        let clarke = Ellipsoid::named("Clarke 1880 IGN").unwrap();
        assert_eq!(*CLARKE_1880_IGN_ELLIPSOID, clarke);
        assert_eq!(Metres(6_356_515.0), clarke.b());

        let airy = Ellipsoid::named("airy1830").unwrap();
        assert_eq!(Metres(6_377_563.396), airy.a());

        let sphere = Ellipsoid::from_flattening(a, 0.0).unwrap();
        assert_eq!(0.0, sphere.e());
        assert_eq!(a, sphere.b());
    }

    #[test]
    fn test_ellipsoid_new_errors() {
        let a = Metres(6_378_137.0);
        assert_eq!(
            Err(Error::InvalidEquatorialRadius(0.0)),
            Ellipsoid::from_flattening(Metres(0.0), 0.0)
        );
        assert!(matches!(
            Ellipsoid::from_flattening(Metres(f64::INFINITY), 0.0),
            Err(Error::InvalidEquatorialRadius(_))
        ));
        assert_eq!(
            Err(Error::InvalidFlattening(-0.1)),
            Ellipsoid::from_flattening(a, -0.1)
        );
        assert_eq!(
            Err(Error::InvalidFlattening(1.0)),
            Ellipsoid::from_flattening(a, 1.0)
        );
        assert_eq!(
            Err(Error::InvalidPolarRadius(7_000_000.0)),
            Ellipsoid::from_radii(a, Metres(7_000_000.0))
        );
        assert_eq!(
            Err(Error::InvalidPolarRadius(0.0)),
            Ellipsoid::from_radii(a, Metres(0.0))
        );
        assert_eq!(
            Err(Error::UnknownEllipsoid(String::from("Everest"))),
            Ellipsoid::named("Everest")
        );
    }

    #[test]
    fn test_ellipsoid_init_from_str() {
        assert_eq!(
            Ok(EllipsoidInit::FromRadiusAndFlattening),
            "Flattening".parse::<EllipsoidInit>()
        );
        assert_eq!(
            Ok(EllipsoidInit::FromRadiusAndFlattening),
            "radius-and-flattening".parse::<EllipsoidInit>()
        );
        assert_eq!(
            Ok(EllipsoidInit::FromRadiusAndRadius),
            "RADII".parse::<EllipsoidInit>()
        );
        assert_eq!(
            Ok(EllipsoidInit::FromRadiusAndRadius),
            "radius-and-radius".parse::<EllipsoidInit>()
        );
        assert_eq!(
            Err(Error::InvalidEllipsoidInit(String::from("eccentricity"))),
            "eccentricity".parse::<EllipsoidInit>()
        );
    }

    #[test]
    fn test_latitude_round_trips() {
        let geoid = Ellipsoid::wgs84();

        for latitude in LATITUDES {
            let lat = Angle::from(Degrees(latitude));

            let result = geoid.inverse_geocentric_latitude(geoid.geocentric_latitude(lat));
            assert!(is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-13));

            let result = geoid.inverse_parametric_latitude(geoid.parametric_latitude(lat));
            assert!(is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-13));

            let result = geoid.inverse_rectifying_latitude(geoid.rectifying_latitude(lat));
            assert!(is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-12));

            let result = geoid.inverse_authalic_latitude(geoid.authalic_latitude(lat));
            assert!(is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-12));

            let result = geoid.inverse_conformal_latitude(geoid.conformal_latitude(lat));
            assert!(is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-12));

            let result = geoid.inverse_isometric_latitude(geoid.isometric_latitude(lat));
            assert!(is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-12));
        }
    }

    #[test]
    fn test_authalic_latitude_near_poles() {
        let geoid = Ellipsoid::wgs84();

        for i in 0..=1000 {
            let latitude = 80.0 + f64::from(i) * 0.01;
            for lat in [
                Angle::from(Degrees(latitude)),
                Angle::from(Degrees(-latitude)),
            ] {
                let result = geoid.inverse_authalic_latitude(geoid.authalic_latitude(lat));
                assert!(
                    is_within_tolerance(Radians::from(lat).0, Radians::from(result).0, 1.0e-14),
                    "latitude: {latitude}"
                );
            }
        }
    }

    #[test]
    fn test_latitude_symmetry() {
        let geoid = Ellipsoid::wgs84();
        let functions: [fn(&Ellipsoid, Angle) -> Angle; 5] = [
            Ellipsoid::geocentric_latitude,
            Ellipsoid::parametric_latitude,
            Ellipsoid::rectifying_latitude,
            Ellipsoid::authalic_latitude,
            Ellipsoid::conformal_latitude,
        ];

        for function in functions {
            let zero = function(&geoid, Angle::from(Degrees(0.0)));
            assert!(is_within_tolerance(0.0, Degrees::from(zero).0, 1.0e-12));

            let north = function(&geoid, Angle::from(Degrees(90.0)));
            assert!(is_within_tolerance(90.0, Degrees::from(north).0, 1.0e-12));
            let south = function(&geoid, Angle::from(Degrees(-90.0)));
            assert!(is_within_tolerance(-90.0, Degrees::from(south).0, 1.0e-12));

            for latitude in [10.0, 30.0, 45.0, 60.0, 80.0] {
                let positive = function(&geoid, Angle::from(Degrees(latitude)));
                let negative = function(&geoid, Angle::from(Degrees(-latitude)));
                assert!(is_within_tolerance(
                    Degrees::from(positive).0,
                    -Degrees::from(negative).0,
                    1.0e-12
                ));
                // smaller than the geodetic latitude on an oblate ellipsoid
                assert!(Degrees::from(positive).0 < latitude);
            }
        }

        let psi = geoid.isometric_latitude(Angle::from(Degrees(30.0)));
        let psi_s = geoid.isometric_latitude(Angle::from(Degrees(-30.0)));
        assert!(is_within_tolerance(psi, -psi_s, 1.0e-15));
        assert_eq!(0.0, geoid.isometric_latitude(Angle::from(Degrees(0.0))));
    }

    #[test]
    fn test_auxiliary_latitudes_45() {
        let geoid = Ellipsoid::wgs84();
        let lat = Angle::from(Degrees(45.0));

        assert!(is_within_tolerance(
            44.855681988906915,
            Degrees::from(geoid.rectifying_latitude(lat)).0,
            1.0e-12
        ));
        assert!(is_within_tolerance(
            44.87170287343394,
            Degrees::from(geoid.authalic_latitude(lat)).0,
            1.0e-12
        ));
        assert!(is_within_tolerance(
            44.80768405608882,
            Degrees::from(geoid.conformal_latitude(lat)).0,
            1.0e-12
        ));
        assert!(is_within_tolerance(
            0.8766346534345989,
            geoid.isometric_latitude(lat),
            1.0e-15
        ));
    }

    #[test]
    fn test_meridian_distance() {
        let geoid = Ellipsoid::wgs84();

        assert_eq!(0.0, geoid.meridian_distance(Angle::from(Degrees(0.0))).0);
        assert!(is_within_tolerance(
            4_984_944.377_977_744,
            geoid.meridian_distance(Angle::from(Degrees(45.0))).0,
            1.0e-8
        ));
        assert!(is_within_tolerance(
            geoid.quarter_meridian().0,
            geoid.meridian_distance(Angle::from(Degrees(90.0))).0,
            1.0e-8
        ));
        assert!(is_within_tolerance(
            -geoid.quarter_meridian().0,
            geoid.meridian_distance(Angle::from(Degrees(-90.0))).0,
            1.0e-8
        ));

        // a sphere
        let sphere = Ellipsoid::from_flattening(Metres(1.0), 0.0).unwrap();
        assert!(is_within_tolerance(
            core::f64::consts::FRAC_PI_2,
            sphere.quarter_meridian().0,
            f64::EPSILON
        ));
        let lat = Angle::from(Degrees(30.0));
        assert!(is_within_tolerance(
            Radians::from(lat).0,
            sphere.meridian_distance(lat).0,
            1.0e-15
        ));
        assert_eq!(
            Degrees::from(lat).0,
            Degrees::from(sphere.authalic_latitude(lat)).0
        );
    }

    #[test]
    fn test_curvature_radii() {
        let geoid = Ellipsoid::wgs84();
        let lat = Angle::from(Degrees(45.0));

        assert!(is_within_tolerance(
            6_367_381.815_619_549,
            geoid.meridian_curvature_radius(lat).0,
            1.0e-8
        ));
        assert!(is_within_tolerance(
            6_388_838.290_121_148,
            geoid.prime_vertical_curvature_radius(lat).0,
            1.0e-8
        ));
        assert!(is_within_tolerance(
            6_372_732.411_623_322,
            geoid.curvature_radius(lat, Angle::from(Degrees(30.0))).0,
            1.0e-8
        ));

        // at the poles the radii are equal: a^2 / b
        let pole = Angle::from(Degrees(90.0));
        let polar_radius = geoid.a().0 * geoid.a().0 / geoid.b().0;
        assert!(is_within_tolerance(
            polar_radius,
            geoid.meridian_curvature_radius(pole).0,
            1.0e-8
        ));
        assert!(is_within_tolerance(
            polar_radius,
            geoid.prime_vertical_curvature_radius(pole).0,
            1.0e-8
        ));
    }
}
