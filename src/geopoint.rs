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

//! The geopoint module contains the `GeoPoint` type: a position on an
//! `Ellipsoid` held in both geodetic and geocentric coordinates.
//!
//! Whichever representation was set last is the ground truth, the other is
//! derived from it.

use crate::geocentric::{self, DEFAULT_MAX_ITERATIONS};
use crate::{
    Angle, Degrees, Ellipsoid, Error, HelmertTransform, LatLong, Metres, Radians, Result,
    NUMERIC_TOLERANCE,
};
use core::str::FromStr;
use glam::DVec3;

/// How to interpret the values of a `GeoPoint` constructor or setter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoPointInit {
    /// Longitude, geodetic Latitude and height above the ellipsoid.
    FromGeodetic,
    /// Earth Centred Earth Fixed x, y and z coordinates in metres.
    FromGeocentric,
}

impl FromStr for GeoPointInit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "geodetic" => Ok(Self::FromGeodetic),
            "geocentric" => Ok(Self::FromGeocentric),
            _ => Err(Error::InvalidGeoPointInit(s.to_owned())),
        }
    }
}

/// A position on an `Ellipsoid`.
#[derive(Clone, Debug)]
pub struct GeoPoint<'a> {
    ellipsoid: &'a Ellipsoid,
    geocentric: DVec3,
    lon: Radians,
    lat: Radians,
    alt: Metres,
}

impl<'a> GeoPoint<'a> {
    /// Constructor.
    /// * `ellipsoid` - the `Ellipsoid` of the position.
    /// * `values` - longitude, Latitude and height or x, y and z, according to `init`.
    /// * `init` - how to interpret `values`.
    /// * `degrees` - whether the longitude and Latitude are in degrees or
    ///   radians, ignored for geocentric coordinates.
    /// # Examples
    /// ```
    /// use geo_ellipsoid::{GeoPoint, GeoPointInit, WGS84_ELLIPSOID};
    /// use angle_sc::is_within_tolerance;
    ///
    /// let point = GeoPoint::new(&WGS84_ELLIPSOID, [0.0, 45.0, 0.0], GeoPointInit::FromGeodetic, true);
    /// assert!(is_within_tolerance(4_517_590.878_848_931, point.x(), 1.0e-8));
    /// assert!(is_within_tolerance(4_487_348.408_865_92, point.z(), 1.0e-8));
    /// ```
    #[must_use]
    pub fn new(
        ellipsoid: &'a Ellipsoid,
        values: [f64; 3],
        init: GeoPointInit,
        degrees: bool,
    ) -> Self {
        let mut point = Self {
            ellipsoid,
            geocentric: DVec3::ZERO,
            lon: Radians(0.0),
            lat: Radians(0.0),
            alt: Metres(0.0),
        };
        point.set_coords(values, init, degrees);
        point
    }

    /// Construct a `GeoPoint` from geodetic coordinates.
    /// * `ellipsoid` - the `Ellipsoid` of the position.
    /// * `lon` - the longitude.
    /// * `lat` - the geodetic Latitude.
    /// * `alt` - the height above the ellipsoid.
    #[must_use]
    pub fn from_geodetic(ellipsoid: &'a Ellipsoid, lon: Angle, lat: Angle, alt: Metres) -> Self {
        Self {
            ellipsoid,
            geocentric: geocentric::geodetic_to_geocentric(ellipsoid, lon, lat, alt),
            lon: Radians::from(lon),
            lat: Radians::from(lat),
            alt,
        }
    }

    /// Construct a `GeoPoint` from geocentric coordinates.
    /// * `ellipsoid` - the `Ellipsoid` of the position.
    /// * `xyz` - the geocentric coordinates in metres.
    #[must_use]
    pub fn from_geocentric(ellipsoid: &'a Ellipsoid, xyz: DVec3) -> Self {
        let (lon, lat, alt) =
            geocentric::geocentric_to_geodetic(ellipsoid, &xyz, DEFAULT_MAX_ITERATIONS);
        Self {
            ellipsoid,
            geocentric: xyz,
            lon: Radians::from(lon),
            lat: Radians::from(lat),
            alt,
        }
    }

    /// Construct a `GeoPoint` from a `LatLong` and a height.
    /// * `ellipsoid` - the `Ellipsoid` of the position.
    /// * `position` - the geodetic Latitude and longitude.
    /// * `alt` - the height above the ellipsoid.
    #[must_use]
    pub fn from_lat_long(ellipsoid: &'a Ellipsoid, position: &LatLong, alt: Metres) -> Self {
        Self::from_geodetic(
            ellipsoid,
            Angle::from(position.lon()),
            Angle::from(position.lat()),
            alt,
        )
    }

    /// Set the coordinates of the position.
    /// * `values` - longitude, Latitude and height or x, y and z, according to `init`.
    /// * `init` - how to interpret `values`.
    /// * `degrees` - whether the longitude and Latitude are in degrees or
    ///   radians, ignored for geocentric coordinates.
    pub fn set_coords(&mut self, values: [f64; 3], init: GeoPointInit, degrees: bool) {
        let [first, second, third] = values;
        match init {
            GeoPointInit::FromGeodetic => {
                let (lon, lat) = if degrees {
                    (Angle::from(Degrees(first)), Angle::from(Degrees(second)))
                } else {
                    (Angle::from(Radians(first)), Angle::from(Radians(second)))
                };
                self.set_geodetic(lon, lat, Metres(third));
            }
            GeoPointInit::FromGeocentric => self.set_geocentric(DVec3::new(first, second, third)),
        }
    }

    /// Set the geodetic coordinates and derive the geocentric coordinates.
    /// * `lon` - the longitude.
    /// * `lat` - the geodetic Latitude.
    /// * `alt` - the height above the ellipsoid.
    pub fn set_geodetic(&mut self, lon: Angle, lat: Angle, alt: Metres) {
        *self = Self::from_geodetic(self.ellipsoid, lon, lat, alt);
    }

    /// Set the geocentric coordinates and derive the geodetic coordinates.
    /// * `xyz` - the geocentric coordinates in metres.
    pub fn set_geocentric(&mut self, xyz: DVec3) {
        *self = Self::from_geocentric(self.ellipsoid, xyz);
    }

    /// The `Ellipsoid` of the position.
    #[must_use]
    pub const fn ellipsoid(&self) -> &'a Ellipsoid {
        self.ellipsoid
    }

    /// The longitude.
    #[must_use]
    pub const fn lon(&self) -> Radians {
        self.lon
    }

    /// The geodetic Latitude.
    #[must_use]
    pub const fn lat(&self) -> Radians {
        self.lat
    }

    /// The height above the ellipsoid.
    #[must_use]
    pub const fn alt(&self) -> Metres {
        self.alt
    }

    /// The longitude, geodetic Latitude and height above the ellipsoid.
    #[must_use]
    pub fn geodetic(&self) -> (Angle, Angle, Metres) {
        (Angle::from(self.lon), Angle::from(self.lat), self.alt)
    }

    /// The geodetic Latitude and longitude.
    #[must_use]
    pub fn lat_long(&self) -> LatLong {
        LatLong::new(
            Degrees::from(Angle::from(self.lat)),
            Degrees::from(Angle::from(self.lon)),
        )
    }

    /// The geocentric coordinates in metres.
    #[must_use]
    pub const fn geocentric(&self) -> DVec3 {
        self.geocentric
    }

    /// The geocentric x coordinate in metres.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.geocentric.x
    }

    /// The geocentric y coordinate in metres.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.geocentric.y
    }

    /// The geocentric z coordinate in metres.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.geocentric.z
    }

    /// Transform the position to another `Ellipsoid`.
    ///
    /// If `target` equals the `Ellipsoid` of the position, the position is
    /// copied unchanged and `transform` is not applied.
    /// * `target` - the `Ellipsoid` to transform to.
    /// * `transform` - the datum transformation between the ellipsoids.
    #[must_use]
    pub fn to_ellipsoid<'b>(
        &self,
        target: &'b Ellipsoid,
        transform: &HelmertTransform,
    ) -> GeoPoint<'b> {
        if *target == *self.ellipsoid {
            tracing::debug!("to_ellipsoid: same ellipsoid, position unchanged");
            GeoPoint {
                ellipsoid: target,
                geocentric: self.geocentric,
                lon: self.lon,
                lat: self.lat,
                alt: self.alt,
            }
        } else {
            GeoPoint::from_geocentric(target, transform.apply(&self.geocentric))
        }
    }

    /// Transform the position to another `Ellipsoid` in place.
    /// * `target` - the `Ellipsoid` to transform to.
    /// * `transform` - the datum transformation between the ellipsoids.
    pub fn to_ellipsoid_in_place(&mut self, target: &'a Ellipsoid, transform: &HelmertTransform) {
        *self = self.to_ellipsoid(target, transform);
    }
}

impl PartialEq for GeoPoint<'_> {
    /// Positions are equal if their ellipsoids are equal and their geocentric
    /// coordinates are within `NUMERIC_TOLERANCE` of the vector length.
    fn eq(&self, other: &Self) -> bool {
        let length = self.geocentric.length().max(other.geocentric.length());
        *self.ellipsoid == *other.ellipsoid
            && (self.geocentric - other.geocentric).length() <= NUMERIC_TOLERANCE * length
    }
}
