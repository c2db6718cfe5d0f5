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

//! The reference module contains the primary parameters of some well known
//! reference ellipsoids.
//!
//! The WGS 84 parameters are from the ICAO
//! [WGS 84 Implementation Manual Version 2.4](https://www.icao.int/safety/pbn/Documentation/EUROCONTROL/Eurocontrol%20WGS%2084%20Implementation%20Manual.pdf)
//! Chapter 3, page 14.

use crate::Metres;

/// The WGS 84 Semimajor axis measured in metres.
pub const WGS84_A: Metres = Metres(6_378_137.0);

/// The WGS 84 flattening, a ratio.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;

/// The GRS 80 Semimajor axis measured in metres.
pub const GRS80_A: Metres = Metres(6_378_137.0);

/// The GRS 80 flattening, a ratio.
pub const GRS80_F: f64 = 1.0 / 298.257_222_101;

/// The Clarke 1880 (IGN) Semimajor axis measured in metres.
pub const CLARKE_1880_IGN_A: Metres = Metres(6_378_249.2);

/// The Clarke 1880 (IGN) Semiminor axis measured in metres.
/// This ellipsoid is defined by its radii.
pub const CLARKE_1880_IGN_B: Metres = Metres(6_356_515.0);

/// How a reference ellipsoid is defined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Definition {
    /// The Semimajor axis and flattening.
    Flattening(Metres, f64),
    /// The Semimajor and Semiminor axes.
    Radii(Metres, Metres),
}

/// The names and definitions of the known reference ellipsoids.
pub const REFERENCE_ELLIPSOIDS: [(&str, Definition); 7] = [
    ("WGS84", Definition::Flattening(WGS84_A, WGS84_F)),
    ("GRS80", Definition::Flattening(GRS80_A, GRS80_F)),
    (
        "WGS72",
        Definition::Flattening(Metres(6_378_135.0), 1.0 / 298.26),
    ),
    (
        "Clarke1880IGN",
        Definition::Radii(CLARKE_1880_IGN_A, CLARKE_1880_IGN_B),
    ),
    (
        "International1924",
        Definition::Flattening(Metres(6_378_388.0), 1.0 / 297.0),
    ),
    (
        "Bessel1841",
        Definition::Flattening(Metres(6_377_397.155), 1.0 / 299.152_812_8),
    ),
    (
        "Airy1830",
        Definition::Flattening(Metres(6_377_563.396), 1.0 / 299.324_964_6),
    ),
];

/// Find the definition of a reference ellipsoid by name.
///
/// The comparison ignores case, spaces, hyphens and underscores, so
/// "wgs-84", "WGS 84" and "wgs84" all find the WGS 84 ellipsoid.
/// * `name` - the name of the reference ellipsoid.
/// # Examples
/// ```
/// use geo_ellipsoid::ellipsoid::reference::{find, Definition, WGS84_A, WGS84_F};
///
/// assert_eq!(Some(Definition::Flattening(WGS84_A, WGS84_F)), find("WGS 84"));
/// assert_eq!(None, find("Everest"));
/// ```
#[must_use]
pub fn find(name: &str) -> Option<Definition> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect();
    REFERENCE_ELLIPSOIDS
        .iter()
        .find(|(reference, _)| reference.eq_ignore_ascii_case(&key))
        .map(|(_, definition)| *definition)
}
