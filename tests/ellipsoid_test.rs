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

// extern crate we're testing, same as any other code would do.
extern crate geo_ellipsoid;

use angle_sc::is_within_tolerance;
use csv::ReaderBuilder;
use geo_ellipsoid::{
    Angle, Degrees, Ellipsoid, Error, Metres, DEFAULT_MAX_ITERATIONS, WGS84_ELLIPSOID,
};

const DATA_FILE: &str = "tests/data/wgs84_geocentric.csv";

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Whether `actual` is within 1e-14 of `expected`, relative to its magnitude.
fn is_within_relative_tolerance(expected: f64, actual: f64) -> bool {
    is_within_tolerance(expected, actual, 1.0e-14 * expected.abs().max(1.0))
}

#[test]
fn test_wgs84_geocentric_reference_data() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_path(DATA_FILE)?;
    let mut count = 0;
    for result in csv_reader.records() {
        let record = result?;
        let lat = record[0].parse::<f64>()?;
        let lon = record[1].parse::<f64>()?;
        let height = record[2].parse::<f64>()?;
        let x = record[3].parse::<f64>()?;
        let y = record[4].parse::<f64>()?;
        let z = record[5].parse::<f64>()?;

        let xyz = WGS84_ELLIPSOID.geodetic_to_geocentric(
            Angle::from(Degrees(lon)),
            Angle::from(Degrees(lat)),
            Metres(height),
        );
        assert!(is_within_tolerance(x, xyz.x, 1.0e-7), "{lat}, {lon}: x");
        assert!(is_within_tolerance(y, xyz.y, 1.0e-7), "{lat}, {lon}: y");
        assert!(is_within_tolerance(z, xyz.z, 1.0e-7), "{lat}, {lon}: z");

        let (result_lon, result_lat, result_height) =
            WGS84_ELLIPSOID.geocentric_to_geodetic(&xyz, DEFAULT_MAX_ITERATIONS);
        assert!(
            is_within_relative_tolerance(lat, Degrees::from(result_lat).0),
            "{lat}, {lon}: lat"
        );
        assert!(
            is_within_relative_tolerance(lon, Degrees::from(result_lon).0),
            "{lat}, {lon}: lon"
        );
        assert!(
            is_within_tolerance(height, result_height.0, 1.0e-6),
            "{lat}, {lon}: height"
        );
        count += 1;
    }
    assert_eq!(20, count);

    Ok(())
}

#[test]
fn test_geodetic_geocentric_round_trip() {
    init_logging();

    let latitudes = [
        -90.0, -80.0, -60.0, -45.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 45.0, 60.0, 80.0,
        90.0,
    ];
    for height in [0.0, -1000.0, 10_000.0] {
        for latitude in latitudes {
            let mut longitude = -180.0;
            while longitude <= 180.0 {
                let xyz = WGS84_ELLIPSOID.geodetic_to_geocentric(
                    Angle::from(Degrees(longitude)),
                    Angle::from(Degrees(latitude)),
                    Metres(height),
                );
                let (lon, lat, alt) =
                    WGS84_ELLIPSOID.geocentric_to_geodetic(&xyz, DEFAULT_MAX_ITERATIONS);

                assert!(
                    is_within_relative_tolerance(latitude, Degrees::from(lat).0),
                    "lat: {latitude}, {longitude}, {height}"
                );
                assert!(
                    is_within_tolerance(height, alt.0, 1.0e-8),
                    "height: {latitude}, {longitude}, {height}"
                );
                // longitude is undefined at the poles and +/-180 are equivalent
                if latitude.abs() < 90.0 && longitude.abs() < 180.0 {
                    assert!(
                        is_within_relative_tolerance(longitude, Degrees::from(lon).0),
                        "lon: {latitude}, {longitude}, {height}"
                    );
                }

                longitude += 30.0;
            }
        }
    }
}

#[test]
fn test_strict_geocentric_to_geodetic() {
    init_logging();

    let xyz = WGS84_ELLIPSOID.geodetic_to_geocentric(
        Angle::from(Degrees(0.0)),
        Angle::from(Degrees(45.0)),
        Metres(0.0),
    );
    let (_, lat, alt, iterations) = WGS84_ELLIPSOID
        .try_geocentric_to_geodetic(&xyz, DEFAULT_MAX_ITERATIONS)
        .unwrap();
    assert!(is_within_relative_tolerance(45.0, Degrees::from(lat).0));
    assert!(is_within_tolerance(0.0, alt.0, 1.0e-9));
    assert!(0 < iterations);
    assert!(iterations <= DEFAULT_MAX_ITERATIONS);

    // deep inside the ellipsoid a single iteration is not enough
    let xyz = WGS84_ELLIPSOID.geodetic_to_geocentric(
        Angle::from(Degrees(0.0)),
        Angle::from(Degrees(45.0)),
        Metres(-5_000_000.0),
    );
    let result = WGS84_ELLIPSOID.try_geocentric_to_geodetic(&xyz, 1);
    assert!(matches!(
        result,
        Err(Error::NotConverged { iterations: 1, .. })
    ));

    // the best effort conversion returns the last iterate
    let (_, lat, _) = WGS84_ELLIPSOID.geocentric_to_geodetic(&xyz, 1);
    assert!(is_within_tolerance(45.0, Degrees::from(lat).0, 1.0e-6));
}

#[test]
fn test_strict_geocentric_to_geodetic_near_poles() {
    init_logging();

    const STEPS: u32 = 100_000;
    for height in [0.0, 100.0, 10_000.0] {
        for i in 0..=STEPS {
            let latitude = 80.0 + 10.0 * f64::from(i) / f64::from(STEPS);
            let longitude = f64::from(i % 360) - 180.0;
            let xyz = WGS84_ELLIPSOID.geodetic_to_geocentric(
                Angle::from(Degrees(longitude)),
                Angle::from(Degrees(latitude)),
                Metres(height),
            );
            let result = WGS84_ELLIPSOID.try_geocentric_to_geodetic(&xyz, DEFAULT_MAX_ITERATIONS);
            let Ok((_, lat, alt, _)) = result else {
                panic!("{latitude}, {longitude}, {height}: {result:?}");
            };
            assert!(
                is_within_relative_tolerance(latitude, Degrees::from(lat).0),
                "lat: {latitude}, {longitude}, {height}"
            );
            assert!(
                is_within_tolerance(height, alt.0, 1.0e-8),
                "height: {latitude}, {longitude}, {height}"
            );
        }
    }
}

#[test]
fn test_reference_ellipsoid_latitudes() {
    for name in ["WGS84", "GRS80", "WGS72", "Clarke 1880 IGN", "International 1924", "Bessel 1841", "Airy 1830"] {
        let geoid = Ellipsoid::named(name).unwrap();
        assert!(geoid.b() < geoid.a(), "{name}");

        for latitude in [-75.0, -40.0, -5.0, 15.0, 50.0, 85.0] {
            let lat = Angle::from(Degrees(latitude));

            let result = geoid.inverse_rectifying_latitude(geoid.rectifying_latitude(lat));
            assert!(
                is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-12),
                "{name}: rectifying {latitude}"
            );
            let result = geoid.inverse_authalic_latitude(geoid.authalic_latitude(lat));
            assert!(
                is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-12),
                "{name}: authalic {latitude}"
            );
            let result = geoid.inverse_conformal_latitude(geoid.conformal_latitude(lat));
            assert!(
                is_within_tolerance(latitude, Degrees::from(result).0, 1.0e-12),
                "{name}: conformal {latitude}"
            );
        }

        assert!(is_within_tolerance(
            geoid.quarter_meridian().0,
            geoid.meridian_distance(Angle::from(Degrees(90.0))).0,
            1.0e-8
        ));
    }
}
