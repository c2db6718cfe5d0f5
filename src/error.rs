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

//! The error module contains the `Error` type returned by the fallible
//! constructors and the strict geocentric conversion.

use thiserror::Error;

/// The result type of the fallible functions in this library.
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("unrecognised ellipsoid initialisation: {0:?}")]
    InvalidEllipsoidInit(String),

    #[error("unrecognised geo point initialisation: {0:?}")]
    InvalidGeoPointInit(String),

    #[error("equatorial radius must be finite and positive, got: {0}")]
    InvalidEquatorialRadius(f64),

    /// Only oblate ellipsoids and spheres are supported: 0 <= f < 1.
    #[error("flattening must be in the range [0, 1), got: {0}")]
    InvalidFlattening(f64),

    /// The polar radius must be in the range (0, a].
    #[error("polar radius must be positive and not exceed the equatorial radius, got: {0}")]
    InvalidPolarRadius(f64),

    #[error("unknown ellipsoid: {0:?}")]
    UnknownEllipsoid(String),

    /// The geocentric to geodetic latitude iteration did not reach machine
    /// precision within the permitted number of iterations.
    #[error("latitude did not converge after {iterations} iterations, residual: {residual:e} radians")]
    NotConverged { iterations: u32, residual: f64 },
}
