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

//! The helmert module contains the 7 parameter
//! [Helmert transformation](https://en.wikipedia.org/wiki/Helmert_transformation)
//! between the geocentric coordinates of two datums:
//!
//!   `X2 = T + (1 + s) * R * X1`

use crate::Radians;
use glam::{DMat3, DVec3};

/// The number of radians in an arc second.
const RADIANS_PER_ARC_SECOND: f64 = core::f64::consts::PI / (180.0 * 3600.0);

/// How the rotation matrix is calculated from the rotation angles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationModel {
    /// The product of the rotations about the x, y and z axes: `Rx * Ry * Rz`.
    #[default]
    Exact,
    /// The first order approximation for small angles: `I + skew(r)`.
    SmallAngle,
}

/// A 7 parameter Helmert transformation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelmertTransform {
    /// The translation in metres.
    pub translation: DVec3,
    /// The rotations about the x, y and z axes.
    pub rotation: [Radians; 3],
    /// The scale correction, a ratio.
    pub scale: f64,
    /// How to calculate the rotation matrix.
    pub model: RotationModel,
}

impl Default for HelmertTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl HelmertTransform {
    /// Constructor.
    /// * `translation` - the translation in metres.
    /// * `rotation` - the rotations about the x, y and z axes.
    /// * `scale` - the scale correction, a ratio.
    #[must_use]
    pub const fn new(translation: DVec3, rotation: [Radians; 3], scale: f64) -> Self {
        Self {
            translation,
            rotation,
            scale,
            model: RotationModel::Exact,
        }
    }

    /// The transformation that does not change coordinates.
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(DVec3::ZERO, [Radians(0.0), Radians(0.0), Radians(0.0)], 0.0)
    }

    /// Construct a transformation from parameters in the units that
    /// datum transformations are usually published in.
    /// * `translation` - the translation in metres.
    /// * `rotation` - the rotations about the x, y and z axes in arc seconds.
    /// * `scale` - the scale correction in parts per million.
    /// # Examples
    /// ```
    /// use geo_ellipsoid::{DVec3, HelmertTransform};
    ///
    /// let transform = HelmertTransform::from_arc_seconds_and_ppm(
    ///     DVec3::new(-168.0, -60.0, 320.0), [0.0; 3], 0.0);
    /// let xyz = transform.apply(&DVec3::new(4_000_000.0, 0.0, 5_000_000.0));
    /// assert_eq!(DVec3::new(3_999_832.0, -60.0, 5_000_320.0), xyz);
    /// ```
    #[must_use]
    pub fn from_arc_seconds_and_ppm(translation: DVec3, rotation: [f64; 3], scale: f64) -> Self {
        Self::new(
            translation,
            rotation.map(|r| Radians(r * RADIANS_PER_ARC_SECOND)),
            scale * 1.0e-6,
        )
    }

    /// Set the rotation model.
    #[must_use]
    pub const fn with_model(mut self, model: RotationModel) -> Self {
        self.model = model;
        self
    }

    /// The rotation matrix of the transformation.
    #[must_use]
    pub fn rotation_matrix(&self) -> DMat3 {
        let [rx, ry, rz] = self.rotation.map(|r| r.0);
        match self.model {
            RotationModel::Exact => {
                DMat3::from_rotation_x(rx) * DMat3::from_rotation_y(ry) * DMat3::from_rotation_z(rz)
            }
            RotationModel::SmallAngle => DMat3::from_cols(
                DVec3::new(1.0, rz, -ry),
                DVec3::new(-rz, 1.0, rx),
                DVec3::new(ry, -rx, 1.0),
            ),
        }
    }

    /// Transform geocentric coordinates.
    /// * `xyz` - the geocentric coordinates in metres.
    #[must_use]
    pub fn apply(&self, xyz: &DVec3) -> DVec3 {
        self.translation + (1.0 + self.scale) * (self.rotation_matrix() * *xyz)
    }
}
