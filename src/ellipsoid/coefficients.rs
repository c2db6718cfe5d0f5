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

//! This module contains the coefficients of the Fourier series used to
//! convert the rectifying, authalic and conformal latitudes back to geodetic
//! latitudes, together with the functions to evaluate them.
//!
//! Each series has the form:
//!   `phi = x + sum(c[i] * sin(2*(i+1) * x), i, 0, 9)`
//!
//! where `c[i]` is a polynomial in the third flattening `n`, accurate to `n^10`.
//! See CFF Karney [On auxiliary latitudes](https://arxiv.org/abs/2212.05818).

#![allow(clippy::unreadable_literal)]

use angle_sc::{Angle, Radians};

/// The number of terms in each series.
pub const SERIES_ORDER: usize = 10;

/// The rectifying to geodetic latitude coefficients.
/// Term `i` is `n^(i+1)` times a polynomial in `n^2`.
const PHIMU: [&[f64]; SERIES_ORDER] = [
    &[
        3. / 2.,
        -27. / 32.,
        269. / 512.,
        -6607. / 24576.,
        40941. / 327680.,
    ],
    &[
        21. / 16.,
        -55. / 32.,
        6759. / 4096.,
        -155113. / 122880.,
        39591143. / 47185920.,
    ],
    &[
        151. / 96.,
        -417. / 128.,
        87963. / 20480.,
        -572057. / 131072.,
    ],
    &[
        1097. / 512.,
        -15543. / 2560.,
        2514467. / 245760.,
        -33432797. / 2580480.,
    ],
    &[8011. / 2560., -69119. / 6144., 1515771. / 65536.],
    &[
        293393. / 61440.,
        -5962461. / 286720.,
        463409979. / 9175040.,
    ],
    &[6459601. / 860160., -1258281. / 32768.],
    &[332287993. / 27525120., -8778422179. / 123863040.],
    &[116391263. / 5898240.],
    &[32385167569. / 990904320.],
];

/// The authalic to geodetic latitude coefficients.
/// Term `i` is `n^(i+1)` times a polynomial in `n`.
const PHIXI: [&[f64]; SERIES_ORDER] = [
    &[
        4. / 3.,
        4. / 45.,
        -16. / 35.,
        -2582. / 14175.,
        60136. / 467775.,
        28112932. / 212837625.,
        22947844. / 1915538625.,
        -1683291094. / 37574026875.,
        -338504669588. / 12993098493375.,
        4371583262356. / 1286316750844125.,
    ],
    &[
        46. / 45.,
        152. / 945.,
        -11966. / 14175.,
        -21016. / 51975.,
        251310128. / 638512875.,
        1228352. / 3007125.,
        -14351220203. / 488462349375.,
        -59522305664. / 265165275375.,
        -28128931336204. / 306265893058125.,
    ],
    &[
        3044. / 2835.,
        3802. / 14175.,
        -94388. / 66825.,
        -8797648. / 10945935.,
        138128272. / 147349125.,
        505559334506. / 488462349375.,
        -7651134508792. / 38979295480125.,
        -2747215563967192. / 3573102085678125.,
    ],
    &[
        6059. / 4725.,
        41072. / 93555.,
        -1472637812. / 638512875.,
        -45079184. / 29469825.,
        973080708361. / 488462349375.,
        30918739454896. / 12993098493375.,
        -1405101318247556. / 2143861251406875.,
    ],
    &[
        768272. / 467775.,
        455935736. / 638512875.,
        -550000184. / 147349125.,
        -1385645336626. / 488462349375.,
        51535685606752. / 12993098493375.,
        276058103987059936. / 53596531285171875.,
    ],
    &[
        4210684958. / 1915538625.,
        443810768. / 383107725.,
        -2939205114427. / 488462349375.,
        -604166407968208. / 116937886440375.,
        81173734025797618. / 10719306257034375.,
    ],
    &[
        387227992. / 127702575.,
        101885255158. / 54273594375.,
        -125789879410192. / 12993098493375.,
        -99508459264029736. / 10719306257034375.,
    ],
    &[
        1392441148867. / 325641566250.,
        39504919358864. / 12993098493375.,
        -500374928896539392. / 32157918771103125.,
    ],
    &[
        2151110306499536. / 350813659321125.,
        31664196627408368. / 6431583754220625.,
    ],
    &[68217869975393752. / 7656647326453125.],
];

/// The conformal to geodetic latitude coefficients.
/// Term `i` is `n^(i+1)` times a polynomial in `n`.
const PHICHI: [&[f64]; SERIES_ORDER] = [
    &[
        2.,
        -2. / 3.,
        -2.,
        116. / 45.,
        26. / 45.,
        -2854. / 675.,
        16822. / 4725.,
        189416. / 99225.,
        -1113026. / 165375.,
        22150106. / 4465125.,
    ],
    &[
        7. / 3.,
        -8. / 5.,
        -227. / 45.,
        2704. / 315.,
        2323. / 945.,
        -31256. / 1575.,
        141514. / 8505.,
        10453448. / 606375.,
        -66355687. / 1403325.,
    ],
    &[
        56. / 15.,
        -136. / 35.,
        -1262. / 105.,
        73814. / 2835.,
        98738. / 14175.,
        -2363828. / 31185.,
        53146406. / 779625.,
        1674405706. / 18243225.,
    ],
    &[
        4279. / 630.,
        -332. / 35.,
        -399572. / 14175.,
        11763988. / 155925.,
        14416399. / 935550.,
        -2647902052. / 10135125.,
        23834033824. / 91216125.,
    ],
    &[
        4174. / 315.,
        -144838. / 6237.,
        -2046082. / 31185.,
        258316372. / 1216215.,
        67926842. / 2837835.,
        -76998787574. / 91216125.,
    ],
    &[
        601676. / 22275.,
        -115444544. / 2027025.,
        -2155215124. / 14189175.,
        41561762048. / 70945875.,
        625821359. / 638512875.,
    ],
    &[
        38341552. / 675675.,
        -170079376. / 1216215.,
        -1182085822. / 3378375.,
        493459023622. / 310134825.,
    ],
    &[
        1383243703. / 11351340.,
        -138163416988. / 402026625.,
        -1740830660174. / 2170943775.,
    ],
    &[
        106974149462. / 402026625.,
        -24899113566814. / 29462808375.,
    ],
    &[175201343549. / 297604125.],
];

/// Evaluate a first degree polynomial in x using
/// [Estrin's scheme](https://en.wikipedia.org/wiki/Estrin%27s_scheme).
/// * `coeffs` - the polynomial coefficients.
/// * `x` - the variable.
#[must_use]
fn evaluate_2_coeffs(coeffs: &[f64], x: f64) -> f64 {
    x.mul_add(coeffs[1], coeffs[0])
}

/// Evaluate the polynomial in x using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
/// * `coeffs` - the polynomial coefficients, lowest order first.
/// * `x` - the variable.
///
/// returns zero if `coeffs` is empty.
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    if coeffs.len() == 2 {
        return evaluate_2_coeffs(coeffs, x);
    }

    coeffs.split_last().map_or(0.0, |(last, elements)| {
        elements
            .iter()
            .rev()
            .fold(*last, |result, element| result.mul_add(x, *element))
    })
}

/// Evaluate a table of series coefficients for the third flattening `n`.
/// * `table` - the polynomials of each term.
/// * `n` - the third flattening of the ellipsoid.
/// * `x` - the variable of the polynomials: `n` or `n^2`.
fn evaluate_table(table: &[&[f64]; SERIES_ORDER], n: f64, x: f64) -> [f64; SERIES_ORDER] {
    let mut coeffs = [0.0; SERIES_ORDER];
    let mut n_k = 1.0;
    for (coeff, poly) in coeffs.iter_mut().zip(table.iter()) {
        n_k *= n;
        *coeff = n_k * evaluate_polynomial(poly, x);
    }
    coeffs
}

/// The coefficients of the rectifying to geodetic latitude series.
/// * `n` - the third flattening of the ellipsoid.
/// # Examples
/// ```
/// use geo_ellipsoid::ellipsoid::coefficients::evaluate_coeffs_phimu;
///
/// let coeffs = evaluate_coeffs_phimu(0.0);
/// assert_eq!([0.0; 10], coeffs);
/// ```
#[must_use]
pub fn evaluate_coeffs_phimu(n: f64) -> [f64; SERIES_ORDER] {
    evaluate_table(&PHIMU, n, n * n)
}

/// The coefficients of the authalic to geodetic latitude series.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_phixi(n: f64) -> [f64; SERIES_ORDER] {
    evaluate_table(&PHIXI, n, n)
}

/// The coefficients of the conformal to geodetic latitude series.
/// * `n` - the third flattening of the ellipsoid.
#[must_use]
pub fn evaluate_coeffs_phichi(n: f64) -> [f64; SERIES_ORDER] {
    evaluate_table(&PHICHI, n, n)
}

/// Evaluate the following:
///   `y = sum(c[i] * sin(2*(i+1) * angle), i, 0, n-1)`
/// using [Clenshaw summation](https://en.wikipedia.org/wiki/Clenshaw_algorithm).
/// * `coeffs` - the series coefficients.
/// * `angle` - the Angle.
#[must_use]
pub fn sin_series(coeffs: &[f64], angle: Angle) -> Radians {
    let angle2x = angle.double();

    if angle2x.sin().abs().0 < f64::EPSILON {
        Radians(0.0)
    } else {
        // the Clenshaw ak(theta) parameter, beta(k) = -1
        let ar = 2.0 * angle2x.cos().0;

        let (b1, _) = coeffs
            .iter()
            .rev()
            .fold((0.0, 0.0), |(b1, b2), c| (ar.mul_add(b1, c - b2), b1));
        Radians(angle2x.sin().0 * b1)
    }
}
