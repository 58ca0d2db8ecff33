pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Error function, Abramowitz & Stegun 7.1.26 (absolute error below 1.5e-7).
pub(crate) fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Fraction of a unit-area Gaussian (std dev `sigma`) centered at `center` that falls
/// inside `[lo, hi]`.
pub(crate) fn gaussian_coverage(lo: f64, hi: f64, center: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return if center >= lo && center < hi { 1.0 } else { 0.0 };
    }
    let k = 1.0 / (sigma * std::f64::consts::SQRT_2);
    (0.5 * (erf((hi - center) * k) - erf((lo - center) * k))).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
