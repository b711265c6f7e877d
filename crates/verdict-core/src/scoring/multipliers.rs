// Miss-penalty curve constants. The deduction ramps from START_DEDUC% at
// START adjusted misses to END_DEDUC% at END, with one forgiven miss per
// GM_CONST tiles.
pub const GM_CONST: u32 = 315;
const START: f64 = 1.0;
const END: f64 = 50.0;
const START_DEDUC: f64 = 10.0;
const END_DEDUC: f64 = 50.0;
const PWR: f64 = 0.7;

/// Multiplier awarded for a pass without a single miss.
pub const NO_MISS_BONUS: f64 = 1.1;

/// Penalty applied on top of the miss multiplier for no-hold-tap passes.
pub const NO_HOLD_TAP_PENALTY: f64 = 0.9;

/// Multiplier at exactly 100% accuracy.
pub const PERFECT_XACC_MULTIPLIER: f64 = 6.0;

/// Accuracy multiplier from the xacc percentage (0-100 scale).
///
/// The breakpoints and exponents are a tuned curve, not an approximation;
/// the branches are intentionally discontinuous.
pub fn xacc_multiplier(xacc_percent: f64) -> f64 {
    if xacc_percent < 95.0 {
        1.0
    } else if xacc_percent < 99.0 {
        (xacc_percent - 94.0).powf(1.6) / 12.1326 + 0.9176
    } else if xacc_percent < 99.8 {
        (xacc_percent - 97.0).powf(1.5484) - 0.9249
    } else if xacc_percent < 100.0 {
        (xacc_percent - 99.0) * 5.0
    } else {
        PERFECT_XACC_MULTIPLIER
    }
}

/// Unreleased accuracy multiplier curve, kept isolated until it ships.
///
/// Rewards the 95-100% band along a hyperbola and pays 10x at a flawless
/// pass. Not referenced by any formula version.
#[cfg(feature = "experimental-xacc-curve")]
pub fn xacc_multiplier_unreleased(xacc_percent: f64) -> f64 {
    let xacc = xacc_percent / 100.0;
    if xacc_percent < 95.0 {
        1.0
    } else if xacc_percent < 100.0 {
        -0.027 / (xacc - 1.0054) + 0.513
    } else {
        10.0
    }
}

/// First-generation speed multiplier: linear pieces.
pub fn speed_multiplier_v1(speed: f64) -> f64 {
    if speed == 1.0 {
        1.0
    } else if speed < 1.0 {
        0.0
    } else if speed < 1.1 {
        -3.5 * speed + 4.5
    } else if speed < 1.5 {
        0.65
    } else if speed < 2.0 {
        0.7 * speed - 0.4
    } else {
        1.0
    }
}

/// Second-generation speed multiplier: piecewise quadratic, zero at 2x and
/// beyond.
pub fn speed_multiplier_v2(speed: f64) -> f64 {
    if speed == 1.0 {
        1.0
    } else if speed < 1.0 {
        0.0
    } else if speed < 1.1 {
        25.0 * (speed - 1.1).powi(2) + 0.75
    } else if speed < 1.2 {
        0.75
    } else if speed < 1.25 {
        50.0 * (speed - 1.2).powi(2) + 0.75
    } else if speed < 1.3 {
        -50.0 * (speed - 1.3).powi(2) + 1.0
    } else if speed < 1.5 {
        1.0
    } else if speed < 1.75 {
        2.0 * (speed - 1.5).powi(2) + 1.0
    } else if speed < 2.0 {
        -2.0 * (speed - 2.0).powi(2) + 1.25
    } else {
        0.0
    }
}

/// Speed multiplier for marathon levels: any deviation from 1x decays
/// linearly to zero at 2x, and slowdown scores nothing.
pub fn marathon_speed_multiplier(speed: f64) -> f64 {
    if speed == 1.0 {
        1.0
    } else if speed > 1.0 {
        (2.0 - speed).max(0.0)
    } else {
        0.0
    }
}

/// Miss-penalty multiplier from the miss count and tile count.
///
/// A pass without misses earns [`NO_MISS_BONUS`] outright. Otherwise one
/// miss per [`GM_CONST`] tiles is forgiven and the rest walk down the
/// deduction curve.
pub fn miss_penalty_multiplier(misses: u32, tiles: u32) -> f64 {
    if misses == 0 {
        return NO_MISS_BONUS;
    }
    let mid = (START + END) / 2.0;
    let mid_deduc = (START_DEDUC + END_DEDUC) / 2.0;
    // Integer division floors the forgiven-miss allowance.
    let adjusted = (f64::from(misses) - f64::from(tiles / GM_CONST)).max(0.0);

    if adjusted <= 0.0 {
        1.0
    } else if adjusted <= START {
        1.0 - START_DEDUC / 100.0
    } else if adjusted <= mid {
        let k_one = ((adjusted - START) / (mid - START)).powf(PWR) * (mid_deduc - START_DEDUC)
            / 100.0;
        1.0 - START_DEDUC / 100.0 - k_one
    } else if adjusted <= END {
        let k_two =
            ((adjusted - mid) / (END - mid)).powf(PWR) * (END_DEDUC - mid_deduc) / 100.0;
        1.0 - mid_deduc / 100.0 - k_two
    } else {
        1.0 - END_DEDUC / 100.0
    }
}
