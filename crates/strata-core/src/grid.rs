// File: crates/strata-core/src/grid.rs
// Summary: Gridline/tick layout on "nice" values and clean time boundaries.

use chrono::{DateTime, Utc};

use crate::scale::seconds;
use crate::types::{TimeTick, Timestamp, ValueTick};

/// Candidate time steps in seconds, from one second to one week.
const TIME_STEPS: &[i64] = &[
    1, 2, 5, 10, 15, 30,
    60, 2 * 60, 5 * 60, 10 * 60, 15 * 60, 30 * 60,
    3600, 2 * 3600, 3 * 3600, 6 * 3600, 12 * 3600,
    86_400, 2 * 86_400, 7 * 86_400,
];

/// Round a raw step up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Pick the smallest clean time step (in seconds) covering `raw_secs`.
pub fn nice_time_step(raw_secs: f64) -> i64 {
    for &s in TIME_STEPS {
        if s as f64 >= raw_secs {
            return s;
        }
    }
    let day = 86_400f64;
    ((raw_secs / day).ceil() as i64).max(1) * 86_400
}

/// Ticks on round values within `[bottom, top]`, ordered bottom to top.
/// Positions follow the value mapping, so the top tick has the smallest `pos`.
pub fn gridlines_y(bottom: f64, top: f64, pixel_height: f64, approx: usize) -> Vec<ValueTick> {
    if approx == 0 || !(bottom.is_finite() && top.is_finite()) || top <= bottom {
        return Vec::new();
    }
    let span = top - bottom;
    let step = nice_step(span / approx as f64);
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    let eps = step * 1e-9;

    let first = (bottom / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0u32;
    loop {
        let mut v = first + step * i as f64;
        if v > top + eps {
            break;
        }
        if v.abs() < eps {
            v = 0.0;
        }
        let pos = pixel_height * (top - v) / span;
        ticks.push(ValueTick { value: v, pos, label: format!("{v:.decimals$}") });
        i += 1;
    }
    ticks
}

/// Ticks on clean second/minute/hour/day boundaries within `[left, right]`,
/// ordered left to right.
pub fn gridlines_x(left: Timestamp, right: Timestamp, pixel_width: f64, approx: usize) -> Vec<TimeTick> {
    if approx == 0 || right <= left {
        return Vec::new();
    }
    let span = seconds(right - left);
    let step = nice_time_step(span / approx as f64);
    let fmt = time_label_format(step);

    let l = left.timestamp();
    let mut secs = l.div_euclid(step) * step;
    let mut ticks = Vec::new();
    while let Some(t) = DateTime::<Utc>::from_timestamp(secs, 0) {
        if t > right {
            break;
        }
        if t >= left {
            let pos = pixel_width * seconds(t - left) / span;
            ticks.push(TimeTick { value: t, pos, label: t.format(fmt).to_string() });
        }
        secs += step;
    }
    ticks
}

fn time_label_format(step_secs: i64) -> &'static str {
    if step_secs < 60 {
        "%H:%M:%S"
    } else if step_secs < 86_400 {
        "%H:%M"
    } else {
        "%m-%d"
    }
}
