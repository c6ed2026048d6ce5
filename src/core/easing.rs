use crate::constants::SCROLL_MS_PER_PX;

/// Quadratic ease-in/out (Penner).
///
/// `t` is elapsed time, `b` the start value, `c` the total change and `d` the
/// duration. Symmetric: accelerates over the first half, decelerates over the
/// second, passing through `b + c / 2` at `t = d / 2`.
///
/// A zero, negative or non-finite duration has no curve to follow and yields
/// the destination `b + c`.
#[inline]
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d.is_nan() || d <= 0.0 || d.is_infinite() {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

/// Duration for a run with no fixed duration: constant travel speed.
#[inline]
pub fn derived_duration(start: f64, end: f64) -> f64 {
    (end - start).abs() * SCROLL_MS_PER_PX
}
