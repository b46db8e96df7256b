pub const fn reverse_lerp(x: f64, start: f64, end: f64) -> f64 {
    f64::clamp((x - start) / (end - start), 0.0, 1.0)
}

/// Saturating strain curve of a finger action.
///
/// Starts at `max_value` plus `bonus` for actions of at most `x_min` ms and
/// falls off with exponent `exp` until it reaches `1 + bonus` at `x_max` ms.
pub fn saturating_curve(
    duration: f64,
    x_min: f64,
    x_max: f64,
    max_value: f64,
    exp: f64,
    bonus: f64,
) -> f64 {
    const LOWEST_DIFFICULTY: f64 = 1.0;

    let ratio = f64::max(0.0, 1.0 - (duration - x_min) / (x_max - x_min));

    LOWEST_DIFFICULTY + bonus + (max_value - LOWEST_DIFFICULTY) * f64::powf(ratio, exp)
}

/// Mean of `values` weighted by `weights`.
///
/// Returns `0.0` if the weights sum up to zero.
pub fn weighted_mean(values: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (weighted_sum, total_weight) = values
        .into_iter()
        .fold((0.0, 0.0), |(sum, total), (value, weight)| {
            (sum + value * weight, total + weight)
        });

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}
