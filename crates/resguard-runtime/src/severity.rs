//! Severity estimators — pure functions from raw readings to [0,1] scores.
//!
//! Denominators are floor-clamped rather than rejected so severities stay
//! defined even under degenerate controller configuration; invalid config
//! surfaces lazily here instead of as an error.

/// Weight of the temperature-excess term in thermal severity.
pub const THERMAL_BASE_WEIGHT: f64 = 0.7;
/// Weight of the ambient-temperature term in thermal severity.
pub const THERMAL_AMBIENT_WEIGHT: f64 = 0.3;
/// Ambient temperature (°C) below which ambient contributes nothing.
pub const AMBIENT_BASELINE: f64 = 25.0;
/// Ambient span (°C) over which the ambient term saturates.
pub const AMBIENT_SPAN: f64 = 20.0;
/// Floor for the target-to-max-safe span (°C).
pub const MIN_THERMAL_SPAN: f64 = 1.0;
/// Severity reported while load sits at or under the safe limit.
pub const POWER_BASE_SEVERITY: f64 = 0.2;
/// Floor for the safe-limit-to-capacity span (kW).
pub const MIN_POWER_SPAN: f64 = 1e-4;

/// Thermal severity: how far the temperature has left safe operation.
///
/// Blends excess over the controller's target (normalized by the safe
/// span, weight 0.7) with ambient excess over 25 °C (normalized by
/// 20 °C, weight 0.3). Every term and the sum are clamped to [0,1].
pub fn thermal_severity(
    current_temp: f64,
    target_temp: f64,
    max_safe_temp: f64,
    ambient_temp: f64,
) -> f64 {
    let span = (max_safe_temp - target_temp).max(MIN_THERMAL_SPAN);
    let base = ((current_temp - target_temp) / span).clamp(0.0, 1.0);
    let ambient = ((ambient_temp - AMBIENT_BASELINE) / AMBIENT_SPAN).clamp(0.0, 1.0);
    (THERMAL_BASE_WEIGHT * base + THERMAL_AMBIENT_WEIGHT * ambient).clamp(0.0, 1.0)
}

/// Power severity: piecewise over the safe limit and the capacity ceiling.
///
/// Flat 0.2 at or under the safe limit (capacity * (1 - margin)), flat 1.0
/// at or over capacity, linear in between.
pub fn power_severity(current_load_kw: f64, max_capacity_kw: f64, safety_margin: f64) -> f64 {
    let safe_limit = max_capacity_kw * (1.0 - safety_margin);

    if current_load_kw <= safe_limit {
        POWER_BASE_SEVERITY
    } else if current_load_kw >= max_capacity_kw {
        1.0
    } else {
        let span = (max_capacity_kw - safe_limit).max(MIN_POWER_SPAN);
        let overload = (current_load_kw - safe_limit) / span;
        (POWER_BASE_SEVERITY + (1.0 - POWER_BASE_SEVERITY) * overload).clamp(0.0, 1.0)
    }
}
