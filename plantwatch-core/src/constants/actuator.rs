//! Actuator Thresholds

/// Soil reading below which the soil counts as dry and the actuator blinks.
///
/// In raw ADC counts of the soil probe (10-bit, 0..=1023). Readings are
/// not calibrated; the threshold is chosen against the raw scale.
pub const DRYNESS_THRESHOLD: f32 = 300.0;
