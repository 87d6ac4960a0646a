use crate::config::DecompositionConfig;
use crate::math::Real;
use crate::DecompositionError;
use core::ops::RangeInclusive;

/// Admissible values of [`DecompositionConfig::threshold`].
pub const THRESHOLD_RANGE: RangeInclusive<Real> = 0.01..=1.0;
/// Admissible values of [`DecompositionConfig::preprocess_resolution`].
pub const PREPROCESS_RESOLUTION_RANGE: RangeInclusive<u32> = 5..=1000;

/// Checks the fields of `config` that would crash or hang the backend when out of range.
///
/// Returns the config unchanged on success. NaN thresholds are rejected.
pub fn validate(config: &DecompositionConfig) -> Result<&DecompositionConfig, DecompositionError> {
    if !THRESHOLD_RANGE.contains(&config.threshold) {
        return Err(DecompositionError::OutOfRangeConfig {
            field: "threshold",
            value: config.threshold,
            min: *THRESHOLD_RANGE.start(),
            max: *THRESHOLD_RANGE.end(),
        });
    }

    if !PREPROCESS_RESOLUTION_RANGE.contains(&config.preprocess_resolution) {
        return Err(DecompositionError::OutOfRangeConfig {
            field: "preprocess resolution",
            value: config.preprocess_resolution as Real,
            min: *PREPROCESS_RESOLUTION_RANGE.start() as Real,
            max: *PREPROCESS_RESOLUTION_RANGE.end() as Real,
        });
    }

    Ok(config)
}
