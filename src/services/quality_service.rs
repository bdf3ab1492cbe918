use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QualityError {
    #[error("previous reading has zero impedance, degradation is undefined")]
    ZeroBaseline,

    #[error("degradation is not a finite number")]
    OutOfRange,
}

/// Percentage change from `previous` to `current` impedance:
/// `(current - previous) / previous * 100`.
pub fn degradation_percent(previous: f64, current: f64) -> Result<f64, QualityError> {
    if previous == 0.0 {
        return Err(QualityError::ZeroBaseline);
    }

    let degradation = (current - previous) / previous * 100.0;
    if !degradation.is_finite() {
        return Err(QualityError::OutOfRange);
    }
    Ok(degradation)
}
