//! Unit conversion utility.
//!
//! Conversion is never performed by the usage operation; callers convert
//! amounts here first when their unit differs from the item's unit.

use frescipe_core::{AppError, AppResult};

use super::unit::MeasurementUnit;

/// Convert `amount` from one unit to another within the same dimension.
///
/// Mass converts through grams and volume through millilitres. Count and
/// descriptive units only convert to themselves.
pub fn convert(amount: f64, from: MeasurementUnit, to: MeasurementUnit) -> AppResult<f64> {
    if !amount.is_finite() {
        return Err(AppError::validation("Amount must be a finite number"));
    }
    if from == to {
        return Ok(amount);
    }

    match (from.base_factor(), to.base_factor()) {
        (Some(from_factor), Some(to_factor)) if from.dimension() == to.dimension() => {
            Ok(amount * from_factor / to_factor)
        }
        _ => Err(AppError::new(
            frescipe_core::ErrorKind::UnitMismatch,
            format!("Cannot convert from {from} to {to}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frescipe_core::ErrorKind;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_gram_to_kilogram() {
        assert_close(
            convert(1500.0, MeasurementUnit::Gram, MeasurementUnit::Kilogram).unwrap(),
            1.5,
        );
    }

    #[test]
    fn test_gram_to_ounce_and_pound() {
        assert_close(
            convert(1.0, MeasurementUnit::Gram, MeasurementUnit::Ounce).unwrap(),
            0.035_274,
        );
        assert_close(
            convert(1000.0, MeasurementUnit::Gram, MeasurementUnit::Pound).unwrap(),
            2.204_622_6,
        );
    }

    #[test]
    fn test_volume_conversions() {
        assert_close(
            convert(1.0, MeasurementUnit::Tablespoon, MeasurementUnit::Teaspoon).unwrap(),
            3.0,
        );
        assert_close(
            convert(2.0, MeasurementUnit::Liter, MeasurementUnit::Milliliter).unwrap(),
            2000.0,
        );
    }

    #[test]
    fn test_identity_for_count_units() {
        assert_eq!(
            convert(3.0, MeasurementUnit::Clove, MeasurementUnit::Clove).unwrap(),
            3.0
        );
    }

    #[test]
    fn test_cross_dimension_rejected() {
        let err = convert(100.0, MeasurementUnit::Gram, MeasurementUnit::Milliliter).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnitMismatch);

        let err = convert(1.0, MeasurementUnit::Piece, MeasurementUnit::Gram).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnitMismatch);
    }
}
