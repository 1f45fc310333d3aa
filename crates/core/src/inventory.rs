//! Inventory arithmetic.

use crate::error::CoreError;
use crate::types::Units;

/// Reject negative stock levels supplied by staff.
pub fn validate_quantity(quantity: Units) -> Result<(), CoreError> {
    if quantity < 0 {
        return Err(CoreError::Validation(format!(
            "Quantity must not be negative, got {quantity}"
        )));
    }
    Ok(())
}

/// Requests must ask for at least one unit.
pub fn validate_units(units: Units) -> Result<(), CoreError> {
    if units < 1 {
        return Err(CoreError::Validation(format!(
            "Units must be at least 1, got {units}"
        )));
    }
    Ok(())
}

/// Compute the stock left after fulfilling `units`.
///
/// Fails with a conflict rather than producing a negative quantity.
pub fn remaining_after(
    blood_type: &str,
    on_hand: Units,
    units: Units,
) -> Result<Units, CoreError> {
    if units > on_hand {
        return Err(CoreError::Conflict(format!(
            "Insufficient {blood_type} stock: {on_hand} unit(s) available, {units} requested"
        )));
    }
    Ok(on_hand - units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn zero_quantity_allowed() {
        assert!(validate_quantity(0).is_ok());
    }

    #[test]
    fn negative_quantity_rejected() {
        assert_matches!(validate_quantity(-1), Err(CoreError::Validation(_)));
    }

    #[test]
    fn zero_units_rejected() {
        assert_matches!(validate_units(0), Err(CoreError::Validation(_)));
        assert!(validate_units(1).is_ok());
    }

    #[test]
    fn exact_stock_drains_to_zero() {
        assert_eq!(remaining_after("O+", 4, 4).unwrap(), 0);
    }

    #[test]
    fn overdraw_is_a_conflict() {
        let err = remaining_after("B-", 1, 3).unwrap_err();
        assert_matches!(err, CoreError::Conflict(ref msg) if msg.contains("Insufficient B- stock"));
    }
}
