//! Path parameter helpers.

use frescipe_core::error::AppError;
use frescipe_core::types::FridgeItemId;

/// Parses a fridge item ID from a path segment.
pub fn parse_item_id(s: &str) -> Result<FridgeItemId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid item ID: '{s}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use frescipe_core::ErrorKind;

    #[test]
    fn test_parse_item_id() {
        let id = FridgeItemId::new();
        assert_eq!(parse_item_id(&id.to_string()).unwrap(), id);

        let err = parse_item_id("fridge-1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
