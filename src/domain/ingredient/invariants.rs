use super::entity::Ingredient;
use crate::domain::{DomainError, DomainResult};

/// Validates all Ingredient invariants
/// These are the absolute rules that must hold for an Ingredient to be valid
pub fn validate_ingredient(ingredient: &Ingredient) -> DomainResult<()> {
    validate_name(&ingredient.name)?;
    validate_purchase_price(ingredient.purchase_price)?;
    validate_purchase_quantity(ingredient.purchase_quantity)?;
    Ok(())
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Ingredient name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Purchase price must be a finite, non-negative number
fn validate_purchase_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Purchase price must be non-negative, got {}",
            price
        )));
    }
    Ok(())
}

/// Package quantity must be strictly positive; the costing engine divides
/// by it (behind a guard, but a zero here is always a data-entry mistake)
fn validate_purchase_quantity(quantity: f64) -> DomainResult<()> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Purchase quantity must be positive, got {}",
            quantity
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Ingredient domain:
///
/// 1. Identity (UUID) is immutable
/// 2. Name cannot be empty
/// 3. purchase_price >= 0
/// 4. purchase_quantity > 0
/// 5. Created timestamp never changes
/// 6. Updated timestamp reflects last modification
/// 7. Deleting an ingredient never cascades into saved recipes

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::unit::Unit;

    #[test]
    fn test_valid_ingredient() {
        let item = Ingredient::new("Harina 0000".to_string(), 1500.0, 1.0, Unit::Kg);
        assert!(validate_ingredient(&item).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let item = Ingredient::new("   ".to_string(), 1500.0, 1.0, Unit::Kg);
        assert!(validate_ingredient(&item).is_err());
    }

    #[test]
    fn test_negative_price_fails() {
        let item = Ingredient::new("Tomate".to_string(), -1.0, 1.0, Unit::Kg);
        assert!(validate_ingredient(&item).is_err());
    }

    #[test]
    fn test_zero_quantity_fails() {
        let item = Ingredient::new("Tomate".to_string(), 800.0, 0.0, Unit::Kg);
        assert!(validate_ingredient(&item).is_err());
    }
}
