use super::entity::{FixedCosts, SavedRecipe};
use crate::domain::{DomainError, DomainResult};

/// Validates all SavedRecipe invariants
pub fn validate_recipe(recipe: &SavedRecipe) -> DomainResult<()> {
    validate_name(&recipe.name)?;
    validate_fixed_costs(&recipe.fixed_costs)?;
    validate_sale_price(recipe.sale_price)?;
    Ok(())
}

/// Recipe name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Recipe name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Each fixed cost is independently non-negative; there is no
/// cross-invariant between them
fn validate_fixed_costs(fixed: &FixedCosts) -> DomainResult<()> {
    for (label, value) in [
        ("packaging", fixed.packaging),
        ("cutlery", fixed.cutlery),
        ("extras", fixed.extras),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvariantViolation(format!(
                "Fixed cost '{}' must be non-negative, got {}",
                label, value
            )));
        }
    }
    Ok(())
}

/// Sale price must be finite and non-negative. A price of zero is allowed
/// (margin percent is then defined as 0); a negative margin is a valid
/// business state, a negative price is not.
fn validate_sale_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Sale price must be non-negative, got {}",
            price
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Recipe domain:
///
/// 1. Identity (UUID) is immutable
/// 2. Name cannot be empty
/// 3. Lines keep their stored order
/// 4. Lines reference ingredients by id; broken references are allowed
/// 5. usage_unit is unconstrained relative to the ingredient's purchase
///    unit (mismatch is detected at costing time, not prevented)
/// 6. Derived fields always reflect the inventory as of the last
///    recalculation pass

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::RecipeLine;
    use uuid::Uuid;

    fn recipe(name: &str) -> SavedRecipe {
        SavedRecipe::new(
            name.to_string(),
            vec![RecipeLine::new(Uuid::new_v4(), 100.0, crate::domain::unit::Unit::G)],
            FixedCosts::default(),
            1000.0,
        )
    }

    #[test]
    fn test_valid_recipe() {
        assert!(validate_recipe(&recipe("Pizza Muzzarella")).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(validate_recipe(&recipe("  ")).is_err());
    }

    #[test]
    fn test_negative_fixed_cost_fails() {
        let mut r = recipe("Pizza");
        r.fixed_costs.packaging = -5.0;
        assert!(validate_recipe(&r).is_err());
    }

    #[test]
    fn test_negative_sale_price_fails() {
        let mut r = recipe("Pizza");
        r.sale_price = -1.0;
        assert!(validate_recipe(&r).is_err());
    }
}
