// src/services/recipe_service_tests.rs
//
// UNIT TESTS: Recipe previews and snapshots
//
// PURPOSE:
// - Prove that saving freezes the form and caches freshly computed
//   derived fields
// - Prove that previews surface soft states (unit mismatch, orphaned
//   reference) without erroring
// - Prove that validation rejects an empty recipe name before persistence

#[cfg(test)]
mod recipe_tests {
    use crate::db::{create_connection_pool_at, initialize_database};
    use crate::domain::costing::LineCostStatus;
    use crate::domain::unit::Unit;
    use crate::error::AppError;
    use crate::events::create_event_bus;
    use crate::repositories::{
        IngredientRepository, RecipeRepository, SqliteIngredientRepository, SqliteRecipeRepository,
    };
    use crate::services::{
        CreateIngredientRequest, InventoryService, RecipeFormInput, RecipeLineInput,
        RecipeService, SaveRecipeRequest,
    };
    use std::sync::Arc;
    use uuid::Uuid;

    fn setup() -> (tempfile::TempDir, InventoryService, RecipeService) {
        let dir = tempfile::tempdir().unwrap();
        let pool = Arc::new(create_connection_pool_at(&dir.path().join("test.db")).unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();

        let ingredient_repo: Arc<dyn IngredientRepository> =
            Arc::new(SqliteIngredientRepository::new(Arc::clone(&pool)));
        let recipe_repo: Arc<dyn RecipeRepository> =
            Arc::new(SqliteRecipeRepository::new(Arc::clone(&pool)));
        let bus = create_event_bus();

        let inventory = InventoryService::new(
            Arc::clone(&ingredient_repo),
            Arc::clone(&recipe_repo),
            Arc::clone(&bus),
        );
        let recipes = RecipeService::new(recipe_repo, ingredient_repo, bus);

        (dir, inventory, recipes)
    }

    fn add_kg_ingredient(inventory: &InventoryService, name: &str, price: &str) -> Uuid {
        inventory
            .create_ingredient(CreateIngredientRequest {
                name: name.to_string(),
                price: price.to_string(),
                quantity: "1".to_string(),
                unit: Unit::Kg,
            })
            .unwrap()
    }

    fn form_with_line(line: RecipeLineInput) -> RecipeFormInput {
        RecipeFormInput {
            lines: vec![line],
            packaging: "5".to_string(),
            cutlery: "".to_string(),
            extras: "2".to_string(),
            sale_price: "100".to_string(),
        }
    }

    #[test]
    fn test_save_caches_computed_derived_fields() {
        let (_dir, inventory, recipes) = setup();
        let flour = add_kg_ingredient(&inventory, "Harina", "100");

        let id = recipes
            .save_recipe(SaveRecipeRequest {
                name: "Pan casero".to_string(),
                form: form_with_line(RecipeLineInput {
                    ingredient_id: Some(flour),
                    quantity: "500".to_string(),
                    unit: Unit::G,
                }),
            })
            .unwrap();

        let saved = recipes.get_recipe(id).unwrap().unwrap();
        // 50 ingredients + 5 packaging + 0 cutlery (unparsable) + 2 extras
        assert!((saved.total_cost - 57.0).abs() < 1e-9);
        assert!((saved.margin - 43.0).abs() < 1e-9);
        assert_eq!(saved.margin_percent, 43.0);
        assert_eq!(saved.lines.len(), 1);
        assert_eq!(saved.fixed_costs.cutlery, 0.0);
    }

    #[test]
    fn test_save_rejects_empty_name_before_persisting() {
        let (_dir, _inventory, recipes) = setup();

        let result = recipes.save_recipe(SaveRecipeRequest {
            name: "   ".to_string(),
            form: form_with_line(RecipeLineInput {
                ingredient_id: None,
                quantity: "".to_string(),
                unit: Unit::G,
            }),
        });

        assert!(matches!(result, Err(AppError::Domain(_))));
        assert!(recipes.list_recipes().unwrap().is_empty());
    }

    #[test]
    fn test_preview_flags_unit_mismatch() {
        let (_dir, inventory, recipes) = setup();
        let flour = add_kg_ingredient(&inventory, "Harina", "100");

        let summary = recipes
            .cost_preview(&form_with_line(RecipeLineInput {
                ingredient_id: Some(flour),
                quantity: "100".to_string(),
                unit: Unit::Ml, // mass purchase, volume usage
            }))
            .unwrap();

        assert_eq!(summary.line_costs.len(), 1);
        assert_eq!(summary.line_costs[0].status, LineCostStatus::UnitMismatch);
        assert_eq!(summary.line_costs[0].amount, 0.0);
        // Only fixed costs remain
        assert!((summary.total_cost - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_preview_flags_orphaned_reference() {
        let (_dir, _inventory, recipes) = setup();

        let summary = recipes
            .cost_preview(&form_with_line(RecipeLineInput {
                ingredient_id: Some(Uuid::new_v4()),
                quantity: "100".to_string(),
                unit: Unit::G,
            }))
            .unwrap();

        assert_eq!(
            summary.line_costs[0].status,
            LineCostStatus::IngredientMissing
        );
        assert_eq!(summary.line_costs[0].amount, 0.0);
    }

    #[test]
    fn test_suggest_usage_unit_for_kg_purchase() {
        let (_dir, inventory, recipes) = setup();
        let flour = add_kg_ingredient(&inventory, "Harina", "100");

        assert_eq!(recipes.suggest_usage_unit(flour).unwrap(), Unit::G);
    }

    #[test]
    fn test_delete_missing_recipe_is_not_found() {
        let (_dir, _inventory, recipes) = setup();
        let result = recipes.delete_recipe(Uuid::new_v4());
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
