// src/repositories/recipe_repository.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::recipe::{FixedCosts, RecipeLine, SavedRecipe};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn save(&self, recipe: &SavedRecipe) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<SavedRecipe>>;
    /// Newest-first, matching the saved list in the UI
    fn list_all(&self) -> AppResult<Vec<SavedRecipe>>;
    fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct SqliteRecipeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteRecipeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_recipe(row: &Row) -> Result<SavedRecipe, rusqlite::Error> {
        let id = Uuid::parse_str(&row.get::<_, String>("id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let name: String = row.get("name")?;

        let lines: Vec<RecipeLine> = serde_json::from_str(&row.get::<_, String>("lines")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let fixed_costs = FixedCosts {
            packaging: row.get("packaging")?,
            cutlery: row.get("cutlery")?,
            extras: row.get("extras")?,
        };

        let saved_at = DateTime::parse_from_rfc3339(&row.get::<_, String>("saved_at")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(SavedRecipe {
            id,
            name,
            lines,
            fixed_costs,
            sale_price: row.get("sale_price")?,
            total_cost: row.get("total_cost")?,
            margin: row.get("margin")?,
            margin_percent: row.get("margin_percent")?,
            saved_at,
        })
    }
}

impl RecipeRepository for SqliteRecipeRepository {
    fn save(&self, recipe: &SavedRecipe) -> AppResult<()> {
        let conn = self.pool.get()?;

        let lines = serde_json::to_string(&recipe.lines)?;

        conn.execute(
            "INSERT OR REPLACE INTO saved_recipes
             (id, name, lines, packaging, cutlery, extras,
              sale_price, total_cost, margin, margin_percent, saved_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                recipe.id.to_string(),
                recipe.name,
                lines,
                recipe.fixed_costs.packaging,
                recipe.fixed_costs.cutlery,
                recipe.fixed_costs.extras,
                recipe.sale_price,
                recipe.total_cost,
                recipe.margin,
                recipe.margin_percent,
                recipe.saved_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<SavedRecipe>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM saved_recipes WHERE id = ?1")?;

        match stmt.query_row(params![id.to_string()], Self::row_to_recipe) {
            Ok(recipe) => Ok(Some(recipe)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<SavedRecipe>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM saved_recipes ORDER BY saved_at DESC")?;

        let recipes: Vec<SavedRecipe> = stmt
            .query_map([], Self::row_to_recipe)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "DELETE FROM saved_recipes WHERE id = ?1",
            params![id.to_string()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool_at, initialize_database};
    use crate::domain::unit::Unit;

    fn test_repo() -> (tempfile::TempDir, SqliteRecipeRepository) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool_at(&dir.path().join("test.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        (dir, SqliteRecipeRepository::new(Arc::new(pool)))
    }

    fn sample_recipe(name: &str) -> SavedRecipe {
        let mut recipe = SavedRecipe::new(
            name.to_string(),
            vec![
                RecipeLine::new(Uuid::new_v4(), 500.0, Unit::G),
                RecipeLine::empty(),
            ],
            FixedCosts::new(5.0, 2.0, 3.0),
            1000.0,
        );
        recipe.total_cost = 610.0;
        recipe.margin = 390.0;
        recipe.margin_percent = 39.0;
        recipe
    }

    #[test]
    fn test_save_and_get_round_trip() {
        let (_dir, repo) = test_repo();
        let recipe = sample_recipe("Pizza Muzzarella");

        repo.save(&recipe).unwrap();
        let loaded = repo.get_by_id(recipe.id).unwrap().unwrap();

        assert_eq!(loaded.id, recipe.id);
        assert_eq!(loaded.name, recipe.name);
        assert_eq!(loaded.lines.len(), 2);
        assert_eq!(loaded.lines[0].ingredient_id, recipe.lines[0].ingredient_id);
        assert_eq!(loaded.fixed_costs.packaging, 5.0);
        assert_eq!(loaded.total_cost, 610.0);
        assert_eq!(loaded.margin_percent, 39.0);
    }

    #[test]
    fn test_list_all_is_newest_first() {
        let (_dir, repo) = test_repo();

        let mut older = sample_recipe("Pan");
        older.saved_at = Utc::now() - chrono::Duration::hours(2);
        let newer = sample_recipe("Empanadas");

        repo.save(&older).unwrap();
        repo.save(&newer).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Empanadas");
        assert_eq!(all[1].name, "Pan");
    }

    #[test]
    fn test_delete_removes_row() {
        let (_dir, repo) = test_repo();
        let recipe = sample_recipe("Tarta");
        repo.save(&recipe).unwrap();

        repo.delete(recipe.id).unwrap();
        assert!(repo.get_by_id(recipe.id).unwrap().is_none());
    }
}
