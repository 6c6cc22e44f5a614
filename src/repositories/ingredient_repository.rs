// src/repositories/ingredient_repository.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::ingredient::Ingredient;
use crate::domain::unit::Unit;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait IngredientRepository: Send + Sync {
    fn save(&self, ingredient: &Ingredient) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Ingredient>>;
    fn list_all(&self) -> AppResult<Vec<Ingredient>>;
    fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct SqliteIngredientRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteIngredientRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_ingredient(row: &Row) -> Result<Ingredient, rusqlite::Error> {
        let id = Uuid::parse_str(&row.get::<_, String>("id")?)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let name: String = row.get("name")?;
        let purchase_price: f64 = row.get("purchase_price")?;
        let purchase_quantity: f64 = row.get("purchase_quantity")?;
        // Lenient on purpose: an unknown stored unit degrades to count
        let purchase_unit = Unit::parse(&row.get::<_, String>("purchase_unit")?);

        let created_at = parse_timestamp(&row.get::<_, String>("created_at")?)?;
        let updated_at = parse_timestamp(&row.get::<_, String>("updated_at")?)?;

        Ok(Ingredient {
            id,
            name,
            purchase_price,
            purchase_quantity,
            purchase_unit,
            created_at,
            updated_at,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

impl IngredientRepository for SqliteIngredientRepository {
    fn save(&self, ingredient: &Ingredient) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT OR REPLACE INTO ingredients
             (id, name, purchase_price, purchase_quantity, purchase_unit, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                ingredient.id.to_string(),
                ingredient.name,
                ingredient.purchase_price,
                ingredient.purchase_quantity,
                ingredient.purchase_unit.as_str(),
                ingredient.created_at.to_rfc3339(),
                ingredient.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Ingredient>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM ingredients WHERE id = ?1")?;

        match stmt.query_row(params![id.to_string()], Self::row_to_ingredient) {
            Ok(ingredient) => Ok(Some(ingredient)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Ingredient>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT * FROM ingredients ORDER BY created_at")?;

        let ingredients: Vec<Ingredient> = stmt
            .query_map([], Self::row_to_ingredient)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "DELETE FROM ingredients WHERE id = ?1",
            params![id.to_string()],
        )?;
        Ok(())
    }
}
