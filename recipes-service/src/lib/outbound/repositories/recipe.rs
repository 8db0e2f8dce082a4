use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::recipe::models::Recipe;
use crate::domain::recipe::models::RecipeCommand;
use crate::domain::recipe::models::RecipeId;
use crate::domain::recipe::ports::RecipeRepository;
use crate::recipe::errors::RecipeError;

pub struct PostgresRecipeRepository {
    pool: PgPool,
}

impl PostgresRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecipeRow {
    id: Uuid,
    name: String,
    tags: Vec<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    published_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(r: RecipeRow) -> Self {
        Recipe {
            id: RecipeId(r.id),
            name: r.name,
            tags: r.tags,
            ingredients: r.ingredients,
            instructions: r.instructions,
            published_at: r.published_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> RecipeError {
    RecipeError::DatabaseError(e.to_string())
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeError> {
        sqlx::query(
            r#"
            INSERT INTO recipes (id, name, tags, ingredients, instructions, published_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(recipe.id.0)
        .bind(&recipe.name)
        .bind(&recipe.tags)
        .bind(&recipe.ingredients)
        .bind(&recipe.instructions)
        .bind(recipe.published_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(recipe)
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, name, tags, ingredients, instructions, published_at
            FROM recipes
            ORDER BY published_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, name, tags, ingredients, instructions, published_at
            FROM recipes
            WHERE $1 = ANY(tags)
            ORDER BY published_at DESC
            "#,
        )
        .bind(tag)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT id, name, tags, ingredients, instructions, published_at
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Recipe::from))
    }

    async fn update(&self, id: &RecipeId, command: RecipeCommand) -> Result<bool, RecipeError> {
        let result = sqlx::query(
            r#"
            UPDATE recipes
            SET name = $2, tags = $3, ingredients = $4, instructions = $5
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(command.name)
        .bind(command.tags)
        .bind(command.ingredients)
        .bind(command.instructions)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &RecipeId) -> Result<bool, RecipeError> {
        let result = sqlx::query(
            r#"
            DELETE FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
