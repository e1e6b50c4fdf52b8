use super::model::{Movie, NewMovie};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistent collection of movies keyed by id. Implementations own id
/// generation; ids are assigned on insert and never reused.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn insert(&self, movie: NewMovie) -> Result<Movie>;

    /// Movies in id order, skipping the first `skip` and returning at most `take`.
    async fn list(&self, skip: u32, take: u32) -> Result<Vec<Movie>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>>;

    /// Overwrites the stored row with the same id. Returns `false` if it no longer exists.
    async fn update(&self, movie: &Movie) -> Result<bool>;

    /// Returns `false` if there was nothing to delete.
    async fn delete(&self, id: i32) -> Result<bool>;
}

pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, genre, duration_minutes)
            VALUES ($1, $2, $3)
            RETURNING id, title, genre, duration_minutes
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.duration_minutes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create movie: {}", e))?;

        Ok(movie)
    }

    async fn list(&self, skip: u32, take: u32) -> Result<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, genre, duration_minutes
            FROM movies
            ORDER BY id ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(i64::from(skip))
        .bind(i64::from(take))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch movies: {}", e))?;

        Ok(movies)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, genre, duration_minutes
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch movie: {}", e))?;

        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE movies
            SET title = $1, genre = $2, duration_minutes = $3
            WHERE id = $4
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.genre)
        .bind(movie.duration_minutes)
        .bind(movie.id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update movie: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete movie: {}", e))?;

        Ok(result.rows_affected() > 0)
    }
}
