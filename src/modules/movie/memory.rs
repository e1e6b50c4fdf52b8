use super::model::{Movie, NewMovie};
use super::repository::MovieRepository;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local store used when no database is configured, and by tests.
#[derive(Default)]
pub struct InMemoryMovieRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    movies: BTreeMap<i32, Movie>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn insert(&self, movie: NewMovie) -> Result<Movie> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| anyhow!("Failed to create movie: id space exhausted"))?;
        inner.last_id = id;

        let movie = Movie {
            id,
            title: movie.title,
            genre: movie.genre,
            duration_minutes: movie.duration_minutes,
        };
        inner.movies.insert(id, movie.clone());
        Ok(movie)
    }

    async fn list(&self, skip: u32, take: u32) -> Result<Vec<Movie>> {
        let inner = self.inner.read().await;
        Ok(inner
            .movies
            .values()
            .skip(skip as usize)
            .take(take as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>> {
        Ok(self.inner.read().await.movies.get(&id).cloned())
    }

    async fn update(&self, movie: &Movie) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.movies.get_mut(&movie.id) {
            Some(stored) => {
                *stored = movie.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.inner.write().await.movies.remove(&id).is_some())
    }
}
