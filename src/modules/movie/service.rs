use super::dto::{CreateMovieRequest, ListMoviesQuery, MovieResponse, UpdateMovieRequest};
use super::patch::{self, JsonPatchOperation};
use super::repository::MovieRepository;
use crate::common::error::{AppError, AppResult};
use tracing::{debug, info};
use validator::Validate;

pub struct MovieService;

impl MovieService {
    pub async fn create(
        repo: &dyn MovieRepository,
        req: CreateMovieRequest,
    ) -> AppResult<MovieResponse> {
        req.validate()?;

        let movie = repo.insert(req.into()).await?;
        info!(movie_id = movie.id, title = %movie.title, "Movie created");

        Ok(movie.into())
    }

    pub async fn list(
        repo: &dyn MovieRepository,
        query: ListMoviesQuery,
    ) -> AppResult<Vec<MovieResponse>> {
        let movies = repo.list(query.skip, query.take).await?;
        debug!(skip = query.skip, take = query.take, count = movies.len(), "Movies listed");

        Ok(movies.into_iter().map(MovieResponse::from).collect())
    }

    pub async fn find_by_id(repo: &dyn MovieRepository, id: i32) -> AppResult<MovieResponse> {
        let movie = repo.find_by_id(id).await?.ok_or(AppError::NotFound(id))?;
        Ok(movie.into())
    }

    /// Full replace. Every field is overwritten, so the request must be valid as a whole.
    pub async fn replace(
        repo: &dyn MovieRepository,
        id: i32,
        req: UpdateMovieRequest,
    ) -> AppResult<()> {
        req.validate()?;

        let mut movie = repo.find_by_id(id).await?.ok_or(AppError::NotFound(id))?;
        req.apply_to(&mut movie);

        if !repo.update(&movie).await? {
            return Err(AppError::NotFound(id));
        }
        info!(movie_id = id, "Movie replaced");
        Ok(())
    }

    /// Applies the document to a projection of the stored movie and only
    /// writes back once the result validates. Any failure leaves the row as it was.
    pub async fn patch(
        repo: &dyn MovieRepository,
        id: i32,
        document: &[JsonPatchOperation],
    ) -> AppResult<()> {
        let mut movie = repo.find_by_id(id).await?.ok_or(AppError::NotFound(id))?;

        let ops = patch::parse_document(document)?;
        let mut draft = UpdateMovieRequest::from(&movie);
        for op in &ops {
            op.apply_to(&mut draft);
        }
        draft.validate()?;

        draft.apply_to(&mut movie);
        if !repo.update(&movie).await? {
            return Err(AppError::NotFound(id));
        }
        info!(movie_id = id, operations = ops.len(), "Movie patched");
        Ok(())
    }

    pub async fn delete(repo: &dyn MovieRepository, id: i32) -> AppResult<()> {
        if !repo.delete(id).await? {
            return Err(AppError::NotFound(id));
        }
        info!(movie_id = id, "Movie deleted");
        Ok(())
    }
}
