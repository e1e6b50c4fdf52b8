//! Field copies between the request/response shapes and the stored [`Movie`].
//!
//! Only the declared fields cross the boundary; the id is never taken from a
//! request.

use super::dto::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};
use super::model::{Movie, NewMovie};

impl From<CreateMovieRequest> for NewMovie {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            title: req.title,
            genre: req.genre,
            duration_minutes: req.duration_minutes,
        }
    }
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            title: m.title,
            genre: m.genre,
            duration_minutes: m.duration_minutes,
        }
    }
}

/// Projection used to seed a patch.
impl From<&Movie> for UpdateMovieRequest {
    fn from(m: &Movie) -> Self {
        Self {
            title: m.title.clone(),
            genre: m.genre.clone(),
            duration_minutes: m.duration_minutes,
        }
    }
}

impl UpdateMovieRequest {
    /// Overwrites every mutable field of `movie`, keeping its id.
    pub fn apply_to(self, movie: &mut Movie) {
        movie.title = self.title;
        movie.genre = self.genre;
        movie.duration_minutes = self.duration_minutes;
    }
}
