use utoipa::OpenApi;
use crate::modules::movie::dto::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};
use crate::modules::movie::patch::JsonPatchOperation;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::patch_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            CreateMovieRequest,
            UpdateMovieRequest,
            MovieResponse,
            JsonPatchOperation,
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalogue management")
    )
)]
pub struct ApiDoc;
