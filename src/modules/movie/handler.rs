use super::dto::{CreateMovieRequest, ListMoviesQuery, MovieResponse, UpdateMovieRequest};
use super::patch::JsonPatchOperation;
use super::service::MovieService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// List movies
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Page of movies", body = ApiResponse<Vec<MovieResponse>>)
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> impl IntoResponse {
    match MovieService::list(state.movies.as_ref(), query).await {
        Ok(movies) => ApiSuccess(
            ApiResponse::success(movies, "Movies retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/api/v1/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = ApiResponse<MovieResponse>,
            headers(("Location" = String, description = "URL of the new movie"))),
        (status = 400, description = "Validation failed")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovieRequest>,
) -> impl IntoResponse {
    match MovieService::create(state.movies.as_ref(), payload).await {
        Ok(movie) => {
            let location = format!("/api/v1/movies/{}", movie.id);
            (
                [(header::LOCATION, location)],
                ApiSuccess(
                    ApiResponse::success(movie, "Movie created successfully"),
                    StatusCode::CREATED,
                ),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = ApiResponse<MovieResponse>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn get_movie(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match MovieService::find_by_id(state.movies.as_ref(), id).await {
        Ok(movie) => ApiSuccess(
            ApiResponse::success(movie, "Movie retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace every field of a movie
#[utoipa::path(
    put,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 204, description = "Movie updated"),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMovieRequest>,
) -> impl IntoResponse {
    match MovieService::replace(state.movies.as_ref(), id, payload).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Partially update a movie with a JSON Patch document
#[utoipa::path(
    patch,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body(content = Vec<JsonPatchOperation>, content_type = "application/json-patch+json"),
    responses(
        (status = 204, description = "Movie updated"),
        (status = 400, description = "Invalid patch document or validation failed"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn patch_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(document): Json<Vec<JsonPatchOperation>>,
) -> impl IntoResponse {
    match MovieService::patch(state.movies.as_ref(), id, &document).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete movie
#[utoipa::path(
    delete,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match MovieService::delete(state.movies.as_ref(), id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
