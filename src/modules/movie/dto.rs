use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

pub const DEFAULT_TAKE: u32 = 50;

// Omitted fields deserialize to empty values so the validator reports them.

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateMovieRequest {
    #[validate(custom(function = "not_blank", message = "The movie title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "The movie genre is required"))]
    #[validate(length(max = 50, message = "The genre cannot exceed 50 characters"))]
    pub genre: String,
    #[validate(range(
        min = 70,
        max = 600,
        message = "The duration must be between 70 and 600 minutes"
    ))]
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct UpdateMovieRequest {
    #[validate(custom(function = "not_blank", message = "The movie title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "The movie genre is required"))]
    #[validate(length(max = 50, message = "The genre cannot exceed 50 characters"))]
    pub genre: String,
    #[validate(range(
        min = 70,
        max = 600,
        message = "The duration must be between 70 and 600 minutes"
    ))]
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub duration_minutes: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Number of movies to skip
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of movies to return
    #[serde(default = "default_take")]
    pub take: u32,
}

/// Rejects empty and whitespace-only strings.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn default_take() -> u32 {
    DEFAULT_TAKE
}

impl Default for ListMoviesQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            take: DEFAULT_TAKE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> CreateMovieRequest {
        CreateMovieRequest {
            title: "Dune".into(),
            genre: "Sci-Fi".into(),
            duration_minutes: 155,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(dune().validate().is_ok());
    }

    #[test]
    fn duration_bounds_are_inclusive() {
        for minutes in [70, 600] {
            let req = CreateMovieRequest {
                duration_minutes: minutes,
                ..dune()
            };
            assert!(req.validate().is_ok(), "{minutes} should be accepted");
        }
        for minutes in [69, 601, 0] {
            let req = CreateMovieRequest {
                duration_minutes: minutes,
                ..dune()
            };
            let errors = req.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("duration_minutes"));
        }
    }

    #[test]
    fn genre_longer_than_fifty_characters_is_rejected() {
        let req = UpdateMovieRequest {
            title: "Dune".into(),
            genre: "g".repeat(51),
            duration_minutes: 155,
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("genre"));

        let req = UpdateMovieRequest {
            genre: "g".repeat(50),
            ..req
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_fields_deserialize_to_violations() {
        let req: CreateMovieRequest = serde_json::from_str(r#"{"title": "Dune"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("genre"));
        assert!(fields.contains_key("duration_minutes"));
    }

    #[test]
    fn whitespace_only_title_and_genre_are_rejected() {
        let req = CreateMovieRequest {
            title: "   ".into(),
            genre: "\t ".into(),
            ..dune()
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields["title"][0].message.as_deref(),
            Some("The movie title is required")
        );
        assert_eq!(
            fields["genre"][0].message.as_deref(),
            Some("The movie genre is required")
        );
    }

    #[test]
    fn empty_and_overlong_genre_get_distinct_messages() {
        let empty = UpdateMovieRequest {
            title: "Dune".into(),
            genre: String::new(),
            duration_minutes: 155,
        };
        let errors = empty.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["genre"][0].message.as_deref(),
            Some("The movie genre is required")
        );

        let overlong = UpdateMovieRequest {
            genre: "g".repeat(51),
            ..empty
        };
        let errors = overlong.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["genre"][0].message.as_deref(),
            Some("The genre cannot exceed 50 characters")
        );
    }

    #[test]
    fn list_query_defaults() {
        let query: ListMoviesQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.skip, 0);
        assert_eq!(query.take, DEFAULT_TAKE);
    }
}
