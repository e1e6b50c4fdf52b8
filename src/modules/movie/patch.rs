//! Partial updates arrive as JSON Patch documents and are narrowed to a
//! closed set of field setters before they touch anything.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use super::dto::UpdateMovieRequest;

/// One operation of a JSON Patch (RFC 6902) document, as received.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JsonPatchOperation {
    /// `add`, `replace` or `remove`
    pub op: String,
    /// Target field, e.g. `/duration_minutes`
    pub path: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoviePatchOp {
    SetTitle(String),
    SetGenre(String),
    SetDurationMinutes(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("unsupported operation '{op}' at '{path}'")]
    UnsupportedOperation { op: String, path: String },

    #[error("unknown target field '{0}'")]
    UnknownField(String),

    #[error("invalid value for '{path}': expected {expected}")]
    InvalidValue { path: String, expected: &'static str },
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Genre,
    DurationMinutes,
}

impl Field {
    fn from_path(path: &str) -> Option<Self> {
        match path.trim_start_matches('/').to_ascii_lowercase().as_str() {
            "title" => Some(Field::Title),
            "genre" => Some(Field::Genre),
            "duration_minutes" => Some(Field::DurationMinutes),
            _ => None,
        }
    }

    fn cleared(self) -> MoviePatchOp {
        match self {
            Field::Title => MoviePatchOp::SetTitle(String::new()),
            Field::Genre => MoviePatchOp::SetGenre(String::new()),
            Field::DurationMinutes => MoviePatchOp::SetDurationMinutes(0),
        }
    }
}

impl TryFrom<&JsonPatchOperation> for MoviePatchOp {
    type Error = PatchError;

    fn try_from(raw: &JsonPatchOperation) -> Result<Self, Self::Error> {
        let field =
            Field::from_path(&raw.path).ok_or_else(|| PatchError::UnknownField(raw.path.clone()))?;

        match raw.op.as_str() {
            "add" | "replace" => {}
            "remove" => return Ok(field.cleared()),
            other => {
                return Err(PatchError::UnsupportedOperation {
                    op: other.to_string(),
                    path: raw.path.clone(),
                });
            }
        }

        // null clears the field, same as remove
        if raw.value.is_null() {
            return Ok(field.cleared());
        }

        let invalid = |expected| PatchError::InvalidValue {
            path: raw.path.clone(),
            expected,
        };

        match field {
            Field::Title => raw
                .value
                .as_str()
                .map(|s| MoviePatchOp::SetTitle(s.to_string()))
                .ok_or_else(|| invalid("a string")),
            Field::Genre => raw
                .value
                .as_str()
                .map(|s| MoviePatchOp::SetGenre(s.to_string()))
                .ok_or_else(|| invalid("a string")),
            Field::DurationMinutes => raw
                .value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .map(MoviePatchOp::SetDurationMinutes)
                .ok_or_else(|| invalid("an integer")),
        }
    }
}

impl MoviePatchOp {
    pub fn apply_to(&self, target: &mut UpdateMovieRequest) {
        match self {
            MoviePatchOp::SetTitle(title) => target.title = title.clone(),
            MoviePatchOp::SetGenre(genre) => target.genre = genre.clone(),
            MoviePatchOp::SetDurationMinutes(minutes) => target.duration_minutes = *minutes,
        }
    }
}

/// Translates a whole document, failing on the first bad operation.
pub fn parse_document(document: &[JsonPatchOperation]) -> Result<Vec<MoviePatchOp>, PatchError> {
    document.iter().map(MoviePatchOp::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ops(doc: Value) -> Result<Vec<MoviePatchOp>, PatchError> {
        let document: Vec<JsonPatchOperation> = serde_json::from_value(doc).unwrap();
        parse_document(&document)
    }

    #[test]
    fn replace_and_add_set_fields() {
        let parsed = ops(json!([
            { "op": "replace", "path": "/title", "value": "Dune: Part Two" },
            { "op": "add", "path": "/genre", "value": "Adventure" },
            { "op": "replace", "path": "/duration_minutes", "value": 166 }
        ]))
        .unwrap();

        assert_eq!(
            parsed,
            vec![
                MoviePatchOp::SetTitle("Dune: Part Two".into()),
                MoviePatchOp::SetGenre("Adventure".into()),
                MoviePatchOp::SetDurationMinutes(166),
            ]
        );
    }

    #[test]
    fn paths_are_case_insensitive() {
        let parsed = ops(json!([
            { "op": "replace", "path": "/Duration_Minutes", "value": 90 }
        ]))
        .unwrap();
        assert_eq!(parsed, vec![MoviePatchOp::SetDurationMinutes(90)]);
    }

    #[test]
    fn remove_and_null_clear_the_field() {
        let parsed = ops(json!([
            { "op": "remove", "path": "/title" },
            { "op": "replace", "path": "/duration_minutes", "value": null }
        ]))
        .unwrap();
        assert_eq!(
            parsed,
            vec![
                MoviePatchOp::SetTitle(String::new()),
                MoviePatchOp::SetDurationMinutes(0),
            ]
        );
    }

    #[test]
    fn unknown_field_fails() {
        let err = ops(json!([{ "op": "replace", "path": "/id", "value": 99 }])).unwrap_err();
        assert_eq!(err, PatchError::UnknownField("/id".into()));
    }

    #[test]
    fn unsupported_operation_fails() {
        let err = ops(json!([{ "op": "move", "path": "/title", "from": "/genre" }])).unwrap_err();
        assert!(matches!(err, PatchError::UnsupportedOperation { ref op, .. } if op == "move"));
    }

    #[test]
    fn wrong_value_type_fails() {
        let err = ops(json!([{ "op": "replace", "path": "/duration_minutes", "value": "long" }]))
            .unwrap_err();
        assert_eq!(
            err,
            PatchError::InvalidValue {
                path: "/duration_minutes".into(),
                expected: "an integer",
            }
        );
    }

    #[test]
    fn operations_apply_in_order() {
        let mut draft = UpdateMovieRequest {
            title: "Dune".into(),
            genre: "Sci-Fi".into(),
            duration_minutes: 155,
        };
        for op in ops(json!([
            { "op": "replace", "path": "/duration_minutes", "value": 100 },
            { "op": "replace", "path": "/duration_minutes", "value": 120 }
        ]))
        .unwrap()
        {
            op.apply_to(&mut draft);
        }
        assert_eq!(draft.duration_minutes, 120);
        assert_eq!(draft.title, "Dune");
    }
}
