//! Response schema contract and canonical example payloads.
//!
//! Every response type returned by the ingestion API implements [`ResponseSchema`]:
//! it can be built from an untyped JSON value (validating on the way), serialized back
//! to JSON, and it carries a canonical example used by documentation tooling.
//!
//! The examples themselves live in [`examples`], separate from the types, so the
//! OpenAPI generator can attach them without touching runtime validation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ValidationError;

/// A response record with a documented wire shape and a canonical example.
pub trait ResponseSchema: Serialize + DeserializeOwned + ToSchema + Sized {
    /// The canonical example payload for this type.
    fn example_value() -> Value;

    /// Build the record from an untyped JSON value.
    ///
    /// Missing or null required fields, fields of the wrong type and malformed UUIDs
    /// are all rejected. Unknown fields are ignored.
    fn from_value(value: Value) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize the record into its untyped JSON form.
    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// The canonical example, validated like any other payload.
    fn example() -> Result<Self, ValidationError> {
        Self::from_value(Self::example_value())
    }
}

/// Parse `value` as a UUID, naming `field` in the error.
pub(crate) fn parse_uuid(field: &'static str, value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| ValidationError::InvalidUuid {
        field,
        value: value.to_string(),
    })
}

/// Canonical example payloads, keyed by schema name in [`examples::all`].
pub mod examples {
    use serde_json::{json, Value};

    pub fn ingestion() -> Value {
        json!({
            "message": "Ingestion task queued successfully.",
            "task_id": "c68dc72e-fc23-5452-8f49-d7bd46088a96",
            "document_id": "9fbe403b-c11c-5aae-8ade-ef22980c3ad1",
        })
    }

    pub fn update() -> Value {
        json!({
            "message": "Update task queued successfully.",
            "task_id": "c68dc72e-fc23-5452-8f49-d7bd46088a96",
            "document_ids": ["9fbe403b-c11c-5aae-8ade-ef22980c3ad1"],
        })
    }

    pub fn create_vector_index() -> Value {
        json!({ "message": "Vector index creation queued successfully." })
    }

    pub fn list_vector_indices() -> Value {
        json!({
            "indices": [
                {
                    "name": "ix_vector_cosine_ops_hnsw__20241021211541",
                    "table_name": "chunks",
                    "index_method": "hnsw",
                    "index_measure": "cosine_distance",
                }
            ]
        })
    }

    pub fn delete_vector_index() -> Value {
        json!({ "message": "Vector index deletion queued successfully." })
    }

    pub fn select_vector_index() -> Value {
        json!({ "status": "Vector index selected successfully." })
    }

    /// Every example paired with the name of the schema it illustrates.
    pub fn all() -> Vec<(&'static str, Value)> {
        vec![
            ("IngestionResponse", ingestion()),
            ("UpdateResponse", update()),
            ("CreateVectorIndexResponse", create_vector_index()),
            ("ListVectorIndicesResponse", list_vector_indices()),
            ("DeleteVectorIndexResponse", delete_vector_index()),
            ("SelectVectorIndexResponse", select_vector_index()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uuid_accepts_hyphenated_and_simple() {
        let hyphenated = parse_uuid("task_id", "c68dc72e-fc23-5452-8f49-d7bd46088a96").unwrap();
        let simple = parse_uuid("task_id", "c68dc72efc2354528f49d7bd46088a96").unwrap();
        assert_eq!(hyphenated, simple);
    }

    #[test]
    fn test_parse_uuid_names_field() {
        let err = parse_uuid("document_id", "9fbe403b").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidUuid {
                field: "document_id",
                value: "9fbe403b".to_string(),
            }
        );
    }

    #[test]
    fn test_examples_cover_every_schema_once() {
        let names: Vec<&str> = examples::all().into_iter().map(|(name, _)| name).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), 6);
        assert_eq!(deduped.len(), names.len());
    }
}
