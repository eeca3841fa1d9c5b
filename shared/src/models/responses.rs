//! Response records for ingestion, metadata update and vector index operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::schema::{examples, parse_uuid, ResponseSchema};

/// Outcome of ingesting a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngestionResponse {
    /// A message describing the result of the ingestion request.
    pub message: String,
    /// The task ID of the ingestion request.
    pub task_id: Option<Uuid>,
    /// The ID of the document that was ingested.
    pub document_id: Uuid,
}

impl IngestionResponse {
    pub fn new(message: impl Into<String>, task_id: Option<Uuid>, document_id: Uuid) -> Self {
        Self {
            message: message.into(),
            task_id,
            document_id,
        }
    }

    /// Build from string identifiers, rejecting anything that is not a UUID.
    pub fn parse(
        message: impl Into<String>,
        task_id: Option<&str>,
        document_id: &str,
    ) -> Result<Self, ValidationError> {
        let task_id = task_id.map(|id| parse_uuid("task_id", id)).transpose()?;
        let document_id = parse_uuid("document_id", document_id)?;
        Ok(Self::new(message, task_id, document_id))
    }
}

impl ResponseSchema for IngestionResponse {
    fn example_value() -> Value {
        examples::ingestion()
    }
}

/// Outcome of updating one or more documents in a single request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateResponse {
    /// A message describing the result of the ingestion request.
    pub message: String,
    /// The task ID of the ingestion request.
    pub task_id: Option<Uuid>,
    /// The IDs of the documents that were updated.
    pub document_ids: Vec<Uuid>,
}

impl UpdateResponse {
    pub fn new(message: impl Into<String>, task_id: Option<Uuid>, document_ids: Vec<Uuid>) -> Self {
        Self {
            message: message.into(),
            task_id,
            document_ids,
        }
    }

    /// Build from string identifiers. Fails on the first element that is not a UUID.
    pub fn parse<'a, I>(
        message: impl Into<String>,
        task_id: Option<&str>,
        document_ids: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let task_id = task_id.map(|id| parse_uuid("task_id", id)).transpose()?;
        let document_ids = document_ids
            .into_iter()
            .map(|id| parse_uuid("document_ids", id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(message, task_id, document_ids))
    }
}

impl ResponseSchema for UpdateResponse {
    fn example_value() -> Value {
        examples::update()
    }
}

/// Confirms a vector index creation request was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateVectorIndexResponse {
    /// Vector index creation queued successfully.
    pub message: String,
}

impl CreateVectorIndexResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ResponseSchema for CreateVectorIndexResponse {
    fn example_value() -> Value {
        examples::create_vector_index()
    }
}

/// Metadata of the vector indices on a table.
///
/// Each entry is passed through as the engine reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListVectorIndicesResponse {
    #[schema(value_type = Vec<Object>)]
    pub indices: Vec<Map<String, Value>>,
}

impl ListVectorIndicesResponse {
    pub fn new(indices: Vec<Map<String, Value>>) -> Self {
        Self { indices }
    }
}

impl ResponseSchema for ListVectorIndicesResponse {
    fn example_value() -> Value {
        examples::list_vector_indices()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteVectorIndexResponse {
    pub message: String,
}

impl DeleteVectorIndexResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ResponseSchema for DeleteVectorIndexResponse {
    fn example_value() -> Value {
        examples::delete_vector_index()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SelectVectorIndexResponse {
    pub status: String,
}

impl SelectVectorIndexResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl ResponseSchema for SelectVectorIndexResponse {
    fn example_value() -> Value {
        examples::select_vector_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TASK_ID: &str = "c68dc72e-fc23-5452-8f49-d7bd46088a96";
    const DOCUMENT_ID: &str = "9fbe403b-c11c-5aae-8ade-ef22980c3ad1";

    #[test]
    fn test_examples_validate() {
        IngestionResponse::example().unwrap();
        UpdateResponse::example().unwrap();
        CreateVectorIndexResponse::example().unwrap();
        ListVectorIndicesResponse::example().unwrap();
        DeleteVectorIndexResponse::example().unwrap();
        SelectVectorIndexResponse::example().unwrap();
    }

    fn assert_example_round_trips<T: ResponseSchema + PartialEq + std::fmt::Debug>() {
        let example = T::example().unwrap();
        let decoded = T::from_value(example.to_value().unwrap()).unwrap();
        assert_eq!(decoded, example);
    }

    #[test]
    fn test_examples_round_trip() {
        assert_example_round_trips::<IngestionResponse>();
        assert_example_round_trips::<UpdateResponse>();
        assert_example_round_trips::<CreateVectorIndexResponse>();
        assert_example_round_trips::<ListVectorIndicesResponse>();
        assert_example_round_trips::<DeleteVectorIndexResponse>();
        assert_example_round_trips::<SelectVectorIndexResponse>();
    }

    #[test]
    fn test_ingestion_serializes_exactly() {
        let response =
            IngestionResponse::parse("Ingestion task queued successfully.", Some(TASK_ID), DOCUMENT_ID)
                .unwrap();

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"message":"Ingestion task queued successfully.","task_id":"c68dc72e-fc23-5452-8f49-d7bd46088a96","document_id":"9fbe403b-c11c-5aae-8ade-ef22980c3ad1"}"#
        );
    }

    #[test]
    fn test_ingestion_example_matches_literal() {
        let example = IngestionResponse::example().unwrap();
        assert_eq!(example.to_value().unwrap(), examples::ingestion());
    }

    #[test]
    fn test_ingestion_without_task_id() {
        let response = IngestionResponse::from_value(json!({
            "message": "Document ingested.",
            "document_id": DOCUMENT_ID,
        }))
        .unwrap();
        assert_eq!(response.task_id, None);

        let value = response.to_value().unwrap();
        assert_eq!(value["task_id"], Value::Null);
        assert_eq!(IngestionResponse::from_value(value).unwrap(), response);
    }

    #[test]
    fn test_ingestion_null_task_id() {
        let response = IngestionResponse::from_value(json!({
            "message": "Document ingested.",
            "task_id": null,
            "document_id": DOCUMENT_ID,
        }))
        .unwrap();
        assert_eq!(response.task_id, None);
    }

    #[test]
    fn test_ingestion_requires_document_id() {
        let err = IngestionResponse::from_value(json!({
            "message": "Ingestion task queued successfully.",
            "task_id": TASK_ID,
        }))
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPayload(ref msg) if msg.contains("document_id")));
    }

    #[test]
    fn test_ingestion_rejects_null_document_id() {
        let result = IngestionResponse::from_value(json!({
            "message": "Ingestion task queued successfully.",
            "document_id": null,
        }));
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));
    }

    #[test]
    fn test_ingestion_rejects_malformed_document_id() {
        let result = IngestionResponse::from_value(json!({
            "message": "Ingestion task queued successfully.",
            "document_id": "not-a-uuid",
        }));
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));

        let err = IngestionResponse::parse("queued", None, "not-a-uuid").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidUuid {
                field: "document_id",
                value: "not-a-uuid".to_string(),
            }
        );
    }

    #[test]
    fn test_ingestion_rejects_wrong_message_type() {
        let result = IngestionResponse::from_value(json!({
            "message": 42,
            "document_id": DOCUMENT_ID,
        }));
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));
    }

    #[test]
    fn test_ingestion_ignores_unknown_fields() {
        let response = IngestionResponse::from_value(json!({
            "message": "queued",
            "document_id": DOCUMENT_ID,
            "extra": {"ignored": true},
        }))
        .unwrap();
        assert_eq!(response.document_id.to_string(), DOCUMENT_ID);
    }

    #[test]
    fn test_update_accepts_empty_document_ids() {
        let response = UpdateResponse::from_value(json!({
            "message": "Nothing to update.",
            "document_ids": [],
        }))
        .unwrap();
        assert!(response.document_ids.is_empty());
        assert_eq!(response.to_value().unwrap()["document_ids"], json!([]));
    }

    #[test]
    fn test_update_preserves_document_order() {
        let ids = [DOCUMENT_ID, TASK_ID];
        let response = UpdateResponse::parse("Update task queued successfully.", None, ids).unwrap();
        let rendered: Vec<String> = response.document_ids.iter().map(Uuid::to_string).collect();
        assert_eq!(rendered, ids);

        let decoded = UpdateResponse::from_value(response.to_value().unwrap()).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_update_rejects_any_invalid_element() {
        let result = UpdateResponse::from_value(json!({
            "message": "Update task queued successfully.",
            "document_ids": [DOCUMENT_ID, "bogus"],
        }));
        assert!(matches!(result, Err(ValidationError::InvalidPayload(_))));

        let err = UpdateResponse::parse("queued", None, [DOCUMENT_ID, "bogus"]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidUuid { field: "document_ids", .. }));
    }

    #[test]
    fn test_update_requires_document_ids() {
        let missing = UpdateResponse::from_value(json!({ "message": "queued" }));
        assert!(missing.is_err());

        let null = UpdateResponse::from_value(json!({ "message": "queued", "document_ids": null }));
        assert!(null.is_err());
    }

    #[test]
    fn test_list_indices_accepts_arbitrary_mappings() {
        let empty = ListVectorIndicesResponse::from_value(json!({ "indices": [] })).unwrap();
        assert!(empty.indices.is_empty());

        let mixed = ListVectorIndicesResponse::from_value(json!({
            "indices": [
                {"name": "ix_a", "lists": 100},
                {"nested": {"deep": [1, 2, 3]}, "flag": false},
                {},
            ]
        }))
        .unwrap();
        assert_eq!(mixed.indices.len(), 3);
        assert_eq!(mixed.indices[0]["lists"], json!(100));
        assert_eq!(
            ListVectorIndicesResponse::from_value(mixed.to_value().unwrap()).unwrap(),
            mixed
        );
    }

    #[test]
    fn test_list_indices_rejects_non_object_entries() {
        let result = ListVectorIndicesResponse::from_value(json!({ "indices": ["ix_a"] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_message_only_records() {
        let create = CreateVectorIndexResponse::new("Vector index creation queued successfully.");
        assert_eq!(
            serde_json::to_string(&create).unwrap(),
            r#"{"message":"Vector index creation queued successfully."}"#
        );

        let delete = DeleteVectorIndexResponse::from_value(json!({ "message": "gone" })).unwrap();
        assert_eq!(delete, DeleteVectorIndexResponse::new("gone"));

        let select = SelectVectorIndexResponse::from_value(json!({ "status": "selected" })).unwrap();
        assert_eq!(select.to_value().unwrap(), json!({ "status": "selected" }));

        assert!(SelectVectorIndexResponse::from_value(json!({ "message": "selected" })).is_err());
    }
}
