//! OpenAPI document for the ingestion API schemas.

use serde_json::Value;
use utoipa::OpenApi;

use crate::models::{
    CreateVectorIndexRequest, CreateVectorIndexResponse, DeleteVectorIndexResponse,
    ErrorResponse, IndexMeasure, IndexMethod, IngestDocumentRequest, IngestionResponse,
    ListVectorIndicesResponse, SelectVectorIndexRequest, SelectVectorIndexResponse,
    UpdateDocumentsRequest, UpdateMetadataRequest, UpdateResponse, VectorTable,
};
use crate::schema::examples;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        IngestionResponse,
        UpdateResponse,
        CreateVectorIndexResponse,
        ListVectorIndicesResponse,
        DeleteVectorIndexResponse,
        SelectVectorIndexResponse,
        ErrorResponse,
        IngestDocumentRequest,
        UpdateMetadataRequest,
        UpdateDocumentsRequest,
        CreateVectorIndexRequest,
        SelectVectorIndexRequest,
        VectorTable,
        IndexMethod,
        IndexMeasure,
    )),
    tags((name = "ingestion", description = "Document ingestion and vector index management"))
)]
pub struct ApiDoc;

/// Render the OpenAPI document with the canonical examples attached.
pub fn document() -> Result<Value, serde_json::Error> {
    let mut doc = serde_json::to_value(ApiDoc::openapi())?;

    if let Some(schemas) = doc
        .pointer_mut("/components/schemas")
        .and_then(Value::as_object_mut)
    {
        for (name, example) in examples::all() {
            if let Some(schema) = schemas.get_mut(name).and_then(Value::as_object_mut) {
                schema.insert("example".to_string(), example);
            }
        }
    }

    Ok(doc)
}
