//! Request payloads accepted by the ingestion API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Ingest a document from raw text.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct IngestDocumentRequest {
    /// Text content of the document
    #[validate(length(min = 1))]
    pub raw_text: String,
    /// Explicit ID for the document; the engine assigns one when absent
    pub document_id: Option<Uuid>,
    /// Metadata to store alongside the document
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Map<String, Value>>,
    /// Queue the work instead of running it inline
    pub run_with_orchestration: Option<bool>,
}

/// Replace the metadata of a single document.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateMetadataRequest {
    #[schema(value_type = Object)]
    pub metadata: Map<String, Value>,
}

/// Apply an update to several documents at once.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateDocumentsRequest {
    #[validate(length(min = 1))]
    pub document_ids: Vec<Uuid>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Map<String, Value>>,
}

/// Tables that carry vector columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VectorTable {
    #[default]
    Chunks,
    Documents,
    Entities,
    Communities,
}

impl VectorTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            VectorTable::Chunks => "chunks",
            VectorTable::Documents => "documents",
            VectorTable::Entities => "entities",
            VectorTable::Communities => "communities",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "chunks" => Some(VectorTable::Chunks),
            "documents" => Some(VectorTable::Documents),
            "entities" => Some(VectorTable::Entities),
            "communities" => Some(VectorTable::Communities),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IndexMethod {
    #[default]
    Hnsw,
    IvfFlat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IndexMeasure {
    #[default]
    CosineDistance,
    L2Distance,
    MaxInnerProduct,
}

/// Create a vector index on one of the vector tables.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateVectorIndexRequest {
    #[serde(default)]
    pub table_name: VectorTable,
    #[serde(default)]
    pub index_method: IndexMethod,
    #[serde(default)]
    pub index_measure: IndexMeasure,
    /// Postgres identifiers are capped at 63 bytes
    #[validate(length(min = 1, max = 63))]
    pub index_name: Option<String>,
    /// Build without locking writes to the table
    #[serde(default = "default_concurrently")]
    pub concurrently: bool,
}

fn default_concurrently() -> bool {
    true
}

/// Make an existing index the one used for search.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SelectVectorIndexRequest {
    #[serde(default)]
    pub table_name: VectorTable,
    #[validate(length(min = 1, max = 63))]
    pub index_name: String,
}
