//! Request routing for the ingestion API.
//!
//! Routes:
//! - POST /v3/documents - Ingest a document
//! - POST /v3/documents/update - Update several documents
//! - POST /v3/documents/{id}/metadata - Replace a document's metadata
//! - POST /v3/indices - Create a vector index
//! - GET /v3/indices - List vector indices
//! - POST /v3/indices/select - Select the active vector index
//! - DELETE /v3/indices/{table_name}/{index_name} - Delete a vector index

use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::VectorTable;
use crate::schema::parse_uuid;

/// A recognised ingestion API route, with its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    IngestDocument,
    UpdateDocuments,
    UpdateMetadata { document_id: Uuid },
    CreateVectorIndex,
    ListVectorIndices,
    SelectVectorIndex,
    DeleteVectorIndex { table_name: VectorTable, index_name: String },
}

impl Route {
    /// Match a method and path (stage prefix already stripped).
    ///
    /// Returns `Ok(None)` for paths that are not part of the API, and an error when
    /// the route matches but a path parameter is malformed.
    pub fn parse(method: &str, path: &str) -> Result<Option<Route>, ValidationError> {
        let segments: Vec<&str> = path
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        let route = match (method, segments.as_slice()) {
            ("POST", ["v3", "documents"]) => Route::IngestDocument,
            ("POST", ["v3", "documents", "update"]) => Route::UpdateDocuments,
            ("POST", ["v3", "documents", id, "metadata"]) => Route::UpdateMetadata {
                document_id: parse_uuid("document_id", id)?,
            },
            ("POST", ["v3", "indices"]) => Route::CreateVectorIndex,
            ("GET", ["v3", "indices"]) => Route::ListVectorIndices,
            ("POST", ["v3", "indices", "select"]) => Route::SelectVectorIndex,
            ("DELETE", ["v3", "indices", table, index_name]) => Route::DeleteVectorIndex {
                table_name: table_from_query(Some(*table))?,
                index_name: decode_index_name(index_name)?,
            },
            _ => return Ok(None),
        };

        Ok(Some(route))
    }

    /// Success status code for the route.
    ///
    /// Work handed to the engine's queue answers 202; synchronous lookups answer 200.
    pub fn success_status(&self) -> u16 {
        match self {
            Route::ListVectorIndices | Route::SelectVectorIndex => 200,
            _ => 202,
        }
    }
}

/// Resolve a vector table name, falling back to the default table when absent.
pub fn table_from_query(value: Option<&str>) -> Result<VectorTable, ValidationError> {
    match value {
        None => Ok(VectorTable::default()),
        Some(name) => VectorTable::parse(name)
            .ok_or_else(|| ValidationError::Request(format!("unknown vector table: {}", name))),
    }
}

/// Percent-decode an index name path segment.
///
/// Postgres identifiers are capped at 63 bytes.
fn decode_index_name(segment: &str) -> Result<String, ValidationError> {
    let name = urlencoding::decode(segment)
        .map_err(|e| ValidationError::Request(format!("invalid index name: {}", e)))?;
    if name.is_empty() || name.len() > 63 {
        return Err(ValidationError::Request(format!(
            "index name must be 1 to 63 bytes: {:?}",
            name
        )));
    }
    Ok(name.into_owned())
}

/// Remove the API Gateway stage prefix from a raw request path.
pub fn strip_stage_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    match path.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
