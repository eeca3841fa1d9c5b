//! Client for the ingestion engine Lambda.
//!
//! The engine does the actual ingestion and index work. This client only frames the
//! request, invokes the function, and validates what comes back against the response
//! schema expected for the action.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{
    CreateVectorIndexRequest, CreateVectorIndexResponse, DeleteVectorIndexResponse,
    IndexMeasure, IndexMethod, IngestDocumentRequest, IngestionResponse,
    ListVectorIndicesResponse, SelectVectorIndexRequest, SelectVectorIndexResponse,
    UpdateDocumentsRequest, UpdateResponse, VectorTable,
};
use crate::schema::ResponseSchema;
use crate::{Error, Result};

/// Request to the engine, tagged by action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EngineRequest {
    IngestDocument {
        raw_text: String,
        document_id: Option<Uuid>,
        metadata: Map<String, Value>,
        run_with_orchestration: bool,
    },
    UpdateMetadata {
        document_id: Uuid,
        metadata: Map<String, Value>,
    },
    UpdateDocuments {
        document_ids: Vec<Uuid>,
        metadata: Map<String, Value>,
    },
    CreateVectorIndex {
        table_name: VectorTable,
        index_method: IndexMethod,
        index_measure: IndexMeasure,
        index_name: Option<String>,
        concurrently: bool,
    },
    ListVectorIndices {
        table_name: VectorTable,
    },
    DeleteVectorIndex {
        table_name: VectorTable,
        index_name: String,
    },
    SelectVectorIndex {
        table_name: VectorTable,
        index_name: String,
    },
}

impl EngineRequest {
    pub fn action(&self) -> &'static str {
        match self {
            EngineRequest::IngestDocument { .. } => "ingest_document",
            EngineRequest::UpdateMetadata { .. } => "update_metadata",
            EngineRequest::UpdateDocuments { .. } => "update_documents",
            EngineRequest::CreateVectorIndex { .. } => "create_vector_index",
            EngineRequest::ListVectorIndices { .. } => "list_vector_indices",
            EngineRequest::DeleteVectorIndex { .. } => "delete_vector_index",
            EngineRequest::SelectVectorIndex { .. } => "select_vector_index",
        }
    }
}

impl From<IngestDocumentRequest> for EngineRequest {
    fn from(request: IngestDocumentRequest) -> Self {
        EngineRequest::IngestDocument {
            raw_text: request.raw_text,
            document_id: request.document_id,
            metadata: request.metadata.unwrap_or_default(),
            run_with_orchestration: request.run_with_orchestration.unwrap_or(true),
        }
    }
}

impl From<UpdateDocumentsRequest> for EngineRequest {
    fn from(request: UpdateDocumentsRequest) -> Self {
        EngineRequest::UpdateDocuments {
            document_ids: request.document_ids,
            metadata: request.metadata.unwrap_or_default(),
        }
    }
}

impl From<CreateVectorIndexRequest> for EngineRequest {
    fn from(request: CreateVectorIndexRequest) -> Self {
        EngineRequest::CreateVectorIndex {
            table_name: request.table_name,
            index_method: request.index_method,
            index_measure: request.index_measure,
            index_name: request.index_name,
            concurrently: request.concurrently,
        }
    }
}

impl From<SelectVectorIndexRequest> for EngineRequest {
    fn from(request: SelectVectorIndexRequest) -> Self {
        EngineRequest::SelectVectorIndex {
            table_name: request.table_name,
            index_name: request.index_name,
        }
    }
}

/// Raw reply from the engine.
#[derive(Debug, Deserialize)]
pub struct EngineReply {
    /// `ok` or `error`
    pub status: String,
    /// Action result, shaped like the response schema for the action
    #[serde(default)]
    pub results: Value,
    /// Failure description when `status` is `error`
    pub error: Option<String>,
}

impl EngineReply {
    /// Check the reply status and validate the results as `T`.
    pub fn into_results<T: ResponseSchema>(self) -> Result<T> {
        if self.status == "error" {
            return Err(Error::Internal(
                self.error
                    .unwrap_or_else(|| "engine reported an error".to_string()),
            ));
        }
        if self.status != "ok" {
            return Err(Error::Engine(format!("unexpected reply status: {}", self.status)));
        }

        T::from_value(self.results)
            .map_err(|e| Error::Engine(format!("engine returned an invalid payload: {}", e)))
    }
}

/// Client for invoking the ingestion engine.
pub struct EngineClient {
    /// Lambda client for invoking the engine Lambda
    lambda_client: aws_sdk_lambda::Client,
    /// Engine Lambda function name/ARN
    function_name: String,
}

impl EngineClient {
    /// Create a new engine client.
    pub fn new(lambda_client: aws_sdk_lambda::Client, function_name: String) -> Self {
        Self {
            lambda_client,
            function_name,
        }
    }

    /// Invoke the engine and validate its reply as `T`.
    pub async fn invoke<T: ResponseSchema>(&self, request: &EngineRequest) -> Result<T> {
        let payload = serde_json::to_vec(request)?;

        debug!(action = request.action(), function = %self.function_name, "Invoking engine");

        let response = self
            .lambda_client
            .invoke()
            .function_name(&self.function_name)
            .payload(aws_sdk_lambda::primitives::Blob::new(payload))
            .send()
            .await
            .map_err(|e| Error::Aws(format!("Failed to invoke engine: {}", e)))?;

        if let Some(function_error) = response.function_error() {
            warn!(action = request.action(), "Engine function error: {}", function_error);
            return Err(Error::Engine(format!("engine function failed: {}", function_error)));
        }

        let response_payload = response
            .payload()
            .ok_or_else(|| Error::Aws("No response payload from engine".to_string()))?;

        let reply: EngineReply = serde_json::from_slice(response_payload.as_ref())
            .map_err(|e| Error::Engine(format!("Failed to parse engine reply: {}", e)))?;

        reply.into_results()
    }

    /// Ingest one document.
    pub async fn ingest(&self, request: IngestDocumentRequest) -> Result<IngestionResponse> {
        self.invoke(&request.into()).await
    }

    /// Replace a document's metadata.
    pub async fn update_metadata(
        &self,
        document_id: Uuid,
        metadata: Map<String, Value>,
    ) -> Result<IngestionResponse> {
        self.invoke(&EngineRequest::UpdateMetadata {
            document_id,
            metadata,
        })
        .await
    }

    /// Update several documents in one request.
    pub async fn update_documents(&self, request: UpdateDocumentsRequest) -> Result<UpdateResponse> {
        self.invoke(&request.into()).await
    }

    pub async fn create_vector_index(
        &self,
        request: CreateVectorIndexRequest,
    ) -> Result<CreateVectorIndexResponse> {
        self.invoke(&request.into()).await
    }

    pub async fn list_vector_indices(
        &self,
        table_name: VectorTable,
    ) -> Result<ListVectorIndicesResponse> {
        self.invoke(&EngineRequest::ListVectorIndices { table_name })
            .await
    }

    pub async fn delete_vector_index(
        &self,
        table_name: VectorTable,
        index_name: String,
    ) -> Result<DeleteVectorIndexResponse> {
        self.invoke(&EngineRequest::DeleteVectorIndex {
            table_name,
            index_name,
        })
        .await
    }

    pub async fn select_vector_index(
        &self,
        request: SelectVectorIndexRequest,
    ) -> Result<SelectVectorIndexResponse> {
        self.invoke(&request.into()).await
    }
}
