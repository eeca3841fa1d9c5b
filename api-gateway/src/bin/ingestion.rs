//! Ingestion Lambda - Handles the /v3/documents and /v3/indices endpoints.
//!
//! Endpoints:
//! - POST /v3/documents - Ingest a document
//! - POST /v3/documents/update - Update several documents
//! - POST /v3/documents/{id}/metadata - Replace a document's metadata
//! - POST /v3/indices - Create a vector index
//! - GET /v3/indices - List vector indices
//! - POST /v3/indices/select - Select the active vector index
//! - DELETE /v3/indices/{table_name}/{index_name} - Delete a vector index
//!
//! Every request is forwarded to the ingestion engine Lambda. Whatever the engine
//! returns is validated against the response schema and wrapped in the results
//! envelope before it goes back to the caller.

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use shared::http::{error_response, outcome_response};
use shared::models::{
    CreateVectorIndexRequest, IngestDocumentRequest, SelectVectorIndexRequest,
    UpdateDocumentsRequest, UpdateMetadataRequest, WrappedCreateVectorIndexResponse,
    WrappedDeleteVectorIndexResponse, WrappedIngestionResponse, WrappedListVectorIndicesResponse,
    WrappedMetadataUpdateResponse, WrappedSelectVectorIndexResponse, WrappedUpdateResponse,
};
use shared::routes::{strip_stage_prefix, table_from_query};
use shared::{parse_body, Config, EngineClient, Route};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Application state shared across requests.
struct AppState {
    config: Config,
    engine: EngineClient,
}

impl AppState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;

        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.aws_region.clone()))
            .load()
            .await;
        let lambda_client = aws_sdk_lambda::Client::new(&aws_config);

        info!("Forwarding to engine function {}", config.engine_function_name);

        Ok(Self {
            engine: EngineClient::new(lambda_client, config.engine_function_name.clone()),
            config,
        })
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let raw_path = event.uri().path();
    let path = strip_stage_prefix(raw_path, &state.config.stage_prefix);
    let method = event.method().as_str();

    info!("Received request: method={}, path={} (raw: {})", method, path, raw_path);

    let route = match Route::parse(method, path) {
        Ok(Some(route)) => route,
        Ok(None) => return error_response(404, "Route not found"),
        Err(e) => {
            warn!("Bad path parameter: {}", e);
            return error_response(400, e.to_string());
        }
    };
    let status = route.success_status();
    let engine = &state.engine;

    match route {
        Route::IngestDocument => {
            let request: IngestDocumentRequest = parse_body!(event.body());
            let outcome = engine.ingest(request).await;
            outcome_response(status, outcome.map(|r| WrappedIngestionResponse::new(vec![r])))
        }

        Route::UpdateMetadata { document_id } => {
            let request: UpdateMetadataRequest = parse_body!(event.body());
            let outcome = engine.update_metadata(document_id, request.metadata).await;
            outcome_response(status, outcome.map(WrappedMetadataUpdateResponse::new))
        }

        Route::UpdateDocuments => {
            let request: UpdateDocumentsRequest = parse_body!(event.body());
            info!("Updating {} documents", request.document_ids.len());
            let outcome = engine.update_documents(request).await;
            outcome_response(status, outcome.map(WrappedUpdateResponse::new))
        }

        Route::CreateVectorIndex => {
            let request: CreateVectorIndexRequest = parse_body!(event.body());
            let outcome = engine.create_vector_index(request).await;
            outcome_response(status, outcome.map(WrappedCreateVectorIndexResponse::new))
        }

        Route::ListVectorIndices => {
            let params = event.query_string_parameters();
            let table_name = match table_from_query(params.first("table_name")) {
                Ok(table) => table,
                Err(e) => return error_response(400, e.to_string()),
            };
            let outcome = engine.list_vector_indices(table_name).await;
            outcome_response(status, outcome.map(WrappedListVectorIndicesResponse::new))
        }

        Route::DeleteVectorIndex {
            table_name,
            index_name,
        } => {
            info!("Deleting index {} on {}", index_name, table_name.as_str());
            let outcome = engine.delete_vector_index(table_name, index_name).await;
            outcome_response(status, outcome.map(WrappedDeleteVectorIndexResponse::new))
        }

        Route::SelectVectorIndex => {
            let request: SelectVectorIndexRequest = parse_body!(event.body());
            let outcome = engine.select_vector_index(request).await;
            outcome_response(status, outcome.map(WrappedSelectVectorIndexResponse::new))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new().await?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
