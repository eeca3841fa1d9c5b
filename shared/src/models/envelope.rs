//! Results envelope wrapping every response body the API returns.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::responses::{
    CreateVectorIndexResponse, DeleteVectorIndexResponse, IngestionResponse,
    ListVectorIndicesResponse, SelectVectorIndexResponse, UpdateResponse,
};

/// Standard API response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsWrapper<T> {
    pub results: T,
}

impl<T> ResultsWrapper<T> {
    pub fn new(results: T) -> Self {
        Self { results }
    }
}

impl<T> From<T> for ResultsWrapper<T> {
    fn from(results: T) -> Self {
        Self::new(results)
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub type WrappedIngestionResponse = ResultsWrapper<Vec<IngestionResponse>>;
pub type WrappedMetadataUpdateResponse = ResultsWrapper<IngestionResponse>;
pub type WrappedUpdateResponse = ResultsWrapper<UpdateResponse>;
pub type WrappedCreateVectorIndexResponse = ResultsWrapper<CreateVectorIndexResponse>;
pub type WrappedListVectorIndicesResponse = ResultsWrapper<ListVectorIndicesResponse>;
pub type WrappedDeleteVectorIndexResponse = ResultsWrapper<DeleteVectorIndexResponse>;
pub type WrappedSelectVectorIndexResponse = ResultsWrapper<SelectVectorIndexResponse>;
