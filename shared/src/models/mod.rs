//! Shared data models.

pub mod envelope;
pub mod requests;
pub mod responses;

pub use envelope::{
    ErrorResponse, ResultsWrapper, WrappedCreateVectorIndexResponse,
    WrappedDeleteVectorIndexResponse, WrappedIngestionResponse, WrappedListVectorIndicesResponse,
    WrappedMetadataUpdateResponse, WrappedSelectVectorIndexResponse, WrappedUpdateResponse,
};
pub use requests::{
    CreateVectorIndexRequest, IndexMeasure, IndexMethod, IngestDocumentRequest,
    SelectVectorIndexRequest, UpdateDocumentsRequest, UpdateMetadataRequest, VectorTable,
};
pub use responses::{
    CreateVectorIndexResponse, DeleteVectorIndexResponse, IngestionResponse,
    ListVectorIndicesResponse, SelectVectorIndexResponse, UpdateResponse,
};
