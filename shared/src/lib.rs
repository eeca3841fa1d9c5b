//! Shared library for the ingestion API Lambda functions.
//!
//! This crate provides the response schemas, the results envelope, request payloads
//! and the client used to reach the ingestion engine.

pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod schema;

pub use config::Config;
pub use engine::{EngineClient, EngineReply, EngineRequest};
pub use error::{Error, Result, ValidationError};
pub use models::{
    CreateVectorIndexResponse, DeleteVectorIndexResponse, ErrorResponse, IngestionResponse,
    ListVectorIndicesResponse, ResultsWrapper, SelectVectorIndexResponse, UpdateResponse,
};
pub use routes::Route;
pub use schema::ResponseSchema;
