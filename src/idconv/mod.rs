//! PMC ID Converter client
//!
//! This module provides functionality to convert between PubMed IDs, PubMed
//! Central IDs and DOIs using the NCBI PMC ID Converter API.

pub mod batch;
pub mod client;
mod deserializers;
pub mod models;
pub mod parser;
pub mod responses;

// Re-export public types
pub use batch::to_chunks;
pub use client::IdConverter;
pub use models::{ChunkFailure, ConversionOutcome, ConversionRequest, ConversionResult, IdType};
pub use parser::IdConvJsonParser;
pub use responses::{IdConvRecord, IdConvResponse};
