//! # PMC ID Converter Client
//!
//! A Rust client for the NCBI PMC ID Converter API, which maps between
//! PubMed IDs (PMID), PubMed Central IDs (PMCID) and DOIs.
//!
//! ## Features
//!
//! - **Batching**: Large identifier lists are split into chunks the service accepts
//! - **Correlation**: Each record is matched back to the identifier that requested it
//! - **Async Support**: Built on tokio and reqwest
//! - **Error Handling**: A 404 yields no records, other failures surface as typed errors
//!
//! ## Quick Start
//!
//! ```no_run
//! use pmc_idconv_client::{ConversionRequest, IdConverter, IdType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let converter = IdConverter::new("researcher@university.edu");
//!
//!     let request = ConversionRequest::new(["7611378", "PMC1325230"])
//!         .with_id_type(IdType::Pmcid);
//!
//!     for result in converter.convert(&request).await? {
//!         println!("{:?} -> PMID {:?}", result.requested_id, result.pmid);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod idconv;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{IdConvError, Result};
pub use idconv::{
    ChunkFailure, ConversionOutcome, ConversionRequest, ConversionResult, IdConverter, IdType,
};
