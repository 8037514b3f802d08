//! Context ingestion for the stencil template renderer.
//!
//! This crate normalizes heterogeneous data sources (INI, JSON, YAML, or
//! environment variables) into a single uniform key-value mapping that the
//! template engine consumes as its variable namespace.

mod error;
mod formats;
mod reader;
mod registry;

pub use error::ContextError;
pub use formats::Format;
pub use reader::{Context, ContextReader};
pub use registry::{Capabilities, Registry};
