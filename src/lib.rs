//! Reconnaissance over a GraphQL endpoint's introspection schema: which root query fields can be
//! called right away, and which need arguments (and which of those arguments are required).
//!
//! The pipeline runs once, strictly forward: [`fetch`](fetch/index.html) the schema, locate the
//! root query type, [`classify`](classification/fn.classify.html) its fields and
//! [`render`](report/fn.render.html) the report.

#[macro_use]
extern crate failure;
extern crate futures;
extern crate hyper;
extern crate hyper_tls;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate tokio_core;

pub mod classification;
pub mod errors;
pub mod fetch;
pub mod introspection;
pub mod report;
pub mod resolver;
mod shared;

pub use classification::{classify, Classification};
pub use errors::InspectError;
pub use fetch::SchemaFetcher;
pub use introspection::Schema;
pub use report::{render, RenderOptions};

/// Fetches the schema behind `base_url` and classifies the fields of its root query type.
pub fn inspect(fetcher: &SchemaFetcher, base_url: &str) -> Result<Classification, InspectError> {
    let response = fetcher.fetch(base_url)?;
    let schema = Schema::from_response(response)?;
    let query_type = schema.locate_query_type()?;
    Ok(classify(query_type))
}
