// brandgraph: manufacturer hierarchy inference from product matches
//
// This is the library root. Each module corresponds to a major subsystem
// of the mapping pipeline.

pub mod brand;
pub mod config;
pub mod db;
pub mod ingest;
pub mod logging;
pub mod mapping;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod status;
pub mod validation;
