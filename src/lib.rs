pub mod aggregate;
pub mod cleaning;
pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod schema;
