// Ingestion — reads product and match CSV files into memory.

pub mod csv_reader;
pub mod loader;

pub use loader::{load_matches, load_products};
