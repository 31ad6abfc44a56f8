//! Export/Import-Rahmen für JSON-Dokumente.

pub mod export;
pub mod import;

pub use export::{export_file_name, export_points, write_export};
pub use import::parse_points_document;
