//! Gemeinsame Typen: Laufzeit-Optionen und Tuning-Konstanten.

pub mod options;

pub use options::{AnnotatorOptions, StorageMode};
