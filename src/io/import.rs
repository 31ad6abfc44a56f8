//! Import-Parser für Punkt-Dokumente.

use serde_json::Value;

use crate::core::{AnnotationError, MapPoint};

/// Parsed ein Import-Dokument.
///
/// Das Dokument muss ein Top-Level-Array punkt-förmiger Datensätze sein;
/// alles andere schlägt mit `InvalidFormat` fehl. Die Merge-Semantik
/// selbst liegt in [`crate::core::merge_points`].
pub fn parse_points_document(text: &str) -> Result<Vec<MapPoint>, AnnotationError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| AnnotationError::InvalidFormat(format!("kein gültiges JSON: {e}")))?;

    let Value::Array(entries) = value else {
        return Err(AnnotationError::InvalidFormat(
            "Top-Level muss ein Array sein".to_string(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::from_value(entry).map_err(|e| {
                AnnotationError::InvalidFormat(format!("Eintrag {i} ist kein Punkt: {e}"))
            })
        })
        .collect()
}
