//! Fehlertaxonomie des Annotation-Cores.

use thiserror::Error;

/// Fehlgeschlagene Core-Operationen.
///
/// Lese-Fehler des Backing-Stores tauchen hier bewusst nicht auf: Laden
/// degradiert zu leeren Kollektionen bzw. zum lokalen Cache und wird nur
/// geloggt.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// Operation referenzierte eine nicht vorhandene Id.
    #[error("Datensatz {id} nicht gefunden")]
    NotFound { id: u64 },

    /// Route mit weniger als zwei Vertices kann nicht abgeschlossen werden.
    #[error("Route unvollständig: {len} Punkte, mindestens 2 nötig")]
    InvalidRoute { len: usize },

    /// Import-Dokument hat nicht die erwartete Form.
    #[error("Ungültiges Import-Format: {0}")]
    InvalidFormat(String),

    /// Backing-Store-Schreibfehler; die In-Memory-Mutation wurde
    /// zurückgerollt.
    #[error("Persistenz fehlgeschlagen: {0}")]
    Persistence(anyhow::Error),
}
