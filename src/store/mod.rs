//! Persistenz-Backends und der autoritative EntityStore.

pub mod entity_store;
pub mod local;
pub mod memory;
pub mod remote;

pub use entity_store::EntityStore;
pub use local::LocalStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;

use crate::core::{MapPoint, Route};
use crate::shared::{AnnotatorOptions, StorageMode};

/// Backing-Store der Punkt-Kollektion.
///
/// Ganz-Kollektion-Backends (lokale JSON-Slots) brauchen nur `load` und
/// `replace_all`; die Default-Implementierungen von `store_new`,
/// `store_update` und `delete` schreiben dann den übergebenen
/// Nach-Mutation-Snapshot. Das REST-Backend überschreibt die drei
/// Einzeloperationen.
pub trait PointStore {
    /// Liest die komplette Punkt-Kollektion.
    fn load(&self) -> anyhow::Result<Vec<MapPoint>>;

    /// Ersetzt die komplette Punkt-Kollektion.
    fn replace_all(&self, points: &[MapPoint]) -> anyhow::Result<()>;

    /// Persistiert einen neuen Punkt und gibt den gespeicherten Datensatz
    /// zurück (Remote-Backends vergeben Id und Zeitstempel serverseitig).
    fn store_new(&self, point: &MapPoint, collection: &[MapPoint]) -> anyhow::Result<MapPoint> {
        self.replace_all(collection)?;
        Ok(point.clone())
    }

    /// Persistiert die Änderung eines bestehenden Punktes.
    fn store_update(&self, point: &MapPoint, collection: &[MapPoint]) -> anyhow::Result<()> {
        let _ = point;
        self.replace_all(collection)
    }

    /// Persistiert das Löschen eines Punktes.
    fn delete(&self, id: u64, collection: &[MapPoint]) -> anyhow::Result<()> {
        let _ = id;
        self.replace_all(collection)
    }
}

/// Backing-Store der Routen-Kollektion (immer Ganz-Kollektion-Semantik;
/// die REST-Facade kennt keine Routen-Endpunkte).
pub trait RouteStore {
    /// Liest die komplette Routen-Kollektion.
    fn load(&self) -> anyhow::Result<Vec<Route>>;

    /// Ersetzt die komplette Routen-Kollektion.
    fn replace_all(&self, routes: &[Route]) -> anyhow::Result<()>;
}

/// Öffnet die konfigurierten Backends.
///
/// Im Remote-Modus gehen nur Punkte über die REST-Facade; Routen bleiben
/// in den lokalen Slots.
pub fn open_backends(
    options: &AnnotatorOptions,
) -> (Box<dyn PointStore>, Box<dyn RouteStore>) {
    let local = LocalStore::new(&options.data_dir);
    match options.storage_mode {
        StorageMode::Local => (Box::new(local.clone()), Box::new(local)),
        StorageMode::Remote => {
            let remote = RemoteStore::new(&options.server_url, local.clone());
            (Box::new(remote), Box::new(local))
        }
    }
}
