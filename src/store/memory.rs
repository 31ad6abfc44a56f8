//! In-Memory-Backend für Tests und Degraded-Betrieb.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{PointStore, RouteStore};
use crate::core::{MapPoint, Route};

#[derive(Debug, Default)]
struct Inner {
    points: RefCell<Vec<MapPoint>>,
    routes: RefCell<Vec<Route>>,
    fail_writes: Cell<bool>,
}

/// Backing-Store ohne Platte.
///
/// Klone teilen sich den Bestand — Tests behalten damit einen Handle auf
/// die Kollektionen, nachdem ein Klon in den EntityStore gewandert ist.
/// Über `set_fail_writes` lassen sich Schreibfehler erzwingen, um das
/// Rollback-Verhalten zu prüfen.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<Inner>,
}

impl MemoryStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Store mit vorgegebenem Bestand.
    pub fn with_collections(points: Vec<MapPoint>, routes: Vec<Route>) -> Self {
        let store = Self::new();
        *store.inner.points.borrow_mut() = points;
        *store.inner.routes.borrow_mut() = routes;
        store
    }

    /// Schaltet erzwungene Schreibfehler ein oder aus.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }

    /// Aktueller Punkt-Bestand (Test-Inspektion).
    pub fn points_snapshot(&self) -> Vec<MapPoint> {
        self.inner.points.borrow().clone()
    }

    /// Aktueller Routen-Bestand (Test-Inspektion).
    pub fn routes_snapshot(&self) -> Vec<Route> {
        self.inner.routes.borrow().clone()
    }

    fn check_writable(&self) -> anyhow::Result<()> {
        if self.inner.fail_writes.get() {
            anyhow::bail!("Schreibzugriff deaktiviert");
        }
        Ok(())
    }
}

impl PointStore for MemoryStore {
    fn load(&self) -> anyhow::Result<Vec<MapPoint>> {
        Ok(self.inner.points.borrow().clone())
    }

    fn replace_all(&self, points: &[MapPoint]) -> anyhow::Result<()> {
        self.check_writable()?;
        *self.inner.points.borrow_mut() = points.to_vec();
        Ok(())
    }
}

impl RouteStore for MemoryStore {
    fn load(&self) -> anyhow::Result<Vec<Route>> {
        Ok(self.inner.routes.borrow().clone())
    }

    fn replace_all(&self, routes: &[Route]) -> anyhow::Result<()> {
        self.check_writable()?;
        *self.inner.routes.borrow_mut() = routes.to_vec();
        Ok(())
    }
}
