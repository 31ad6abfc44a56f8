//! HK Map Annotator Library.
//! Annotations-Core als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod io;
pub mod server;
pub mod shared;
pub mod store;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CategoryFilter, EditTarget, PointEditForm,
    PointForm, RouteBuilder, RouteForm, ViewSnapshot,
};
pub use core::{
    AnnotationError, AnnotationMap, Attachment, Category, GeoPos, MapPoint, Picture, Route,
    RoutePoint, RoutePointKind, SpatialIndex, SpatialMatch,
};
pub use shared::{AnnotatorOptions, StorageMode};
pub use store::{EntityStore, LocalStore, MemoryStore, PointStore, RemoteStore, RouteStore};
