//! Core-Domänentypen: Punkte, Routen, Kollektionen, Spatial-Index, Merge.

pub mod annotation_map;
pub mod error;
pub mod ids;
pub mod merge;
pub mod point;
pub mod route;
pub mod spatial;

pub use annotation_map::AnnotationMap;
pub use error::AnnotationError;
pub use ids::{human_timestamp, IdGenerator};
pub use merge::{merge_points, merge_routes};
pub use point::{Attachment, Category, MapPoint, Picture, PointDraft, PointPatch};
pub use route::{Route, RouteDraft, RoutePatch, RoutePoint, RoutePointKind, MIN_ROUTE_POINTS};
pub use spatial::{GeoPos, SpatialIndex, SpatialMatch, MAP_CENTER_LAT, MAP_CENTER_LNG};
