//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod route_builder;
pub mod state;
pub mod view_model;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, PointEditForm, PointForm, RouteForm};
pub use route_builder::{PreviewMarkerView, RouteBuilder};
pub use state::{AppState, CategoryFilter, DeleteTarget, EditTarget, Notice, UiState};
pub use view_model::{BuildPreviewView, PointView, RouteView, ViewSnapshot};
