//! App-Intent- und App-Command-Events.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::{AppIntent, PointEditForm, PointForm, RouteForm};
