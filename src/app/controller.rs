//! Application Controller für zentrale Event-Verarbeitung.

use super::view_model::{self, ViewSnapshot};
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert View-Intents und Commands auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent→Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Punkte ===
            AppCommand::SelectLocation { coord } => handlers::points::select_location(state, coord),
            AppCommand::SubmitPoint { form } => handlers::points::submit_point(state, form),
            AppCommand::CancelPointForm => handlers::points::cancel_form(state),
            AppCommand::RequestDelete { target } => handlers::points::request_delete(state, target),
            AppCommand::ExecuteDelete => handlers::points::execute_delete(state),
            AppCommand::DismissDelete => handlers::points::dismiss_delete(state),
            AppCommand::OpenEditor { target } => handlers::points::open_editor(state, target),
            AppCommand::ApplyPointEdit { edit } => handlers::points::apply_point_edit(state, edit),
            AppCommand::ApplyRoutePointRename { name } => {
                handlers::points::apply_route_point_rename(state, &name)
            }
            AppCommand::CloseEditor => handlers::points::close_editor(state),

            // === Routen-Konstruktion ===
            AppCommand::StartRoute => handlers::route_building::start(state),
            AppCommand::AddRouteVertex { coord } => {
                handlers::route_building::add_vertex(state, coord)
            }
            AppCommand::RemoveRouteVertex { coord } => {
                handlers::route_building::remove_vertex(state, coord)
            }
            AppCommand::CancelRoute => handlers::route_building::cancel(state),

            // === Persistierte Routen ===
            AppCommand::FinishRoute { form } => handlers::routes::finish(state, form),
            AppCommand::ToggleRouteVisibility { id } => {
                handlers::routes::toggle_visibility(state, id)
            }
            AppCommand::UpdateRouteDetails {
                id,
                name,
                description,
            } => handlers::routes::update_details(state, id, name, description),

            // === Import/Export ===
            AppCommand::ExportPoints => handlers::import_export::export_points(state),
            AppCommand::ImportPoints { path } => {
                handlers::import_export::import_points(state, &path)
            }

            // === Filter, Reload, Meldungen ===
            AppCommand::SetCategoryFilter { filter } => handlers::view::set_filter(state, filter),
            AppCommand::ReloadFromStore => handlers::view::reload(state),
            AppCommand::AcknowledgeNotice => handlers::view::acknowledge_notice(state),
        }

        Ok(())
    }

    /// Baut den View-Snapshot aus dem aktuellen AppState.
    pub fn build_view_snapshot(&self, state: &AppState) -> ViewSnapshot {
        view_model::build(state)
    }
}
