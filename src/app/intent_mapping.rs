//! Mapping von View-Intents auf mutierende App-Commands.

use super::state::{DeleteTarget, EditTarget};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Solange eine blockierende Meldung offen ist, wird nur deren
/// Bestätigung durchgelassen — der auslösende Intent kann danach erneut
/// abgesetzt werden.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    if state.ui.notice.is_some() && !matches!(intent, AppIntent::NoticeAcknowledged) {
        return Vec::new();
    }

    match intent {
        AppIntent::MapClicked { coord } => {
            if state.route_builder.is_building() {
                vec![AppCommand::AddRouteVertex { coord }]
            } else {
                vec![AppCommand::SelectLocation { coord }]
            }
        }
        AppIntent::MapSecondaryClicked { coord } => {
            if state.route_builder.is_building() {
                vec![AppCommand::RemoveRouteVertex { coord }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointFormSubmitted { form } => vec![AppCommand::SubmitPoint { form }],
        AppIntent::PointFormCancelled => vec![AppCommand::CancelPointForm],
        AppIntent::DeletePointRequested { id } => vec![AppCommand::RequestDelete {
            target: DeleteTarget::Point(id),
        }],
        AppIntent::DeleteRouteRequested { id } => vec![AppCommand::RequestDelete {
            target: DeleteTarget::Route(id),
        }],
        AppIntent::DeleteConfirmed => vec![AppCommand::ExecuteDelete],
        AppIntent::DeleteCancelled => vec![AppCommand::DismissDelete],
        AppIntent::EditPointRequested { id } => vec![AppCommand::OpenEditor {
            target: EditTarget::Point { id },
        }],
        AppIntent::EditRoutePointRequested { route_id, index } => vec![AppCommand::OpenEditor {
            target: EditTarget::RoutePoint { route_id, index },
        }],
        AppIntent::PointEditSubmitted { edit } => vec![AppCommand::ApplyPointEdit { edit }],
        AppIntent::RoutePointRenameSubmitted { name } => {
            vec![AppCommand::ApplyRoutePointRename { name }]
        }
        AppIntent::EditCancelled => vec![AppCommand::CloseEditor],
        AppIntent::StartRouteRequested => vec![AppCommand::StartRoute],
        AppIntent::FinishRouteRequested { form } => vec![AppCommand::FinishRoute { form }],
        AppIntent::CancelRouteRequested => vec![AppCommand::CancelRoute],
        AppIntent::ToggleRouteVisibilityRequested { id } => {
            vec![AppCommand::ToggleRouteVisibility { id }]
        }
        AppIntent::RouteDetailsSubmitted {
            id,
            name,
            description,
        } => vec![AppCommand::UpdateRouteDetails {
            id,
            name,
            description,
        }],
        AppIntent::CategoryFilterChanged { filter } => {
            vec![AppCommand::SetCategoryFilter { filter }]
        }
        AppIntent::ExportRequested => vec![AppCommand::ExportPoints],
        AppIntent::ImportFileSelected { path } => vec![AppCommand::ImportPoints { path }],
        AppIntent::RefreshRequested => vec![AppCommand::ReloadFromStore],
        AppIntent::NoticeAcknowledged => vec![AppCommand::AcknowledgeNotice],
    }
}
