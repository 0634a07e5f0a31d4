//! Command orchestration from UI actions to the backend command queue.

use client_core::build_search_query;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::protocol::NewRecommendation;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiErrorCategory, UiEvent},
    form::FormState,
    reducer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    Update,
    Retrieve,
    Delete,
    Clear,
    Search,
}

impl FormAction {
    pub const ALL: [FormAction; 6] = [
        FormAction::Create,
        FormAction::Update,
        FormAction::Retrieve,
        FormAction::Delete,
        FormAction::Clear,
        FormAction::Search,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormAction::Create => "Create",
            FormAction::Update => "Update",
            FormAction::Retrieve => "Retrieve",
            FormAction::Delete => "Delete",
            FormAction::Clear => "Clear",
            FormAction::Search => "Search",
        }
    }
}

/// Reads the form inputs an action needs. `Clear` never talks to the server.
pub fn build_command(action: FormAction, state: &FormState) -> Option<BackendCommand> {
    let recommendation = &state.recommendation;
    let pet = &state.pet;
    match action {
        FormAction::Create => Some(BackendCommand::CreateRecommendation {
            request: NewRecommendation {
                product_a_sku: recommendation.product_a_sku.clone(),
                product_b_sku: recommendation.product_b_sku.clone(),
                recommendation_type: recommendation.recommendation_type.clone(),
            },
        }),
        FormAction::Update => Some(BackendCommand::UpdatePet {
            pet_id: pet.id.clone(),
            payload: pet.payload(),
        }),
        FormAction::Retrieve => Some(BackendCommand::RetrievePet {
            pet_id: pet.id.clone(),
        }),
        FormAction::Delete => Some(BackendCommand::DeleteRecommendation {
            recommendation_id: recommendation.id.clone(),
        }),
        FormAction::Search => Some(BackendCommand::SearchRecommendations {
            query: build_search_query(
                &recommendation.product_a_sku,
                &recommendation.recommendation_type,
            ),
        }),
        FormAction::Clear => None,
    }
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    state: &mut FormState,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            state.flash_error(
                UiErrorCategory::Unknown,
                "UI command queue is full; please retry",
            );
        }
        Err(TrySendError::Disconnected(_)) => {
            state.flash_error(
                UiErrorCategory::Unknown,
                "Backend command processor disconnected; restart the application",
            );
        }
    }
}

/// Owns the form state and both ends of the backend bridge as seen from the
/// UI thread.
pub struct FormController {
    pub state: FormState,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl FormController {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            state: FormState::default(),
            cmd_tx,
            ui_rx,
        }
    }

    pub fn trigger(&mut self, action: FormAction) {
        match build_command(action, &self.state) {
            Some(cmd) => {
                reducer::begin_request(&mut self.state);
                dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state);
            }
            None => reducer::clear_form(&mut self.state),
        }
    }

    /// Applies every completion that has arrived, in arrival order.
    pub fn process_ui_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.ui_rx.try_recv() {
            reducer::apply_event(&mut self.state, event);
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
