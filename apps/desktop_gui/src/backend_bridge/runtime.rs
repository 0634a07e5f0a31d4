//! Runtime bridge between UI command queue and backend event intake.
//!
//! One worker thread owns a tokio runtime and spawns an independent task per
//! command. Tasks may overlap; each posts exactly one completion event back.
//! Nothing is cancelled, so completions reach the UI in arrival order.

use std::{sync::Arc, thread};

use client_core::RecommendationsApi;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    api: Arc<dyn RecommendationsApi>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorCategory::Unknown,
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        while let Ok(cmd) = cmd_rx.recv() {
            let api = Arc::clone(&api);
            let ui_tx = ui_tx.clone();
            runtime.spawn(async move {
                let command = cmd.name();
                let event = execute_command(api.as_ref(), cmd).await;
                // Wait for room instead of dropping; the send blocks, so it
                // runs off the async workers.
                let posted = tokio::task::spawn_blocking(move || ui_tx.send(event).is_ok()).await;
                match posted {
                    Ok(true) => tracing::debug!(command, "posted backend completion"),
                    Ok(false) => tracing::debug!(command, "ui closed before completion arrived"),
                    Err(err) => tracing::error!(command, "completion hand-off failed: {err}"),
                }
            });
        }

        tracing::info!("backend command queue closed; worker exiting");
    })
}

pub async fn execute_command(api: &dyn RecommendationsApi, cmd: BackendCommand) -> UiEvent {
    let command = cmd.name();
    let fail = |context: UiErrorContext, err: client_core::ClientError| {
        tracing::warn!(command, error = %err, "backend command failed");
        UiError::from_client_error(context, &err)
    };

    match cmd {
        BackendCommand::CreateRecommendation { request } => UiEvent::RecommendationCreated(
            api.create_recommendation(&request)
                .await
                .map_err(|err| fail(UiErrorContext::CreateRecommendation, err)),
        ),
        BackendCommand::UpdatePet { pet_id, payload } => UiEvent::PetUpdated(
            api.update_pet(&pet_id, &payload)
                .await
                .map_err(|err| fail(UiErrorContext::UpdatePet, err)),
        ),
        BackendCommand::RetrievePet { pet_id } => UiEvent::PetRetrieved(
            api.get_pet(&pet_id)
                .await
                .map_err(|err| fail(UiErrorContext::RetrievePet, err)),
        ),
        BackendCommand::DeleteRecommendation { recommendation_id } => {
            UiEvent::RecommendationDeleted(
                api.delete_recommendation(&recommendation_id)
                    .await
                    .map_err(|err| fail(UiErrorContext::DeleteRecommendation, err)),
            )
        }
        BackendCommand::SearchRecommendations { query } => UiEvent::SearchCompleted(
            api.search_recommendations(&query)
                .await
                .map_err(|err| fail(UiErrorContext::Search, err)),
        ),
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
