//! State transitions applied on the UI thread: one at request time, one when
//! the matching completion arrives.

use shared::protocol::RecommendationFields;

use crate::controller::{
    events::UiEvent,
    form::FormState,
    render::ResultsTable,
};

pub const CREATED_MESSAGE: &str = "Successfully created a recommendation";
pub const SUCCESS_MESSAGE: &str = "Success";
pub const DELETED_MESSAGE: &str = "Recommendation has been Deleted!";
pub const DELETE_FAILED_MESSAGE: &str = "Server error!";

/// Every request starts from an empty flash and no results table.
pub fn begin_request(state: &mut FormState) {
    state.clear_flash();
    state.search_results = None;
}

pub fn clear_form(state: &mut FormState) {
    state.clear_flash();
    state.recommendation.clear();
}

pub fn apply_event(state: &mut FormState, event: UiEvent) {
    match event {
        UiEvent::RecommendationCreated(result) => match result {
            Ok(created) => {
                state.recommendation.load(&RecommendationFields::from(created));
                state.flash_info(CREATED_MESSAGE);
            }
            Err(err) => state.flash_error(err.category(), err.message()),
        },
        UiEvent::PetUpdated(result) => match result {
            Ok(fields) => {
                state.recommendation.load(&fields);
                state.flash_info(SUCCESS_MESSAGE);
            }
            Err(err) => state.flash_error(err.category(), err.message()),
        },
        UiEvent::PetRetrieved(result) => match result {
            Ok(fields) => {
                state.recommendation.load(&fields);
                state.flash_info(SUCCESS_MESSAGE);
            }
            Err(err) => {
                state.recommendation.clear();
                state.flash_error(err.category(), err.message());
            }
        },
        UiEvent::RecommendationDeleted(result) => match result {
            Ok(()) => {
                state.recommendation.clear();
                state.flash_info(DELETED_MESSAGE);
            }
            Err(err) => state.flash_error(err.category(), DELETE_FAILED_MESSAGE),
        },
        UiEvent::SearchCompleted(result) => match result {
            Ok(records) => {
                if let Some(first) = records.first() {
                    state
                        .recommendation
                        .load(&RecommendationFields::from(first.clone()));
                }
                tracing::debug!(rows = records.len(), "search results rendered");
                state.search_results = Some(ResultsTable::new(records));
                state.flash_info(SUCCESS_MESSAGE);
            }
            Err(err) => state.flash_error(err.category(), err.message()),
        },
        UiEvent::Error(err) => {
            tracing::error!(context = ?err.context(), "{}", err.message());
            state.flash_error(err.category(), err.message());
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
