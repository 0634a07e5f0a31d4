//! Backend completion events and error modeling for the form controller.

use client_core::ClientError;
use shared::protocol::{Recommendation, RecommendationFields};

pub enum UiEvent {
    RecommendationCreated(Result<Recommendation, UiError>),
    PetUpdated(Result<RecommendationFields, UiError>),
    PetRetrieved(Result<RecommendationFields, UiError>),
    RecommendationDeleted(Result<(), UiError>),
    SearchCompleted(Result<Vec<Recommendation>, UiError>),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    NotFound,
    Validation,
    Server,
    Transport,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CreateRecommendation,
    UpdatePet,
    RetrievePet,
    DeleteRecommendation,
    Search,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match (err, err.status()) {
            (_, Some(404)) => UiErrorCategory::NotFound,
            (_, Some(status)) if (400..500).contains(&status) => UiErrorCategory::Validation,
            (_, Some(_)) => UiErrorCategory::Server,
            (ClientError::Transport { .. }, None) => UiErrorCategory::Transport,
            (ClientError::Decode { .. }, None) => UiErrorCategory::Decode,
            (ClientError::Api { .. } | ClientError::InvalidBaseUrl { .. }, None) => {
                UiErrorCategory::Unknown
            }
        };

        Self {
            category,
            context,
            message: err.display_message(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
