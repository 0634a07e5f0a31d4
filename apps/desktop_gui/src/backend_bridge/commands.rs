//! Backend commands queued from UI to backend worker.

use shared::protocol::{NewRecommendation, PetPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    CreateRecommendation {
        request: NewRecommendation,
    },
    UpdatePet {
        pet_id: String,
        payload: PetPayload,
    },
    RetrievePet {
        pet_id: String,
    },
    DeleteRecommendation {
        recommendation_id: String,
    },
    SearchRecommendations {
        query: String,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::CreateRecommendation { .. } => "create_recommendation",
            BackendCommand::UpdatePet { .. } => "update_pet",
            BackendCommand::RetrievePet { .. } => "retrieve_pet",
            BackendCommand::DeleteRecommendation { .. } => "delete_recommendation",
            BackendCommand::SearchRecommendations { .. } => "search_recommendations",
        }
    }
}
