//! Form state owned by the UI thread: the single record being edited, the
//! flash area, and the last search results.

use shared::protocol::{PetPayload, RecommendationFields};

use crate::controller::{events::UiErrorCategory, render::ResultsTable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationForm {
    pub id: String,
    pub product_a_sku: String,
    pub product_b_sku: String,
    pub recommendation_type: String,
    pub likes: String,
}

impl RecommendationForm {
    /// Writes every input from the record; fields the record lacks become
    /// empty.
    pub fn load(&mut self, record: &RecommendationFields) {
        self.id = record.id.map(|id| id.to_string()).unwrap_or_default();
        self.product_a_sku = record.product_a_sku.clone().unwrap_or_default();
        self.product_b_sku = record.product_b_sku.clone().unwrap_or_default();
        self.recommendation_type = record.recommendation_type.clone().unwrap_or_default();
        self.likes = record.likes.map(|likes| likes.to_string()).unwrap_or_default();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetForm {
    pub id: String,
    pub name: String,
    pub category: String,
    pub available: String,
    pub gender: String,
    pub birthday: String,
}

impl Default for PetForm {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            category: String::new(),
            available: "true".to_string(),
            gender: String::new(),
            birthday: String::new(),
        }
    }
}

impl PetForm {
    /// Only the literal `"true"` counts as available.
    pub fn payload(&self) -> PetPayload {
        PetPayload {
            name: self.name.clone(),
            category: self.category.clone(),
            available: self.available == "true",
            gender: self.gender.clone(),
            birthday: self.birthday.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashSeverity {
    Info,
    Error(UiErrorCategory),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub severity: FlashSeverity,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub recommendation: RecommendationForm,
    pub pet: PetForm,
    pub flash: Option<FlashMessage>,
    pub search_results: Option<ResultsTable>,
}

impl FormState {
    pub fn flash_text(&self) -> &str {
        self.flash.as_ref().map(|f| f.text.as_str()).unwrap_or_default()
    }

    pub fn flash_info(&mut self, text: impl Into<String>) {
        self.flash = Some(FlashMessage {
            severity: FlashSeverity::Info,
            text: text.into(),
        });
    }

    pub fn flash_error(&mut self, category: UiErrorCategory, text: impl Into<String>) {
        self.flash = Some(FlashMessage {
            severity: FlashSeverity::Error(category),
            text: text.into(),
        });
    }

    pub fn clear_flash(&mut self) {
        self.flash = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::RecommendationId;

    #[test]
    fn load_blanks_inputs_for_absent_fields() {
        let mut form = RecommendationForm {
            id: "1".into(),
            product_a_sku: "A1".into(),
            product_b_sku: "B1".into(),
            recommendation_type: "BUNDLE".into(),
            likes: "3".into(),
        };
        // A pet body carries only the id among the recommendation keys.
        let pet_fields = RecommendationFields {
            id: Some(RecommendationId(3)),
            ..RecommendationFields::default()
        };
        form.load(&pet_fields);
        assert_eq!(
            form,
            RecommendationForm {
                id: "3".into(),
                ..RecommendationForm::default()
            }
        );
    }

    #[test]
    fn available_is_true_only_for_literal_true() {
        let mut pet = PetForm::default();
        for (raw, expected) in [("true", true), ("false", false), ("True", false), ("", false)] {
            pet.available = raw.to_string();
            assert_eq!(pet.payload().available, expected, "input {raw:?}");
        }
    }
}
