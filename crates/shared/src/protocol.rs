use serde::{Deserialize, Serialize};

use crate::domain::RecommendationId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: RecommendationId,
    pub product_a_sku: String,
    pub product_b_sku: String,
    pub recommendation_type: String,
    pub likes: i64,
}

/// Lenient view of a record used when a response is consumed as a
/// recommendation without being guaranteed to be one (the `/pets/{id}`
/// endpoints). Missing fields decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationFields {
    #[serde(default)]
    pub id: Option<RecommendationId>,
    #[serde(default)]
    pub product_a_sku: Option<String>,
    #[serde(default)]
    pub product_b_sku: Option<String>,
    #[serde(default)]
    pub recommendation_type: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
}

impl From<Recommendation> for RecommendationFields {
    fn from(value: Recommendation) -> Self {
        Self {
            id: Some(value.id),
            product_a_sku: Some(value.product_a_sku),
            product_b_sku: Some(value.product_b_sku),
            recommendation_type: Some(value.recommendation_type),
            likes: Some(value.likes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecommendation {
    pub product_a_sku: String,
    pub product_b_sku: String,
    pub recommendation_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetPayload {
    pub name: String,
    pub category: String,
    pub available: bool,
    pub gender: String,
    pub birthday: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_shaped_body_decodes_as_partial_fields() {
        let body = r#"{"id":3,"name":"fido","category":"dog","available":true}"#;
        let fields: RecommendationFields = serde_json::from_str(body).expect("decode");
        assert_eq!(fields.id, Some(RecommendationId(3)));
        assert_eq!(fields.product_a_sku, None);
        assert_eq!(fields.likes, None);
    }

    #[test]
    fn create_body_has_exactly_three_keys() {
        let body = serde_json::to_value(NewRecommendation {
            product_a_sku: "A1".into(),
            product_b_sku: "B1".into(),
            recommendation_type: "UP_SELL".into(),
        })
        .expect("serialize");
        let keys: Vec<_> = body.as_object().expect("object").keys().cloned().collect();
        assert_eq!(
            keys,
            vec!["product_a_sku", "product_b_sku", "recommendation_type"]
        );
    }
}
