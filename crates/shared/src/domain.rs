use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationId(pub i64);

impl fmt::Display for RecommendationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recommendation kinds the service knows about. The wire carries the type
/// as a plain string, so values outside this list are passed through as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    UpSell,
    CrossSell,
    Accessory,
    Bundle,
}

impl RecommendationType {
    pub const ALL: [RecommendationType; 4] = [
        RecommendationType::UpSell,
        RecommendationType::CrossSell,
        RecommendationType::Accessory,
        RecommendationType::Bundle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecommendationType::UpSell => "UP_SELL",
            RecommendationType::CrossSell => "CROSS_SELL",
            RecommendationType::Accessory => "ACCESSORY",
            RecommendationType::Bundle => "BUNDLE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_type_uses_service_names_on_the_wire() {
        let json = serde_json::to_string(&RecommendationType::CrossSell).expect("serialize");
        assert_eq!(json, "\"CROSS_SELL\"");
        for kind in RecommendationType::ALL {
            assert_eq!(RecommendationType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(RecommendationType::parse("up_sell"), None);
    }

    #[test]
    fn recommendation_id_is_a_bare_integer() {
        let id: RecommendationId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(id, RecommendationId(7));
        assert_eq!(id.to_string(), "7");
    }
}
