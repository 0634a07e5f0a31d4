use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    error::ApiError,
    protocol::{NewRecommendation, PetPayload, Recommendation, RecommendationFields},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const JSON_CONTENT_TYPE: &str = "application/json";

const RECOMMENDATIONS_PATH: &str = "recommendations";
const PETS_PATH: &str = "pets";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error(
        "server returned {status}{}",
        .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Api { status: u16, message: Option<String> },
    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Text shown to the user: the server's `message` when it sent one,
    /// otherwise this error's own description.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Builds the search query from the two optional filters. Empty filters are
/// skipped and `&` only appears when both are present.
pub fn build_search_query(product_a_sku: &str, recommendation_type: &str) -> String {
    let mut query = String::new();
    if !product_a_sku.is_empty() {
        query.push_str("product_a_sku=");
        query.push_str(product_a_sku);
    }
    if !recommendation_type.is_empty() {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str("recommendation_type=");
        query.push_str(recommendation_type);
    }
    query
}

#[async_trait]
pub trait RecommendationsApi: Send + Sync {
    async fn create_recommendation(
        &self,
        request: &NewRecommendation,
    ) -> Result<Recommendation, ClientError>;
    async fn update_pet(
        &self,
        pet_id: &str,
        payload: &PetPayload,
    ) -> Result<RecommendationFields, ClientError>;
    async fn get_pet(&self, pet_id: &str) -> Result<RecommendationFields, ClientError>;
    async fn delete_recommendation(&self, recommendation_id: &str) -> Result<(), ClientError>;
    async fn search_recommendations(&self, query: &str)
        -> Result<Vec<Recommendation>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpRecommendationsClient {
    http: Client,
    base_url: Url,
}

impl HttpRecommendationsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|err| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http(s) url".to_string(),
            });
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Cannot fail: `new` rejects cannot-be-a-base urls.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET/DELETE carry the JSON content type with an empty body.
    fn bodyless(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE)
    }

    async fn execute(&self, url: &Url, builder: RequestBuilder) -> Result<Response, ClientError> {
        debug!(%url, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        let message = ApiError::from_body(&body).map(|err| err.message);
        warn!(%url, status = status.as_u16(), ?message, "request rejected by server");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, ClientError> {
        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl RecommendationsApi for HttpRecommendationsClient {
    async fn create_recommendation(
        &self,
        request: &NewRecommendation,
    ) -> Result<Recommendation, ClientError> {
        let url = self.endpoint(&[RECOMMENDATIONS_PATH]);
        let response = self
            .execute(&url, self.http.post(url.clone()).json(request))
            .await?;
        Self::decode(&url, response).await
    }

    async fn update_pet(
        &self,
        pet_id: &str,
        payload: &PetPayload,
    ) -> Result<RecommendationFields, ClientError> {
        let url = self.endpoint(&[PETS_PATH, pet_id]);
        let response = self
            .execute(&url, self.http.put(url.clone()).json(payload))
            .await?;
        Self::decode(&url, response).await
    }

    async fn get_pet(&self, pet_id: &str) -> Result<RecommendationFields, ClientError> {
        let url = self.endpoint(&[PETS_PATH, pet_id]);
        let response = self
            .execute(&url, self.bodyless(self.http.get(url.clone())))
            .await?;
        Self::decode(&url, response).await
    }

    async fn delete_recommendation(&self, recommendation_id: &str) -> Result<(), ClientError> {
        let url = self.endpoint(&[RECOMMENDATIONS_PATH, recommendation_id]);
        self.execute(&url, self.bodyless(self.http.delete(url.clone())))
            .await?;
        Ok(())
    }

    async fn search_recommendations(
        &self,
        query: &str,
    ) -> Result<Vec<Recommendation>, ClientError> {
        let mut url = self.endpoint(&[RECOMMENDATIONS_PATH]);
        url.set_query(Some(query));
        let response = self
            .execute(&url, self.bodyless(self.http.get(url.clone())))
            .await?;
        Self::decode(&url, response).await
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
