//! HTTP implementation of `ChatGateway`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    domain::{ChatApiError, ChatGateway, ChatReply, ChatRequest},
    infrastructure::dto::http::{ChatRequestDto, ChatResponseDto},
};

/// Path of the chat endpoint relative to the API base URL
pub const CHAT_ENDPOINT_PATH: &str = "api/chat";

/// Chat API gateway over HTTP
///
/// Posts one JSON body per request. Transport failures, non-2xx statuses
/// and undecodable bodies all surface as `ChatApiError`.
#[derive(Debug, Clone)]
pub struct HttpChatGateway {
    client: Client,
    endpoint: Url,
}

impl HttpChatGateway {
    /// Create a gateway posting to `endpoint`
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the chat endpoint
    /// * `timeout` - Optional total timeout per request; `None` leaves it to the transport
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ChatApiError> {
        let body = ChatRequestDto::from(&request);
        tracing::debug!(
            "POST {} (persona={}, mode={}, session={:?})",
            self.endpoint,
            body.persona,
            body.mode,
            body.session_id
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatApiError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ChatApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let dto: ChatResponseDto =
            serde_json::from_str(&text).map_err(|e| ChatApiError::Decode(e.to_string()))?;

        tracing::debug!("Chat API replied with {} bytes", dto.response.len());
        Ok(dto.into())
    }
}
