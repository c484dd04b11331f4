use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use super::error::{check_response, decode_json, not_found_as_missing};
use super::{NewMessage, StatusUpdate, TicketService, WhatsAppMessage};
use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::types::{Ticket, TicketDraft, TicketStatus};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `TicketService` backed by the HTTP+JSON ticket API
#[derive(Debug, Clone)]
pub struct HttpTicketService {
    client: Client,
    base_url: Url,
}

impl HttpTicketService {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(DeskError::Config(format!(
                "api_url '{}' cannot be used as a base URL",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_timeout(&config.api_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended with `segments`, each percent-encoded as a single segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DeskError::Config(format!("invalid base URL '{}'", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, %url, "ticket service request");
        Ok(self.client.request(method, url))
    }
}

impl TicketService for HttpTicketService {
    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        let response = self.request(Method::GET, &["tickets"])?.send().await?;
        decode_json(check_response(response).await?).await
    }

    async fn get_ticket(&self, id: &str) -> Result<Ticket> {
        let response = self
            .request(Method::GET, &["tickets", id])?
            .send()
            .await?;
        let response = check_response(response)
            .await
            .map_err(|e| not_found_as_missing(e, id))?;
        decode_json(response).await
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket> {
        let response = self
            .request(Method::POST, &["tickets"])?
            .json(draft)
            .send()
            .await?;
        decode_json(check_response(response).await?).await
    }

    async fn update_ticket(&self, id: &str, draft: &TicketDraft) -> Result<Ticket> {
        let response = self
            .request(Method::PUT, &["tickets", id])?
            .json(draft)
            .send()
            .await?;
        let response = check_response(response)
            .await
            .map_err(|e| not_found_as_missing(e, id))?;
        decode_json(response).await
    }

    async fn update_ticket_status(&self, id: &str, status: TicketStatus) -> Result<Ticket> {
        let response = self
            .request(Method::PATCH, &["tickets", id, "status"])?
            .json(&StatusUpdate { status })
            .send()
            .await?;
        let response = check_response(response)
            .await
            .map_err(|e| not_found_as_missing(e, id))?;
        decode_json(response).await
    }

    async fn delete_ticket(&self, id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &["tickets", id])?
            .send()
            .await?;
        check_response(response)
            .await
            .map_err(|e| not_found_as_missing(e, id))?;
        Ok(())
    }

    async fn add_message(&self, id: &str, message: &str, from_client: bool) -> Result<()> {
        let body = NewMessage {
            message: message.to_string(),
            from_client,
        };
        let response = self
            .request(Method::POST, &["tickets", id, "messages"])?
            .json(&body)
            .send()
            .await?;
        check_response(response)
            .await
            .map_err(|e| not_found_as_missing(e, id))?;
        Ok(())
    }

    async fn send_whatsapp_message(&self, to: &str, message: &str) -> Result<()> {
        let body = WhatsAppMessage {
            to: to.to_string(),
            message: message.to_string(),
        };
        let response = self
            .request(Method::POST, &["integrations", "whatsapp", "send"])?
            .json(&body)
            .send()
            .await?;
        check_response(response).await?;
        Ok(())
    }
}
