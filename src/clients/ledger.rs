use async_trait::async_trait;
use eyre::{eyre, Report};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::LedgerError;
use crate::models::app_state::AppState;
use crate::models::dtos::{ChargeRequest, TransferData};

const TRANSFER_PATH: &str = "/eoullim/exchange/transfer";

/// Seam for the outbound transfer call so the workflow can run against an
/// in-memory fake in tests.
#[async_trait]
pub trait TransferApi: Send + Sync {
    async fn transfer(&self, req: &ChargeRequest) -> Result<TransferData, LedgerError>;
}

#[async_trait]
impl<T: TransferApi + ?Sized> TransferApi for std::sync::Arc<T> {
    async fn transfer(&self, req: &ChargeRequest) -> Result<TransferData, LedgerError> {
        (**self).transfer(req).await
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferBody<'a> {
    user_id: i64,
    amount: i64,
    message: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TransferEnvelope {
    data: TransferData,
}

#[derive(Debug, Deserialize)]
struct LedgerFailureBody {
    message: String,
}

#[derive(Clone)]
pub struct LedgerClient {
    http: Client,
    base_url: Url,
    token: SecretString,
}

impl LedgerClient {
    pub fn new(http: Client, base_url: &str, token: SecretString) -> Result<Self, Report> {
        let base_url =
            Url::parse(base_url).map_err(|_| eyre!("Invalid payment backend base URL"))?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    pub fn from_state(state: &AppState) -> Result<Self, Report> {
        Self::new(
            state.http_client.clone(),
            &state.config.backend.base_url,
            state.config.backend.token.clone(),
        )
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}

#[async_trait]
impl TransferApi for LedgerClient {
    /// One request, one verdict. No retries: the backend is the source of
    /// truth and a blind retry could double-charge.
    async fn transfer(&self, req: &ChargeRequest) -> Result<TransferData, LedgerError> {
        let resp = self
            .http
            .post(self.endpoint(TRANSFER_PATH))
            .bearer_auth(self.token.expose_secret())
            .json(&TransferBody {
                user_id: req.user_id,
                amount: req.amount,
                message: req.message.as_deref(),
            })
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach payment backend");
                LedgerError::Transport(e.to_string())
            })?;

        let status = resp.status();

        let body_text = resp
            .text()
            .await
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(
                http_status = status.as_u16(),
                response = %body_text.chars().take(200).collect::<String>(),
                "Payment backend rejected transfer"
            );
            return match serde_json::from_str::<LedgerFailureBody>(&body_text) {
                Ok(body) => Err(LedgerError::Declined(body.message)),
                Err(_) => Err(LedgerError::Opaque(body_text)),
            };
        }

        let body: TransferEnvelope = serde_json::from_str(&body_text).map_err(|e| {
            error!(
                error = %e,
                response = %body_text.chars().take(200).collect::<String>(),
                "Invalid JSON from payment backend"
            );
            LedgerError::Transport("Invalid transfer response".into())
        })?;

        Ok(body.data)
    }
}
