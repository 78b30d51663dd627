use anyhow::Result;
use reqwest::Response;

use super::types::*;
use crate::BACKEND_URL;

#[derive(Clone, Debug)]
pub struct ExpenseApi {
    pub url: String,
}

impl Default for ExpenseApi {
    fn default() -> Self {
        Self {
            url: BACKEND_URL.to_string(),
        }
    }
}

/// Pull the backend's `{message}` out of a failed response, falling
/// back to the raw body text.
async fn backend_error(response: Response) -> Result<String> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::warn!("backend request failed: {status} {text}");
    match serde_json::from_str::<MessageResponse>(&text) {
        Ok(body) if !body.message.is_empty() => Ok(body.message),
        _ => Ok(text),
    }
}

impl ExpenseApi {
    pub fn new(url: String) -> Result<Self> {
        Ok(Self { url })
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse> {
        let url = format!("{}/register", self.url);
        log::debug!("POST {url}");
        let response = reqwest::Client::new()
            .post(url)
            .json(&request)
            .send()
            .await?;
        if response.status().is_success() {
            let data = response.json().await.unwrap_or_default();
            Ok(data)
        } else {
            anyhow::bail!("{}", backend_error(response).await?);
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        let url = format!("{}/login", self.url);
        log::debug!("POST {url}");
        let response = reqwest::Client::new()
            .post(url)
            .json(&request)
            .send()
            .await?;
        if response.status().is_success() {
            let data: LoginResponse = response.json().await?;
            Ok(data)
        } else {
            anyhow::bail!("{}", backend_error(response).await?);
        }
    }

    pub async fn list_expenses(&self, token: &str) -> Result<Vec<ExpenseRecord>> {
        let url = format!("{}/getData", self.url);
        log::debug!("GET {url}");
        let response = reqwest::Client::new()
            .get(url)
            .bearer_auth(token)
            .send()
            .await?;
        if response.status().is_success() {
            let data: ExpenseListResponse = response.json().await?;
            Ok(data.data)
        } else {
            anyhow::bail!("{}", backend_error(response).await?);
        }
    }

    pub async fn add_expense(&self, token: &str, payload: &ExpensePayload) -> Result<()> {
        let url = format!("{}/addData", self.url);
        log::debug!("POST {url}");
        let response = reqwest::Client::new()
            .post(url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            anyhow::bail!("{}", backend_error(response).await?);
        }
    }

    pub async fn update_expense(
        &self,
        token: &str,
        id: &str,
        payload: &ExpensePayload,
    ) -> Result<()> {
        let url = format!("{}/putData/{id}", self.url);
        log::debug!("PUT {url}");
        let response = reqwest::Client::new()
            .put(url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            anyhow::bail!("{}", backend_error(response).await?);
        }
    }

    pub async fn delete_expense(&self, token: &str, id: &str) -> Result<()> {
        let url = format!("{}/delData/{id}", self.url);
        log::debug!("DELETE {url}");
        let response = reqwest::Client::new()
            .delete(url)
            .bearer_auth(token)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            anyhow::bail!("{}", backend_error(response).await?);
        }
    }

    pub async fn dashboard_overview(&self, token: &str) -> Result<DashboardData> {
        // route name spelling is the backend's, not ours
        let url = format!("{}/getDashboardOveriew", self.url);
        log::debug!("GET {url}");
        let response = reqwest::Client::new()
            .get(url)
            .bearer_auth(token)
            .send()
            .await?;
        if response.status().is_success() {
            let body: DashboardResponse = response.json().await?;
            match body.data {
                Some(data) if body.success => Ok(data),
                _ => anyhow::bail!("dashboard overview unavailable"),
            }
        } else {
            anyhow::bail!("{}", backend_error(response).await?);
        }
    }
}
