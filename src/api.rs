//! HTTP client for the Atrium backend.
//!
//! All requests are sent with credentials so the session cookie rides
//! along. Ordinary requests that come back 401 fire the registered
//! auth-failure hook; the session status check does not, because its
//! caller interprets the result itself.

use std::cell::RefCell;

use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;
use web_sys::RequestCredentials;

use crate::{bootstrap::StatusCheck, config, store::User};

const UNAUTHORIZED: u16 = 401;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("error reaching server: {0}")]
    Transport(String),

    #[error("unexpected response status: {0}")]
    Status(u16),

    #[error("error decoding response body: {0}")]
    Decode(String),
}

/// Response shape of `GET /auth/check-auth`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub user: Option<User>,
}

/// Response shape of the login and signup endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct ApiClient {
    base_url: String,
    on_unauthorized: RefCell<Option<Box<dyn Fn()>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        ApiClient {
            base_url,
            on_unauthorized: RefCell::new(None),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::api_base_url())
    }

    /// Registers the callback invoked when any subsequent request is
    /// rejected as unauthenticated. Only the first registration sticks;
    /// later calls return false and change nothing.
    pub fn set_unauthorized_hook(&self, hook: impl Fn() + 'static) -> bool {
        let mut slot = self.on_unauthorized.borrow_mut();
        if slot.is_some() {
            return false;
        }

        *slot = Some(Box::new(hook));
        true
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, Error> {
        self.post_json("/auth/login", request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, Error> {
        self.post_json("/auth/signup", request).await
    }

    /// Ends the server-side session. The response body is not interesting;
    /// the caller clears local state regardless.
    pub async fn logout(&self) {
        let response = Request::post(&self.url("/auth/logout"))
            .credentials(RequestCredentials::Include)
            .send()
            .await;

        if let Err(e) = response {
            warn!("logout request failed: {e}");
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let response = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| Error::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        self.intercept_status(response.status());

        if !response.ok() {
            return Err(Error::Status(response.status()));
        }

        read_json(response).await
    }

    fn intercept_status(&self, status: u16) {
        if status != UNAUTHORIZED {
            return;
        }

        if let Some(hook) = &*self.on_unauthorized.borrow() {
            warn!("request rejected as unauthenticated, resetting session");
            hook();
        }
    }
}

impl StatusCheck for ApiClient {
    async fn check_auth(&self) -> Result<CheckAuthResponse, Error> {
        let response = Request::get(&self.url("/auth/check-auth"))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(Error::Status(response.status()));
        }

        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{ApiClient, CheckAuthResponse, UNAUTHORIZED};
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn base_url_loses_trailing_slashes() {
        let client = ApiClient::new("https://api.atrium.example/api/v1/");
        assert_eq!(
            client.url("/auth/check-auth"),
            "https://api.atrium.example/api/v1/auth/check-auth"
        );
    }

    #[test]
    fn unauthorized_hook_registers_once() {
        let client = ApiClient::new("http://localhost:3001");
        let calls = Rc::new(Cell::new(0u32));

        let first = Rc::clone(&calls);
        assert!(client.set_unauthorized_hook(move || first.set(first.get() + 1)));

        // the second registration must be a no-op
        let second = Rc::clone(&calls);
        assert!(!client.set_unauthorized_hook(move || second.set(second.get() + 100)));

        client.intercept_status(UNAUTHORIZED);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn hook_only_fires_on_unauthorized() {
        let client = ApiClient::new("http://localhost:3001");
        let calls = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&calls);
        client.set_unauthorized_hook(move || counter.set(counter.get() + 1));

        client.intercept_status(200);
        client.intercept_status(403);
        client.intercept_status(500);
        assert_eq!(calls.get(), 0);

        client.intercept_status(UNAUTHORIZED);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn hook_firing_without_registration_is_harmless() {
        let client = ApiClient::new("http://localhost:3001");
        client.intercept_status(UNAUTHORIZED);
    }

    #[test]
    fn check_auth_response_decodes_the_wire_shape() {
        let response: CheckAuthResponse =
            serde_json::from_str(r#"{"success":true,"user":{"_id":"u1","name":"Dana","email":"dana@atrium.example"}}"#)
                .unwrap();

        assert!(response.success);
        assert_eq!(response.user.map(|u| u.id), Some("u1".to_owned()));
    }

    #[test]
    fn check_auth_response_tolerates_missing_fields() {
        let response: CheckAuthResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!response.success);
        assert!(response.user.is_none());

        let response: CheckAuthResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.user.is_none());
    }
}
