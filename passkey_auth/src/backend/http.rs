use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use url::Url;

use crate::config::{
    PASSKEY_AUTH_BASE_PATH, PASSKEY_AUTH_URL, PASSKEY_HTTP_TIMEOUT, auth_endpoint_root,
};

use super::errors::BackendError;
use super::traits::{AuthBackend, PlatformAuthenticator};
use super::types::{
    AddPasskeyRequest, AddPasskeyResponse, AddedPasskey, BackendErrorBody, PasskeySummary,
    SignInData, SignInPasskeyRequest, SignInPasskeyResponse,
};

const GENERATE_REGISTER_OPTIONS: &str = "passkey/generate-register-options";
const VERIFY_REGISTRATION: &str = "passkey/verify-registration";
const GENERATE_AUTHENTICATE_OPTIONS: &str = "passkey/generate-authenticate-options";
const VERIFY_AUTHENTICATION: &str = "passkey/verify-authentication";
const LIST_USER_PASSKEYS: &str = "passkey/list-user-passkeys";

/// [`AuthBackend`] talking to a better-auth style passkey API over HTTP.
///
/// Each passkey operation is a two step exchange: fetch options from the
/// backend, run the native ceremony through the [`PlatformAuthenticator`],
/// then post the result back for verification. The client keeps cookies so
/// the challenge set by the first step reaches the second.
pub struct HttpAuthBackend {
    client: reqwest::Client,
    root: Url,
    authenticator: Arc<dyn PlatformAuthenticator>,
}

impl HttpAuthBackend {
    /// Create a backend rooted at `base_url`, e.g. `http://localhost:3050/api/auth`.
    pub fn new(
        base_url: &str,
        authenticator: Arc<dyn PlatformAuthenticator>,
    ) -> Result<Self, BackendError> {
        // Trailing slash keeps the last path segment when joining endpoints
        let root = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| BackendError::Config(format!("Invalid auth URL {base_url}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(*PASSKEY_HTTP_TIMEOUT)
            .cookie_store(true)
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        Ok(Self {
            client,
            root,
            authenticator,
        })
    }

    /// Create a backend from `PASSKEY_AUTH_URL` and `PASSKEY_AUTH_BASE_PATH`.
    pub fn from_env(authenticator: Arc<dyn PlatformAuthenticator>) -> Result<Self, BackendError> {
        let base_url = auth_endpoint_root(&PASSKEY_AUTH_URL, &PASSKEY_AUTH_BASE_PATH);
        Self::new(&base_url, authenticator)
    }

    pub fn base_url(&self) -> &Url {
        &self.root
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.root
            .join(path)
            .map_err(|e| BackendError::Config(format!("Invalid endpoint {path}: {e}")))
    }
}

#[async_trait]
impl AuthBackend for HttpAuthBackend {
    async fn add_passkey(
        &self,
        request: AddPasskeyRequest,
    ) -> Result<AddPasskeyResponse, BackendError> {
        let mut query = vec![("name", request.name.clone())];
        if let Some(attachment) = request.authenticator_attachment {
            query.push(("authenticatorAttachment", attachment.as_str().to_string()));
        }

        let response = self
            .client
            .get(self.endpoint(GENERATE_REGISTER_OPTIONS)?)
            .query(&query)
            .send()
            .await?;
        let options: Value = json_or_throw(response).await?;
        tracing::debug!("Registration options: {:#?}", options);

        let credential = self.authenticator.create_credential(options).await?;

        let response = self
            .client
            .post(self.endpoint(VERIFY_REGISTRATION)?)
            .json(&json!({ "response": credential, "name": request.name }))
            .send()
            .await?;
        let passkey: AddedPasskey = json_or_throw(response).await?;
        tracing::debug!("Registered passkey: {:?}", passkey.id);

        Ok(AddPasskeyResponse {
            data: Some(passkey),
        })
    }

    async fn sign_in_passkey(
        &self,
        request: SignInPasskeyRequest,
    ) -> Result<SignInPasskeyResponse, BackendError> {
        let response = self
            .client
            .get(self.endpoint(GENERATE_AUTHENTICATE_OPTIONS)?)
            .query(&[("email", request.email.as_str())])
            .send()
            .await?;
        let options: Value = match read_json(response).await? {
            Ok(options) => options,
            Err(body) => return Ok(SignInPasskeyResponse::with_error(body)),
        };
        tracing::debug!("Authentication options: {:#?}", options);

        let assertion = match self.authenticator.get_assertion(options).await {
            Ok(assertion) => assertion,
            Err(err) => {
                tracing::debug!("Passkey assertion failed: {}", err);
                return Ok(SignInPasskeyResponse::with_error(BackendErrorBody::new(
                    err.to_string(),
                )));
            }
        };

        let mut body = json!({ "response": assertion });
        if let Some(callback_url) = &request.callback_url {
            body["callbackURL"] = Value::String(callback_url.clone());
        }

        let response = self
            .client
            .post(self.endpoint(VERIFY_AUTHENTICATION)?)
            .json(&body)
            .send()
            .await?;

        match read_json::<SignInData>(response).await? {
            Ok(data) => Ok(SignInPasskeyResponse {
                data: Some(data),
                error: None,
            }),
            Err(body) => Ok(SignInPasskeyResponse::with_error(body)),
        }
    }

    async fn list_user_passkeys(&self) -> Result<Vec<PasskeySummary>, BackendError> {
        let response = self
            .client
            .get(self.endpoint(LIST_USER_PASSKEYS)?)
            .send()
            .await?;
        json_or_throw(response).await
    }
}

/// Decodes a success body, or returns the error body of a non-success response.
///
/// Only an undecodable success body is thrown.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Result<T, BackendErrorBody>, BackendError> {
    if !response.status().is_success() {
        return Ok(Err(error_body(response).await));
    }

    let value = response.json::<T>().await?;
    Ok(Ok(value))
}

async fn json_or_throw<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, BackendError> {
    read_json(response).await?.map_err(|body| {
        BackendError::Http {
            status: body.status.unwrap_or_default(),
            message: body.message,
        }
        .log()
    })
}

async fn error_body(response: reqwest::Response) -> BackendErrorBody {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    let mut body = serde_json::from_str::<BackendErrorBody>(&text).unwrap_or_default();
    if body.message.trim().is_empty() {
        body.message = status_message(status);
    }
    body.status = Some(status.as_u16());

    tracing::debug!("Backend error response {}: {:?}", status, body);
    body
}

fn status_message(status: http::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}
