//! Authentication API client methods

use super::{ApiClient, ClientError};
use crate::endpoints;
use crate::types::ValidateResponse;

impl ApiClient {
    /// Ask the backend whether the current token is still accepted.
    ///
    /// A 2xx response carries the authenticated user; any other status
    /// maps to a [`ClientError`] the caller treats as an ended session.
    pub async fn validate(&self) -> Result<ValidateResponse, ClientError> {
        let req = self.request(reqwest::Method::GET, endpoints::AUTH_VALIDATE);
        self.execute(req).await
    }

    /// Close the session server-side.
    ///
    /// Callers invoke this best-effort: local cleanup proceeds whether or
    /// not the backend confirms.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let req = self
            .request(reqwest::Method::POST, endpoints::AUTH_LOGOUT)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        self.execute_empty(req).await
    }
}
