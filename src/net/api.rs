//! REST API helpers for communicating with the server.
//!
//! In the browser (`csr`): real HTTP calls via `gloo-net`.
//! Outside the browser (native tests): every helper returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! to empty or error views without crashing the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Action, User};

/// Failure modes of a REST call.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Request(other.to_string()),
        }
    }
}

/// Fetch the current user, including the active team's usage lists.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the server answers with a
/// non-2xx status, or the body does not decode.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(crate::config::USER_ENDPOINT)
            .send()
            .await?;
        check_status(resp.status())?;
        Ok(resp.json::<User>().await?)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the active team's actions, sorted by name for display.
///
/// # Errors
///
/// Same failure modes as [`fetch_current_user`].
pub async fn fetch_actions() -> Result<Vec<Action>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(crate::config::ACTIONS_ENDPOINT)
            .send()
            .await?;
        check_status(resp.status())?;
        let list = resp.json::<super::types::ActionList>().await?;
        Ok(sort_actions(list.results))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a project (team) with the given name via `POST /api/projects/`.
///
/// # Errors
///
/// Same failure modes as [`fetch_current_user`].
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn create_project(name: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = super::types::CreateProjectRequest { name: name.to_owned() };
        let resp = gloo_net::http::Request::post(crate::config::PROJECTS_ENDPOINT)
            .json(&body)?
            .send()
            .await?;
        check_status(resp.status())?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Map an HTTP status to success (2xx) or [`ApiError::Status`].
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any non-2xx status.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Order actions by name using the same collation as the usage tables.
#[must_use]
pub fn sort_actions(mut actions: Vec<Action>) -> Vec<Action> {
    actions.sort_by(|a, b| crate::util::collate::locale_compare(&a.name, &b.name));
    actions
}
