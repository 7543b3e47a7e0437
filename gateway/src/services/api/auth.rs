//! # Authentication Endpoints
//!
//! Handles login, logout and the current-user lookup.

use reqwest::Method;
use shared::{AuthResponse, LoginCredentials, User};

use super::client::ApiClient;
use crate::core::error::Result;
use crate::session::SessionEvent;

/// Login with email and password.
///
/// Does not persist the returned session; call
/// [`ApiClient::store_session`] (or use [`ApiClient::sign_in`]).
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn login(client: &ApiClient, credentials: LoginCredentials) -> Result<AuthResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let path = "/auth/login";
    let response = client
        .dispatch(Method::POST, path, |req| req.json(&credentials))
        .await?;
    let auth: AuthResponse = client.decode(path, response).await?;

    tracing::info!(
        user_id = auth.user.id,
        duration_ms = start.elapsed().as_millis(),
        "Login successful"
    );
    Ok(auth)
}

/// Logout: invalidate the session server-side, then clear it locally.
///
/// Local cleanup always runs, whether or not the network call succeeded.
/// A network failure is still returned to the caller after cleanup.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> Result<()> {
    let remote = client
        .dispatch(Method::POST, "/auth/logout", |req| req)
        .await
        .map(|_| ());

    if let Err(e) = &remote {
        tracing::warn!(error = %e, "Server-side logout failed, clearing local session anyway");
    }

    let local = client.session_store().clear();
    client.events().emit(SessionEvent::LoggedOut);

    match (remote, local) {
        (Err(e), _) => Err(e),
        (Ok(()), Err(e)) => {
            tracing::error!(error = %e, "Failed to clear local session");
            Err(e)
        }
        (Ok(()), Ok(())) => {
            tracing::info!("Logged out");
            Ok(())
        }
    }
}

/// Get the user the persisted token belongs to.
pub async fn get_current_user(client: &ApiClient) -> Result<User> {
    let path = "/auth/me";
    let response = client.dispatch(Method::GET, path, |req| req).await?;
    client.decode(path, response).await
}
