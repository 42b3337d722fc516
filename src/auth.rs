use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::catalog::CatalogClient;
use crate::state::{SessionState, Token};
use crate::transport::HttpTransport;
use crate::DrtvError;

/// A token/user-id pair known to be usable for the rest of the current call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: Token,
    pub user_id: String,
}

/// Make sure `state` holds a fresh `UserAccount` token and the user id derived from it.
pub async fn ensure_valid<T: HttpTransport>(
    client: &CatalogClient<T>,
    state: &mut SessionState,
) -> Result<Credentials, DrtvError> {
    ensure_valid_at(client, state, Utc::now()).await
}

/// [`ensure_valid`] against an explicit clock.
pub async fn ensure_valid_at<T: HttpTransport>(
    client: &CatalogClient<T>,
    state: &mut SessionState,
    now: DateTime<Utc>,
) -> Result<Credentials, DrtvError> {
    let token = match &state.token {
        Some(token) if !token.needs_refresh(now) => token.clone(),
        stale => {
            match stale {
                Some(old) => info!(expires = %old.expiration_date, "Refreshing anonymous token"),
                None => info!("No session token yet, requesting one"),
            }
            let token = client.anonymous_token().await?;
            state.replace_token(token.clone());
            token
        }
    };

    let user_id = match state.user_id.clone() {
        Some(user_id) => user_id,
        None => {
            let account = client.account(&token).await?;
            debug!(user_id = %account.id, "Derived user id from token");
            state.user_id = Some(account.id.clone());
            account.id
        }
    };

    Ok(Credentials { token, user_id })
}
