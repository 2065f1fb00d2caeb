// SPDX-License-Identifier: MPL-2.0
//! Supabase adapter for [`RemoteCollection`].
//!
//! Reads and inserts go through PostgREST (`/rest/v1/<table>`), account
//! creation and token refresh through GoTrue (`/auth/v1/...`). Every request
//! carries the project's anon key as `apikey`. The bearer token is the access
//! token of the signed-in [`AuthSession`] when there is one, the anon key
//! otherwise.
//!
//! The session is kept in local storage under [`AUTH_SESSION_KEY`] so it
//! survives restarts. A request rejected with `401` refreshes the session
//! once and is retried; if the refresh fails the session is dropped and the
//! retry goes out with the anon key.

use crate::application::port::{LocalStorage, RemoteCollection, SelectQuery, Table};
use crate::domain::UserId;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::{Arc, RwLock};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Domain used for the throwaway sign-up e-mail addresses.
const ANONYMOUS_EMAIL_DOMAIN: &str = "anonymous.com";

/// Local storage key of the persisted [`AuthSession`].
pub const AUTH_SESSION_KEY: &str = "authSession";

/// Tokens of the signed-in backend account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SignUpUser {
    id: UserId,
}

/// GoTrue answers with `{user, session}`, `{access_token, refresh_token,
/// user}` or the bare user object depending on project settings.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    #[serde(default)]
    user: Option<SignUpUser>,
    #[serde(default)]
    id: Option<UserId>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    session: Option<AuthSession>,
}

impl SignUpResponse {
    fn auth_session(&mut self) -> Option<AuthSession> {
        self.session.take().or_else(|| {
            self.access_token.take().map(|access_token| AuthSession {
                access_token,
                refresh_token: self.refresh_token.take(),
            })
        })
    }
}

pub struct SupabaseClient {
    base_url: Url,
    anon_key: String,
    http: reqwest::Client,
    session: RwLock<Option<AuthSession>>,
    store: Option<Arc<dyn LocalStorage>>,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_session", &self.has_session())
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    /// Creates a client for the project at `base_url`.
    pub fn new(base_url: &str, anon_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: normalize_base(base_url)?,
            anon_key: anon_key.into(),
            http,
            session: RwLock::new(None),
            store: None,
        })
    }

    /// Persists the session in `store` and restores the one saved there.
    #[must_use]
    pub fn with_session_store(mut self, store: Arc<dyn LocalStorage>) -> Self {
        let restored = match store.get_item(AUTH_SESSION_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Option<AuthSession>>(&raw)
                .unwrap_or_else(|err| {
                    tracing::warn!(%err, "ignoring malformed auth session");
                    None
                }),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(%err, "could not read auth session");
                None
            }
        };
        if restored.is_some() {
            tracing::debug!("restored auth session");
        }
        self.session = RwLock::new(restored);
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session
            .read()
            .map(|session| session.is_some())
            .unwrap_or(false)
    }

    fn bearer(&self) -> String {
        self.session
            .read()
            .ok()
            .and_then(|session| session.as_ref().map(|s| s.access_token.clone()))
            .unwrap_or_else(|| self.anon_key.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.session
            .read()
            .ok()
            .and_then(|session| session.as_ref().and_then(|s| s.refresh_token.clone()))
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder, bearer: &str) -> reqwest::RequestBuilder {
        req.header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {bearer}"))
    }

    fn table_url(&self, table: Table) -> Result<Url> {
        self.base_url
            .join(&format!("rest/v1/{}", table.name()))
            .map_err(|e| Error::Config(format!("invalid backend url: {e}")))
    }

    fn signup_url(&self) -> Result<Url> {
        self.auth_url("signup")
    }

    fn auth_url(&self, endpoint: &str) -> Result<Url> {
        self.base_url
            .join(&format!("auth/v1/{endpoint}"))
            .map_err(|e| Error::Config(format!("invalid backend url: {e}")))
    }

    /// Replaces the current session and writes it through to the store.
    fn set_session(&self, session: Option<AuthSession>) {
        match self.session.write() {
            Ok(mut slot) => *slot = session.clone(),
            Err(_) => {
                tracing::warn!("could not update auth session");
                return;
            }
        }
        let Some(store) = &self.store else { return };
        let persisted = serde_json::to_string(&session)
            .map_err(|err| Error::Storage(err.to_string()))
            .and_then(|raw| store.set_item(AUTH_SESSION_KEY, &raw));
        if let Err(err) = persisted {
            tracing::warn!(%err, "could not persist auth session");
        }
    }

    /// Trades the refresh token for a new session.
    async fn refresh_session(&self) -> Result<()> {
        let refresh_token = self
            .refresh_token()
            .ok_or_else(|| Error::Remote("session has no refresh token".to_string()))?;
        let url = self.auth_url("token")?;
        tracing::debug!(url = %url, "refreshing auth session");

        let req = self
            .http
            .post(url)
            .query(&[("grant_type", "refresh_token")])
            .json(&json!({ "refresh_token": refresh_token }));
        let response = check_status(
            self.apply_auth(req, &self.anon_key).send().await?,
            "refresh",
        )
        .await?;
        let session: AuthSession = response.json().await?;
        self.set_session(Some(session));
        tracing::info!("auth session refreshed");
        Ok(())
    }

    /// Sends the request built by `build`. A `401` under a session refreshes
    /// it (or drops it) and sends a second time.
    async fn send(
        &self,
        build: impl Fn() -> reqwest::RequestBuilder + Send + Sync,
        action: &str,
    ) -> Result<reqwest::Response> {
        let used = self.bearer();
        let response = self.apply_auth(build(), &used).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED || !self.has_session() {
            return check_status(response, action).await;
        }

        // Another request may already have replaced the rejected token.
        if self.bearer() == used {
            tracing::info!(action, "access token rejected");
            if let Err(err) = self.refresh_session().await {
                tracing::warn!(%err, "session refresh failed, falling back to anon key");
                self.set_session(None);
            }
        }
        let bearer = self.bearer();
        check_status(self.apply_auth(build(), &bearer).send().await?, action).await
    }
}

/// Ensures the base URL ends with `/` so relative joins keep its path.
fn normalize_base(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(Error::Config("backend url is empty".to_string()));
    }
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&with_slash).map_err(|e| Error::Config(format!("invalid backend url: {e}")))
}

/// PostgREST query string for a select.
fn query_pairs(query: &SelectQuery) -> Vec<(String, String)> {
    let mut pairs = vec![("select".to_string(), query.columns.clone())];
    pairs.extend(
        query
            .filters
            .iter()
            .map(|(column, value)| (column.clone(), format!("eq.{value}"))),
    );
    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        pairs.push(("order".to_string(), format!("{}.{direction}", order.column)));
    }
    pairs
}

/// Throwaway credentials for an anonymous account.
fn anonymous_credentials() -> (String, String) {
    let local = uuid::Uuid::new_v4().simple().to_string();
    let password = uuid::Uuid::new_v4().simple().to_string();
    (format!("{local}@{ANONYMOUS_EMAIL_DOMAIN}"), password)
}

async fn check_status(response: reqwest::Response, action: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::warn!(%status, action, body = %body, "backend rejected request");
    Err(Error::Remote(describe_failure(status, &body)))
}

fn describe_failure(status: StatusCode, body: &str) -> String {
    // PostgREST and GoTrue both put a human readable text in `message` or `msg`.
    let message = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("message")
            .or_else(|| v.get("msg"))
            .and_then(Value::as_str)
            .map(str::to_string)
    });
    match message {
        Some(message) => format!("{status}: {message}"),
        None => status.to_string(),
    }
}

#[async_trait]
impl RemoteCollection for SupabaseClient {
    async fn select(&self, query: &SelectQuery) -> Result<Vec<Value>> {
        let url = self.table_url(query.table)?;
        tracing::debug!(table = %query.table, url = %url, "selecting rows");

        let pairs = query_pairs(query);
        let response = self
            .send(|| self.http.get(url.clone()).query(&pairs), "select")
            .await?;
        let rows: Vec<Value> = response.json().await?;
        tracing::debug!(table = %query.table, rows = rows.len(), "rows fetched");
        Ok(rows)
    }

    async fn insert(&self, table: Table, record: Value) -> Result<()> {
        let url = self.table_url(table)?;
        tracing::debug!(%table, url = %url, "inserting row");

        self.send(
            || {
                self.http
                    .post(url.clone())
                    .header("Prefer", "return=minimal")
                    .json(&record)
            },
            "insert",
        )
        .await?;
        Ok(())
    }

    async fn sign_up(&self) -> Result<UserId> {
        let url = self.signup_url()?;
        let (email, password) = anonymous_credentials();
        tracing::debug!(url = %url, "creating anonymous account");

        let req = self
            .http
            .post(url)
            .json(&json!({ "email": email, "password": password }));
        // A new account never reuses the previous account's tokens.
        let response = check_status(
            self.apply_auth(req, &self.anon_key).send().await?,
            "sign_up",
        )
        .await?;
        let mut body: SignUpResponse = response.json().await?;

        match body.auth_session() {
            Some(session) => self.set_session(Some(session)),
            None => {
                tracing::warn!("sign-up returned no session, using anon key");
                self.set_session(None);
            }
        }
        let id = body
            .user
            .map(|u| u.id)
            .or(body.id)
            .ok_or_else(|| Error::Remote("no user returned from sign-up".to_string()))?;
        tracing::info!(user_id = %id, "anonymous account created");
        Ok(id)
    }
}
