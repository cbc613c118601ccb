//! API client adapter for the expense service.
//!
//! [`ExpenseApi`] is the seam the session actions and the views call through;
//! [`ExpenseClient`] implements it over `reqwest`. Credentials are cookies set
//! by `POST /api/auth/token/`: the browser attaches them when the fetch is made
//! with `credentials: include`, native builds keep them in a cookie store.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::errors::{ApiError, ApiResult};
use crate::models::expense::ListBody;
use crate::models::{
    CategoryTotal, Expense, ExpenseFilters, ExpenseInput, LoginRequest, Paginated,
    RegisterRequest, RegisterResponse, User, UserSummary,
};

pub const TOKEN_PATH: &str = "/api/auth/token/";
pub const USER_PATH: &str = "/api/auth/user/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const USERS_PATH: &str = "/api/auth/users/";
pub const EXPENSES_PATH: &str = "/api/expenses/";
pub const SUMMARY_PATH: &str = "/api/summary/";

/// Path of a single expense.
#[must_use]
pub fn expense_path(id: i64) -> String {
    format!("{EXPENSES_PATH}{id}/")
}

/// Operations offered by the remote expense service.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// the single event loop.
#[async_trait(?Send)]
pub trait ExpenseApi {
    /// Exchange credentials for a session cookie.
    async fn obtain_token(&self, credentials: &LoginRequest) -> ApiResult<()>;

    /// Identity behind the current session cookie.
    async fn current_user(&self) -> ApiResult<User>;

    /// Create an account. Does not authenticate.
    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse>;

    /// Every account, staff only.
    async fn list_users(&self) -> ApiResult<Vec<UserSummary>>;

    /// Filtered expense listing. `page` selects server-side pagination; either
    /// response shape is normalized to [`Paginated`].
    async fn list_expenses(
        &self,
        filters: &ExpenseFilters,
        page: Option<u32>,
    ) -> ApiResult<Paginated<Expense>>;

    async fn get_expense(&self, id: i64) -> ApiResult<Expense>;

    async fn create_expense(&self, input: &ExpenseInput) -> ApiResult<Expense>;

    async fn update_expense(&self, id: i64, input: &ExpenseInput) -> ApiResult<Expense>;

    async fn delete_expense(&self, id: i64) -> ApiResult<()>;

    /// Category totals for the same filters as the listing.
    async fn summary(&self, filters: &ExpenseFilters) -> ApiResult<Vec<CategoryTotal>>;
}

/// `reqwest`-backed implementation of [`ExpenseApi`].
#[derive(Clone, Debug)]
pub struct ExpenseClient {
    config: ApiConfig,
    client: Client,
}

impl ExpenseClient {
    /// Create a new API client for the configured origin.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = build_http_client(&config)?;
        Ok(Self { config, client })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let url = self.config.endpoint(path)?;
        debug!(%method, %url, "api request");
        Ok(with_credentials(self.client.request(method, url)))
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<String> {
        let response = request.send().await.map_err(|error| {
            warn!(%error, "api request did not complete");
            ApiError::from(error)
        })?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            let error = ApiError::from_response(status.as_u16(), &body);
            warn!(status = status.as_u16(), %error, "api request failed");
            Err(error)
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|error| ApiError::decode(error.to_string()))
    }
}

#[async_trait(?Send)]
impl ExpenseApi for ExpenseClient {
    async fn obtain_token(&self, credentials: &LoginRequest) -> ApiResult<()> {
        let request = self.request(Method::POST, TOKEN_PATH)?.json(credentials);
        self.send(request).await.map(|_| ())
    }

    async fn current_user(&self) -> ApiResult<User> {
        let request = self.request(Method::GET, USER_PATH)?;
        self.send_json(request).await
    }

    async fn register(&self, payload: &RegisterRequest) -> ApiResult<RegisterResponse> {
        let request = self.request(Method::POST, REGISTER_PATH)?.json(payload);
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn list_users(&self) -> ApiResult<Vec<UserSummary>> {
        let request = self.request(Method::GET, USERS_PATH)?;
        self.send_json(request).await
    }

    async fn list_expenses(
        &self,
        filters: &ExpenseFilters,
        page: Option<u32>,
    ) -> ApiResult<Paginated<Expense>> {
        let mut query = filters.query_pairs();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        let request = self.request(Method::GET, EXPENSES_PATH)?.query(&query);
        let body: ListBody<Expense> = self.send_json(request).await?;
        Ok(body.into())
    }

    async fn get_expense(&self, id: i64) -> ApiResult<Expense> {
        let request = self.request(Method::GET, &expense_path(id))?;
        self.send_json(request).await
    }

    async fn create_expense(&self, input: &ExpenseInput) -> ApiResult<Expense> {
        let request = self.request(Method::POST, EXPENSES_PATH)?.json(input);
        self.send_json(request).await
    }

    async fn update_expense(&self, id: i64, input: &ExpenseInput) -> ApiResult<Expense> {
        let request = self.request(Method::PUT, &expense_path(id))?.json(input);
        self.send_json(request).await
    }

    async fn delete_expense(&self, id: i64) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &expense_path(id))?;
        self.send(request).await.map(|_| ())
    }

    async fn summary(&self, filters: &ExpenseFilters) -> ApiResult<Vec<CategoryTotal>> {
        let request = self
            .request(Method::GET, SUMMARY_PATH)?
            .query(&filters.query_pairs());
        self.send_json(request).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ApiConfig) -> ApiResult<Client> {
    Client::builder()
        .cookie_store(true)
        .user_agent(config.user_agent())
        .build()
        .map_err(|error| ApiError::config(format!("failed to build HTTP client: {error}")))
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::unnecessary_wraps)]
fn build_http_client(_config: &ApiConfig) -> ApiResult<Client> {
    Ok(Client::new())
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}
