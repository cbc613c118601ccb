//! In-process fake of the expense REST service.
//!
//! Implements just enough of the documented endpoints (cookie session,
//! owner-or-staff permissions, filters, `?page=` pagination, field errors) to
//! drive the real `ExpenseClient` over HTTP.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;
use shared::ApiConfig;
use shared::models::{
    Category, CategoryTotal, Expense, ExpenseInput, LoginRequest, RegisterRequest, User,
    UserSummary,
};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

pub const MEMBER: (&str, &str) = ("asha", "s3cret-pass");
pub const STAFF: (&str, &str) = ("root", "admin-pass");

const PAGE_SIZE: usize = 10;
const SESSION_COOKIE: &str = "access_token";

#[derive(Debug, Clone)]
struct Account {
    id: i64,
    username: String,
    email: String,
    password: String,
    is_staff: bool,
}

#[derive(Debug, Clone)]
struct Record {
    id: i64,
    owner: i64,
    input: ExpenseInput,
}

#[derive(Debug, Default)]
struct Store {
    accounts: Vec<Account>,
    records: Vec<Record>,
    sessions: HashMap<String, i64>,
    next_record: i64,
    next_token: u64,
}

impl Store {
    fn seeded() -> Self {
        let mut store = Self::default();
        store.add_account(MEMBER.0, "asha@example.com", MEMBER.1, false);
        store.add_account(STAFF.0, "root@example.com", STAFF.1, true);
        store
    }

    fn add_account(&mut self, username: &str, email: &str, password: &str, is_staff: bool) {
        let id = i64::try_from(self.accounts.len()).unwrap() + 1;
        self.accounts.push(Account {
            id,
            username: username.into(),
            email: email.into(),
            password: password.into(),
            is_staff,
        });
    }

    fn account(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    fn expense(&self, record: &Record) -> Expense {
        Expense {
            id: record.id,
            title: record.input.title.clone(),
            amount: record.input.amount,
            category: record.input.category,
            date: record.input.date,
            notes: record.input.notes.clone(),
            username: self.account(record.owner).map(|owner| owner.username.clone()),
            user: Some(record.owner),
            created_at: None,
            updated_at: None,
        }
    }
}

type Shared = Arc<Mutex<Store>>;

/// A running fake service bound to an ephemeral local port.
pub struct FakeService {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl FakeService {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(Store::seeded()));
        let app = Router::new()
            .route("/api/auth/token/", post(obtain_token))
            .route("/api/auth/user/", get(current_user))
            .route("/api/auth/register/", post(register))
            .route("/api/auth/users/", get(list_users))
            .route("/api/expenses/", get(list_expenses).post(create_expense))
            .route(
                "/api/expenses/{id}/",
                get(get_expense).put(update_expense).delete(delete_expense),
            )
            .route("/api/summary/", get(summary))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake service");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake service");
        });
        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(&self.base_url).expect("valid base url")
    }
}

impl Drop for FakeService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn unauthenticated() -> Response {
    detail(
        StatusCode::UNAUTHORIZED,
        "Authentication credentials were not provided.",
    )
}

fn forbidden() -> Response {
    detail(
        StatusCode::FORBIDDEN,
        "You do not have permission to perform this action.",
    )
}

fn session_user(store: &Store, headers: &HeaderMap) -> Option<Account> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    let token = cookies.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
    })?;
    let id = store.sessions.get(token)?;
    store.account(*id).cloned()
}

async fn obtain_token(State(state): State<Shared>, Json(body): Json<LoginRequest>) -> Response {
    let mut store = state.lock().unwrap();
    let Some(id) = store
        .accounts
        .iter()
        .find(|account| account.username == body.username && account.password == body.password)
        .map(|account| account.id)
    else {
        return detail(
            StatusCode::UNAUTHORIZED,
            "No active account found with the given credentials",
        );
    };
    store.next_token += 1;
    let token = format!("tok-{}", store.next_token);
    store.sessions.insert(token.clone(), id);
    (
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly"),
        )],
        Json(json!({ "message": "Login successful" })),
    )
        .into_response()
}

async fn current_user(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let store = state.lock().unwrap();
    match session_user(&store, &headers) {
        Some(account) => Json(User {
            id: account.id,
            username: account.username,
            email: account.email,
            is_staff: account.is_staff,
        })
        .into_response(),
        None => unauthenticated(),
    }
}

async fn register(State(state): State<Shared>, Json(body): Json<RegisterRequest>) -> Response {
    let mut store = state.lock().unwrap();
    let mut errors: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    if store
        .accounts
        .iter()
        .any(|account| account.username == body.username)
    {
        errors
            .entry("username")
            .or_default()
            .push("This username already exists.");
    }
    if store.accounts.iter().any(|account| account.email == body.email) {
        errors
            .entry("email")
            .or_default()
            .push("This email already exists.");
    }
    if body.password != body.confirm_password {
        errors
            .entry("confirm_password")
            .or_default()
            .push("Password do not match.");
    }
    if !errors.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!(errors))).into_response();
    }
    store.add_account(&body.username, &body.email, &body.password, false);
    (
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully." })),
    )
        .into_response()
}

async fn list_users(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let store = state.lock().unwrap();
    let Some(account) = session_user(&store, &headers) else {
        return unauthenticated();
    };
    if !account.is_staff {
        return forbidden();
    }
    let users: Vec<UserSummary> = store
        .accounts
        .iter()
        .map(|account| UserSummary {
            id: account.id,
            username: account.username.clone(),
        })
        .collect();
    Json(users).into_response()
}

fn visible<'a>(
    store: &'a Store,
    viewer: &'a Account,
    params: &'a HashMap<String, String>,
) -> impl Iterator<Item = &'a Record> + 'a {
    let date = |key: &str| {
        params
            .get(key)
            .and_then(|value| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
    };
    let start = date("start_date");
    let end = date("end_date");
    let category = params
        .get("category")
        .and_then(|value| Category::from_str(value).ok());
    let owner = if viewer.is_staff {
        params.get("user").and_then(|value| value.parse::<i64>().ok())
    } else {
        None
    };
    store.records.iter().filter(move |record| {
        (viewer.is_staff || record.owner == viewer.id)
            && start.is_none_or(|start| record.input.date >= start)
            && end.is_none_or(|end| record.input.date <= end)
            && category.is_none_or(|category| record.input.category == category)
            && owner.is_none_or(|owner| record.owner == owner)
    })
}

async fn list_expenses(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let store = state.lock().unwrap();
    let Some(viewer) = session_user(&store, &headers) else {
        return unauthenticated();
    };
    let expenses: Vec<Expense> = visible(&store, &viewer, &params)
        .map(|record| store.expense(record))
        .collect();

    let Some(page) = params.get("page") else {
        return Json(expenses).into_response();
    };
    let page: usize = match page.parse() {
        Ok(page) if page >= 1 => page,
        _ => return detail(StatusCode::NOT_FOUND, "Invalid page."),
    };
    let count = expenses.len();
    let pages = count.div_ceil(PAGE_SIZE).max(1);
    if page > pages {
        return detail(StatusCode::NOT_FOUND, "Invalid page.");
    }
    let results: Vec<Expense> = expenses
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();
    Json(json!({
        "count": count,
        "next": (page < pages).then(|| format!("/api/expenses/?page={}", page + 1)),
        "previous": (page > 1).then(|| format!("/api/expenses/?page={}", page - 1)),
        "results": results,
    }))
    .into_response()
}

fn invalid_input(input: &ExpenseInput) -> Option<Response> {
    if input.amount <= Decimal::ZERO {
        return Some(
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "amount": ["Amount must be greater than zero."] })),
            )
                .into_response(),
        );
    }
    None
}

async fn create_expense(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(input): Json<ExpenseInput>,
) -> Response {
    let mut store = state.lock().unwrap();
    let Some(viewer) = session_user(&store, &headers) else {
        return unauthenticated();
    };
    if let Some(response) = invalid_input(&input) {
        return response;
    }
    store.next_record += 1;
    let record = Record {
        id: store.next_record,
        owner: viewer.id,
        input,
    };
    let body = store.expense(&record);
    store.records.push(record);
    (StatusCode::CREATED, Json(body)).into_response()
}

/// Resolve `id` for `viewer`, applying the owner-or-staff rule.
fn authorized_index(store: &Store, viewer: &Account, id: i64) -> Result<usize, Response> {
    let index = store
        .records
        .iter()
        .position(|record| record.id == id)
        .ok_or_else(|| detail(StatusCode::NOT_FOUND, "No Expense matches the given query."))?;
    if viewer.is_staff || store.records[index].owner == viewer.id {
        Ok(index)
    } else {
        Err(forbidden())
    }
}

async fn get_expense(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let store = state.lock().unwrap();
    let Some(viewer) = session_user(&store, &headers) else {
        return unauthenticated();
    };
    match authorized_index(&store, &viewer, id) {
        Ok(index) => Json(store.expense(&store.records[index])).into_response(),
        Err(response) => response,
    }
}

async fn update_expense(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(input): Json<ExpenseInput>,
) -> Response {
    let mut store = state.lock().unwrap();
    let Some(viewer) = session_user(&store, &headers) else {
        return unauthenticated();
    };
    let index = match authorized_index(&store, &viewer, id) {
        Ok(index) => index,
        Err(response) => return response,
    };
    if let Some(response) = invalid_input(&input) {
        return response;
    }
    store.records[index].input = input;
    Json(store.expense(&store.records[index])).into_response()
}

async fn delete_expense(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let mut store = state.lock().unwrap();
    let Some(viewer) = session_user(&store, &headers) else {
        return unauthenticated();
    };
    match authorized_index(&store, &viewer, id) {
        Ok(index) => {
            store.records.remove(index);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(response) => response,
    }
}

async fn summary(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let store = state.lock().unwrap();
    let Some(viewer) = session_user(&store, &headers) else {
        return unauthenticated();
    };
    // The service groups by date range only; category and user are ignored.
    let scoped: HashMap<String, String> = params
        .into_iter()
        .filter(|(key, _)| key == "start_date" || key == "end_date")
        .collect();
    let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();
    for record in visible(&store, &viewer, &scoped) {
        *totals.entry(record.input.category).or_default() += record.input.amount;
    }
    let rows: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total_amount)| CategoryTotal {
            category,
            total_amount,
        })
        .collect();
    Json(rows).into_response()
}
