//! Client-side session state.
//!
//! [`SessionState`] is the client's belief about who is logged in. It is only
//! changed by [`SessionState::apply`], which folds [`SessionAction`]s. The async
//! operations ([`login`], [`register`], [`fetch_user`]) call the service and
//! dispatch a pending action followed by a settled one, so the same reducer
//! drives both the Yew store and the tests.

use tracing::{debug, info};

use crate::api::ExpenseApi;
use crate::models::{LoginRequest, RegisterRequest, RegisterResponse, User};

pub const LOGIN_FALLBACK: &str = "Login failed";
pub const REGISTER_FALLBACK: &str = "Registration failed";

/// Authentication state of the running application.
///
/// `is_authenticated` implies `user.is_some()`; the fields are private so only
/// the reducer can set them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    is_authenticated: bool,
    user: Option<User>,
    loading: bool,
    error: Option<String>,
    identity_resolved: bool,
}

/// Everything that can change a [`SessionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    LoginPending,
    LoginFulfilled(User),
    LoginRejected(String),
    RegisterPending,
    RegisterFulfilled,
    RegisterRejected(String),
    FetchUserFulfilled(User),
    FetchUserRejected,
    Logout,
    ClearError,
}

impl SessionState {
    /// State at application start: anonymous, identity not yet probed.
    #[must_use]
    pub fn init() -> Self {
        Self::default()
    }

    /// Drop the identity, keeping the knowledge that it has been probed.
    pub fn reset(&mut self) {
        *self = Self {
            identity_resolved: true,
            ..Self::default()
        };
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Authenticated staff account.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.is_authenticated && self.user.as_ref().is_some_and(|user| user.is_staff)
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the first identity probe (or a login/logout) has settled.
    #[must_use]
    pub fn identity_resolved(&self) -> bool {
        self.identity_resolved
    }

    /// The reducer.
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::LoginPending | SessionAction::RegisterPending => {
                self.loading = true;
                self.error = None;
            }
            SessionAction::LoginFulfilled(user) => {
                self.loading = false;
                self.error = None;
                self.authenticate(user);
            }
            SessionAction::LoginRejected(message) | SessionAction::RegisterRejected(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            SessionAction::RegisterFulfilled => {
                self.loading = false;
            }
            SessionAction::FetchUserFulfilled(user) => self.authenticate(user),
            SessionAction::FetchUserRejected => {
                self.is_authenticated = false;
                self.user = None;
                self.identity_resolved = true;
            }
            SessionAction::Logout => self.reset(),
            SessionAction::ClearError => self.error = None,
        }
    }

    /// Return a copy with `action` applied.
    #[must_use]
    pub fn applied(mut self, action: SessionAction) -> Self {
        self.apply(action);
        self
    }

    fn authenticate(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.identity_resolved = true;
    }
}

/// Authenticate, then load the identity behind the new session cookie.
///
/// # Errors
/// Returns the message stored in the session: the server's `detail` or
/// [`LOGIN_FALLBACK`].
pub async fn login<A, D>(api: &A, credentials: &LoginRequest, dispatch: D) -> Result<User, String>
where
    A: ExpenseApi + ?Sized,
    D: Fn(SessionAction),
{
    dispatch(SessionAction::LoginPending);
    let outcome = match api.obtain_token(credentials).await {
        Ok(()) => api.current_user().await,
        Err(error) => Err(error),
    };
    match outcome {
        Ok(user) => {
            info!(username = %user.username, "login succeeded");
            dispatch(SessionAction::LoginFulfilled(user.clone()));
            Ok(user)
        }
        Err(error) => {
            let message = error.message_or(LOGIN_FALLBACK);
            info!(%error, "login failed");
            dispatch(SessionAction::LoginRejected(message.clone()));
            Err(message)
        }
    }
}

/// Create an account. Success does not authenticate the session.
///
/// # Errors
/// Returns the flattened server payload (detail or field errors), else
/// [`REGISTER_FALLBACK`].
pub async fn register<A, D>(
    api: &A,
    request: &RegisterRequest,
    dispatch: D,
) -> Result<RegisterResponse, String>
where
    A: ExpenseApi + ?Sized,
    D: Fn(SessionAction),
{
    dispatch(SessionAction::RegisterPending);
    match api.register(request).await {
        Ok(response) => {
            info!(username = %request.username, "registration succeeded");
            dispatch(SessionAction::RegisterFulfilled);
            Ok(response)
        }
        Err(error) => {
            let message = error.payload_message(REGISTER_FALLBACK);
            dispatch(SessionAction::RegisterRejected(message.clone()));
            Err(message)
        }
    }
}

/// Probe the service for the current identity. Failures are silent: the
/// session becomes anonymous and no error is stored.
pub async fn fetch_user<A, D>(api: &A, dispatch: D) -> Option<User>
where
    A: ExpenseApi + ?Sized,
    D: Fn(SessionAction),
{
    match api.current_user().await {
        Ok(user) => {
            dispatch(SessionAction::FetchUserFulfilled(user.clone()));
            Some(user)
        }
        Err(error) => {
            debug!(%error, "no active session");
            dispatch(SessionAction::FetchUserRejected);
            None
        }
    }
}

/// Local-only logout; the session cookie is left to expire on the server.
pub fn logout<D: Fn(SessionAction)>(dispatch: D) {
    dispatch(SessionAction::Logout);
}

/// Clear the stored error string.
pub fn clear_error<D: Fn(SessionAction)>(dispatch: D) {
    dispatch(SessionAction::ClearError);
}
