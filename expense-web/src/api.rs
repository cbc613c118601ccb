//! API client handle shared with every view through a Yew context.

use shared::{ApiResult, ExpenseClient};
use std::rc::Rc;
use yew::prelude::*;

use crate::config::FrontendConfig;

/// Cheap, clonable handle to the one [`ExpenseClient`] of the app.
#[derive(Clone, Debug)]
pub struct ApiContext(Rc<ExpenseClient>);

impl ApiContext {
    pub fn new(client: ExpenseClient) -> Self {
        Self(Rc::new(client))
    }

    /// Build the client from the compiled-in configuration.
    pub fn from_config(config: &FrontendConfig) -> ApiResult<Self> {
        let api_config = config.api_config()?;
        ExpenseClient::new(api_config).map(Self::new)
    }

    /// Owned handle for moving into a spawned task.
    pub fn client(&self) -> Rc<ExpenseClient> {
        Rc::clone(&self.0)
    }
}

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The client provided at the root of the component tree.
#[hook]
pub fn use_api() -> Rc<ExpenseClient> {
    use_context::<ApiContext>()
        .expect("ApiContext is provided by the root component")
        .client()
}
