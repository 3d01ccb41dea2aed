use axum::extract::FromRef;
use insta_agent_core::Dispatcher;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}
