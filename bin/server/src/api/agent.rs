use crate::api::{errors::Error, state::AppState};
use crate::model::{AgentRequest, AgentResponse};
use axum::{
    Router,
    body::Bytes,
    extract::{Json, State, rejection::BytesRejection},
    routing::post,
};
use insta_agent_core::Dispatcher;
use tracing::instrument;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/instagram-agent", post(agent_handler))
}

/// Runs one canned action and returns its generated text.
///
/// The body is read as JSON regardless of content type. The action is
/// validated before `data`, so an unknown action is always a 400 while a
/// malformed body or bad fields for a known action are a 500.
#[instrument(skip(dispatcher, body))]
pub async fn agent_handler(
    State(dispatcher): State<Dispatcher>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AgentResponse>, Error> {
    let req = AgentRequest::from_slice(&body?)?;
    let action = Dispatcher::resolve(req.action_name())?;
    let fields = req.fields()?;
    let result = dispatcher.run(action, &fields).await;
    Ok(Json(AgentResponse { result }))
}
