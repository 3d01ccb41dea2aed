use crate::model::{ActionError, ActionKind, Fields};
use crate::prompt;
use crate::synth::Synthesizer;
use std::str::FromStr;

/// Validates incoming actions, builds their prompt and hands both to the
/// synthesizer.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    synth: Synthesizer,
}

impl Dispatcher {
    pub fn new(synth: Synthesizer) -> Self {
        Self { synth }
    }

    /// Maps a raw action name onto a known action.
    pub fn resolve(action: &str) -> Result<ActionKind, ActionError> {
        ActionKind::from_str(action).map_err(|_| ActionError::InvalidAction(action.to_string()))
    }

    /// Resolves a raw action name and runs it.
    pub async fn dispatch(&self, action: &str, fields: &Fields) -> Result<String, ActionError> {
        let kind = Self::resolve(action)?;
        Ok(self.run(kind, fields).await)
    }

    pub async fn run(&self, action: ActionKind, fields: &Fields) -> String {
        let prompt = prompt::build(action, fields);
        tracing::debug!(%action, prompt_len = prompt.len(), "prompt built");
        self.synth.respond(action, &prompt).await
    }
}
