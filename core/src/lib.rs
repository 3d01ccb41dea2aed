pub mod dispatcher;
pub mod model;
pub mod prompt;
pub mod synth;

pub use dispatcher::Dispatcher;
pub use model::{ActionError, ActionKind, Fields};
pub use synth::Synthesizer;
