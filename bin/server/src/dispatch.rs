use crate::opts::SynthOpts;

use anyhow::Context;
use insta_agent_core::{Dispatcher, Fields};

/// Runs one action through the dispatcher without starting the server.
pub async fn run(action: String, data: String, synth_opts: SynthOpts) -> anyhow::Result<()> {
    let fields: Fields = serde_json::from_str(&data).context("--data must be a JSON object")?;
    let dispatcher = Dispatcher::new(synth_opts.synthesizer());
    let result = dispatcher.dispatch(&action, &fields).await?;
    println!("{result}");
    Ok(())
}
