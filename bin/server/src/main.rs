pub mod api;
pub mod cli;
pub mod dispatch;
pub mod http;
pub mod model;
pub mod opts;

use anyhow::Result;
use atb::logging::init_tracer;
use atb_cli_utils::AtbCli;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    Cli::set_globals(&cli.base);

    let _guard = init_tracer(Default::default()).expect("tracer setup succeeds. qed");
    let runtime = Cli::create_runtime(cli.worker_threads)?;
    match cli.subcommand {
        Commands::Http { http, synth } => {
            runtime.block_on(async move { http::run(http, synth).await })
        }
        Commands::Dispatch {
            action,
            data,
            synth,
        } => runtime.block_on(async move { dispatch::run(action, data, synth).await }),
    }
}
