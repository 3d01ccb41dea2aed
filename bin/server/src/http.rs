use crate::{api, opts::*};

use atb_tokio_ext::shutdown_signal;
use insta_agent_core::Dispatcher;
use tokio::net::TcpListener;

pub async fn run(http_opts: HttpOpts, synth_opts: SynthOpts) -> anyhow::Result<()> {
    let synth = synth_opts.synthesizer();
    tracing::info!(delay_ms = synth.delay().as_millis() as u64, "mock synthesizer ready");
    let app_state = api::state::AppState::new(Dispatcher::new(synth));

    tracing::info!("http listening on {}", http_opts.host);
    let app = api::build_app(&http_opts, app_state)?;
    let listener = TcpListener::bind(&http_opts.host).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
