use std::time::Duration;

use atb_cli_utils::clap::{self, Parser};
use axum_client_ip::ClientIpSource;
use insta_agent_core::Synthesizer;

#[derive(Debug, Clone, Parser)]
pub struct HttpOpts {
    /// Address/port for the HTTP listener
    #[arg(long, env = "AGENT_HOST", default_value = "0.0.0.0:3030")]
    pub host: String,

    #[arg(
        long,
        value_delimiter = ';',
        default_value = "http://localhost:3000;http://127.0.0.1:3000;http://localhost:8080;http://127.0.0.1:8080",
        env = "AGENT_CORS_ORIGINS"
    )]
    pub origins: Vec<String>,

    // Client IP extraction source (default: raw socket via ConnectInfo).
    #[arg(long, default_value = "ConnectInfo", env = "AGENT_CLIENT_IP_SOURCE")]
    pub client_ip_source: ClientIpSource,
}

#[derive(Clone, Debug, Parser)]
pub struct SynthOpts {
    /// Artificial latency applied to every generated response, in milliseconds
    #[arg(long, default_value = "1000", env = "AGENT_RESPONSE_DELAY_MS")]
    pub response_delay_ms: u64,
}

impl SynthOpts {
    pub fn synthesizer(&self) -> Synthesizer {
        Synthesizer::new(Duration::from_millis(self.response_delay_ms))
    }
}
