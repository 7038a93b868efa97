use std::time::Duration;

use clap::Parser;
use luckdraw::{LuckdrawError, LuckdrawServer};
use luckdraw_session::SessionConfig;

/// Luckdraw server - lobby-and-rounds lucky draw over WebSockets
#[derive(Parser, Debug)]
#[command(name = "luckdraw-server", version, about)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    bind: String,

    /// Players needed in the lobby before a session starts
    #[arg(long, default_value_t = 4)]
    min_players: usize,

    /// Rounds per session
    #[arg(long, default_value_t = 5)]
    total_rounds: u32,

    /// Delay between a round starting and its result, in milliseconds
    #[arg(long, default_value_t = 3000)]
    resolve_delay_ms: u64,

    /// Seed for the winner draw (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            total_rounds: self.total_rounds,
            min_players: self.min_players,
            resolve_delay: Duration::from_millis(self.resolve_delay_ms),
            rng_seed: self.seed,
        }
        .validated()
    }
}

#[tokio::main]
async fn main() -> Result<(), LuckdrawError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luckdraw=info,luckdraw_session=info".into()),
        )
        .init();

    let args = Args::parse();

    let server = LuckdrawServer::builder()
        .bind(&args.bind)
        .session_config(args.session_config())
        .build()
        .await?;

    tracing::info!(addr = %server.local_addr()?, "starting luckdraw server");
    server.run_until(shutdown_signal()).await
}

/// Completes on Ctrl-C. If the handler cannot be installed, never completes.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
