use std::net::{IpAddr, SocketAddr};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_server::ServerConfig;

/// In-memory todo API server
#[derive(Parser, Debug)]
#[command(name = "todo-server", version)]
struct Args {
    /// Interface to bind to
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Start without the seed records
    #[arg(long, env = "TODO_EMPTY")]
    empty: bool,

    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long)]
    debug: bool,
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self {
            bind_addr: SocketAddr::new(args.host, args.port),
            seed: !args.empty,
        }
    }
}

fn init_tracing(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug)?;

    let config = ServerConfig::from(&args);
    todo_server::serve(config)
        .await
        .with_context(|| format!("server error on {}:{}", args.host, args.port))
}
