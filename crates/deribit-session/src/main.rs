/*
[INPUT]:  CLI arguments, environment credentials
[OUTPUT]: Authenticated trading session with results printed to stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the startup flow
*/

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use deribit_adapter::TESTNET_BASE_URL;
use deribit_session::{Operation, Session, SessionConfig, demo_plan};

#[derive(Parser, Debug)]
#[command(name = "deribit-session", version, about = "Deribit JSON-RPC trading session")]
struct Cli {
    #[arg(long = "base-url", env = "DERIBIT_BASE_URL", default_value = TESTNET_BASE_URL)]
    base_url: String,
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 30)]
    timeout_secs: u64,
    #[arg(long = "connect-timeout-secs", value_name = "SECS", default_value_t = 10)]
    connect_timeout_secs: u64,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "client-id", env = "CLIENT_ID", hide_env_values = true)]
    client_id: Option<String>,
    #[arg(long = "client-secret", env = "CLIENT_SECRET", hide_env_values = true)]
    client_secret: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place a limit buy order
    Buy {
        #[arg(long)]
        instrument: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        amount: String,
    },
    /// Cancel an order
    Cancel {
        #[arg(long = "order-id")]
        order_id: String,
    },
    /// Change amount and price of an order
    Edit {
        #[arg(long = "order-id")]
        order_id: String,
        #[arg(long)]
        amount: i64,
        #[arg(long)]
        price: f64,
    },
    /// Show the order book of an instrument
    OrderBook {
        #[arg(long)]
        instrument: String,
    },
    /// Show the position in an instrument
    Position {
        #[arg(long)]
        instrument: String,
    },
    /// List open limit orders on futures
    OpenOrders,
    /// Replay the fixed demo sequence
    Demo,
}

impl Command {
    fn into_operations(self) -> Vec<Operation> {
        let operation = match self {
            Command::Buy {
                instrument,
                price,
                amount,
            } => Operation::Buy {
                instrument,
                price,
                amount,
            },
            Command::Cancel { order_id } => Operation::Cancel { order_id },
            Command::Edit {
                order_id,
                amount,
                price,
            } => Operation::Edit {
                order_id,
                amount,
                price,
            },
            Command::OrderBook { instrument } => Operation::OrderBook { instrument },
            Command::Position { instrument } => Operation::Position { instrument },
            Command::OpenOrders => Operation::OpenOrders,
            Command::Demo => return demo_plan(),
        };
        vec![operation]
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = SessionConfig {
        base_url: args.base_url,
        timeout: Duration::from_secs(args.timeout_secs),
        connect_timeout: Duration::from_secs(args.connect_timeout_secs),
        client_id: args.client_id,
        client_secret: args.client_secret,
    };
    info!(base_url = %config.base_url, "starting deribit-session");

    let session = Session::start(&config).await?;
    let operations = args.command.into_operations();

    let mut stdout = io::stdout().lock();
    let summary = session
        .run_all(&operations, &mut stdout)
        .await
        .context("run operations")?;
    stdout.flush().context("flush stdout")?;

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "session finished"
    );
    if summary.failed > 0 {
        bail!("{} of {} operations failed", summary.failed, operations.len());
    }
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
