use anvil_tx::application::runner::RequestRunner;
use anvil_tx::config::{ApiConfig, DEFAULT_API_KEY, DEFAULT_API_URL, DEFAULT_CHANGE_ADDRESS};
use anvil_tx::domain::payment::{PaymentOutput, PaymentRequest};
use anvil_tx::domain::ports::TransactionServiceBox;
use anvil_tx::infrastructure::anvil::AnvilClient;
use anvil_tx::interfaces::json::response_writer::ResponseWriter;
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const LOG_ENV: &str = "ANVIL_LOG";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the transaction service
    #[arg(long, env = "ANVIL_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// API key sent in the x-api-key header
    #[arg(
        long,
        env = "ANVIL_API_KEY",
        default_value = DEFAULT_API_KEY,
        hide_env_values = true,
        hide_default_value = true,
        global = true
    )]
    api_key: String,

    /// Request timeout in seconds. Uses the HTTP client default when omitted.
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build a payment transaction and print the service response (default)
    Build(BuildArgs),
    /// Query the service health endpoint
    Health,
}

#[derive(Args)]
struct BuildArgs {
    /// Address receiving the change
    #[arg(long, default_value = DEFAULT_CHANGE_ADDRESS)]
    change_address: String,

    /// Payment output as ADDRESS:LOVELACE. Repeat for several outputs.
    #[arg(long = "output", value_name = "ADDRESS:LOVELACE")]
    outputs: Vec<PaymentOutput>,
}

impl BuildArgs {
    fn into_request(self) -> PaymentRequest {
        if self.outputs.is_empty() {
            let mut request = PaymentRequest::default();
            request.change_address = self.change_address;
            request
        } else {
            PaymentRequest::new(self.change_address, self.outputs)
        }
    }
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            change_address: DEFAULT_CHANGE_ADDRESS.to_string(),
            outputs: Vec::new(),
        }
    }
}

fn init_tracing() {
    // ANVIL_LOG takes precedence over RUST_LOG.
    let env_var = if std::env::var_os(LOG_ENV).is_some() {
        LOG_ENV
    } else {
        EnvFilter::DEFAULT_ENV
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(env_var)
        .from_env_lossy();

    // Logs go to stderr so stdout carries only the response document.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = ApiConfig::new(&cli.api_url, cli.api_key).into_diagnostic()?;
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let service: TransactionServiceBox = Box::new(AnvilClient::new(config).into_diagnostic()?);
    let runner = RequestRunner::new(service);

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());

    match cli.command.unwrap_or_else(|| Command::Build(BuildArgs::default())) {
        Command::Build(args) => {
            let request = args.into_request();
            let response = runner.run(&request).await.into_diagnostic()?;
            writer.write_response(&response).into_diagnostic()?;
        }
        Command::Health => {
            let status = runner.check_health().await.into_diagnostic()?;
            writer.write_text(&status).into_diagnostic()?;
        }
    }

    Ok(())
}
