use clap::{Args, Parser, Subcommand};
use companieshouse_rs::resolve_company;
use companieshouse_rs::server::config::AppConfig;
use companieshouse_rs::server::{AppError, serve, telemetry};

#[derive(Parser, Debug)]
#[command(
    name = "companieshouse-api",
    about = "Resolve company names to registry profiles, over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Resolve a single company name and print the profile as JSON
    Lookup {
        /// Company name, e.g. "PT. Buka Bumi Konstruksi"
        name: String,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    {
        Command::Serve(args) => {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            serve(config).await
        }
        Command::Lookup { name } => {
            let client = config.upstream.client()?;
            let profile = resolve_company(&client, &name).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
