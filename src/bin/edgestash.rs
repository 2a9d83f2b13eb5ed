use anyhow::Result;
use clap::{Parser, Subcommand};
use edgestash::{Config, EdgestashContext, LogFormat, headers::SURROGATE_CAPABILITY, logging};
use http::{HeaderMap, HeaderValue};
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(about, version)]
struct CommandLine {
    /// log output format, overrides `EDGESTASH_LOG_FORMAT`.
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Start the demo origin server
    Serve {
        /// address to listen on, overrides `EDGESTASH_SERVER_ADDR`.
        #[arg(long)]
        addr: Option<SocketAddr>,
    },

    /// Check if a Surrogate-Capability header value enables edgestash
    Negotiate {
        /// raw header value, e.g. 'edgestash="EDGESTASH/2.1"'
        capability: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CommandLine::parse();

    let mut config = Config::from_environment()?;
    if let Some(log_format) = args.log_format {
        config.log_format = log_format;
    }
    logging::init(config.log_format);

    match args.command {
        Command::Serve { addr } => {
            if let Some(addr) = addr {
                config.server_addr = addr;
            }
            edgestash::web::serve(config).await?;
        }
        Command::Negotiate { capability } => {
            let mut headers = HeaderMap::new();
            headers.insert(&SURROGATE_CAPABILITY, HeaderValue::from_str(&capability)?);

            let context = EdgestashContext::negotiate(&headers);
            println!("{}", context.is_active());
        }
    }

    Ok(())
}
