use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, warn};

use lsp_model::check::{CheckConfig, MessagePart, check};
use lsp_model::protocol::{self, MessageDirection};
use lsp_model::{config, log};

#[derive(Parser)]
#[command(name = "lsp-model")]
#[command(version, about = "Validate and normalize Language Server Protocol 3.17 payloads")]
struct Cli {
    /// Config file, defaults to $XDG_CONFIG_HOME/lsp-model/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a payload as a message's params and print its normalized form
    Check {
        /// Method name, e.g. textDocument/hover
        method: String,

        /// Check the payload as the request's result
        #[arg(long, conflicts_with = "registration_options")]
        result: bool,

        /// Check the payload as the message's registration options
        #[arg(long)]
        registration_options: bool,

        /// Fail on properties the model does not know
        #[arg(long)]
        strict: bool,

        /// JSON file to read, stdin when omitted
        file: Option<PathBuf>,
    },

    /// List known methods
    Methods {
        /// Only methods that can be sent in this direction
        #[arg(long)]
        direction: Option<MessageDirection>,
    },
}

fn read_payload(file: Option<&Path>) -> anyhow::Result<Value> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    serde_json::from_str(&text).context("Payload is not valid JSON")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let _guard = log::init(&config.log)?;
    debug!("Loaded config: {:?}", config);

    match cli.command {
        Command::Check {
            method,
            result,
            registration_options,
            strict,
            file,
        } => {
            let part = if result {
                MessagePart::Result
            } else if registration_options {
                MessagePart::RegistrationOptions
            } else {
                MessagePart::Params
            };
            let payload = read_payload(file.as_deref())?;
            let check_config = CheckConfig {
                strict: strict || config.strict,
            };

            let report = check(&method, part, &payload, &check_config)?;
            for pointer in &report.dropped {
                warn!("Unknown property {} in {} {}", pointer, method, part);
            }

            let output = if config.pretty {
                serde_json::to_string_pretty(&report.normalized)?
            } else {
                serde_json::to_string(&report.normalized)?
            };
            println!("{output}");
        }
        Command::Methods { direction } => {
            for info in protocol::messages() {
                if direction.is_some_and(|direction| !info.direction.allows(direction)) {
                    continue;
                }
                println!("{}\t{}\t{}", info.method, info.kind, info.direction);
            }
        }
    }

    Ok(())
}
