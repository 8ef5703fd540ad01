use clap::{Parser, Subcommand};
use color_eyre::Result;
use log::LevelFilter;
use model_cli::{ApiClient, ListOptions, Resource};
use shared::data::ModelPayload;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Command line client for the model service.
#[derive(Debug, Parser)]
#[command(name = "models", version)]
struct Cli {
    /// Base URL of the service
    #[arg(long, env = "MODEL_API_HOST", default_value = "http://localhost:8000", global = true)]
    host: String,
    /// Log every request and response
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List models, or fetch one by id
    Get {
        resource: String,
        #[arg(short, long)]
        id: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        /// Column to sort by, descending
        #[arg(long)]
        sort_by: Option<String>,
        /// Max number of results
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a model
    Create {
        resource: String,
        name: String,
        #[arg(short, long)]
        accuracy: Option<f64>,
    },
    /// Change fields of an existing model
    Update {
        resource: String,
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        accuracy: Option<f64>,
    },
    /// Delete a model
    Delete { resource: String, id: String },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let api = ApiClient::new(&cli.host)?;
    let request = match cli.command {
        Command::Get {
            resource,
            id,
            name,
            sort_by,
            limit,
        } => {
            let options = ListOptions {
                name,
                sort_by,
                limit,
            };
            api.get_request(resource.parse::<Resource>()?, id.as_deref(), &options)
        }
        Command::Create {
            resource,
            name,
            accuracy,
        } => {
            let payload = ModelPayload {
                name: Some(name),
                accuracy,
                ..ModelPayload::default()
            };
            api.create_request(resource.parse::<Resource>()?, &payload)
        }
        Command::Update {
            resource,
            id,
            name,
            accuracy,
        } => {
            let payload = ModelPayload {
                name,
                accuracy,
                ..ModelPayload::default()
            };
            api.update_request(resource.parse::<Resource>()?, &id, &payload)
        }
        Command::Delete { resource, id } => {
            api.delete_request(resource.parse::<Resource>()?, &id)
        }
    };

    let reply = api.send(request)?;
    println!("{}", reply.pretty_body());

    if reply.status.is_success() {
        Ok(())
    } else {
        eprintln!("Request failed: {}", reply.status);
        std::process::exit(1);
    }
}
