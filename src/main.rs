use std::fmt::Display;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use propai_dashboard::config::{Cli, Command, Config};
use propai_dashboard::export;
use propai_dashboard::filter::Query;
use propai_dashboard::store::{DataProvider, Dataset, FixtureProvider, JsonFileProvider};
use propai_dashboard::views::leads::LeadCard;
use propai_dashboard::views::properties::PropertyCard;
use propai_dashboard::views::{Screen, SearchView};

fn emit<T: Serialize + Display>(value: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", value);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    let provider: Box<dyn DataProvider> = match &config.data {
        Some(path) => Box::new(JsonFileProvider::new(path.clone())),
        None => Box::new(FixtureProvider::new()),
    };
    info!("🏠 PropAI dashboard, data from {}", provider.source_name());
    let data = Dataset::load(provider.as_ref()).await?;

    match &cli.command {
        Command::Show(args) => {
            let state = args.state(&config)?;
            emit(&Screen::build(&data, &state), cli.json)?;
        }
        Command::Search { query } => {
            let query = Query::new(query.as_str(), config.search_mode);
            emit(&SearchView::build(&data, &query), cli.json)?;
        }
        Command::Lead { id } => {
            let lead = data.lead(*id)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(lead)?);
            } else {
                print!("{}", LeadCard::from_lead(lead));
            }
        }
        Command::Property { id } => {
            let property = data.property(*id)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(property)?);
            } else {
                print!("{}", PropertyCard::from_property(property));
            }
        }
        Command::Export(args) => {
            let state = args.state(&config)?;
            let total = export::write(&data, &state, args.kind, &args.output).await?;
            if cli.json {
                println!("{}", export::summary(&args.output, total));
            }
        }
    }

    Ok(())
}
