use std::process;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use log::{debug, error};

mod auth;
mod cli;
mod config;
mod core;
mod error;
mod name;
mod presenter;
mod providers;
mod recordset;
mod zone;

use auth::credentials::EnvCredentials;
use cli::{Action, Cli};
use config::Config;
use crate::core::record::RecordType;
use error::Error;
use providers::route53::error::map_error;
use providers::route53::{Route53Config, Route53Provider};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(message) = cli::validate(&cli) {
        // Usage errors print the usage block and exit non-zero.
        Cli::command()
            .error(clap::error::ErrorKind::InvalidValue, message)
            .exit();
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    if let Err(e) = run(&cli).await {
        error!("{e}");
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let config = Config::new(&cli.region, cli.verbose);
    let provider = Route53Provider::new(
        Route53Config::for_region(&config.region),
        Arc::new(EnvCredentials),
    )
    .map_err(map_error)?;

    let record_name = name::normalize(&cli.name);
    let zone_id = zone::resolve_zone_id(&provider, &record_name).await?;
    debug!("zoneID for {record_name} is {zone_id}");

    let record_type = RecordType::from_wire(&cli.record_type);
    let record_set = recordset::find_record_set(
        &provider,
        &zone_id,
        &record_name,
        &record_type,
        cli.setid.as_deref(),
    )
    .await?;
    if config.verbose && cli.cmd != Action::List {
        presenter::print_record_set(&record_set);
    }

    match cli.cmd {
        Action::List => presenter::print_record_set(&record_set),
        Action::Add => {
            recordset::add_addresses(&provider, &zone_id, record_set, &cli.ips).await?;
        }
        Action::Del => {
            recordset::remove_addresses(&provider, &zone_id, record_set, &cli.ips).await?;
        }
    }
    Ok(())
}
