use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command, ListArgs};
use crate::client::{GraphQLClient, HttpTransport};
use crate::fixtures::FixtureStore;
use crate::graphql::build_schema;
use crate::telemetry::Sink;
use crate::view::{TodoPage, ViewState};

mod cli;
mod client;
mod config;
mod fixtures;
mod graphql;
mod serving;
mod telemetry;
mod view;

const APP_NAME: &str = "todo-board";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve => serve().await,
        Command::List(args) => list(args).await,
        Command::Schema => {
            print!("{}", build_schema(FixtureStore::new(vec![], vec![])).sdl());
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve() -> Result<ExitCode> {
    let _guard = telemetry::init(APP_NAME, Sink::Stdout)?;
    let config = config::load()?;
    let store = FixtureStore::load();
    serving::run_and_serve(config.serving, store).await?;
    Ok(ExitCode::SUCCESS)
}

async fn list(args: ListArgs) -> Result<ExitCode> {
    let _guard = telemetry::init(APP_NAME, Sink::Stderr)?;
    let mut config = config::load()?;
    if let Some(endpoint) = args.endpoint {
        config.client.endpoint = endpoint;
    }

    let client = GraphQLClient::new(HttpTransport::new(&config.client)?);
    let mut page = TodoPage::new(args.width);
    print!("{}", page.render());
    page.mount(&client).await;
    print!("{}", page.render());

    Ok(match page.state() {
        ViewState::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}
