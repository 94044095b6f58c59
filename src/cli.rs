use clap::{Parser, Subcommand};

/// Todo board: a GraphQL API over fixture data and a terminal client for it.
#[derive(Parser, Debug)]
#[command(name = "todo-board", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the GraphQL API.
    Serve,

    /// Query the API and render the todo cards.
    List(ListArgs),

    /// Print the GraphQL schema in SDL form.
    Schema,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// GraphQL endpoint, overriding `client.endpoint` from the configuration.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Width of the rendered grid, in columns.
    #[arg(long, env = "COLUMNS", default_value_t = 100)]
    pub width: usize,
}
