use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use petstore::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_serve,
};
use petstore::cli::{Cli, Commands};
use petstore::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_ref().map(PathBuf::from));

    match cli.command {
        Commands::Init { id_length } => handle_init(id_length),
        Commands::Serve { port } => {
            let ctx = CommandContext::load(cli.data_dir)?;
            handle_serve(ctx, port)
        }
        Commands::Query { query, variables } => {
            let ctx = CommandContext::load(cli.data_dir)?;
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = CommandContext::load(cli.data_dir)?;
            handle_mutate(ctx, mutation, variables)
        }
    }
}
