use crate::config::StoreSettings;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "petstore")]
#[command(
    author,
    version,
    about = "A small GraphQL pet store backed by a flat-file document collection"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the data directory (overrides config discovery)
    #[arg(long, global = true, env = "PETSTORE_DATA")]
    pub data_dir: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a pet store in the current directory
    Init {
        /// Length of store-generated document ids
        #[arg(long, default_value_t = StoreSettings::default().id_length)]
        id_length: usize,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 4000)]
        port: u16,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation selection, e.g. 'addPet(id: "x", name: "Rex", breed: "Labrador") { id }'
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },
}
