use clap::{Parser, Subcommand};

use crate::commands::network::NetworkCommands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new dapp project with a web3dapp.yaml
    Init {
        /// optional - The path to create the project in, default will be where the command is run.
        #[clap(long, short)]
        path: Option<String>,

        /// optional - The project name, you will be prompted when it is not given.
        #[clap(long, short)]
        name: Option<String>,
    },
    /// Inspect the supported blockchain networks
    Network {
        /// optional - The project path holding web3dapp.yaml, default will be where the command is run.
        #[clap(long, short)]
        path: Option<String>,

        #[command(subcommand)]
        command: NetworkCommands,
    },
}
