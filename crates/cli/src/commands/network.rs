use clap::{Args, Subcommand};
use web3dapp_core::network::{ChainId, NetworkInfo, NetworkRegistry};

use crate::{
    commands::error::NetworkError,
    console::{print_details, print_success_message, print_table, print_warn_message},
};

#[derive(Subcommand)]
pub enum NetworkCommands {
    /// List all supported networks
    List(ListArgs),
    /// Show a single network by chain id
    Get {
        chain_id: ChainId,
        /// Print the network as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a chain id is supported
    Supported { chain_id: ChainId },
    /// Show the recommended network
    Recommended {
        /// Show the recommended testnet instead
        #[arg(long)]
        testnet: bool,
        /// Print the network as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(long, value_enum)]
    filter: Option<NetworkFilter>,
    /// Print the networks as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum NetworkFilter {
    Production,
    Testnet,
}

pub fn handle_network(
    command: &NetworkCommands,
    registry: &NetworkRegistry,
) -> Result<(), NetworkError> {
    match command {
        NetworkCommands::List(list_args) => handle_list(list_args, registry),
        NetworkCommands::Get { chain_id, json } => handle_get(*chain_id, *json, registry),
        NetworkCommands::Supported { chain_id } => {
            handle_supported(*chain_id, registry);
            Ok(())
        }
        NetworkCommands::Recommended { testnet, json } => {
            handle_recommended(*testnet, *json, registry)
        }
    }
}

fn handle_list(args: &ListArgs, registry: &NetworkRegistry) -> Result<(), NetworkError> {
    let networks = match args.filter {
        Some(NetworkFilter::Production) => registry.get_production_networks(),
        Some(NetworkFilter::Testnet) => registry.get_testnet_networks(),
        None => registry.get_all_networks(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(networks)?);
        return Ok(());
    }

    let headers = vec!["Network Name", "Chain ID", "Currency", "Gas Cost", "Category", "RPC URL"];
    let title = format!("{} Networks Available:", networks.len());
    let footer = "Tip: Run 'network get <chain_id>' to see more details about a specific network.";

    print_table(headers, network_rows(networks, registry), Some(&title), Some(footer));

    Ok(())
}

fn handle_get(chain_id: ChainId, json: bool, registry: &NetworkRegistry) -> Result<(), NetworkError> {
    match registry.get_network(chain_id) {
        Some(network) => print_network(network, json, registry),
        None => {
            print_warn_message(&format!("Chain {} is not a supported network", chain_id));
            Ok(())
        }
    }
}

fn handle_supported(chain_id: ChainId, registry: &NetworkRegistry) {
    match registry.get_network(chain_id) {
        Some(network) => print_success_message(&format!(
            "Chain {} ({}) is supported",
            chain_id, network.name
        )),
        None => print_warn_message(&format!("Chain {} is not supported", chain_id)),
    }
}

fn handle_recommended(
    testnet: bool,
    json: bool,
    registry: &NetworkRegistry,
) -> Result<(), NetworkError> {
    if !testnet {
        return print_network(registry.get_recommended(), json, registry);
    }

    match registry.get_recommended_testnet() {
        Some(network) => print_network(network, json, registry),
        None => {
            print_warn_message("No testnet is recommended");
            Ok(())
        }
    }
}

fn print_network(
    network: &NetworkInfo,
    json: bool,
    registry: &NetworkRegistry,
) -> Result<(), NetworkError> {
    if json {
        println!("{}", serde_json::to_string_pretty(network)?);
        return Ok(());
    }

    print_details(&network.name, &network_details(network, registry));

    if network.is_expensive() {
        print_warn_message(&format!(
            "Transactions on {} are expensive, consider {} instead",
            network.name,
            registry.get_recommended().name
        ));
    }

    Ok(())
}

fn category_label(network: &NetworkInfo, registry: &NetworkRegistry) -> String {
    registry.category_of(network.chain_id).map(|c| c.to_string()).unwrap_or_default()
}

fn network_rows(networks: &[NetworkInfo], registry: &NetworkRegistry) -> Vec<Vec<String>> {
    networks
        .iter()
        .map(|network| {
            let name = if network.recommended {
                format!("{} (recommended)", network.name)
            } else {
                network.name.clone()
            };

            vec![
                name,
                network.chain_id.to_string(),
                network.currency.clone(),
                network.gas_cost_level.to_string(),
                category_label(network, registry),
                network.rpc_url.clone(),
            ]
        })
        .collect()
}

fn network_details(network: &NetworkInfo, registry: &NetworkRegistry) -> Vec<(&'static str, String)> {
    vec![
        ("Chain ID", network.chain_id.to_string()),
        ("Currency", network.currency.clone()),
        ("Category", category_label(network, registry)),
        ("Gas Cost", network.gas_cost_level.to_string()),
        ("RPC URL", network.rpc_url.clone()),
        ("Block Explorer", network.block_explorer.clone()),
        ("Recommended", network.recommended.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_rows_mark_recommended() {
        let registry = NetworkRegistry::shipped();
        let rows = network_rows(registry.get_all_networks(), registry);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0][0], "Polygon (recommended)");
        assert_eq!(rows[0][1], "137");
        assert_eq!(rows[0][3], "low");
        assert_eq!(rows[0][4], "production");
        assert_eq!(rows[2][0], "Ethereum");
        assert_eq!(rows[2][3], "high");
        assert_eq!(rows[3][0], "Amoy (recommended)");
        assert_eq!(rows[3][4], "testnet");
    }

    #[test]
    fn test_network_details() {
        let registry = NetworkRegistry::shipped();
        let sepolia = registry.get_network(ChainId::SEPOLIA).unwrap();

        let details = network_details(sepolia, registry);

        assert!(details.contains(&("Block Explorer", "https://sepolia.etherscan.io".to_string())));
        assert!(details.contains(&("Category", "testnet".to_string())));
        assert!(details.contains(&("Recommended", "false".to_string())));
    }

    #[test]
    fn test_unknown_chain_is_not_an_error() {
        let registry = NetworkRegistry::shipped();

        assert!(handle_get(ChainId::new(999999), false, registry).is_ok());
    }
}
