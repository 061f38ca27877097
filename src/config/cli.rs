use crate::config::toml_config::CartConfig;
use crate::core::ProductId;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-cart")]
#[command(about = "Manage a storefront shopping cart backed by a remote stock API")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL of the product and stock API")]
    pub api_url: Option<String>,

    #[arg(long, help = "File holding the local key-value storage")]
    pub storage_path: Option<String>,

    #[arg(long, help = "Storage key the cart is saved under")]
    pub storage_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    /// Print the current cart
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product from the cart
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

impl CliConfig {
    /// Loads the file config (or defaults), applies command-line overrides and validates.
    pub fn resolve(&self) -> Result<CartConfig> {
        let mut config = match &self.config {
            Some(path) => CartConfig::from_file(path)?,
            None => CartConfig::default(),
        };

        if let Some(api_url) = &self.api_url {
            config.api.base_url = api_url.clone();
        }
        if let Some(storage_path) = &self.storage_path {
            config.storage.path = storage_path.clone();
        }
        if let Some(storage_key) = &self.storage_key {
            config.storage.key = Some(storage_key.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_update_command() {
        let cli = CliConfig::parse_from(["storefront-cart", "update", "3", "-1"]);
        assert!(matches!(
            cli.command,
            CartCommand::Update {
                product_id: 3,
                amount: -1
            }
        ));
    }

    #[test]
    fn test_flags_override_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"http://localhost:3333\"\n\n[storage]\npath = \"./cart.json\"\nkey = \"file:key\""
        )
        .unwrap();

        let config_path = file.path().to_str().unwrap();
        let cli = CliConfig::parse_from([
            "storefront-cart",
            "--config",
            config_path,
            "--api-url",
            "https://shop.example.com",
            "show",
        ]);

        let config = cli.resolve().unwrap();
        assert_eq!(config.api_base_url(), "https://shop.example.com");
        assert_eq!(config.storage_path(), "./cart.json");
        assert_eq!(config.storage_key(), "file:key");
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let cli = CliConfig::parse_from(["storefront-cart", "--api-url", "localhost", "show"]);
        assert!(cli.resolve().is_err());
    }
}
