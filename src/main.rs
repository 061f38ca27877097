use clap::Parser;
use storefront_cart::core::ConfigProvider;
use storefront_cart::utils::logger;
use storefront_cart::{
    cart_summary, CartCommand, CartSession, CartStore, CliConfig, ConsoleNotifier,
    HttpCatalogApi, LocalStorage, UpdateProductAmount,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    logger::init_logger(cli.verbose || config.verbose(), config.log_format());
    tracing::debug!("Resolved config: {:?}", config);

    let api = HttpCatalogApi::from_config(&config)?;
    let storage = LocalStorage::new(config.storage_path());
    let store = CartStore::load(api, storage, config.storage_key()).await;
    let mut session = CartSession::new(store, ConsoleNotifier);

    let outcome = match cli.command {
        CartCommand::Show => Ok(session.cart().clone()),
        CartCommand::Add { product_id } => session.add_product(product_id).await,
        CartCommand::Remove { product_id } => session.remove_product(product_id).await,
        CartCommand::Update { product_id, amount } => {
            session
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await
        }
    };

    match outcome {
        Ok(cart) => {
            println!("{}", cart_summary(&cart));
            Ok(())
        }
        Err(e) => {
            // Already reported to the user by the session.
            tracing::debug!("Command failed ({:?}): {}", e.kind(), e);
            std::process::exit(1);
        }
    }
}
