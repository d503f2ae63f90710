//! # Customer Registry
//!
//! Demo entry point: loads the configuration, starts the [`CustomerSystem`], registers two
//! customers sharing a postal code and lists them. The second save reuses the address
//! stored by the first, so ViaCEP is queried once.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! APP_RESOLVER__BASE_URL=http://localhost:8080 cargo run
//! ```

use anyhow::Context;
use customer_service::configuration::get_configuration;
use customer_service::lifecycle::{setup_tracing, CustomerSystem};
use customer_service::model::{CustomerCreate, PostalCode};
use resource_store::ActorClient;
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let settings = get_configuration().context("Failed to read configuration")?;
    let resolver = settings
        .resolver
        .client()
        .context("Failed to build the ViaCEP client")?;

    info!(base_url = %settings.resolver.base_url, "Starting customer system");
    let system = CustomerSystem::new(&settings.customers, Arc::new(resolver));

    let postal_code = PostalCode::parse("01001-000")?;

    for name in ["Maria Silva", "João Souza"] {
        let span = tracing::info_span!("customer_registration", customer = name);
        let id = system
            .customer_client
            .insert(CustomerCreate {
                name: name.to_string(),
                postal_code: postal_code.clone(),
            })
            .instrument(span)
            .await
            .with_context(|| format!("Failed to register {name}"))?;
        info!(customer_id = %id, "Customer registered");
    }

    for customer in system.customer_client.find_all().await? {
        info!(
            customer_id = %customer.id,
            name = %customer.name,
            street = %customer.address.street,
            city = %customer.address.city,
            "Stored customer"
        );
    }

    let addresses = system.address_client.list().await?;
    info!(count = addresses.len(), "Stored addresses");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
