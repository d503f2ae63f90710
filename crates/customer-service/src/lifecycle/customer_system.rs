use crate::address_actor;
use crate::clients::{AddressClient, CustomerClient};
use crate::configuration::CustomerSettings;
use crate::customer_actor::{self, AddressDirectory};
use crate::resolver::PostalResolver;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running customer registry: both store actors and the clients to reach them.
///
/// # Example
///
/// ```ignore
/// let resolver = Arc::new(settings.resolver.client()?);
/// let system = CustomerSystem::new(&settings.customers, resolver);
///
/// let id = system.customer_client.insert(params).await?;
/// let customer = system.customer_client.find_by_id(id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CustomerSystem {
    pub customer_client: CustomerClient,

    /// Read access to the shared addresses. Writes go through customer saves.
    pub address_client: AddressClient,

    handles: Vec<JoinHandle<()>>,
}

impl CustomerSystem {
    /// Spawns the Address and Customer actors and wires them together.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(settings: &CustomerSettings, resolver: Arc<dyn PostalResolver>) -> Self {
        let capacity = settings.channel_capacity.get();
        let (address_actor, address_client) = address_actor::new(capacity);
        let (customer_actor, customer_store) = customer_actor::new(capacity);

        let directory = AddressDirectory::new(address_client.clone(), resolver);
        let customer_handle = tokio::spawn(customer_actor.run(directory));
        let address_handle = tokio::spawn(address_actor.run(()));

        Self {
            customer_client: CustomerClient::new(customer_store, settings.update_missing),
            address_client,
            handles: vec![customer_handle, address_handle],
        }
    }

    /// Drops every client and waits for the actors to drain and exit.
    ///
    /// # Errors
    /// The [`JoinError`] of the first actor task that panicked or was cancelled.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down customer system");

        drop(self.customer_client);
        drop(self.address_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Customer system shutdown complete");
        Ok(())
    }
}
