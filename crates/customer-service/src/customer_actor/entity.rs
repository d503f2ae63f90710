//! [`ActorEntity`] implementation for the [`Customer`] domain type.

use crate::customer_actor::{AddressDirectory, CustomerError};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_store::ActorEntity;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Context = AddressDirectory;
    type Error = CustomerError;

    fn id(&self) -> &CustomerId {
        &self.id
    }

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        Ok(Customer::new(id, params.name, params.postal_code))
    }

    /// Links the new customer to the stored address for its postal code.
    async fn on_create(&mut self, directory: &AddressDirectory) -> Result<(), Self::Error> {
        self.address = directory.address_for(&self.address.postal_code).await?;
        Ok(())
    }

    /// Replaces name and address. The address is settled first so a failed lookup leaves
    /// the stored customer as it was.
    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        directory: &AddressDirectory,
    ) -> Result<(), Self::Error> {
        let address = directory.address_for(&update.postal_code).await?;
        self.name = update.name;
        self.address = address;
        Ok(())
    }
}
