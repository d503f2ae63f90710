//! [`ActorEntity`] implementation for the [`Address`] domain type.
//!
//! Addresses are reference data: both payload types are [`Infallible`], so the store can
//! neither generate an address nor modify one. The only way in is insert-if-absent, keyed
//! by the address's own postal code, and `on_delete` refuses every removal.

use crate::address_actor::AddressError;
use crate::model::{Address, PostalCode};
use async_trait::async_trait;
use resource_store::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Address {
    type Id = PostalCode;
    type Create = Infallible;
    type Update = Infallible;
    type Context = ();
    type Error = AddressError;

    fn id(&self) -> &PostalCode {
        &self.postal_code
    }

    fn from_create_params(_id: PostalCode, params: Infallible) -> Result<Self, Self::Error> {
        match params {}
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Err(AddressError::Undeletable(self.postal_code.to_string()))
    }
}
