use crate::model::PostalCode;
use serde::{Deserialize, Serialize};

/// A locality record, keyed by postal code and shared by every customer using that code.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_store::ActorEntity) trait (see
/// [`crate::address_actor`]). Its create and update payloads are uninhabited: addresses
/// enter the store only through insert-if-absent and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub postal_code: PostalCode,
    pub street: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub ibge: String,
    pub gia: String,
    pub ddd: String,
    pub siafi: String,
}

impl Address {
    /// An address known only by its postal code, as supplied by a caller before lookup.
    pub fn unresolved(postal_code: PostalCode) -> Self {
        Self {
            postal_code,
            street: String::new(),
            complement: String::new(),
            neighborhood: String::new(),
            city: String::new(),
            state: String::new(),
            ibge: String::new(),
            gia: String::new(),
            ddd: String::new(),
            siafi: String::new(),
        }
    }
}
