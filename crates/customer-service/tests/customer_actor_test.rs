use async_trait::async_trait;
use customer_service::clients::{AddressClient, CustomerClient, UpdatePolicy};
use customer_service::customer_actor::{self, AddressDirectory, CustomerError};
use customer_service::model::{Address, CustomerCreate, CustomerId, CustomerUpdate, PostalCode};
use customer_service::resolver::{PostalResolver, ResolutionError};
use resource_store::mock::MockClient;
use resource_store::FrameworkError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Answers every lookup with the same result and counts the calls.
struct StubResolver {
    answer: Result<Address, ResolutionError>,
    calls: AtomicUsize,
}

impl StubResolver {
    fn answering(answer: Result<Address, ResolutionError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostalResolver for StubResolver {
    async fn resolve(&self, _postal_code: &PostalCode) -> Result<Address, ResolutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

fn se_code() -> PostalCode {
    PostalCode::parse("01001000").unwrap()
}

fn paulista_code() -> PostalCode {
    PostalCode::parse("01310-100").unwrap()
}

fn se_square() -> Address {
    Address {
        street: "Praça da Sé".to_string(),
        neighborhood: "Sé".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        ..Address::unresolved(se_code())
    }
}

fn paulista() -> Address {
    Address {
        street: "Avenida Paulista".to_string(),
        neighborhood: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        ..Address::unresolved(paulista_code())
    }
}

fn maria(postal_code: PostalCode) -> CustomerCreate {
    CustomerCreate {
        name: "Maria".to_string(),
        postal_code,
    }
}

/// Real Customer actor whose address store is the given mock.
fn spawn_customers(
    addresses: &MockClient<Address>,
    resolver: Arc<StubResolver>,
    policy: UpdatePolicy,
) -> (CustomerClient, JoinHandle<()>) {
    let directory = AddressDirectory::new(AddressClient::new(addresses.client()), resolver);
    let (customer_actor, customer_store) = customer_actor::new(10);
    let handle = tokio::spawn(customer_actor.run(directory));
    (CustomerClient::new(customer_store, policy), handle)
}

/// Real Customer actor with a mocked address store.
/// Checks the on_create hook reuses a stored address without asking the resolver.
#[tokio::test]
async fn test_insert_reuses_stored_address() {
    let mut addresses = MockClient::<Address>::new();
    addresses.expect_get(se_code()).return_ok(Some(se_square()));
    let resolver = StubResolver::answering(Err(ResolutionError::Unavailable("unused".into())));

    let (customers, handle) = spawn_customers(&addresses, resolver.clone(), UpdatePolicy::Ignore);

    let id = customers.insert(maria(se_code())).await.unwrap();
    assert_eq!(id, CustomerId(1));

    let customer = customers.find_by_id(id).await.unwrap();
    assert_eq!(customer.name, "Maria");
    assert_eq!(customer.address, se_square());
    assert_eq!(resolver.calls(), 0);

    addresses.verify();
    drop(customers);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_insert_resolves_and_stores_unknown_address() {
    let mut addresses = MockClient::<Address>::new();
    addresses.expect_get(se_code()).return_ok(None);
    addresses.expect_insert_if_absent().return_ok(se_square());
    let resolver = StubResolver::answering(Ok(se_square()));

    let (customers, handle) = spawn_customers(&addresses, resolver.clone(), UpdatePolicy::Ignore);

    let id = customers.insert(maria(se_code())).await.unwrap();

    let customer = customers.find_by_id(id).await.unwrap();
    assert_eq!(customer.address, se_square());
    assert_eq!(resolver.calls(), 1);

    addresses.verify();
    drop(customers);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_resolution_stores_no_customer() {
    let mut addresses = MockClient::<Address>::new();
    addresses.expect_get(se_code()).return_ok(None);
    let resolver = StubResolver::answering(Err(ResolutionError::NotFound(se_code())));

    let (customers, handle) = spawn_customers(&addresses, resolver, UpdatePolicy::Ignore);

    let result = customers.insert(maria(se_code())).await;
    assert_eq!(
        result,
        Err(CustomerError::Resolution(ResolutionError::NotFound(se_code())))
    );
    assert!(customers.find_all().await.unwrap().is_empty());

    addresses.verify();
    drop(customers);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_address_store_failure_is_a_storage_error() {
    let mut addresses = MockClient::<Address>::new();
    addresses
        .expect_get(se_code())
        .return_err(FrameworkError::ActorClosed);
    let resolver = StubResolver::answering(Ok(se_square()));

    let (customers, handle) = spawn_customers(&addresses, resolver.clone(), UpdatePolicy::Ignore);

    let result = customers.insert(maria(se_code())).await;
    assert!(matches!(result, Err(CustomerError::Storage(_))));
    assert_eq!(resolver.calls(), 0);
    assert!(customers.find_all().await.unwrap().is_empty());

    drop(customers);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_update_replaces_name_and_address() {
    let mut addresses = MockClient::<Address>::new();
    addresses.expect_get(se_code()).return_ok(Some(se_square()));
    addresses.expect_get(paulista_code()).return_ok(Some(paulista()));
    let resolver = StubResolver::answering(Err(ResolutionError::Unavailable("unused".into())));

    let (customers, handle) = spawn_customers(&addresses, resolver, UpdatePolicy::Ignore);

    let id = customers.insert(maria(se_code())).await.unwrap();
    customers
        .update(
            id,
            CustomerUpdate {
                name: "Maria Souza".to_string(),
                postal_code: paulista_code(),
            },
        )
        .await
        .unwrap();

    let customer = customers.find_by_id(id).await.unwrap();
    assert_eq!(customer.id, id);
    assert_eq!(customer.name, "Maria Souza");
    assert_eq!(customer.address, paulista());

    addresses.verify();
    drop(customers);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_failed_update_leaves_customer_unchanged() {
    let mut addresses = MockClient::<Address>::new();
    addresses.expect_get(se_code()).return_ok(Some(se_square()));
    addresses.expect_get(paulista_code()).return_ok(None);
    let resolver = StubResolver::answering(Err(ResolutionError::Unavailable("timed out".into())));

    let (customers, handle) = spawn_customers(&addresses, resolver, UpdatePolicy::Ignore);

    let id = customers.insert(maria(se_code())).await.unwrap();
    let result = customers
        .update(
            id,
            CustomerUpdate {
                name: "Maria Souza".to_string(),
                postal_code: paulista_code(),
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(CustomerError::Resolution(ResolutionError::Unavailable(_)))
    ));

    let customer = customers.find_by_id(id).await.unwrap();
    assert_eq!(customer.name, "Maria");
    assert_eq!(customer.address, se_square());

    addresses.verify();
    drop(customers);
    handle.await.unwrap();
}

/// Neither policy touches the address store or the resolver for an unknown id.
#[tokio::test]
async fn test_update_of_unknown_customer_follows_policy() {
    let unknown = CustomerUpdate {
        name: "Nobody".to_string(),
        postal_code: se_code(),
    };

    for (policy, expected) in [
        (UpdatePolicy::Ignore, Ok(())),
        (
            UpdatePolicy::Reject,
            Err(CustomerError::NotFound("customer_99".to_string())),
        ),
    ] {
        let addresses = MockClient::<Address>::new();
        let resolver = StubResolver::answering(Ok(se_square()));
        let (customers, handle) = spawn_customers(&addresses, resolver.clone(), policy);

        let result = customers.update(CustomerId(99), unknown.clone()).await;
        assert_eq!(result, expected);
        assert!(customers.find_all().await.unwrap().is_empty());
        assert_eq!(resolver.calls(), 0);

        addresses.verify();
        drop(customers);
        handle.await.unwrap();
    }
}
