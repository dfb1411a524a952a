//! # Mock Client & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running actor. Use it to test logic that sits *around*
//! a client (index-to-id mapping, error mapping) without spawning the actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (tokio spawn) |
//! | **State** | None, scripted replies | Real store |
//! | **Error Injection** | Easy (`return_err`) | Needs a failing entity hook |
//!
//! ```rust
//! use order_framework::mock::MockClient;
//! use order_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Row { id: u32 }
//! #[derive(Debug)] struct RowCreate;
//! #[derive(Debug)] struct RowUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("row error")] struct RowError;
//!
//! #[async_trait]
//! impl ActorEntity for Row {
//!     type Id = u32; type Create = RowCreate; type Update = RowUpdate;
//!     type Context = (); type Error = RowError;
//!     fn from_create_params(id: u32, _: RowCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: RowUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Row>::new();
//!     mock.expect_list().return_ok(vec![Row { id: 1 }, Row { id: 2 }]);
//!     mock.expect_delete(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap().len(), 2);
//!     assert!(matches!(client.delete(2).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the exact request payload, use [`create_mock_client`] and the
//! `expect_*` receiver helpers instead.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A queued reply, matched against the next incoming request.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Clear {
        response: Result<Vec<T>, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued. A request that does
/// not match the next expectation (kind or id) panics the background task, which closes
/// the channel and surfaces as `ActorDropped` / `ActorClosed` in the code under test.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();

                match (request, next) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "Get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "Update for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "Delete for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Clear { respond_to },
                        Some(Expectation::Clear { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_clear(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::Clear { response })
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Completes an expectation with its scripted reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// The test plays the actor: it pulls requests off `receiver`, asserts on them and
/// answers through the enclosed oneshot sender.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Slice {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct SliceCreate {
        label: String,
    }

    #[derive(Debug)]
    struct SliceUpdate;

    #[derive(Debug, thiserror::Error)]
    #[error("Slice error")]
    struct SliceError;

    #[async_trait]
    impl ActorEntity for Slice {
        type Id = u32;
        type Create = SliceCreate;
        type Update = SliceUpdate;
        type Context = ();
        type Error = SliceError;

        fn from_create_params(id: u32, params: SliceCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _: SliceUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn slice(id: u32, label: &str) -> Slice {
        Slice {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_receiver_helpers() {
        let (client, mut receiver) = create_mock_client::<Slice>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(SliceCreate {
                    label: "crust".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "crust");
        responder.send(Ok(7)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Slice>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(slice(1, "crust")));
        mock.expect_clear().return_ok(vec![slice(1, "crust")]);

        let client = mock.client();

        let id = client
            .create(SliceCreate {
                label: "crust".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().label, "crust");

        let drained = client.clear().await.unwrap();
        assert_eq!(drained, vec![slice(1, "crust")]);

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_leftovers() {
        let mut mock = MockClient::<Slice>::new();
        mock.expect_list().return_ok(Vec::new());
        mock.verify();
    }
}
