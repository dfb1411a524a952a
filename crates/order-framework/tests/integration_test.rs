use order_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    label: String,
    copies: u32,
}

#[derive(Debug)]
struct TicketCreate {
    label: String,
}

#[derive(Debug)]
struct TicketUpdate {
    copies: u32,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("empty label")]
    EmptyLabel,
    #[error("copies must be positive")]
    NoCopies,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        if params.label.is_empty() {
            return Err(TicketError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            copies: 1,
        })
    }

    async fn on_update(&mut self, update: TicketUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if update.copies == 0 {
            return Err(TicketError::NoCopies);
        }
        self.copies = update.copies;
        Ok(())
    }
}

fn ticket(label: &str) -> TicketCreate {
    TicketCreate {
        label: label.to_string(),
    }
}

fn labels(tickets: &[Ticket]) -> Vec<&str> {
    tickets.iter().map(|t| t.label.as_str()).collect()
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(ticket("first")).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Update
    let updated: Ticket = client.update(id, TicketUpdate { copies: 3 }).await.unwrap();
    assert_eq!(updated.copies, 3);

    // 3. Rejected update keeps the previous state
    let err = client.update(id, TicketUpdate { copies: 0 }).await.unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));
    assert_eq!(client.get(id).await.unwrap().unwrap().copies, 3);

    // 4. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_keeps_creation_order_after_delete() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let mut ids = Vec::new();
    for label in ["a", "b", "c", "d"] {
        ids.push(client.create(ticket(label)).await.unwrap());
    }

    client.delete(ids[1]).await.unwrap();

    let remaining = client.list().await.unwrap();
    assert_eq!(labels(&remaining), ["a", "c", "d"]);
}

#[tokio::test]
async fn test_clear_drains_in_order_and_ids_keep_growing() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    client.create(ticket("x")).await.unwrap();
    client.create(ticket("y")).await.unwrap();

    let drained = client.clear().await.unwrap();
    assert_eq!(labels(&drained), ["x", "y"]);
    assert!(client.list().await.unwrap().is_empty());

    // Ids are never reused
    let next = client.create(ticket("z")).await.unwrap();
    assert_eq!(next, 3);
}

#[tokio::test]
async fn test_failed_create_is_not_stored() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(ticket("")).await.unwrap_err();
    assert!(err.to_string().contains("empty label"));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    drop(actor);

    assert!(matches!(
        client.list().await,
        Err(FrameworkError::ActorClosed)
    ));
}
