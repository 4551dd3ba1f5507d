//! Behavioural tests for the user service response contract.
//!
//! Each scenario runs against its own in-memory store and records the last
//! `(payload, status)` pair for the `Then` steps to inspect.

use std::sync::Arc;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use user_service::domain::ports::UserRepository;
use user_service::{Database, UserId, UserResponse, UserService};

/// Scenario state shared between steps.
#[derive(Default, ScenarioState)]
struct World {
    db: Slot<Arc<Database>>,
    service: Slot<UserService<Database>>,
    stored_id: Slot<UserId>,
    last_response: Slot<(Value, u16)>,
}

impl World {
    fn db(&self) -> Arc<Database> {
        self.db.get().expect("store should be open")
    }

    fn service(&self) -> UserService<Database> {
        self.service.get().expect("service should be built")
    }

    fn stored_id(&self) -> UserId {
        self.stored_id.get().expect("a user should be stored")
    }

    fn last_response(&self) -> (Value, u16) {
        self.last_response
            .get()
            .expect("an operation should have run")
    }

    fn record(&self, response: UserResponse) {
        let (payload, status) = response.into_parts();
        self.last_response.set((payload, status.as_u16()));
    }
}

#[fixture]
fn world() -> World {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    // Another test in this binary may already have installed a subscriber.
    drop(subscriber);
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an empty user store")]
fn an_empty_user_store(world: &World) {
    let db = Arc::new(Database::in_memory().expect("open in-memory store"));
    world.service.set(UserService::new(Arc::clone(&db)));
    world.db.set(db);
}

#[given("a stored user named {name} aged {age}")]
fn a_stored_user(world: &World, name: String, age: i64) {
    let user_id = world.db().insert_user(&name, age).expect("seed user");
    world.stored_id.set(user_id);
}

// ============================================================================
// When steps
// ============================================================================

#[when("a user named {name} aged {age} is created")]
fn a_user_is_created(world: &World, name: String, age: i64) {
    let response = world.service().create_user(&name, age).expect("create");
    world.record(response);
}

#[when("the stored user is fetched")]
fn the_stored_user_is_fetched(world: &World) {
    let response = world.service().get_user(world.stored_id()).expect("get");
    world.record(response);
}

#[when("the stored user is renamed to {name} aged {age}")]
fn the_stored_user_is_renamed(world: &World, name: String, age: i64) {
    let response = world
        .service()
        .update_user(world.stored_id(), &name, age)
        .expect("update");
    world.record(response);
}

#[when("the stored user is deleted")]
fn the_stored_user_is_deleted(world: &World) {
    let response = world.service().delete_user(world.stored_id()).expect("delete");
    world.record(response);
}

#[when("looking up user id {id}")]
fn looking_up_user(world: &World, id: i64) {
    let response = world.service().get_user(UserId::new(id)).expect("get");
    world.record(response);
}

#[when("renaming user id {id} to {name} aged {age}")]
fn renaming_user(world: &World, id: i64, name: String, age: i64) {
    let response = world
        .service()
        .update_user(UserId::new(id), &name, age)
        .expect("update");
    world.record(response);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the status is {status}")]
fn the_status_is(world: &World, status: u16) {
    let (_, actual) = world.last_response();
    assert_eq!(actual, status);
}

#[then("the payload names {name} aged {age} with an assigned id")]
fn the_payload_names_new_user(world: &World, name: String, age: i64) {
    let (payload, _) = world.last_response();
    let user_id = payload
        .get("user_id")
        .and_then(Value::as_i64)
        .expect("payload should carry an integer user_id");
    assert_eq!(payload, json!({ "user_id": user_id, "name": name, "age": age }));
}

#[then("the payload names {name} aged {age} with the stored id")]
fn the_payload_names_stored_user(world: &World, name: String, age: i64) {
    let (payload, _) = world.last_response();
    let expected = json!({ "user_id": world.stored_id().get(), "name": name, "age": age });
    assert_eq!(payload, expected);
}

#[then("the payload confirms the update")]
fn the_payload_confirms_the_update(world: &World) {
    let (payload, _) = world.last_response();
    assert_eq!(payload, json!({ "message": "User updated successfully" }));
}

#[then("the payload confirms the deletion")]
fn the_payload_confirms_the_deletion(world: &World) {
    let (payload, _) = world.last_response();
    assert_eq!(payload, json!({ "message": "User deleted successfully" }));
}

#[then("the payload reports the user as not found")]
fn the_payload_reports_not_found(world: &World) {
    let (payload, _) = world.last_response();
    assert_eq!(payload, json!({ "error": "User not found" }));
}

#[then("fetching the stored user shows {name} aged {age}")]
fn fetching_shows(world: &World, name: String, age: i64) {
    let user = world
        .db()
        .get_user(world.stored_id())
        .expect("lookup")
        .expect("row exists");
    assert_eq!((user.name(), user.age()), (name.as_str(), age));
}

// ============================================================================
// Scenarios
// ============================================================================

#[scenario(
    path = "tests/features/user_service.feature",
    name = "Creating a user returns the stored row"
)]
fn creating_a_user_returns_the_stored_row(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_service.feature",
    name = "Fetching an existing user"
)]
fn fetching_an_existing_user(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_service.feature",
    name = "Updating an existing user"
)]
fn updating_an_existing_user(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_service.feature",
    name = "Deleting a user twice"
)]
fn deleting_a_user_twice(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_service.feature",
    name = "Operations on a missing user report not found"
)]
fn operations_on_a_missing_user_report_not_found(world: World) {
    let _ = world;
}
