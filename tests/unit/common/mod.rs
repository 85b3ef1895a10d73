//! Shared test fixtures and helpers

use serde_json::Value;
use tiny_http::Method;

use todos::adapters::memory::MemoryTodoRepository;
use todos::core::TodoError;
use todos::core::models::{Todo, TodoId, TodoPatch};
use todos::core::ports::TodoRepository;
use todos::server::{HttpReply, dispatch};

/// Send a request through the router
pub fn send(repo: &dyn TodoRepository, method: Method, url: &str, body: &str) -> HttpReply {
    dispatch(repo, &method, url, &mut body.as_bytes())
}

/// Send a request and decode the JSON body
pub fn send_json(repo: &dyn TodoRepository, method: Method, url: &str, body: &str) -> (u16, Value) {
    let reply = send(repo, method, url, body);
    let json = reply.json_body().expect("response body is not JSON");
    (reply.status, json)
}

/// Repository seeded with todos for each text
pub fn seeded(texts: &[&str]) -> MemoryTodoRepository {
    let repo = MemoryTodoRepository::new();
    for text in texts {
        repo.create(text).unwrap();
    }
    repo
}

/// Repository whose every operation panics
pub struct PanickingRepo;

impl TodoRepository for PanickingRepo {
    fn list(&self) -> Result<Vec<Todo>, TodoError> {
        panic!("store exploded")
    }

    fn get(&self, _id: TodoId) -> Result<Todo, TodoError> {
        panic!("store exploded")
    }

    fn create(&self, _text: &str) -> Result<Todo, TodoError> {
        panic!("store exploded")
    }

    fn update(&self, _id: TodoId, _patch: &TodoPatch) -> Result<Todo, TodoError> {
        panic!("store exploded")
    }

    fn toggle_done(&self, _id: TodoId) -> Result<Todo, TodoError> {
        panic!("store exploded")
    }

    fn delete(&self, _id: TodoId) -> Result<(), TodoError> {
        panic!("store exploded")
    }

    fn clear(&self) -> Result<(), TodoError> {
        panic!("store exploded")
    }
}

/// Repository whose lock is permanently poisoned
pub struct PoisonedRepo;

impl TodoRepository for PoisonedRepo {
    fn list(&self) -> Result<Vec<Todo>, TodoError> {
        Err(TodoError::StorePoisoned)
    }

    fn get(&self, _id: TodoId) -> Result<Todo, TodoError> {
        Err(TodoError::StorePoisoned)
    }

    fn create(&self, _text: &str) -> Result<Todo, TodoError> {
        Err(TodoError::StorePoisoned)
    }

    fn update(&self, _id: TodoId, _patch: &TodoPatch) -> Result<Todo, TodoError> {
        Err(TodoError::StorePoisoned)
    }

    fn toggle_done(&self, _id: TodoId) -> Result<Todo, TodoError> {
        Err(TodoError::StorePoisoned)
    }

    fn delete(&self, _id: TodoId) -> Result<(), TodoError> {
        Err(TodoError::StorePoisoned)
    }

    fn clear(&self) -> Result<(), TodoError> {
        Err(TodoError::StorePoisoned)
    }
}
