//! Tests for the in-memory todo store

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use todos::adapters::memory::MemoryTodoRepository;
use todos::core::TodoError;
use todos::core::models::TodoPatch;
use todos::core::ports::TodoRepository;

use super::common::seeded;

#[test]
fn test_list_empty() {
    let repo = MemoryTodoRepository::new();
    assert!(repo.list().unwrap().is_empty());
    assert!(repo.is_empty().unwrap());
}

#[test]
fn test_list_preserves_insertion_order() {
    let repo = seeded(&["one", "two", "three"]);
    let texts: Vec<_> = repo.list().unwrap().into_iter().map(|t| t.text).collect();
    assert_eq!(texts, ["one", "two", "three"]);
}

#[test]
fn test_create_sets_defaults() {
    let repo = MemoryTodoRepository::new();
    let todo = repo.create("  hello  ").unwrap();
    assert_eq!(todo.id, 1);
    assert_eq!(todo.text, "hello");
    assert!(!todo.done);
    assert!(todo.updated_at.is_none());
    assert_eq!(repo.get(1).unwrap(), todo);
}

#[test]
fn test_ids_strictly_increase_across_deletes() {
    let repo = MemoryTodoRepository::new();
    let mut last = 0;
    for round in 0..5 {
        let a = repo.create(&format!("a{round}")).unwrap();
        let b = repo.create(&format!("b{round}")).unwrap();
        assert!(a.id > last);
        assert!(b.id > a.id);
        repo.delete(a.id).unwrap();
        if round % 2 == 0 {
            repo.clear().unwrap();
        }
        last = b.id;
    }
}

#[test]
fn test_get_missing() {
    let repo = seeded(&["a"]);
    assert_eq!(repo.get(2).unwrap_err(), TodoError::NotFound(2));
}

#[test]
fn test_update_fields_independently() {
    let repo = seeded(&["a"]);

    let todo = repo
        .update(
            1,
            &TodoPatch {
                text: None,
                done: Some(true),
            },
        )
        .unwrap();
    assert_eq!(todo.text, "a");
    assert!(todo.done);
    assert!(todo.updated_at.is_some());

    let todo = repo
        .update(
            1,
            &TodoPatch {
                text: Some(" b ".to_string()),
                done: None,
            },
        )
        .unwrap();
    assert_eq!(todo.text, "b");
    assert!(todo.done);
}

#[test]
fn test_update_keeps_created_at() {
    let repo = seeded(&["a"]);
    let created = repo.get(1).unwrap().created_at;
    let updated = repo.update(1, &TodoPatch::default()).unwrap();
    assert_eq!(updated.created_at, created);
}

#[test]
fn test_toggle_twice_restores_done() {
    let repo = seeded(&["a"]);
    assert!(repo.toggle_done(1).unwrap().done);
    let todo = repo.toggle_done(1).unwrap();
    assert!(!todo.done);
    assert!(todo.updated_at.is_some());
}

#[test]
fn test_toggle_missing() {
    let repo = MemoryTodoRepository::new();
    assert_eq!(repo.toggle_done(1).unwrap_err(), TodoError::NotFound(1));
}

#[test]
fn test_delete_twice() {
    let repo = seeded(&["a", "b"]);
    repo.delete(1).unwrap();
    assert_eq!(repo.delete(1).unwrap_err(), TodoError::NotFound(1));
    assert_eq!(repo.len().unwrap(), 1);
}

#[test]
fn test_concurrent_creates_get_unique_ids() {
    let repo = Arc::new(MemoryTodoRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                (0..50)
                    .map(|i| repo.create(&format!("w{worker}-{i}")).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {id}");
        }
    }

    assert_eq!(ids.len(), 400);
    assert_eq!(repo.len().unwrap(), 400);
    assert_eq!(ids.iter().max().copied(), Some(400));
}

#[test]
fn test_concurrent_toggles_are_not_lost() {
    let repo = Arc::new(seeded(&["a"]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                for _ in 0..25 {
                    repo.toggle_done(1).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // 100 flips lands back on the starting value
    assert!(!repo.get(1).unwrap().done);
}
