//! Empty Key Singleton
//!
//! **Invariant**: every access to the empty key, from any thread, observes
//! the same instance.

use crate::common::*;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_repeated_calls_return_same_instance() {
    let first = DocumentKey::empty();
    for _ in 0..100 {
        assert!(std::ptr::eq(first, DocumentKey::empty()));
    }
}

#[test]
fn test_empty_key_has_no_segments() {
    assert!(DocumentKey::empty().path().is_empty());
    assert_eq!(DocumentKey::empty().to_string(), "");
    assert!(DocumentKey::is_document_key(DocumentKey::empty().path()));
}

#[test]
fn test_concurrent_first_access_returns_same_instance() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                DocumentKey::empty() as *const DocumentKey as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected = DocumentKey::empty() as *const DocumentKey as usize;
    assert!(addresses.iter().all(|&addr| addr == expected));
}

#[test]
fn test_unset_key_path_is_empty_key_path() {
    let mut k = key("rooms/eros");
    let moved = k.take();
    assert_eq!(moved, key("rooms/eros"));
    assert!(std::ptr::eq(k.path(), DocumentKey::empty().path()));
}
