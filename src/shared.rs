//! Shared, lock-guarded access to a directory.
//!
//! The interactive loop owns its [`Directory`] outright. Embedders that hand
//! one directory to several callers use [`SharedDirectory`], where every
//! logical operation, including a find-then-mutate sequence, runs under a
//! single lock acquisition.

use crate::models::Directory;
use std::sync::{Arc, Mutex, PoisonError};

/// A cloneable handle to one directory behind a mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<Mutex<Directory>>,
}

impl SharedDirectory {
    pub fn new(book: Directory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(book)),
        }
    }

    /// Run `f` with exclusive access to the directory.
    ///
    /// A panic inside an earlier `f` does not lock the directory out; the
    /// data is used as the panicking call left it.
    pub fn with<T>(&self, f: impl FnOnce(&mut Directory) -> T) -> T {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// A copy of the directory as it is right now.
    pub fn snapshot(&self) -> Directory {
        self.with(|book| book.clone())
    }
}

impl From<Directory> for SharedDirectory {
    fn from(book: Directory) -> Self {
        Self::new(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add_contact;
    use std::thread;

    #[test]
    fn test_concurrent_find_then_mutate() {
        let shared = SharedDirectory::default();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let phone = format!("{:010}", i);
                    shared.with(|book| add_contact(&["Team", phone.as_str()], book).unwrap());
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let book = shared.snapshot();
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Team").unwrap().phones().len(), 8);
    }

    #[test]
    fn test_with_returns_value() {
        let shared = SharedDirectory::new(Directory::new());
        assert!(shared.with(|book| book.is_empty()));
    }
}
