//! In-memory guess archive backend.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use crate::GuessStorage;
use crate::guess::GuessArchive;

/// Archive kept in memory. The game runs entirely on a single UI thread,
/// so interior mutability needs no locking; clones share the same backing
/// archive.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    archive: Rc<RefCell<GuessArchive>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current archive contents.
    #[must_use]
    pub fn snapshot(&self) -> GuessArchive {
        self.archive.borrow().clone()
    }
}

impl GuessStorage for MemoryStorage {
    type Error = Infallible;

    fn load_archive(&self) -> Result<GuessArchive, Self::Error> {
        Ok(self.archive.borrow().clone())
    }

    fn save_archive(&self, archive: &GuessArchive) -> Result<(), Self::Error> {
        *self.archive.borrow_mut() = archive.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guess::GuessList;

    #[test]
    fn clones_share_one_archive() {
        let storage = MemoryStorage::new();
        let other = storage.clone();

        let mut archive = GuessArchive::new();
        archive.set_day("2022-04-12-2", GuessList::new());
        storage.save_archive(&archive).unwrap();

        assert_eq!(other.load_archive().unwrap(), archive);
        assert_eq!(other.snapshot().len(), 1);
    }
}
