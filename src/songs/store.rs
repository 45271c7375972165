//! # Song Store
//!
//! In-memory owner of every song record. All access goes through a single
//! lock over the collection, so find-then-modify sequences in update and
//! delete cannot interleave. Records are kept in insertion order.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{CatalogError, CatalogResult};
use super::ids::{IdGenerator, NanoIdGenerator};
use super::model::{Song, SongPayload};

/// Song catalog
pub struct SongStore {
    songs: RwLock<Vec<Song>>,
    ids: Box<dyn IdGenerator>,
}

impl Default for SongStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SongStore {
    /// Create an empty store with random ids
    pub fn new() -> Self {
        Self::with_id_generator(NanoIdGenerator)
    }

    /// Create an empty store drawing ids from `ids`
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            songs: RwLock::new(Vec::new()),
            ids: Box::new(ids),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Vec<Song>>> {
        self.songs
            .read()
            .map_err(|_| CatalogError::Internal("Lock poisoned".into()))
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Vec<Song>>> {
        self.songs
            .write()
            .map_err(|_| CatalogError::Internal("Lock poisoned".into()))
    }

    /// Add a song and return its new id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invariant` if the generated id ends up present
    /// more than once. The insert is undone before returning.
    pub fn create(&self, payload: SongPayload) -> CatalogResult<String> {
        let id = self.ids.next_id();
        let mut songs = self.write()?;

        songs.push(Song::new(id.clone(), payload));

        let copies = songs.iter().filter(|song| song.id == id).count();
        if copies != 1 {
            songs.pop();
            return Err(CatalogError::Invariant(id));
        }

        tracing::debug!(song_id = %id, total = songs.len(), "song created");
        Ok(id)
    }

    /// Snapshot of all songs in insertion order
    pub fn list_all(&self) -> CatalogResult<Vec<Song>> {
        Ok(self.read()?.clone())
    }

    /// Get a song by id
    pub fn get_by_id(&self, id: &str) -> CatalogResult<Song> {
        self.read()?
            .iter()
            .find(|song| song.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::SongNotFound(id.to_string()))
    }

    /// Replace every field of a song except its id
    pub fn update_by_id(&self, id: &str, payload: SongPayload) -> CatalogResult<()> {
        let mut songs = self.write()?;

        let song = songs
            .iter_mut()
            .find(|song| song.id == id)
            .ok_or_else(|| CatalogError::UpdateTargetNotFound(id.to_string()))?;
        song.replace_fields(payload);

        tracing::debug!(song_id = %id, "song updated");
        Ok(())
    }

    /// Remove a song
    pub fn delete_by_id(&self, id: &str) -> CatalogResult<()> {
        let mut songs = self.write()?;

        let index = songs
            .iter()
            .position(|song| song.id == id)
            .ok_or_else(|| CatalogError::DeleteTargetNotFound(id.to_string()))?;
        songs.remove(index);

        tracing::debug!(song_id = %id, total = songs.len(), "song deleted");
        Ok(())
    }

    /// Number of songs currently held
    pub fn len(&self) -> CatalogResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
