//! # Song Identifiers

/// Length of generated song ids
pub const SONG_ID_LENGTH: usize = 16;

/// Source of fresh song ids.
///
/// Implementations must not repeat an id within the lifetime of a process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random url-safe ids of [`SONG_ID_LENGTH`] characters
#[derive(Debug, Default, Clone, Copy)]
pub struct NanoIdGenerator;

impl IdGenerator for NanoIdGenerator {
    fn next_id(&self) -> String {
        nanoid::nanoid!(SONG_ID_LENGTH)
    }
}
