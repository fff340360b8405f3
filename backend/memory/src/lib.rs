//! Bounded conversation memory.
//!
//! A fixed-capacity FIFO transcript of (speaker, message) turns. Appends
//! beyond capacity silently evict the oldest entry; rendering returns the
//! last N turns as speaker-prefixed lines in chronological order.

pub mod transcript;

pub use transcript::{Speaker, Transcript, DEFAULT_CAPACITY};
