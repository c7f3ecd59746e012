//! Single-slot persistence for the latest self-assessment submission.
//!
//! A [`Submission`] is rendered into a fixed labeled-text layout and kept by a
//! [`ResponseStore`]. Only the most recent submission survives; every write
//! replaces the previous record whole.

pub mod store;
pub mod submission;

pub use store::{FileStore, InMemoryStore, ResponseStore, StoreError};
pub use submission::{Submission, QUESTIONS};
