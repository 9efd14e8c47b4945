// src/application/mod.rs
pub mod form;
pub mod query;
pub mod router;
pub mod session;
pub mod store;

pub use form::NoteDraft;
pub use query::visible_notes;
pub use router::{Router, Screen};
pub use session::Session;
pub use store::NoteStore;
