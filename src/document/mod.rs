//! Daybook Documents
//!
//! The boundary with the corpus collaborator:
//!
//! - **types**: `Document` and its structured `NoteMetadata`
//! - **source**: `ContentSource`, the async reader for raw note text
//!
//! Enumerating the corpus and parsing front-matter happen upstream; this
//! module only defines the shape in which notes arrive.

mod source;
mod types;

pub use source::{ContentSource, MemorySource, SourceError};
pub use types::{tags_from_value, Document, NoteMetadata, TAGS_FIELD};
