pub mod error;
pub mod links;
pub mod models;
pub mod store;
pub mod text;

pub use error::Error;
pub use models::{ContentSection, PageCursor, Post, PostSummary, PreviewSession, RichTextBlock};
pub use store::{ContentStore, PageResponse, QueryOptions, ResolvedPreview};

pub type Result<T> = std::result::Result<T, Error>;
