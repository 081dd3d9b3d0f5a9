pub mod client;
pub mod fixture;

pub use client::CmsClient;
pub use fixture::FixtureStore;

pub mod prelude {
    pub use sl_core::{ContentStore, Error, PageResponse, QueryOptions, Result};

    pub use super::client::CmsClient;
    pub use super::fixture::FixtureStore;
}
