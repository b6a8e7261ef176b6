//! Remote image search collaborator
//!
//! Everything that talks to (or pretends to be) the remote search service:
//!
//! - `types`: JSON wire records
//! - `validate`: wire records → validated domain items
//! - `client`: blocking HTTP implementation
//! - `traits`: the `ImageSearch` seam the controller is tested through

pub mod client;
pub mod error;
pub mod traits;
pub mod types;
pub mod validate;

pub use client::{AccessKey, UnsplashClient};
pub use error::ApiError;
pub use traits::{DEFAULT_PER_PAGE, ImageSearch, SearchRequest};
pub use validate::parse_search_body;
