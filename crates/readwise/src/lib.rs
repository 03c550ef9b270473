//! Readwise highlight retrieval
//!
//! Paginated highlight client and random favorite selection

mod client;
mod selection;
mod types;

pub use client::{ReadwiseClient, PAGE_SIZE, READWISE_BASE_URL};
pub use selection::{favorites, pick_random, FAVORITE_TAG};
pub use types::{Highlight, Page, Tag};
