pub mod api;

pub use api::{ERROR_EVENT, FetchError, fetch_stats, load_stats};
