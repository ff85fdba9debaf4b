pub mod batch;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod search;

#[cfg(test)]
mod test_server;

pub use batch::{fetch_stats, process_all, process_all_detailed, PageResult};
pub use extract::extract;
pub use fetch::{HttpFetcher, PageFetcher};
pub use search::{DuckDuckGoProvider, ResultProvider};
