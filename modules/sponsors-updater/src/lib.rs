pub mod claims;
pub mod config;
pub mod links;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use config::Config;
pub use links::{LinkOverrides, SponsorLink};
pub use pipeline::{collect_sponsors, run, RunSummary, SponsorList};
pub use traits::{OpenCollectiveFeed, SponsorFeed};
