// SponsorFeed: the two remote reads the pipeline depends on.
//
// The live implementation talks to Open Collective; tests use MockFeed from
// `testing` so the pipeline runs without network access.

use anyhow::{Context, Result};
use async_trait::async_trait;

use opencollective_client::{BackerNode, Member, OpenCollectiveClient};

use crate::config::Config;

#[async_trait]
pub trait SponsorFeed: Send + Sync {
    /// Full members listing, active and inactive.
    async fn members(&self) -> Result<Vec<Member>>;

    /// Backer memberships with tier, account, donation total and join date.
    async fn backers(&self) -> Result<Vec<BackerNode>>;
}

pub struct OpenCollectiveFeed {
    client: OpenCollectiveClient,
    members_url: String,
    collective: String,
    backer_limit: u32,
}

impl OpenCollectiveFeed {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: OpenCollectiveClient::new(&config.graphql_url),
            members_url: config.members_url.clone(),
            collective: config.collective.clone(),
            backer_limit: config.backer_limit,
        }
    }
}

#[async_trait]
impl SponsorFeed for OpenCollectiveFeed {
    async fn members(&self) -> Result<Vec<Member>> {
        self.client
            .members(&self.members_url)
            .await
            .with_context(|| format!("Failed to fetch members from {}", self.members_url))
    }

    async fn backers(&self) -> Result<Vec<BackerNode>> {
        self.client
            .backers(&self.collective, self.backer_limit)
            .await
            .with_context(|| format!("Failed to fetch backers of {}", self.collective))
    }
}
