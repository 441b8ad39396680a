// Test mocks for the sponsor pipeline.
//
// MockFeed implements SponsorFeed from in-memory members and backers, with
// optional injected failures for either fetch. Node helpers build BackerNode
// values without hand-writing GraphQL JSON.

use anyhow::{bail, Result};
use async_trait::async_trait;

use opencollective_client::{Account, Amount, BackerNode, Member, Tier};

use crate::traits::SponsorFeed;

pub const PROFILE_PREFIX: &str = "https://opencollective.com/";

// ---------------------------------------------------------------------------
// MockFeed
// ---------------------------------------------------------------------------

/// Builder pattern: `.active()`, `.inactive()`, `.backer()`, `.fail_members()`.
#[derive(Default)]
pub struct MockFeed {
    members: Vec<Member>,
    backers: Vec<BackerNode>,
    members_error: Option<String>,
    backers_error: Option<String>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active member whose profile resolves to `slug`.
    pub fn active(mut self, slug: &str) -> Self {
        self.members.push(Member {
            is_active: true,
            profile: Some(format!("{PROFILE_PREFIX}{slug}")),
        });
        self
    }

    pub fn inactive(mut self, slug: &str) -> Self {
        self.members.push(Member {
            is_active: false,
            profile: Some(format!("{PROFILE_PREFIX}{slug}")),
        });
        self
    }

    pub fn backer(mut self, node: BackerNode) -> Self {
        self.backers.push(node);
        self
    }

    pub fn fail_members(mut self, message: &str) -> Self {
        self.members_error = Some(message.to_string());
        self
    }

    pub fn fail_backers(mut self, message: &str) -> Self {
        self.backers_error = Some(message.to_string());
        self
    }
}

#[async_trait]
impl SponsorFeed for MockFeed {
    async fn members(&self) -> Result<Vec<Member>> {
        if let Some(message) = &self.members_error {
            bail!("members fetch failed: {message}");
        }
        Ok(self.members.clone())
    }

    async fn backers(&self) -> Result<Vec<BackerNode>> {
        if let Some(message) = &self.backers_error {
            bail!("backers fetch failed: {message}");
        }
        Ok(self.backers.clone())
    }
}

// ---------------------------------------------------------------------------
// Node helpers
// ---------------------------------------------------------------------------

/// Untiered backer with a website, image and display name derived from `slug`.
pub fn backer(slug: &str, donated: f64, created_at: &str) -> BackerNode {
    BackerNode {
        tier: None,
        account: Account {
            name: Some(slug.to_string()),
            slug: slug.to_string(),
            website: Some(format!("https://{slug}.com")),
            image_url: Some(format!("https://img/{slug}.png")),
        },
        total_donations: Amount {
            value: Some(donated),
        },
        created_at: created_at.to_string(),
    }
}

pub fn with_tier(mut node: BackerNode, tier: &str) -> BackerNode {
    node.tier = Some(Tier {
        name: Some(tier.to_string()),
    });
    node
}

pub fn without_website(mut node: BackerNode) -> BackerNode {
    node.account.website = None;
    node
}
