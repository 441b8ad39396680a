use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::claims::ActiveMembers;
use crate::config::Config;
use crate::links::{LinkOverrides, SponsorLink};
use crate::output;
use crate::ranking::{rank, RankingRules};
use crate::traits::SponsorFeed;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub members: usize,
    pub active_members: usize,
    pub backers: usize,
    pub sponsors: usize,
    pub overridden: usize,
}

/// Ranked sponsor links plus the counts behind them.
#[derive(Debug, Clone)]
pub struct SponsorList {
    pub links: Vec<SponsorLink>,
    pub summary: RunSummary,
}

/// Fetch both feeds concurrently, then filter, rank and map to links.
/// Either fetch failing fails the whole collection.
pub async fn collect_sponsors(
    feed: &dyn SponsorFeed,
    config: &Config,
    overrides: &LinkOverrides,
) -> Result<SponsorList> {
    info!(collective = config.collective.as_str(), "Fetching sponsors");

    let (members, backers) = tokio::try_join!(feed.members(), feed.backers())?;

    let mut active = ActiveMembers::from_members(&members, &config.profile_prefix);
    info!(
        active = active.len(),
        total = active.total_members(),
        "{} active members out of {}",
        active.len(),
        active.total_members()
    );

    let backer_count = backers.len();
    let ranked = rank(backers, &mut active, &RankingRules::from_config(config));

    let overridden = ranked
        .iter()
        .filter(|node| overrides.get(&node.account.slug).is_some())
        .count();
    let links: Vec<SponsorLink> = ranked.iter().map(|node| overrides.link_for(node)).collect();

    let summary = RunSummary {
        members: members.len(),
        active_members: active.len(),
        backers: backer_count,
        sponsors: links.len(),
        overridden,
    };

    Ok(SponsorList { links, summary })
}

/// Full run: collect sponsors and overwrite `path` with them.
pub async fn run(
    feed: &dyn SponsorFeed,
    config: &Config,
    overrides: &LinkOverrides,
    path: &Path,
) -> Result<RunSummary> {
    let SponsorList { links, summary } = collect_sponsors(feed, config, overrides).await?;

    output::write_sponsors(path, &links)?;

    info!(
        backers = summary.backers,
        sponsors = summary.sponsors,
        overridden = summary.overridden,
        "Sponsor list updated"
    );

    Ok(summary)
}
