use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

/// Compiled-in settings for one collective's sponsor list.
#[derive(Debug, Clone)]
pub struct Config {
    /// Open Collective slug whose backers are listed.
    pub collective: String,

    // Endpoints
    pub members_url: String,
    pub graphql_url: String,

    /// Upper bound on backer memberships requested in one query.
    pub backer_limit: u32,

    // Ranking
    pub min_donation: f64,
    pub sponsor_tier: String,

    /// Prefix stripped from a member's profile URL to get its slug.
    pub profile_prefix: String,

    /// Output file, resolved against the executable's directory.
    pub output_filename: String,
}

impl Config {
    /// Settings for the socket.io website sponsor list.
    pub fn socketio() -> Self {
        let collective = "socketio";
        Self {
            collective: collective.to_string(),
            members_url: opencollective_client::members_url(collective),
            graphql_url: opencollective_client::GRAPHQL_ENDPOINT.to_string(),
            backer_limit: 500,
            min_donation: 100.0,
            sponsor_tier: "sponsors".to_string(),
            profile_prefix: format!("{}/", opencollective_client::WEBSITE_URL),
            output_filename: "sponsors.json".to_string(),
        }
    }

    /// Absolute path of the output file: `output_filename` next to the running executable.
    pub fn output_path(&self) -> Result<PathBuf> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let dir = exe
            .parent()
            .context("Executable path has no parent directory")?;
        Ok(dir.join(&self.output_filename))
    }

    pub fn log_summary(&self) {
        info!(
            collective = self.collective.as_str(),
            members_url = self.members_url.as_str(),
            graphql_url = self.graphql_url.as_str(),
            backer_limit = self.backer_limit,
            min_donation = self.min_donation,
            sponsor_tier = self.sponsor_tier.as_str(),
            "Loaded config"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socketio_config_matches_production_values() {
        let config = Config::socketio();
        assert_eq!(
            config.members_url,
            "https://opencollective.com/socketio/members/all.json"
        );
        assert_eq!(config.graphql_url, "https://api.opencollective.com/graphql/v2");
        assert_eq!(config.backer_limit, 500);
        assert_eq!(config.min_donation, 100.0);
        assert_eq!(config.sponsor_tier, "sponsors");
        assert_eq!(config.profile_prefix, "https://opencollective.com/");
    }

    #[test]
    fn output_path_is_absolute_and_named() {
        let path = Config::socketio().output_path().unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.file_name().unwrap(), "sponsors.json");
    }
}
