// Active-member claim ledger.
//
// Built once from the REST members listing. Every backer node then tries to
// claim its account slug; a slug can be claimed exactly once, so each active
// member backs at most one entry in the output.

use std::collections::HashMap;

use opencollective_client::Member;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ActiveMembers {
    /// slug -> already claimed by a backer node
    claims: HashMap<String, bool>,
    total_members: usize,
}

impl ActiveMembers {
    /// Collect slugs of active members whose profile sits under `profile_prefix`.
    pub fn from_members(members: &[Member], profile_prefix: &str) -> Self {
        let mut claims = HashMap::new();

        for member in members.iter().filter(|m| m.is_active) {
            let Some(profile) = member.profile.as_deref() else {
                continue;
            };
            match profile.strip_prefix(profile_prefix) {
                Some(slug) if !slug.is_empty() => {
                    claims.insert(slug.to_string(), false);
                }
                _ => debug!(profile, "Skipping member profile outside the collective site"),
            }
        }

        Self {
            claims,
            total_members: members.len(),
        }
    }

    /// Number of distinct active slugs.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Size of the members listing the ledger was built from.
    pub fn total_members(&self) -> usize {
        self.total_members
    }

    /// Claim `slug`. Returns true only for the first claim of an active slug.
    pub fn claim(&mut self, slug: &str) -> bool {
        match self.claims.get_mut(slug) {
            Some(claimed) if !*claimed => {
                *claimed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_claimed(&self, slug: &str) -> bool {
        self.claims.get(slug).copied().unwrap_or(false)
    }
}
