use std::cmp::Ordering;

use opencollective_client::BackerNode;

use crate::claims::ActiveMembers;
use crate::config::Config;

/// Thresholds a backer must meet to be listed as a sponsor.
#[derive(Debug, Clone)]
pub struct RankingRules {
    pub min_donation: f64,
    pub sponsor_tier: String,
}

impl RankingRules {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_donation: config.min_donation,
            sponsor_tier: config.sponsor_tier.clone(),
        }
    }

    /// Untiered or in the sponsor tier, and donated at least `min_donation`.
    pub fn is_sponsor(&self, node: &BackerNode) -> bool {
        let tier_ok = match &node.tier {
            None => true,
            Some(tier) => tier.name.as_deref() == Some(self.sponsor_tier.as_str()),
        };
        tier_ok
            && node
                .total_donations
                .value
                .is_some_and(|v| v >= self.min_donation)
    }
}

fn has_website(node: &BackerNode) -> bool {
    node.account
        .website
        .as_deref()
        .is_some_and(|w| !w.is_empty())
}

/// Filter `nodes` down to listed sponsors and order them for display.
///
/// Every node claims its slug in `active`, in input order, whether or not it
/// qualifies otherwise. A later node with an already-claimed slug is dropped.
pub fn rank(
    nodes: Vec<BackerNode>,
    active: &mut ActiveMembers,
    rules: &RankingRules,
) -> Vec<BackerNode> {
    let mut sponsors: Vec<BackerNode> = nodes
        .into_iter()
        .filter(|node| {
            let is_sponsor = rules.is_sponsor(node);
            let claimed = active.claim(&node.account.slug);
            is_sponsor && claimed && has_website(node)
        })
        .collect();

    // Stable: full ties keep input order.
    sponsors.sort_by(by_rank);
    sponsors
}

fn donated(node: &BackerNode) -> f64 {
    node.total_donations.value.unwrap_or(f64::NEG_INFINITY)
}

/// Largest total donation first, then earliest `createdAt`.
pub fn by_rank(a: &BackerNode, b: &BackerNode) -> Ordering {
    donated(b)
        .total_cmp(&donated(a))
        .then_with(|| a.created_at.cmp(&b.created_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencollective_client::{Account, Amount, Member, Tier};

    fn rules() -> RankingRules {
        RankingRules {
            min_donation: 100.0,
            sponsor_tier: "sponsors".to_string(),
        }
    }

    fn node(slug: &str, value: f64, created_at: &str) -> BackerNode {
        BackerNode {
            tier: None,
            account: Account {
                name: Some(slug.to_uppercase()),
                slug: slug.to_string(),
                website: Some(format!("https://{slug}.com")),
                image_url: Some(format!("https://img/{slug}.png")),
            },
            total_donations: Amount { value: Some(value) },
            created_at: created_at.to_string(),
        }
    }

    fn active(slugs: &[&str]) -> ActiveMembers {
        let members: Vec<Member> = slugs
            .iter()
            .map(|s| Member {
                is_active: true,
                profile: Some(format!("https://opencollective.com/{s}")),
            })
            .collect();
        ActiveMembers::from_members(&members, "https://opencollective.com/")
    }

    fn slugs(nodes: &[BackerNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.account.slug.as_str()).collect()
    }

    #[test]
    fn donation_threshold_is_inclusive() {
        let r = rules();
        assert!(r.is_sponsor(&node("a", 100.0, "2020")));
        assert!(!r.is_sponsor(&node("a", 99.99, "2020")));
    }

    #[test]
    fn null_donation_value_is_not_a_sponsor() {
        let mut n = node("a", 500.0, "2020");
        n.total_donations.value = None;
        assert!(!rules().is_sponsor(&n));
    }

    #[test]
    fn only_sponsor_tier_or_no_tier_qualifies() {
        let r = rules();

        let mut sponsor = node("a", 500.0, "2020");
        sponsor.tier = Some(Tier {
            name: Some("sponsors".to_string()),
        });
        assert!(r.is_sponsor(&sponsor));

        let mut backer = node("b", 500.0, "2020");
        backer.tier = Some(Tier {
            name: Some("backers".to_string()),
        });
        assert!(!r.is_sponsor(&backer));

        let mut unnamed = node("c", 500.0, "2020");
        unnamed.tier = Some(Tier { name: None });
        assert!(!r.is_sponsor(&unnamed));
    }

    #[test]
    fn sorts_by_donation_then_creation_date() {
        let nodes = vec![
            node("small", 150.0, "2019-01-01"),
            node("late", 300.0, "2021-05-01"),
            node("big", 1000.0, "2022-01-01"),
            node("early", 300.0, "2018-03-01"),
        ];
        let mut active = active(&["small", "late", "big", "early"]);

        let ranked = rank(nodes, &mut active, &rules());
        assert_eq!(slugs(&ranked), vec!["big", "early", "late", "small"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let nodes = vec![
            node("first", 200.0, "2020-01-01"),
            node("second", 200.0, "2020-01-01"),
        ];
        let mut active = active(&["first", "second"]);

        let ranked = rank(nodes, &mut active, &rules());
        assert_eq!(slugs(&ranked), vec!["first", "second"]);
    }

    #[test]
    fn inactive_and_websiteless_nodes_are_dropped() {
        let mut no_site = node("nosite", 500.0, "2020");
        no_site.account.website = None;
        let mut empty_site = node("emptysite", 500.0, "2020");
        empty_site.account.website = Some(String::new());

        let nodes = vec![no_site, empty_site, node("stranger", 500.0, "2020"), node("ok", 500.0, "2020")];
        let mut active = active(&["nosite", "emptysite", "ok"]);

        let ranked = rank(nodes, &mut active, &rules());
        assert_eq!(slugs(&ranked), vec!["ok"]);
    }

    #[test]
    fn duplicate_slug_first_node_wins() {
        let nodes = vec![
            node("acme", 150.0, "2020-01-01"),
            node("acme", 900.0, "2019-01-01"),
        ];
        let mut active = active(&["acme"]);

        let ranked = rank(nodes, &mut active, &rules());
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total_donations.value, Some(150.0));
    }

    #[test]
    fn disqualified_node_still_consumes_its_slug() {
        let nodes = vec![
            node("acme", 10.0, "2020-01-01"),
            node("acme", 900.0, "2019-01-01"),
        ];
        let mut active = active(&["acme"]);

        let ranked = rank(nodes, &mut active, &rules());
        assert!(ranked.is_empty());
        assert!(active.is_claimed("acme"));
    }

    #[test]
    fn nan_donation_does_not_panic() {
        let nodes = vec![node("a", f64::NAN, "2020"), node("b", 200.0, "2020")];
        let mut active = active(&["a", "b"]);

        let ranked = rank(nodes, &mut active, &rules());
        assert_eq!(slugs(&ranked), vec!["b"]);
    }
}
