use std::collections::HashMap;

use opencollective_client::BackerNode;
use serde::Serialize;

/// One entry of `sponsors.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SponsorLink {
    pub url: String,
    pub image: Option<String>,
    pub alt: Option<String>,
}

impl SponsorLink {
    pub fn new(url: &str, image: &str, alt: &str) -> Self {
        Self {
            url: url.to_string(),
            image: Some(image.to_string()),
            alt: Some(alt.to_string()),
        }
    }

    /// Link built from the live account fields.
    pub fn from_node(node: &BackerNode) -> Self {
        Self {
            url: node.account.website.clone().unwrap_or_default(),
            image: node.account.image_url.clone(),
            alt: node.account.name.clone(),
        }
    }
}

/// Hand-curated links that replace the live account data for a slug.
#[derive(Debug, Clone, Default)]
pub struct LinkOverrides {
    entries: HashMap<String, SponsorLink>,
}

impl LinkOverrides {
    pub fn new(entries: impl IntoIterator<Item = (String, SponsorLink)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Overrides shipped with the socket.io website.
    pub fn socketio() -> Self {
        Self::new([
            (
                "airtract".to_string(),
                SponsorLink::new("https://www.airtract.com", "/images/airtract.jpg", "AirTract"),
            ),
            (
                "truevendor".to_string(),
                SponsorLink::new(
                    "https://www.ramotion.com/agency/ui-ux-design",
                    "https://images.opencollective.com/truevendor/ddf2f01/logo.png",
                    "ui ux design agency",
                ),
            ),
            (
                "pinkelephant".to_string(),
                SponsorLink::new("https://akasse-fagforening.dk/", "/images/a-kasse.png", "a-kasse"),
            ),
        ])
    }

    pub fn get(&self, slug: &str) -> Option<&SponsorLink> {
        self.entries.get(slug)
    }

    pub fn link_for(&self, node: &BackerNode) -> SponsorLink {
        match self.get(&node.account.slug) {
            Some(link) => link.clone(),
            None => SponsorLink::from_node(node),
        }
    }
}
