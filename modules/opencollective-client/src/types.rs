use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// --- REST members listing ---

/// One entry of `/{collective}/members/all.json`. Only the fields the
/// sponsor pipeline reads are modelled; the rest of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(rename = "isActive", default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    pub profile: Option<String>,
}

// --- GraphQL v2 backers query ---

/// A single backer membership from `account.members.nodes`.
#[derive(Debug, Clone, Deserialize)]
pub struct BackerNode {
    pub tier: Option<Tier>,
    pub account: Account,
    #[serde(rename = "totalDonations")]
    pub total_donations: Amount,
    #[serde(rename = "createdAt", default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tier {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub name: Option<String>,
    pub slug: String,
    pub website: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Monetary amount, in the collective's currency as returned by the API.
/// `value` is a nullable Float in the v2 schema.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Amount {
    pub value: Option<f64>,
}

/// Body of a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorMessage {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AccountData {
    pub account: Option<AccountMembers>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AccountMembers {
    pub members: MemberCollection,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MemberCollection {
    pub nodes: Vec<BackerNode>,
}
