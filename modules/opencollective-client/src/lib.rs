pub mod error;
pub mod types;

pub use error::{OpenCollectiveError, Result};
pub use types::{Account, Amount, BackerNode, Member, Tier};

use types::{AccountData, GraphqlRequest, GraphqlResponse};

pub const WEBSITE_URL: &str = "https://opencollective.com";

pub const GRAPHQL_ENDPOINT: &str = "https://api.opencollective.com/graphql/v2";

/// REST listing of every member of a collective, active or not.
pub fn members_url(collective: &str) -> String {
    format!("{}/{}/members/all.json", WEBSITE_URL, collective)
}

/// GraphQL query for up to `limit` backer memberships of `collective`.
pub fn backers_query(collective: &str, limit: u32) -> String {
    format!(
        r#"query account {{
  account(slug: "{collective}") {{
    members(role: BACKER, limit: {limit}) {{
      nodes {{
        tier {{
          name
        }}
        account {{
          name
          slug
          website
          imageUrl
        }}
        totalDonations {{
          value
        }}
        createdAt
      }}
    }}
  }}
}}"#
    )
}

pub struct OpenCollectiveClient {
    client: reqwest::Client,
    graphql_url: String,
}

impl OpenCollectiveClient {
    pub fn new(graphql_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            graphql_url: graphql_url.to_string(),
        }
    }

    /// Fetch the REST members listing at `url`.
    pub async fn members(&self, url: &str) -> Result<Vec<Member>> {
        tracing::debug!(url, "Fetching members listing");

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenCollectiveError::Api {
                endpoint: url.to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let members = parse_members(&body)?;
        tracing::info!(count = members.len(), "Fetched members listing");

        Ok(members)
    }

    /// Fetch up to `limit` backer memberships of `collective` via GraphQL.
    pub async fn backers(&self, collective: &str, limit: u32) -> Result<Vec<BackerNode>> {
        tracing::info!(collective, limit, "Fetching backers from the GraphQL API");

        let query = backers_query(collective, limit);
        let resp = self
            .client
            .post(&self.graphql_url)
            .json(&GraphqlRequest { query: &query })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenCollectiveError::Api {
                endpoint: self.graphql_url.clone(),
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let nodes = parse_backers(&body)?;
        tracing::info!(count = nodes.len(), "Fetched backers");

        Ok(nodes)
    }
}

/// Decode a members listing body.
pub fn parse_members(body: &str) -> Result<Vec<Member>> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a backers query response, unwrapping `data.account.members.nodes`.
/// A non-empty `errors` array or a missing account is an error.
pub fn parse_backers(body: &str) -> Result<Vec<BackerNode>> {
    let resp: GraphqlResponse<AccountData> = serde_json::from_str(body)?;

    if !resp.errors.is_empty() {
        let messages: Vec<&str> = resp.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(OpenCollectiveError::Graphql(messages.join("; ")));
    }

    let account = resp
        .data
        .ok_or_else(|| OpenCollectiveError::Graphql("response has no data".to_string()))?
        .account
        .ok_or_else(|| OpenCollectiveError::Graphql("account not found".to_string()))?;

    Ok(account.members.nodes)
}
