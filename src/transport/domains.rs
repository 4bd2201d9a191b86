use serde::Deserialize;

use crate::domain::DomainData;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DomainJson {
    id: i64,
    name: String,
    team_id: i64,
    status: String,
    region: String,
    click_tracking: bool,
    open_tracking: bool,
    public_key: String,
    dkim_status: String,
    spf_details: String,
    created_at: String,
    updated_at: String,
}

/// Decode the domains listing: a top-level JSON array, order preserved.
pub fn decode_domains_json(json: &str) -> Result<Vec<DomainData>, serde_json::Error> {
    let parsed: Vec<DomainJson> = serde_json::from_str(json)?;
    Ok(parsed
        .into_iter()
        .map(|domain| DomainData {
            id: domain.id,
            name: domain.name,
            team_id: domain.team_id,
            status: domain.status,
            region: domain.region,
            click_tracking: domain.click_tracking,
            open_tracking: domain.open_tracking,
            public_key: domain.public_key,
            dkim_status: domain.dkim_status,
            spf_details: domain.spf_details,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        })
        .collect())
}
