//! Organization command implementations

use ocm_client::Connection;
use serde_json::{Value, json};

use crate::cli::{ListArgs, OrganizationCommands};
use crate::commands::{apply_list_args, page_value, to_value};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Handle organization subcommands
pub async fn handle_organization_command(
    config: &Config,
    subcommand: OrganizationCommands,
    json_format: bool,
) -> Result<(), CliError> {
    let connection = config.connection()?;
    let data = match subcommand {
        OrganizationCommands::Get { id } => get_organization(&connection, &id).await?,
        OrganizationCommands::List { list } => list_organizations(&connection, &list).await?,
        OrganizationCommands::QuotaCost {
            id,
            related_resources,
            cloud_accounts,
            search,
        } => {
            quota_cost(
                &connection,
                &id,
                related_resources,
                cloud_accounts,
                search.as_deref(),
            )
            .await?
        }
    };
    output::print_output(data, json_format);
    Ok(())
}

async fn get_organization(connection: &Connection, id: &str) -> Result<Value, CliError> {
    let response = connection
        .accounts_mgmt()
        .v1()
        .organizations()
        .organization(id)
        .get()
        .send()
        .await?;
    Ok(json!({ "organization": to_value(&response.into_body())? }))
}

async fn list_organizations(connection: &Connection, args: &ListArgs) -> Result<Value, CliError> {
    let request = apply_list_args(connection.accounts_mgmt().v1().organizations().list(), args);
    let response = request.send().await?;
    page_value(&response)
}

async fn quota_cost(
    connection: &Connection,
    id: &str,
    related_resources: bool,
    cloud_accounts: bool,
    search: Option<&str>,
) -> Result<Value, CliError> {
    let mut request = connection
        .accounts_mgmt()
        .v1()
        .organizations()
        .organization(id)
        .quota_cost()
        .list();
    if related_resources {
        request = request.parameter("fetchRelatedResources", true);
    }
    if cloud_accounts {
        request = request.parameter("fetchCloudAccounts", true);
    }
    if let Some(search) = search {
        request = request.search(search);
    }

    let response = request.send().await?;
    let remaining: Vec<Value> = response
        .items()
        .iter()
        .map(|quota| json!({ "quota_id": quota.quota_id(), "remaining": quota.remaining() }))
        .collect();

    let mut data = page_value(&response)?;
    data["remaining"] = Value::Array(remaining);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn connection_to(server: &MockServer) -> Connection {
        Config {
            url: server.uri(),
            ..Config::default()
        }
        .connection()
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_organization() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/organizations/org-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "Organization",
                "id": "org-1",
                "name": "Acme",
                "ebs_account_id": "123"
            })))
            .mount(&server)
            .await;

        let data = get_organization(&connection_to(&server), "org-1").await.unwrap();
        assert_eq!(data["organization"]["name"], "Acme");
        assert_eq!(data["organization"]["ebs_account_id"], "123");
    }

    #[tokio::test]
    async fn test_quota_cost_with_related_resources() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/organizations/org-1/quota_cost"))
            .and(query_param("fetchRelatedResources", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "QuotaCostList",
                "page": 1,
                "size": 1,
                "total": 1,
                "items": [{
                    "kind": "QuotaCost",
                    "quota_id": "cluster|byoc|osd",
                    "allowed": 10,
                    "consumed": 4,
                    "related_resources": [{"resource_name": "m5.xlarge", "cost": 1}]
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let data = quota_cost(&connection_to(&server), "org-1", true, false, None)
            .await
            .unwrap();
        assert_eq!(data["page"]["items"][0]["quota_id"], "cluster|byoc|osd");
        assert_eq!(data["remaining"][0]["remaining"], 6);
    }
}
