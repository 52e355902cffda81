//! Account command implementations

use ocm_client::Connection;
use serde_json::{Value, json};

use crate::cli::{AccountCommands, ListArgs};
use crate::commands::{apply_list_args, page_value, to_value};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Handle account subcommands
pub async fn handle_account_command(
    config: &Config,
    subcommand: AccountCommands,
    json_format: bool,
) -> Result<(), CliError> {
    let connection = config.connection()?;
    let data = match subcommand {
        AccountCommands::Get { id } => get_account(&connection, &id).await?,
        AccountCommands::List { list } => list_accounts(&connection, &list).await?,
    };
    output::print_output(data, json_format);
    Ok(())
}

/// Show the account of the authenticated user
pub async fn handle_current_account_command(
    config: &Config,
    json_format: bool,
) -> Result<(), CliError> {
    let connection = config.connection()?;
    let data = current_account(&connection).await?;
    output::print_output(data, json_format);
    Ok(())
}

async fn current_account(connection: &Connection) -> Result<Value, CliError> {
    let response = connection
        .accounts_mgmt()
        .v1()
        .current_account()
        .get()
        .send()
        .await?;
    Ok(json!({ "current_account": to_value(&response.into_body())? }))
}

async fn get_account(connection: &Connection, id: &str) -> Result<Value, CliError> {
    let response = connection
        .accounts_mgmt()
        .v1()
        .accounts()
        .account(id)
        .get()
        .send()
        .await?;
    Ok(json!({ "account": to_value(&response.into_body())? }))
}

async fn list_accounts(connection: &Connection, args: &ListArgs) -> Result<Value, CliError> {
    let request = apply_list_args(connection.accounts_mgmt().v1().accounts().list(), args);
    let response = request.send().await?;
    page_value(&response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
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
    async fn test_current_account() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/current_account"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "Account",
                "id": "acc-1",
                "username": "jdoe",
                "organization": {"kind": "OrganizationLink", "id": "org-1"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let data = current_account(&connection_to(&server)).await.unwrap();
        assert_eq!(data["current_account"]["username"], "jdoe");
        assert_eq!(data["current_account"]["organization"]["kind"], "OrganizationLink");
    }

    #[tokio::test]
    async fn test_list_accounts_passes_options() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/accounts"))
            .and(query_param("page", "2"))
            .and(query_param("size", "1"))
            .and(query_param("search", "username = 'jdoe'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "AccountList",
                "page": 2,
                "size": 1,
                "total": 3,
                "items": [{"kind": "Account", "id": "acc-2", "username": "jdoe"}]
            })))
            .mount(&server)
            .await;

        let args = ListArgs {
            page: Some(2),
            size: Some(1),
            search: Some("username = 'jdoe'".to_string()),
            order: None,
        };
        let data = list_accounts(&connection_to(&server), &args).await.unwrap();
        assert_eq!(data["page"]["total"], 3);
        assert_eq!(data["page"]["items"][0]["id"], "acc-2");
    }

    #[tokio::test]
    async fn test_missing_account_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/accounts/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "kind": "Error",
                "id": "404",
                "code": "ACCT-MGMT-7",
                "reason": "Account 'nope' not found"
            })))
            .mount(&server)
            .await;

        let err = get_account(&connection_to(&server), "nope").await.unwrap_err();
        assert_matches!(err, CliError::Api(api) if api.code == "ACCT-MGMT-7");
    }
}
