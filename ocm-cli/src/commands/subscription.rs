//! Subscription command implementations

use std::time::Duration;

use ocm_client::{Connection, PollContext};
use serde_json::{Value, json};

use crate::cli::{ListArgs, SubscriptionCommands};
use crate::commands::{apply_list_args, page_value, to_value};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

/// Handle subscription subcommands
pub async fn handle_subscription_command(
    config: &Config,
    subcommand: SubscriptionCommands,
    json_format: bool,
) -> Result<(), CliError> {
    let connection = config.connection()?;
    let data = match subcommand {
        SubscriptionCommands::Get { id } => get_subscription(&connection, &id).await?,
        SubscriptionCommands::List { list } => list_subscriptions(&connection, &list).await?,
        SubscriptionCommands::Delete { id } => delete_subscription(&connection, &id).await?,
        SubscriptionCommands::Labels { id } => list_labels(&connection, &id).await?,
        SubscriptionCommands::Wait {
            id,
            status,
            timeout,
            interval,
        } => {
            let interval = interval
                .map(Duration::from_secs)
                .unwrap_or_else(|| config.poll_interval());
            if interval.is_zero() {
                return Err(CliError::Validation(
                    "--interval must be greater than zero".to_string(),
                ));
            }

            let (context, cancel) =
                PollContext::with_timeout(Duration::from_secs(timeout)).cancellable();
            let interrupt = tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            });

            let result = wait_for_status(&connection, &id, &status, interval, &context).await;
            interrupt.abort();
            result?
        }
    };
    output::print_output(data, json_format);
    Ok(())
}

async fn get_subscription(connection: &Connection, id: &str) -> Result<Value, CliError> {
    let response = connection
        .accounts_mgmt()
        .v1()
        .subscriptions()
        .subscription(id)
        .get()
        .send()
        .await?;
    Ok(json!({ "subscription": to_value(&response.into_body())? }))
}

async fn list_subscriptions(connection: &Connection, args: &ListArgs) -> Result<Value, CliError> {
    let request = apply_list_args(connection.accounts_mgmt().v1().subscriptions().list(), args);
    let response = request.send().await?;
    page_value(&response)
}

async fn delete_subscription(connection: &Connection, id: &str) -> Result<Value, CliError> {
    connection
        .accounts_mgmt()
        .v1()
        .subscriptions()
        .subscription(id)
        .delete()
        .send()
        .await?;
    Ok(json!({ "deleted": id }))
}

async fn list_labels(connection: &Connection, id: &str) -> Result<Value, CliError> {
    let response = connection
        .accounts_mgmt()
        .v1()
        .subscriptions()
        .subscription(id)
        .labels()
        .list()
        .send()
        .await?;
    page_value(&response)
}

/// Poll the subscription until its status is `status` or the context ends
async fn wait_for_status(
    connection: &Connection,
    id: &str,
    status: &str,
    interval: Duration,
    context: &PollContext,
) -> Result<Value, CliError> {
    let wanted = status.to_string();
    tracing::info!(subscription = %id, status = %wanted, ?interval, "waiting for subscription");

    let response = connection
        .accounts_mgmt()
        .v1()
        .subscriptions()
        .subscription(id)
        .poll()
        .interval(interval)
        .predicate(move |response| {
            response
                .body()
                .is_some_and(|subscription| subscription.status() == wanted)
        })
        .start(context)
        .await?;

    Ok(json!({ "subscription": to_value(&response.into_body())? }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn connection_to(server: &MockServer) -> Connection {
        Config {
            url: server.uri(),
            ..Config::default()
        }
        .connection()
        .unwrap()
    }

    fn subscription(status: &str) -> Value {
        json!({
            "kind": "Subscription",
            "id": "sub-1",
            "status": status,
            "cluster_id": "c-1"
        })
    }

    #[tokio::test]
    async fn test_wait_until_active() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/subscriptions/sub-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(subscription("Reserved")))
            .up_to_n_times(2)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/subscriptions/sub-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(subscription("Active")))
            .mount(&server)
            .await;

        let context = PollContext::with_timeout(Duration::from_secs(5));
        let data = wait_for_status(
            &connection_to(&server),
            "sub-1",
            "Active",
            Duration::from_millis(50),
            &context,
        )
        .await
        .unwrap();

        assert_eq!(data["subscription"]["status"], "Active");
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
    }

    #[tokio::test]
    async fn test_wait_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/subscriptions/sub-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(subscription("Reserved")))
            .mount(&server)
            .await;

        let context = PollContext::with_timeout(Duration::from_millis(200));
        let err = wait_for_status(
            &connection_to(&server),
            "sub-1",
            "Active",
            Duration::from_millis(50),
            &context,
        )
        .await
        .unwrap_err();

        assert_matches!(err, CliError::WaitTimeout(_));
    }

    #[tokio::test]
    async fn test_delete_and_labels() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/accounts_mgmt/v1/subscriptions/sub-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/accounts_mgmt/v1/subscriptions/sub-1/labels"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "LabelList",
                "page": 1,
                "size": 1,
                "total": 1,
                "items": [{"kind": "Label", "key": "team", "value": "blue"}]
            })))
            .mount(&server)
            .await;

        let connection = connection_to(&server);
        let deleted = delete_subscription(&connection, "sub-1").await.unwrap();
        assert_eq!(deleted["deleted"], "sub-1");

        let labels = list_labels(&connection, "sub-1").await.unwrap();
        assert_eq!(labels["page"]["items"][0]["key"], "team");
    }
}
