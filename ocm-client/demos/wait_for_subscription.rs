//! Poll example
//!
//! Waits until a subscription becomes active, giving up after five minutes.
//!
//! Usage: `wait_for_subscription <subscription-id>`

use std::time::Duration;

use ocm_client::accounts_mgmt::v1::subscription_status;
use ocm_client::{Connection, OcmError, PollContext, PollError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let id = std::env::args()
        .nth(1)
        .ok_or_else(|| OcmError::Configuration("missing subscription id".to_string()))?;
    let token = std::env::var("OCM_TOKEN").unwrap_or_default();

    let connection = Connection::builder()
        .default_header("Authorization", format!("Bearer {}", token))
        .build()?;

    let context = PollContext::with_timeout(Duration::from_secs(300));
    let result = connection
        .accounts_mgmt()
        .v1()
        .subscriptions()
        .subscription(&id)
        .poll()
        .interval(Duration::from_secs(10))
        .predicate(|response| {
            response
                .body()
                .is_some_and(|s| s.status() == subscription_status::ACTIVE)
        })
        .start(&context)
        .await;

    match result {
        Ok(_) => println!("subscription {} is active", id),
        Err(OcmError::Poll(PollError::DeadlineExceeded)) => {
            println!("subscription {} did not become active in time", id)
        }
        Err(err) => return Err(err),
    }

    Ok(())
}
