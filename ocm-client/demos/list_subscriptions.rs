//! List subscriptions example
//!
//! This example shows how to:
//! - Create and configure a connection
//! - Search subscriptions and page through the results
//! - Read present and absent attributes
//!
//! Set `OCM_TOKEN` to an access token before running it.

use std::time::Duration;

use ocm_client::{Connection, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("OCM_TOKEN").unwrap_or_default();
    let connection = Connection::builder()
        .url("https://api.openshift.com")
        .timeout(Duration::from_secs(30))
        .default_header("Authorization", format!("Bearer {}", token))
        .build()?;

    let subscriptions = connection.accounts_mgmt().v1().subscriptions();
    let mut page = 1;
    loop {
        let response = subscriptions
            .list()
            .search("status = 'Active'")
            .order("created_at desc")
            .page(page)
            .size(50)
            .send()
            .await?;

        response.items().each(|subscription| {
            println!(
                "{} {} {}",
                subscription.id(),
                subscription.get_display_name().unwrap_or("-"),
                subscription.cluster_billing_model()
            );
            true
        });

        if response.size() < 50 {
            println!("total: {}", response.total());
            break;
        }
        page += 1;
    }

    Ok(())
}
