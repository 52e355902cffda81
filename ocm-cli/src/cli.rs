//! Command-line argument definitions

use clap::{Parser, Subcommand};

/// OCM accounts management command-line interface
#[derive(Parser)]
#[command(name = "ocm-cli")]
#[command(about = "Command-line interface for the OCM accounts management API")]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the API server URL from the configuration file
    #[arg(long = "url", global = true)]
    pub url: Option<String>,

    /// Bearer token, overrides `auth_token` from the configuration file
    #[arg(long = "token", global = true, env = "OCM_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the account of the authenticated user
    #[command(name = "current-account")]
    CurrentAccount,

    /// Account commands
    Account {
        #[command(subcommand)]
        subcommand: AccountCommands,
    },

    /// Organization commands
    Organization {
        #[command(subcommand)]
        subcommand: OrganizationCommands,
    },

    /// Subscription commands
    Subscription {
        #[command(subcommand)]
        subcommand: SubscriptionCommands,
    },
}

/// Options shared by the list subcommands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<i32>,

    /// Maximum number of items per page
    #[arg(long)]
    pub size: Option<i32>,

    /// Search expression, e.g. "username like 'j%'"
    #[arg(long)]
    pub search: Option<String>,

    /// Order expression, e.g. "created_at desc"
    #[arg(long)]
    pub order: Option<String>,
}

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Get one account
    Get {
        /// Account identifier
        id: String,
    },

    /// List accounts
    List {
        #[command(flatten)]
        list: ListArgs,
    },
}

/// Organization subcommands
#[derive(Subcommand)]
pub enum OrganizationCommands {
    /// Get one organization
    Get {
        /// Organization identifier
        id: String,
    },

    /// List organizations
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Show the quota cost of an organization
    #[command(name = "quota-cost")]
    QuotaCost {
        /// Organization identifier
        id: String,

        /// Include the related resources of each quota
        #[arg(long = "related-resources")]
        related_resources: bool,

        /// Include the cloud accounts of each quota
        #[arg(long = "cloud-accounts")]
        cloud_accounts: bool,

        /// Search expression
        #[arg(long)]
        search: Option<String>,
    },
}

/// Subscription subcommands
#[derive(Subcommand)]
pub enum SubscriptionCommands {
    /// Get one subscription
    Get {
        /// Subscription identifier
        id: String,
    },

    /// List subscriptions
    List {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Delete a subscription
    Delete {
        /// Subscription identifier
        id: String,
    },

    /// Wait until a subscription reaches a status
    Wait {
        /// Subscription identifier
        id: String,

        /// Status to wait for
        #[arg(long, default_value = "Active")]
        status: String,

        /// Give up after this many seconds
        #[arg(long, default_value_t = 300)]
        timeout: u64,

        /// Seconds between attempts (defaults to the configured interval)
        #[arg(long)]
        interval: Option<u64>,
    },

    /// List the labels of a subscription
    Labels {
        /// Subscription identifier
        id: String,
    },
}
