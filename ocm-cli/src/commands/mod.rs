//! Command implementations for the OCM CLI

pub mod account;
pub mod organization;
pub mod subscription;

use ocm_base::ObjectType;
use ocm_client::{ListRequest, ListResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::cli::ListArgs;
use crate::error::CliError;

/// Apply the shared list options to a request
pub(crate) fn apply_list_args<T>(mut request: ListRequest<T>, args: &ListArgs) -> ListRequest<T>
where
    T: DeserializeOwned + ObjectType,
{
    if let Some(page) = args.page {
        request = request.page(page);
    }
    if let Some(size) = args.size {
        request = request.size(size);
    }
    if let Some(search) = &args.search {
        request = request.search(search.clone());
    }
    if let Some(order) = &args.order {
        request = request.order(order.clone());
    }
    request
}

/// Convert a typed object into the JSON value printed by the commands
pub(crate) fn to_value<T: Serialize>(object: &T) -> Result<Value, CliError> {
    serde_json::to_value(object).map_err(|e| CliError::Generic {
        message: format!("failed to encode output: {}", e),
    })
}

/// Output value of one page of a list
pub(crate) fn page_value<T: Serialize + ObjectType>(response: &ListResponse<T>) -> Result<Value, CliError> {
    Ok(json!({
        "page": {
            "page": response.page(),
            "size": response.size(),
            "total": response.total(),
            "items": to_value(response.items())?,
        }
    }))
}
