use anyhow::Result;
use kube::Client;

use crate::core::client::namespaces::fetch_namespace_names;

/// Namespace names for the selector dropdown.
pub async fn list_namespaces(client: &Client) -> Result<Vec<String>> {
    fetch_namespace_names(client).await
}
