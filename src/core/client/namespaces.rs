use anyhow::Result;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Namespace;

/// Fetch the names of every namespace in the cluster.
///
/// Namespaces are cluster-scoped, so there is no narrower variant. Items
/// without a metadata name are skipped rather than surfaced as errors.
pub async fn fetch_namespace_names(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces.list(&ListParams::default()).await?;

    debug!("Discovered {} namespace(s) cluster-wide", namespace_list.items.len());
    Ok(namespace_list
        .items
        .into_iter()
        .filter_map(|namespace| namespace.metadata.name)
        .collect())
}
