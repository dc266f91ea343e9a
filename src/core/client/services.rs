use anyhow::Result;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_client::scoped_api;
use crate::core::client::kube_resources::Service;
use crate::domain::k8s::scope::NamespaceScope;

/// Fetch the services visible in the given namespace scope
pub async fn fetch_services(client: &Client, scope: &NamespaceScope) -> Result<Vec<Service>> {
    let services: Api<Service> = scoped_api(client, scope);
    let svc_list = services.list(&ListParams::default()).await?;

    debug!(
        "Discovered {} service(s) in scope '{}'",
        svc_list.items.len(),
        scope.as_str()
    );
    Ok(svc_list.items)
}
