use anyhow::Result;
use k8s_openapi::NamespaceResourceScope;
use kube::{Api, Client, Resource};
use tracing::debug;

use crate::domain::k8s::scope::NamespaceScope;

/// Creates a Kubernetes client configured for in-cluster or local development.
///
/// `Client::try_default` reads the service-account environment when running
/// inside a cluster and falls back to the local kubeconfig otherwise.
pub async fn build_kube_client() -> Result<Client> {
    let client = Client::try_default().await?;

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}

/// Api handle bound to the requested namespace scope: cluster-wide for
/// `All`, a single namespace otherwise.
pub fn scoped_api<K>(client: &Client, scope: &NamespaceScope) -> Api<K>
where
    K: Resource<Scope = NamespaceResourceScope>,
    K::DynamicType: Default,
{
    match scope {
        NamespaceScope::All => Api::all(client.clone()),
        NamespaceScope::Named(namespace) => Api::namespaced(client.clone(), namespace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_client() {
        // Allow both success and error (depends on environment)
        let result = build_kube_client().await;
        assert!(result.is_ok() || result.is_err());
    }
}
