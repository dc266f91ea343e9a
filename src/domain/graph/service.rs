use anyhow::Result;
use futures::future::try_join3;
use kube::Client;
use tracing::debug;

use crate::api::dto::graph_dto::ResourceGraph;
use crate::core::client::{deployments, pods, services};
use crate::domain::graph::assembly::assemble_resource_graph;
use crate::domain::k8s::scope::NamespaceScope;

/// Fetches pods, services, and deployments for `scope` concurrently and
/// assembles the relationship graph.
pub async fn get_resource_graph(client: &Client, scope: &NamespaceScope) -> Result<ResourceGraph> {
    let (pods, services, deployments) = try_join3(
        pods::fetch_pods(client, scope),
        services::fetch_services(client, scope),
        deployments::fetch_deployments(client, scope),
    )
    .await?;

    debug!(
        "Assembling graph for scope '{}': {} pod(s), {} service(s), {} deployment(s)",
        scope.as_str(),
        pods.len(),
        services.len(),
        deployments.len()
    );

    Ok(assemble_resource_graph(scope, &pods, &services, &deployments))
}
