use anyhow::Result;
use kube::Client;

use crate::domain::graph::service::get_resource_graph;
use crate::domain::k8s::scope::NamespaceScope;
use crate::domain::topology::builder::build_topology_view;
use crate::domain::topology::model::TopologyView;

/// Fetches the resource graph for `scope` and lays it out for rendering.
pub async fn get_topology_view(client: &Client, scope: &NamespaceScope) -> Result<TopologyView> {
    let graph = get_resource_graph(client, scope).await?;
    Ok(build_topology_view(&graph, scope))
}
