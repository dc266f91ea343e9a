use std::collections::HashMap;

use crate::api::dto::graph_dto::{ResourceEdge, ResourceGraph};
use crate::domain::k8s::scope::NamespaceScope;
use crate::domain::topology::layout::{GridLayout, PositionAssigner};
use crate::domain::topology::model::{NodeKind, PositionedEdge, PositionedNode, TopologyView};

/// Builds the positioned topology view with the default grid layout.
pub fn build_topology_view(graph: &ResourceGraph, scope: &NamespaceScope) -> TopologyView {
    build_topology_view_with(graph, scope, &GridLayout)
}

/// Builds the positioned topology view with a caller-chosen layout.
///
/// Topology extraction is fixed: pods, services, and deployments survive the
/// filter, namespaces become clusters in first-seen order, labels carry
/// `<type>: <name>`. Only coordinate assignment goes through `layout`.
/// Edges pass through 1:1 regardless of whether their endpoints survived.
pub fn build_topology_view_with(
    graph: &ResourceGraph,
    scope: &NamespaceScope,
    layout: &dyn PositionAssigner,
) -> TopologyView {
    // Group indices live only for this build, so repeated builds of the
    // same feed are independent.
    let mut group_indices: HashMap<String, usize> = HashMap::new();

    let nodes = graph
        .nodes
        .iter()
        .filter_map(|node| NodeKind::from_type(&node.kind).map(|kind| (node, kind)))
        .enumerate()
        .map(|(idx, (node, kind))| {
            let (namespace, name) = split_namespace(&node.id, scope);

            let next_index = group_indices.len();
            let group = *group_indices
                .entry(namespace.to_string())
                .or_insert(next_index);

            PositionedNode {
                id: node.id.clone(),
                label: format!("{}: {}", kind.as_str(), name),
                position: layout.position(idx, group),
                style_class: kind,
            }
        })
        .collect();

    let edges = graph.edges.iter().map(positioned_edge).collect();

    TopologyView { nodes, edges }
}

/// Splits a node id into `(namespace, name)` under the active scope.
///
/// Composite `<namespace>/<name>` ids only occur in all-namespaces feeds; a
/// single-namespace feed carries bare names, so the id is taken whole there
/// even if it happens to contain a `/`.
fn split_namespace<'a>(id: &'a str, scope: &'a NamespaceScope) -> (&'a str, &'a str) {
    match scope {
        NamespaceScope::All => match id.split_once('/') {
            Some((namespace, name)) => (namespace, name),
            // A bare id still groups under its own key; there is no name
            // part left to show.
            None => (id, ""),
        },
        NamespaceScope::Named(namespace) => (namespace.as_str(), id),
    }
}

fn positioned_edge(edge: &ResourceEdge) -> PositionedEdge {
    PositionedEdge {
        id: format!("e-{}-{}", edge.from, edge.to),
        source: edge.from.clone(),
        target: edge.to.clone(),
        label: edge.relation.clone(),
    }
}
