use std::collections::{BTreeMap, BTreeSet};

use crate::api::dto::graph_dto::{ResourceEdge, ResourceGraph, ResourceNode};
use crate::core::client::kube_resources::{Deployment, Pod, Service};
use crate::domain::k8s::scope::NamespaceScope;

/// Assembles the `{nodes, edges}` listing for one scope.
///
/// Emits one node per pod, service, and deployment, plus one per distinct
/// kubelet node a pod is scheduled on. Edges: `routes-to` (service selector
/// matches pod labels), `manages` (deployment selector matches pod labels),
/// `runs-on` (pod to kubelet node). Selector joins are namespace-local.
pub fn assemble_resource_graph(
    scope: &NamespaceScope,
    pods: &[Pod],
    services: &[Service],
    deployments: &[Deployment],
) -> ResourceGraph {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    // Pods keep enough context around for the selector joins below.
    let pod_entries: Vec<PodEntry> = pods
        .iter()
        .filter_map(|pod| pod_entry(pod, scope))
        .collect();

    for entry in &pod_entries {
        nodes.push(resource_node(&entry.id, "Pod"));
    }

    for service in services {
        let Some(name) = service.metadata.name.as_deref() else {
            continue;
        };
        let namespace = service.metadata.namespace.as_deref().unwrap_or_default();
        let id = scoped_id(scope, namespace, name);
        nodes.push(resource_node(&id, "Service"));

        let Some(selector) = service.spec.as_ref().and_then(|spec| spec.selector.as_ref()) else {
            continue;
        };
        for entry in &pod_entries {
            if entry.namespace == namespace && selector_matches(selector, entry.labels) {
                edges.push(resource_edge(&id, &entry.id, "routes-to"));
            }
        }
    }

    for deployment in deployments {
        let Some(name) = deployment.metadata.name.as_deref() else {
            continue;
        };
        let namespace = deployment.metadata.namespace.as_deref().unwrap_or_default();
        let id = scoped_id(scope, namespace, name);
        nodes.push(resource_node(&id, "Deployment"));

        // TODO: join on matchExpressions as well; only matchLabels selects here.
        let Some(selector) = deployment
            .spec
            .as_ref()
            .and_then(|spec| spec.selector.match_labels.as_ref())
        else {
            continue;
        };
        for entry in &pod_entries {
            if entry.namespace == namespace && selector_matches(selector, entry.labels) {
                edges.push(resource_edge(&id, &entry.id, "manages"));
            }
        }
    }

    // Kubelet nodes are cluster-scoped: bare names in every mode, deduped
    // and sorted so the listing is stable.
    let mut kubelet_nodes: BTreeSet<&str> = BTreeSet::new();
    for entry in &pod_entries {
        if let Some(node_name) = entry.node_name {
            kubelet_nodes.insert(node_name);
            edges.push(resource_edge(&entry.id, node_name, "runs-on"));
        }
    }
    for node_name in kubelet_nodes {
        nodes.push(resource_node(node_name, "Node"));
    }

    ResourceGraph { nodes, edges }
}

struct PodEntry<'a> {
    id: String,
    namespace: &'a str,
    labels: Option<&'a BTreeMap<String, String>>,
    node_name: Option<&'a str>,
}

fn pod_entry<'a>(pod: &'a Pod, scope: &NamespaceScope) -> Option<PodEntry<'a>> {
    let name = pod.metadata.name.as_deref()?;
    let namespace = pod.metadata.namespace.as_deref().unwrap_or_default();

    Some(PodEntry {
        id: scoped_id(scope, namespace, name),
        namespace,
        labels: pod.metadata.labels.as_ref(),
        node_name: pod.spec.as_ref().and_then(|spec| spec.node_name.as_deref()),
    })
}

/// Node id for the requested scope: `<namespace>/<name>` across all
/// namespaces, bare `<name>` inside a single one.
fn scoped_id(scope: &NamespaceScope, namespace: &str, name: &str) -> String {
    match scope {
        NamespaceScope::All => format!("{namespace}/{name}"),
        NamespaceScope::Named(_) => name.to_string(),
    }
}

/// Kubernetes label-selector semantics: every selector pair must be present
/// in the target labels. An empty or absent label set never matches.
fn selector_matches(
    selector: &BTreeMap<String, String>,
    labels: Option<&BTreeMap<String, String>>,
) -> bool {
    if selector.is_empty() {
        return false;
    }
    let Some(labels) = labels else {
        return false;
    };

    selector.iter().all(|(key, value)| labels.get(key) == Some(value))
}

fn resource_node(id: &str, kind: &str) -> ResourceNode {
    ResourceNode {
        id: id.to_string(),
        kind: kind.to_string(),
    }
}

fn resource_edge(from: &str, to: &str, relation: &str) -> ResourceEdge {
    ResourceEdge {
        from: from.to_string(),
        to: to.to_string(),
        relation: relation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::apps::v1::DeploymentSpec;
    use k8s_openapi::api::core::v1::{PodSpec, ServiceSpec};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

    fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    fn pod(namespace: &str, name: &str, labels: BTreeMap<String, String>, node: Option<&str>) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                labels: Some(labels),
                ..Default::default()
            },
            spec: Some(PodSpec {
                node_name: node.map(str::to_string),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn service(namespace: &str, name: &str, selector: Option<BTreeMap<String, String>>) -> Service {
        Service {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            spec: Some(ServiceSpec {
                selector,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn deployment(
        namespace: &str,
        name: &str,
        match_labels: Option<BTreeMap<String, String>>,
    ) -> Deployment {
        Deployment {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                selector: LabelSelector {
                    match_labels,
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn ids_of_kind(graph: &ResourceGraph, kind: &str) -> Vec<String> {
        graph
            .nodes
            .iter()
            .filter(|node| node.kind == kind)
            .map(|node| node.id.clone())
            .collect()
    }

    fn edge_triples(graph: &ResourceGraph) -> Vec<(String, String, String)> {
        graph
            .edges
            .iter()
            .map(|edge| (edge.from.clone(), edge.to.clone(), edge.relation.clone()))
            .collect()
    }

    #[test]
    fn all_scope_uses_composite_ids_and_joins_relations() {
        let pods = vec![pod(
            "default",
            "web-1",
            labels(&[("app", "web")]),
            Some("worker-1"),
        )];
        let services = vec![service("default", "web", Some(labels(&[("app", "web")])))];
        let deployments = vec![deployment("default", "web", Some(labels(&[("app", "web")])))];

        let graph = assemble_resource_graph(&NamespaceScope::All, &pods, &services, &deployments);

        assert_eq!(ids_of_kind(&graph, "Pod"), vec!["default/web-1"]);
        assert_eq!(ids_of_kind(&graph, "Service"), vec!["default/web"]);
        assert_eq!(ids_of_kind(&graph, "Deployment"), vec!["default/web"]);
        assert_eq!(ids_of_kind(&graph, "Node"), vec!["worker-1"]);

        assert_eq!(
            edge_triples(&graph),
            vec![
                (
                    "default/web".to_string(),
                    "default/web-1".to_string(),
                    "routes-to".to_string()
                ),
                (
                    "default/web".to_string(),
                    "default/web-1".to_string(),
                    "manages".to_string()
                ),
                (
                    "default/web-1".to_string(),
                    "worker-1".to_string(),
                    "runs-on".to_string()
                ),
            ]
        );
    }

    #[test]
    fn named_scope_uses_bare_ids() {
        let pods = vec![pod("prod", "api-1", labels(&[("app", "api")]), None)];
        let services = vec![service("prod", "api", Some(labels(&[("app", "api")])))];

        let graph = assemble_resource_graph(
            &NamespaceScope::Named("prod".to_string()),
            &pods,
            &services,
            &[],
        );

        assert_eq!(ids_of_kind(&graph, "Pod"), vec!["api-1"]);
        assert_eq!(ids_of_kind(&graph, "Service"), vec!["api"]);
        assert_eq!(
            edge_triples(&graph),
            vec![("api".to_string(), "api-1".to_string(), "routes-to".to_string())]
        );
    }

    #[test]
    fn selector_joins_are_namespace_local() {
        let pods = vec![
            pod("a", "web-1", labels(&[("app", "web")]), None),
            pod("b", "web-1", labels(&[("app", "web")]), None),
        ];
        let services = vec![service("a", "web", Some(labels(&[("app", "web")])))];

        let graph = assemble_resource_graph(&NamespaceScope::All, &pods, &services, &[]);

        assert_eq!(
            edge_triples(&graph),
            vec![("a/web".to_string(), "a/web-1".to_string(), "routes-to".to_string())]
        );
    }

    #[test]
    fn empty_or_absent_selectors_never_match() {
        let pods = vec![pod("default", "web-1", labels(&[("app", "web")]), None)];
        let services = vec![
            service("default", "headless", None),
            service("default", "selectorless", Some(BTreeMap::new())),
        ];
        let deployments = vec![deployment("default", "untargeted", None)];

        let graph = assemble_resource_graph(&NamespaceScope::All, &pods, &services, &deployments);

        assert!(graph.edges.is_empty());
    }

    #[test]
    fn selector_subset_must_match_entirely() {
        let pods = vec![pod(
            "default",
            "web-1",
            labels(&[("app", "web"), ("tier", "frontend")]),
            None,
        )];
        let matching = service(
            "default",
            "web",
            Some(labels(&[("app", "web"), ("tier", "frontend")])),
        );
        let mismatched = service(
            "default",
            "other",
            Some(labels(&[("app", "web"), ("tier", "backend")])),
        );

        let graph = assemble_resource_graph(
            &NamespaceScope::All,
            &pods,
            &[matching, mismatched],
            &[],
        );

        assert_eq!(
            edge_triples(&graph),
            vec![(
                "default/web".to_string(),
                "default/web-1".to_string(),
                "routes-to".to_string()
            )]
        );
    }

    #[test]
    fn shared_kubelet_nodes_are_deduped_and_sorted() {
        let pods = vec![
            pod("default", "web-1", labels(&[]), Some("worker-2")),
            pod("default", "web-2", labels(&[]), Some("worker-1")),
            pod("default", "web-3", labels(&[]), Some("worker-2")),
            pod("default", "pending", labels(&[]), None),
        ];

        let graph = assemble_resource_graph(&NamespaceScope::All, &pods, &[], &[]);

        assert_eq!(ids_of_kind(&graph, "Node"), vec!["worker-1", "worker-2"]);
        let runs_on: Vec<_> = graph
            .edges
            .iter()
            .filter(|edge| edge.relation == "runs-on")
            .map(|edge| edge.from.clone())
            .collect();
        assert_eq!(
            runs_on,
            vec!["default/web-1", "default/web-2", "default/web-3"]
        );
    }
}
