//! Resource graph wire DTOs (`/api/graph`)

use serde::{Deserialize, Serialize};

/// One resource in the relationship feed. `id` is either a bare name or a
/// `<namespace>/<name>` composite, depending on the requested scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A directed relationship between two feed nodes. Endpoints are ids, not
/// indexes; nothing guarantees they resolve to a listed node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEdge {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub relation: String,
}

/// The raw `{nodes, edges}` listing. Both sections decode leniently so a
/// sparse feed reads as empty rather than malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceGraph {
    #[serde(default)]
    pub nodes: Vec<ResourceNode>,
    #[serde(default)]
    pub edges: Vec<ResourceEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_decodes_to_an_empty_graph() {
        let graph: ResourceGraph = serde_json::from_value(json!({})).unwrap();

        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn missing_relation_decodes_to_an_empty_label() {
        let graph: ResourceGraph = serde_json::from_value(json!({
            "edges": [{ "from": "a", "to": "b" }]
        }))
        .unwrap();

        assert_eq!(graph.edges[0].relation, "");
    }

    #[test]
    fn node_kind_uses_the_type_key_on_the_wire() {
        let graph: ResourceGraph = serde_json::from_value(json!({
            "nodes": [{ "id": "default/web-1", "type": "Pod" }]
        }))
        .unwrap();
        assert_eq!(graph.nodes[0].kind, "Pod");

        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            value["nodes"][0],
            json!({ "id": "default/web-1", "type": "Pod" })
        );
    }
}
