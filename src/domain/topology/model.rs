use serde::Serialize;

/// Resource categories that participate in the topology view. Anything else
/// in the feed (ConfigMaps, kubelet nodes, ...) is dropped before layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Pod,
    Service,
    Deployment,
}

impl NodeKind {
    /// Parses the `type` field of a feed node. Matching is exact and
    /// case-sensitive; this is the view filter, so unknown strings map to
    /// `None` rather than an error.
    pub fn from_type(raw: &str) -> Option<Self> {
        match raw {
            "Pod" => Some(NodeKind::Pod),
            "Service" => Some(NodeKind::Service),
            "Deployment" => Some(NodeKind::Deployment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Pod => "Pod",
            NodeKind::Service => "Service",
            NodeKind::Deployment => "Deployment",
        }
    }
}

/// A fixed 2D coordinate in the render plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

/// A feed node annotated with its render position and visual bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    pub id: String,
    pub label: String,
    pub position: Position,
    pub style_class: NodeKind,
}

/// A feed edge mapped 1:1 onto the render surface with a synthesized id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
}

/// The complete renderable topology for one namespace scope.
///
/// Rebuilt wholesale on every fetch; nothing carries over between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopologyView {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<PositionedEdge>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_kind_matches_exact_type_strings() {
        assert_eq!(NodeKind::from_type("Pod"), Some(NodeKind::Pod));
        assert_eq!(NodeKind::from_type("Service"), Some(NodeKind::Service));
        assert_eq!(NodeKind::from_type("Deployment"), Some(NodeKind::Deployment));

        assert_eq!(NodeKind::from_type("pod"), None);
        assert_eq!(NodeKind::from_type("ConfigMap"), None);
        assert_eq!(NodeKind::from_type(""), None);
    }

    #[test]
    fn positioned_node_serializes_camel_case() {
        let node = PositionedNode {
            id: "default/web-1".to_string(),
            label: "Pod: web-1".to_string(),
            position: Position { x: 200, y: 100 },
            style_class: NodeKind::Pod,
        };

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "default/web-1",
                "label": "Pod: web-1",
                "position": { "x": 200, "y": 100 },
                "styleClass": "pod"
            })
        );
    }
}
