//! Cluster listing DTOs and query shapes (`/api/pods`, `/api/deployments`, ...)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the pod table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PodDto {
    pub name: String,
    pub namespace: String,
    pub status: String,
    pub restarts: i32,
    pub node: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub age: String,
}

/// One row of the deployment table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeploymentDto {
    pub name: String,
    pub namespace: String,
    pub desired_replicas: i32,
    pub ready_replicas: i32,
    pub available_replicas: i32,
    pub strategy: String,
    pub images: Vec<String>,
    pub creation_time: Option<DateTime<Utc>>,
    pub age: String,
}

/// One row of the service table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDto {
    pub name: String,
    pub namespace: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub cluster_ip: Option<String>,
    pub ports: Vec<ServicePortDto>,
    pub creation_time: Option<DateTime<Utc>>,
    pub age: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicePortDto {
    pub port: i32,
    #[serde(rename = "targetPort")]
    pub target_port: Option<String>,
    pub protocol: Option<String>,
}

/// Namespace filter for listing endpoints; absent or `all` means cluster-wide.
#[derive(Debug, Default, Deserialize)]
pub struct NamespaceQuery {
    pub namespace: Option<String>,
}

/// Query half of `GET /api/logs`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogsQuery {
    pub pod_name: Option<String>,
    pub namespace: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_ports_keep_the_camel_case_target_key() {
        let port = ServicePortDto {
            port: 80,
            target_port: Some("8080".to_string()),
            protocol: Some("TCP".to_string()),
        };

        let value = serde_json::to_value(&port).unwrap();
        assert_eq!(
            value,
            json!({ "port": 80, "targetPort": "8080", "protocol": "TCP" })
        );
    }

    #[test]
    fn logs_query_reads_camel_case_pod_name() {
        let query: LogsQuery =
            serde_json::from_value(json!({ "podName": "web-1", "namespace": "prod" })).unwrap();

        assert_eq!(query.pod_name.as_deref(), Some("web-1"));
        assert_eq!(query.namespace.as_deref(), Some("prod"));
    }

    #[test]
    fn pod_row_serializes_start_time_as_rfc3339() {
        let start = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let row = PodDto {
            name: "web-1".to_string(),
            namespace: "default".to_string(),
            status: "Running".to_string(),
            restarts: 0,
            node: None,
            start_time: Some(start),
            age: "3h".to_string(),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["start_time"], json!("2024-06-01T12:00:00Z"));
        assert_eq!(value["node"], serde_json::Value::Null);
    }
}
