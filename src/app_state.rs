use std::sync::Arc;

use kube::Client;

macro_rules! delegate_async_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> anyhow::Result<$ret> {
                $path(&self.client, $($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub cluster_service: Arc<ClusterService>,
    pub graph_service: Arc<GraphService>,
}

pub fn build_app_state(client: Client) -> AppState {
    AppState {
        cluster_service: Arc::new(ClusterService::new(client.clone())),
        graph_service: Arc::new(GraphService::new(client)),
    }
}

/// Read / patch access to live cluster resources, one method per endpoint
#[derive(Clone)]
pub struct ClusterService {
    client: Client,
}

impl ClusterService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    delegate_async_service! {
        fn list_namespaces() -> Vec<String> => crate::domain::k8s::service::namespace_service::list_namespaces;
        fn list_pods(scope: &crate::domain::k8s::scope::NamespaceScope) -> Vec<crate::api::dto::k8s_dto::PodDto> => crate::domain::k8s::service::pod_service::list_pods;
        fn list_deployments(scope: &crate::domain::k8s::scope::NamespaceScope) -> Vec<crate::api::dto::k8s_dto::DeploymentDto> => crate::domain::k8s::service::deployment_service::list_deployments;
        fn list_services(scope: &crate::domain::k8s::scope::NamespaceScope) -> Vec<crate::api::dto::k8s_dto::ServiceDto> => crate::domain::k8s::service::service_service::list_services;
        fn get_pod_logs(namespace: &str, pod_name: &str) -> serde_json::Value => crate::domain::k8s::service::pod_service::get_pod_logs;
        fn patch_pod_metadata(namespace: &str, pod_name: &str, metadata: serde_json::Value) -> serde_json::Value => crate::domain::k8s::service::pod_service::patch_pod;
    }
}

/// Topology endpoints: the raw resource graph and the positioned view
#[derive(Clone)]
pub struct GraphService {
    client: Client,
}

impl GraphService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    delegate_async_service! {
        fn get_resource_graph(scope: &crate::domain::k8s::scope::NamespaceScope) -> crate::api::dto::graph_dto::ResourceGraph => crate::domain::graph::service::get_resource_graph;
        fn get_topology_view(scope: &crate::domain::k8s::scope::NamespaceScope) -> crate::domain::topology::model::TopologyView => crate::domain::topology::service::get_topology_view;
    }
}
