//! Cluster resource routes (e.g., /api/pods)

use axum::{
    routing::{get, patch},
    Router,
};
use crate::api::controller::k8s::deployment::DeploymentController;
use crate::api::controller::k8s::namespace::NamespaceController;
use crate::api::controller::k8s::pod::PodController;
use crate::api::controller::k8s::service::ServiceController;
use crate::app_state::AppState;

pub fn k8s_routes() -> Router<AppState> {
    Router::new()
        .route("/namespaces", get(NamespaceController::list_namespaces))
        .route("/pods", get(PodController::list_pods))
        .route("/pods/metadata", patch(PodController::patch_pod_metadata))
        .route("/deployments", get(DeploymentController::list_deployments))
        .route("/services", get(ServiceController::list_services))
        .route("/logs", get(PodController::get_pod_logs))
}
