//! Central re-exports of the k8s-openapi resource types the dashboard serves.

pub use k8s_openapi::api::core::v1::{
    Namespace,
    Pod,
    Service,
    ServicePort,
};

pub use k8s_openapi::api::apps::v1::Deployment;

pub use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
