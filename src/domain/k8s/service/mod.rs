//! Listing and pod-write services over the live cluster

pub mod deployment_service;
pub mod namespace_service;
pub mod pod_service;
pub mod service_service;
