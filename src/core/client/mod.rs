// Kube-rs access layer: one fetcher module per resource kind
pub mod kube_client;
pub mod kube_resources;
pub mod pods;
pub mod deployments;
pub mod services;
pub mod namespaces;
pub mod mappers;
