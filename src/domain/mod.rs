pub mod graph;
pub mod k8s;
pub mod topology;
