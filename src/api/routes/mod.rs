//! API route declarations (e.g., /api/*)

pub mod graph_routes;
pub mod k8s_routes;
pub mod system_routes;
