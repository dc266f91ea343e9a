//! API DTOs
pub mod graph_dto;
pub mod k8s_dto;
