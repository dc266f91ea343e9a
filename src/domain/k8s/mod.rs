//! Cluster listing domain: namespace scope, request DTOs, per-resource
//! services

pub mod dto;
pub mod scope;
pub mod service;
