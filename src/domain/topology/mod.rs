//! Topology view model: filtered, namespace-grouped, positioned rendering
//! of the resource graph

pub mod builder;
pub mod layout;
pub mod model;
pub mod service;
