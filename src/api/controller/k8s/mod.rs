pub mod deployment;
pub mod namespace;
pub mod pod;
pub mod service;
