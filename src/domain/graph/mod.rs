//! Resource relationship graph: fetch fan-out and assembly from listings

pub mod assembly;
pub mod service;
