// Module exports for models

pub mod appointment;
pub mod cabin;
pub mod client;
pub mod clinic;
pub mod schedule;
