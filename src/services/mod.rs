// Service module exports

pub mod appointment;
pub mod cabin;
pub mod client;
pub mod clinic;
pub mod storage;
pub mod template;
pub mod timegrid;
