//! Request and response types, plus the port to the remote service.

pub mod payment;
pub mod ports;
pub mod response;
