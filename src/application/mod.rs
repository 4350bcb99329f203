//! Application layer orchestrating a single build request.
//!
//! `RequestRunner` owns the service port and turns a `PaymentRequest` into a
//! decoded `ApiResponse`. Rendering the response is left to the caller.

pub mod runner;
