// VitalsGuide-api lib.rs
//
// HTTP surface of the vitals tracking service: router, handlers,
// request/response entities, configuration and OpenAPI docs.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
