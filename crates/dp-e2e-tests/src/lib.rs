//! End-to-end tests for DocPilot.
//!
//! All tests live under `tests/`; they drive the `dp-api` router in-process
//! with `tower::ServiceExt::oneshot`, using the real rule engine and a
//! `wiremock` stand-in for the Anthropic Messages API.
