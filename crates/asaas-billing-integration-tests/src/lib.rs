//! Integration tests for the Asaas billing webhook API.
//!
//! The tests live under `tests/` and drive the full router built by
//! `asaas_billing_api::create_router`.
