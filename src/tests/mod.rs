// Tests module
// End-to-end scenarios: guided setup, rendering, persistence, re-resolution

pub mod integration;
