//! Library exports for spinnerd, shared between the binary and tests.

pub mod config;
pub mod hooks;
pub mod models;
pub mod reactive;
pub mod routes;
pub mod source;
pub mod spinner;
pub mod startup;
pub mod state;
pub mod supabase;
pub mod utils;
