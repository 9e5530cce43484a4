// Re-exports so the rest of the crate can "use crate::config::*".
pub mod config;
pub mod logging;
pub mod spinner;
pub mod supabase;

pub use config::*;
pub use logging::*;
pub use spinner::*;
pub use supabase::*;
