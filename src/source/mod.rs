pub mod base;
pub mod memory_source;
pub mod supabase_source;

// Re-export the primary source items so code outside can do
// "use crate::source::{ItemSource, create_source};"
pub use base::{create_source, ItemSource};
pub use memory_source::MemorySource;
pub use supabase_source::SupabaseSource;
