//! Observable value holders.
//!
//! A container notifies its subscribers whenever its value changes. The cache
//! owns the writable side and hands out read-only views to consumers.

mod observable;

pub use observable::{Observable, Readable, Subscription};
