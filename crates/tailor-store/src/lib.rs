//! Observable store for the configuration being edited.
//!
//! One [`ConfigStore`] lives per editing session. Controls call
//! [`ConfigStore::set`]; subscribers are told which fields changed and
//! re-derive generated code and previews from the new snapshot. Rapid edits
//! such as slider drags can be queued in an [`EditCoalescer`] and flushed
//! once the input settles.

mod coalescer;
mod store;

pub use coalescer::{EditCoalescer, FlushReport};
pub use store::{ConfigChange, ConfigStore, SubscriptionId};
