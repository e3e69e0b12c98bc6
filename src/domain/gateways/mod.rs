//! Gateway traits for external collaborators.
//!
//! Implementations live in [`crate::infrastructure`]; mocks are generated
//! with `mockall` under `cfg(test)`.

pub mod alert_sink;
pub mod page_source;

pub use alert_sink::AlertSink;
pub use page_source::{PageSource, SourceError};

#[cfg(test)]
pub use alert_sink::MockAlertSink;
#[cfg(test)]
pub use page_source::MockPageSource;
