//! Writer trait for log destinations

use super::{entry::Entry, error::Result, formatter::Freeform, severity::Severity};

/// A destination owning exactly one output resource.
///
/// Writers are shared between logger views, so every method takes `&self`
/// and implementations serialize access internally. A write holds the lock
/// for the whole format-write-flush sequence; `rotate` takes the same lock,
/// so it only ever runs between two complete lines.
pub trait Writer: Send + Sync {
    fn write(&self, severity: Severity, entry: &Entry) -> Result<()>;

    fn write_freeform(&self, severity: Severity, data: &dyn Freeform) -> Result<()>;

    /// Reopen the underlying resource. No-op for destinations that cannot be reopened.
    fn rotate(&self) -> Result<()>;

    /// Release the underlying resource. Later writes fail; closing twice is not an error.
    fn close(&self) -> Result<()>;

    fn name(&self) -> &str;
}
