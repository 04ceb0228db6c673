//! Writer implementations for the supported destinations

pub mod file;
mod line_sink;
pub mod stream;
pub mod syslog;
pub mod test_sink;

pub use crate::core::Writer;
pub use file::FileWriter;
pub use stream::{OutputStream, StreamWriter};
pub use syslog::{Facility, SyslogWriter};
pub use test_sink::{TestContext, TestWriter};
