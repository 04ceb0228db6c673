//! Call-boundary payloads
//!
//! Logging calls accept text, structured entries, arbitrary errors and
//! pre-formatted templates. [`Payload`] is the closed set of those shapes;
//! it is resolved exactly once into an [`Entry`] after the severity filter
//! has passed, so nothing downstream needs to branch on payload type.

use super::entry::{codes, Entry};
use std::error::Error as StdError;
use std::fmt;

pub enum Payload<'a> {
    /// Plain message text
    Text(String),
    /// A structured entry, delivered as is
    Entry(Entry),
    /// Any error; entries hidden behind the box are unwrapped again
    Error(Box<dyn StdError + Send + Sync + 'static>),
    /// A template that has not been rendered yet
    Formatted(fmt::Arguments<'a>),
}

impl<'a> Payload<'a> {
    /// Wrap an arbitrary error value
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Payload::Error(Box::new(err))
    }

    /// Resolve into the entry that will be written
    pub fn into_entry(self) -> Entry {
        match self {
            Payload::Text(text) => Entry::new(codes::E_UNKNOWN_ERROR, text),
            Payload::Entry(entry) => entry,
            Payload::Error(err) => match err.downcast::<Entry>() {
                Ok(entry) => *entry,
                Err(err) => {
                    let explanation = err.to_string();
                    Entry::wrap_boxed(err, codes::E_UNKNOWN_ERROR, explanation)
                }
            },
            Payload::Formatted(args) => Entry::new(codes::E_UNKNOWN_ERROR, args.to_string()),
        }
    }
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Payload::Entry(entry) => f.debug_tuple("Entry").field(entry).finish(),
            Payload::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Payload::Formatted(args) => f.debug_tuple("Formatted").field(args).finish(),
        }
    }
}

impl From<&str> for Payload<'_> {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload<'_> {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<Entry> for Payload<'_> {
    fn from(entry: Entry) -> Self {
        Payload::Entry(entry)
    }
}

impl From<&Entry> for Payload<'_> {
    fn from(entry: &Entry) -> Self {
        Payload::Entry(entry.clone())
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Payload<'_> {
    fn from(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Payload::Error(err)
    }
}

impl From<std::io::Error> for Payload<'_> {
    fn from(err: std::io::Error) -> Self {
        Payload::error(err)
    }
}

impl From<super::error::LoggerError> for Payload<'_> {
    fn from(err: super::error::LoggerError) -> Self {
        Payload::Entry(Entry::from(err))
    }
}

impl<'a> From<fmt::Arguments<'a>> for Payload<'a> {
    fn from(args: fmt::Arguments<'a>) -> Self {
        Payload::Formatted(args)
    }
}
