//! Syslog writer
//!
//! Sends BSD-style (RFC 3164) lines to a local syslog socket or a remote
//! UDP collector:
//!
//! ```text
//! <PRI>Mmm dd HH:MM:SS TAG[PID]: MESSAGE
//! ```
//!
//! `PRI` is `facility * 8 + severity`. The message body is rendered by the
//! configured formatter without its own timestamp and level, since the
//! syslog frame already carries both.

use crate::core::config::SyslogConfig;
use crate::core::{
    Entry, Formatter, Freeform, LoggerError, Result, Severity, TimestampFormat, Writer,
};
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
#[cfg(unix)]
use std::os::unix::net::{UnixDatagram, UnixStream};
use std::str::FromStr;
use std::sync::Arc;

/// Default tag used when none is configured
pub const DEFAULT_TAG: &str = "log_pipeline";

/// Default local syslog socket
pub const DEFAULT_SYSLOG_SOCKET: &str = "/dev/log";

/// Syslog facilities, numbered as in RFC 5424
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Facility {
    Kern = 0,
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    AuthPriv = 10,
    Ftp = 11,
    Ntp = 12,
    LogAudit = 13,
    LogAlert = 14,
    Clock = 15,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

impl Facility {
    pub const ALL: [Facility; 24] = [
        Facility::Kern,
        Facility::User,
        Facility::Mail,
        Facility::Daemon,
        Facility::Auth,
        Facility::Syslog,
        Facility::Lpr,
        Facility::News,
        Facility::Uucp,
        Facility::Cron,
        Facility::AuthPriv,
        Facility::Ftp,
        Facility::Ntp,
        Facility::LogAudit,
        Facility::LogAlert,
        Facility::Clock,
        Facility::Local0,
        Facility::Local1,
        Facility::Local2,
        Facility::Local3,
        Facility::Local4,
        Facility::Local5,
        Facility::Local6,
        Facility::Local7,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Facility::Kern => "kern",
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Uucp => "uucp",
            Facility::Cron => "cron",
            Facility::AuthPriv => "authpriv",
            Facility::Ftp => "ftp",
            Facility::Ntp => "ntp",
            Facility::LogAudit => "logaudit",
            Facility::LogAlert => "logalert",
            Facility::Clock => "clock",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
        }
    }

    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facility {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Facility::ALL
            .into_iter()
            .find(|facility| facility.name() == s)
            .ok_or_else(|| LoggerError::config("syslog", format!("invalid facility: {}", s)))
    }
}

/// Syslog priority value for a facility/severity pair
#[inline]
pub fn priority(facility: Facility, severity: Severity) -> u8 {
    facility.number() * 8 + severity.number()
}

enum Connection {
    #[cfg(unix)]
    UnixStream(UnixStream),
    #[cfg(unix)]
    UnixDatagram(UnixDatagram),
    Udp(UdpSocket),
}

impl Connection {
    /// Absolute paths are UNIX sockets (stream first, then datagram);
    /// anything else is treated as a `host:port` UDP destination.
    fn open(destination: &str) -> io::Result<Self> {
        if destination.starts_with('/') {
            return Self::open_unix(destination);
        }

        let target: SocketAddr = destination.to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("{} did not resolve to an address", destination),
            )
        })?;
        let bind_addr = if target.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(bind_addr)?;
        socket.connect(target)?;
        Ok(Connection::Udp(socket))
    }

    #[cfg(unix)]
    fn open_unix(path: &str) -> io::Result<Self> {
        match UnixStream::connect(path) {
            Ok(stream) => Ok(Connection::UnixStream(stream)),
            Err(_) => {
                let socket = UnixDatagram::unbound()?;
                socket.connect(path)?;
                Ok(Connection::UnixDatagram(socket))
            }
        }
    }

    #[cfg(not(unix))]
    fn open_unix(path: &str) -> io::Result<Self> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("UNIX sockets are not available on this platform ({})", path),
        ))
    }

    fn send(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            #[cfg(unix)]
            Connection::UnixStream(stream) => stream.write_all(line).and_then(|()| stream.flush()),
            #[cfg(unix)]
            Connection::UnixDatagram(socket) => socket.send(line).map(|_| ()),
            Connection::Udp(socket) => socket.send(line).map(|_| ()),
        }
    }
}

pub struct SyslogWriter {
    destination: String,
    facility: Facility,
    tag: String,
    formatter: Arc<dyn Formatter>,
    connection: Mutex<Option<Connection>>,
}

impl SyslogWriter {
    /// Resolve the facility and open the socket.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the facility is unknown or the
    /// destination cannot be reached.
    pub fn new(config: &SyslogConfig, formatter: Arc<dyn Formatter>) -> Result<Self> {
        let facility: Facility = config.facility.parse()?;
        let destination = if config.destination.is_empty() {
            DEFAULT_SYSLOG_SOCKET.to_string()
        } else {
            config.destination.clone()
        };
        let connection = Connection::open(&destination).map_err(|e| {
            let kind = if destination.starts_with('/') { "UNIX" } else { "UDP" };
            LoggerError::config(
                "syslog",
                format!("failed to open {} socket to {} ({})", kind, destination, e),
            )
        })?;

        let base_tag = if config.tag.is_empty() { DEFAULT_TAG } else { &config.tag };
        let tag = if config.pid {
            format!("{}[{}]", base_tag, std::process::id())
        } else {
            base_tag.to_string()
        };

        Ok(Self {
            destination,
            facility,
            tag,
            formatter,
            connection: Mutex::new(Some(connection)),
        })
    }

    pub fn facility(&self) -> Facility {
        self.facility
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn frame(&self, severity: Severity, body: &str) -> String {
        format!(
            "<{}>{} {}: {}\n",
            priority(self.facility, severity),
            TimestampFormat::Rfc3164.format(&Local::now()),
            self.tag,
            body.replace('\n', "\\n")
        )
    }

    fn send(&self, severity: Severity, render: impl FnOnce() -> String) -> Result<()> {
        let mut guard = self.connection.lock();
        let connection = guard.as_mut().ok_or_else(|| LoggerError::closed("syslog"))?;
        let line = self.frame(severity, &render());
        connection
            .send(line.as_bytes())
            .map_err(|e| LoggerError::write_failed("syslog", "failed to write to syslog socket", e))
    }
}

impl Writer for SyslogWriter {
    fn write(&self, severity: Severity, entry: &Entry) -> Result<()> {
        self.send(severity, || self.formatter.format_body(entry))
    }

    fn write_freeform(&self, severity: Severity, data: &dyn Freeform) -> Result<()> {
        self.send(severity, || match data.to_json() {
            Ok(serde_json::Value::String(text)) => text,
            Ok(value) => value.to_string(),
            Err(_) => format!("{:?}", data),
        })
    }

    /// Reconnect, e.g. after the syslog daemon restarted
    fn rotate(&self) -> Result<()> {
        let mut guard = self.connection.lock();
        if guard.is_none() {
            return Err(LoggerError::rotate_failed(
                &self.destination,
                "writer is closed",
                io::Error::new(io::ErrorKind::NotConnected, "writer is closed"),
            ));
        }
        let fresh = Connection::open(&self.destination).map_err(|e| {
            LoggerError::rotate_failed(&self.destination, "failed to reopen syslog socket", e)
        })?;
        // The previous socket is closed when dropped here
        *guard = Some(fresh);
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.connection.lock().take();
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }
}
