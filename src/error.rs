use std::io;

/// Why no host name came out of a buffer.
///
/// Three families share this type: malformed input, input that was cut
/// short (see [`Error::is_incomplete`]), and well-formed ClientHellos that
/// simply carry no SNI (see [`Error::is_absent`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("buffer too short for a TLS record header")]
    BufferTooShort,
    #[error("not a TLS handshake record (content type {0:#04x})")]
    NotHandshakeRecord(u8),
    #[error("unsupported protocol version {major}.{minor}")]
    UnsupportedVersion { major: u8, minor: u8 },
    #[error("incomplete TLS record: {declared} bytes declared, {available} available")]
    IncompleteRecord { declared: usize, available: usize },
    #[error("handshake message not a ClientHello (type {0:#04x})")]
    NotClientHello(u8),
    #[error("incomplete ClientHello")]
    IncompleteHandshake,
    #[error("no extensions present in ClientHello")]
    NoExtensions,
    #[error("incomplete extension")]
    IncompleteExtension,
    #[error("no server_name extension")]
    ServerNameAbsent,
    #[error("server_name extension holds no host name")]
    HostNameAbsent,
    #[error("host name too long ({0} bytes)")]
    HostNameTooLong(usize),
}

impl Error {
    /// A declared length ran past the end of the buffer. Reading more bytes
    /// from the peer and parsing again may succeed.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            Error::BufferTooShort
                | Error::IncompleteRecord { .. }
                | Error::IncompleteHandshake
                | Error::IncompleteExtension
        )
    }

    /// The ClientHello is well formed but names no host.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            Error::NoExtensions | Error::ServerNameAbsent | Error::HostNameAbsent
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = if err.is_incomplete() {
            io::ErrorKind::UnexpectedEof
        } else if err.is_absent() {
            io::ErrorKind::NotFound
        } else {
            io::ErrorKind::InvalidData
        };
        io::Error::new(kind, err)
    }
}
