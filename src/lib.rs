//! Extract the SNI host name from a raw TLS ClientHello.
//!
//! Meant for front ends that route a connection by host name without
//! terminating TLS: read the first record off the socket, pull the
//! server_name out of it, then replay the bytes to the chosen backend.
//!
//! ```
//! let mut hello = vec![0x16, 0x03, 0x03, 0x00, 0x40];
//! hello.extend_from_slice(&[0x01, 0x00, 0x00, 0x3c, 0x03, 0x03]);
//! hello.extend_from_slice(&[0u8; 32]);
//! // Session ID, cipher suites, compression methods.
//! hello.extend_from_slice(&[0x00, 0x00, 0x02, 0x13, 0x01, 0x00]);
//! // Extensions: server_name with a single host_name entry.
//! hello.extend_from_slice(&[0x00, 0x12, 0x00, 0x00, 0x00, 0x0e, 0x00, 0x0c, 0x00, 0x00, 0x09]);
//! hello.extend_from_slice(b"localhost");
//!
//! let name = sni_peek::parse_server_name(&hello).unwrap();
//! assert_eq!(name.as_bytes(), b"localhost");
//! ```

mod cursor;
mod error;
mod extension;
mod handshake;
mod record;
mod server_name;

pub mod alert;
#[cfg(feature = "tokio")]
pub mod stream;

pub use error::Error;
pub use server_name::{ServerName, MAX_HOST_NAME_LEN};
#[cfg(feature = "tokio")]
pub use stream::{read_client_hello, read_sni_host_name_from_client_hello, Peeked};

/// Get the Server Name Indication from a buffer holding the start of a
/// TLS connection.
///
/// The buffer should begin with the record header of the ClientHello. It is
/// only read, never retained: the returned name owns its bytes.
///
/// Errors separate malformed input from input that is merely cut short
/// ([`Error::is_incomplete`]) and from ClientHellos without SNI
/// ([`Error::is_absent`]).
pub fn parse_server_name(buf: &[u8]) -> Result<ServerName, Error> {
    let cursor = record::validate_and_enter(buf)?;
    let cursor = handshake::skip_fixed_and_variable_fields(cursor)?;
    let payload = extension::find_server_name_extension(cursor)?;
    server_name::decode_server_name(payload)
}
