//! Reading the ClientHello off a live connection.

use std::pin::Pin;

use byteorder::{ByteOrder, NetworkEndian};
use tokio::io::{self, AsyncRead, AsyncReadExt, ErrorKind};

use crate::record::{CONTENT_TYPE_HANDSHAKE, RECORD_HEADER_LEN};
use crate::{parse_server_name, Error, ServerName};

/// Largest record payload accepted: 2^14 bytes of plaintext plus the
/// 2048 bytes of expansion TLS allows.
pub const MAX_RECORD_LEN: usize = (1 << 14) + 2048;

/// The bytes consumed from the connection and what they said.
#[derive(Debug)]
pub struct Peeked {
    /// Everything read so far. Replay this to the backend.
    pub buffered: Vec<u8>,
    pub server_name: Result<ServerName, Error>,
}

/// Read one whole TLS record from `reader`.
///
/// The reader could be a `TcpStream`. Only the header is read when the
/// record isn't a handshake, since nothing past it would be parsed.
pub async fn read_client_hello<R: AsyncRead>(mut reader: Pin<&mut R>) -> io::Result<Vec<u8>> {
    let mut buf = vec![0; RECORD_HEADER_LEN];
    reader.read_exact(&mut buf).await?;
    if buf[0] != CONTENT_TYPE_HANDSHAKE {
        return Ok(buf);
    }

    let len = usize::from(NetworkEndian::read_u16(&buf[3..RECORD_HEADER_LEN]));
    if len > MAX_RECORD_LEN {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("record length {} exceeds {}", len, MAX_RECORD_LEN),
        ));
    }
    buf.resize(RECORD_HEADER_LEN + len, 0);
    reader.read_exact(&mut buf[RECORD_HEADER_LEN..]).await?;
    Ok(buf)
}

/// Get the Server Name Indication from the ClientHello part
/// of a raw TLS stream asynchronously.
///
/// I/O failures come back as the outer error. A ClientHello that is
/// malformed or carries no SNI is reported in [`Peeked::server_name`]
/// together with the bytes read, so the caller can still decide to
/// forward the connection.
pub async fn read_sni_host_name_from_client_hello<R: AsyncRead>(
    reader: Pin<&mut R>,
) -> io::Result<Peeked> {
    let buffered = read_client_hello(reader).await?;
    let server_name = parse_server_name(&buffered);
    match &server_name {
        Ok(name) => log::debug!("ClientHello names {}", name),
        Err(err) if err.is_absent() => log::debug!("ClientHello without SNI: {}", err),
        Err(err) => log::warn!("unusable ClientHello ({} bytes): {}", buffered.len(), err),
    }
    Ok(Peeked {
        buffered,
        server_name,
    })
}
