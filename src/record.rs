//! TLS record header checks.

use crate::cursor::{self, Cursor};
use crate::Error;

pub(crate) const RECORD_HEADER_LEN: usize = 5;
pub(crate) const CONTENT_TYPE_HANDSHAKE: u8 = 0x16;
const HANDSHAKE_TYPE_CLIENT_HELLO: u8 = 0x01;

/// Checks the record header and returns a cursor at the handshake type byte.
///
/// The returned cursor spans the rest of the whole buffer, not just the
/// declared record, so trailing bytes stay visible to later stages.
pub(crate) fn validate_and_enter(buf: &[u8]) -> Result<Cursor<'_>, Error> {
    if buf.len() < RECORD_HEADER_LEN {
        return Err(Error::BufferTooShort);
    }
    let mut cursor = Cursor::new(buf);
    let (content_type, major, minor, len) =
        read_header(&mut cursor).map_err(|_| Error::BufferTooShort)?;

    if content_type != CONTENT_TYPE_HANDSHAKE {
        return Err(Error::NotHandshakeRecord(content_type));
    }
    // SSL 3.0 and earlier.
    if major < 3 || (major == 3 && minor < 1) {
        return Err(Error::UnsupportedVersion { major, minor });
    }
    let declared = usize::from(len);
    if declared > cursor.remaining() {
        return Err(Error::IncompleteRecord {
            declared,
            available: cursor.remaining(),
        });
    }

    match cursor.peek_u8() {
        Ok(HANDSHAKE_TYPE_CLIENT_HELLO) => Ok(cursor),
        Ok(other) => Err(Error::NotClientHello(other)),
        Err(_) => Err(Error::IncompleteHandshake),
    }
}

fn read_header(c: &mut Cursor<'_>) -> cursor::Result<(u8, u8, u8, u16)> {
    Ok((c.read_u8()?, c.read_u8()?, c.read_u8()?, c.read_u16()?))
}
