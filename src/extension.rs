//! Scans the ClientHello extensions block for server_name.

use crate::cursor::{self, Cursor};
use crate::Error;

const EXTENSION_TYPE_SNI: u16 = 0x0000;
const EXTENSION_HEADER_LEN: usize = 4;

/// Returns a cursor bounded to the server_name extension payload.
///
/// The declared block length is only advisory: the scan stops when fewer
/// than four bytes are left in the buffer, at which point the extension
/// is reported as [`Error::ServerNameAbsent`].
pub(crate) fn find_server_name_extension(mut cursor: Cursor<'_>) -> Result<Cursor<'_>, Error> {
    let block_len = cursor.read_u16().map_err(|_| Error::IncompleteHandshake)?;
    log::trace!(
        "extensions block declares {} bytes, {} available",
        block_len,
        cursor.remaining()
    );

    while cursor.remaining() >= EXTENSION_HEADER_LEN {
        let (ext_typ, ext_len) =
            read_extension_header(&mut cursor).map_err(|_| Error::ServerNameAbsent)?;

        if ext_typ == EXTENSION_TYPE_SNI {
            return cursor.take(ext_len).map_err(|_| Error::IncompleteExtension);
        }
        if cursor.skip(ext_len).is_err() {
            log::debug!(
                "extension {:#06x} declares {} bytes, only {} left",
                ext_typ,
                ext_len,
                cursor.remaining()
            );
            break;
        }
    }
    Err(Error::ServerNameAbsent)
}

/// Extension type & length.
fn read_extension_header(c: &mut Cursor<'_>) -> cursor::Result<(u16, usize)> {
    let mut header = c.take(EXTENSION_HEADER_LEN)?;
    Ok((header.read_u16()?, usize::from(header.read_u16()?)))
}
