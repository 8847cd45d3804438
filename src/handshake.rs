//! Walks the fixed and variable-length ClientHello fields that precede the
//! extensions block.

use crate::cursor::Cursor;
use crate::Error;

/// ProtocolVersion (2 bytes) & random (32 bytes).
const VERSION_AND_RANDOM_LEN: usize = 34;

/// Skips from the handshake type byte up to the extensions length.
///
/// A ClientHello that ends right after its compression methods is
/// [`Error::NoExtensions`].
pub(crate) fn skip_fixed_and_variable_fields(mut cursor: Cursor<'_>) -> Result<Cursor<'_>, Error> {
    let incomplete = |_| Error::IncompleteHandshake;

    // Handshake type, already checked by the record stage.
    cursor.skip(1).map_err(incomplete)?;
    let hs_len = cursor.read_u24().map_err(incomplete)?;
    log::trace!("ClientHello declares {} bytes", hs_len);
    cursor.skip(VERSION_AND_RANDOM_LEN).map_err(incomplete)?;

    // Session ID (u8-length vec), cipher suites (u16-length vec), compression methods (u8-length vec).
    cursor.skip_vec_u8().map_err(incomplete)?;
    cursor.skip_vec_u16().map_err(incomplete)?;
    cursor.skip_vec_u8().map_err(incomplete)?;

    if cursor.is_empty() {
        return Err(Error::NoExtensions);
    }
    Ok(cursor)
}
