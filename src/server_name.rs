//! Decoding of the server_name extension payload.

use std::fmt;
use std::str::Utf8Error;

use crate::cursor::Cursor;
use crate::Error;

const NAME_TYPE_HOST_NAME: u8 = 0x00;

/// Size of the output buffer, terminator included.
const SERVER_NAME_CAPACITY: usize = 256;

/// Longest host name accepted. Anything longer is rejected, not truncated.
pub const MAX_HOST_NAME_LEN: usize = SERVER_NAME_CAPACITY - 2;

/// A host name copied out of a ClientHello.
///
/// Owns its bytes in a fixed buffer, so it outlives the read buffer it was
/// parsed from. The bytes are exactly what the client sent; no charset
/// validation is performed.
#[derive(Clone)]
pub struct ServerName {
    buf: [u8; SERVER_NAME_CAPACITY],
    len: usize,
}

impl ServerName {
    /// The host name as sent, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The host name followed by a single NUL byte.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// Length in bytes, terminator excluded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The host name as a `&str`.
    ///
    /// Fails when the client sent a name that isn't UTF-8, since nothing
    /// checks the charset while decoding.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// The host name with invalid UTF-8 replaced by U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }
}

impl PartialEq for ServerName {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ServerName {}

impl AsRef<[u8]> for ServerName {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServerName({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

/// Extracts the first host_name entry of a server_name extension payload.
///
/// Entries of other name types are skipped. The list is not walked past
/// the first host name.
pub(crate) fn decode_server_name(mut payload: Cursor<'_>) -> Result<ServerName, Error> {
    let incomplete = |_| Error::IncompleteExtension;

    // ServerNameList length.
    let snl_len = usize::from(payload.read_u16().map_err(incomplete)?);
    let mut list = payload
        .take(snl_len.min(payload.remaining()))
        .map_err(incomplete)?;

    while !list.is_empty() {
        // NameType & length.
        let name_typ = list.read_u8().map_err(incomplete)?;
        if name_typ != NAME_TYPE_HOST_NAME {
            log::debug!("unknown name type {:#04x} in server_name extension", name_typ);
            list.skip_vec_u16().map_err(incomplete)?;
            continue;
        }

        let name_len = usize::from(list.read_u16().map_err(incomplete)?);
        if name_len > list.remaining() {
            return Err(Error::IncompleteExtension);
        }
        if name_len > MAX_HOST_NAME_LEN {
            return Err(Error::HostNameTooLong(name_len));
        }
        let mut name = ServerName {
            buf: [0; SERVER_NAME_CAPACITY],
            len: name_len,
        };
        // The zeroed buffer already terminates the name.
        list.copy_to(name_len, &mut name.buf).map_err(incomplete)?;
        return Ok(name);
    }
    Err(Error::HostNameAbsent)
}
