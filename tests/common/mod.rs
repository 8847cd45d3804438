#![allow(dead_code)]

/// Builds ClientHello records field by field.
#[derive(Clone)]
pub struct ClientHello {
    pub version: [u8; 2],
    pub session_id: Vec<u8>,
    pub cipher_suites: Vec<u8>,
    pub compression: Vec<u8>,
    /// `None` leaves the extensions block out entirely.
    pub extensions: Option<Vec<(u16, Vec<u8>)>>,
}

impl Default for ClientHello {
    fn default() -> Self {
        Self {
            version: [0x03, 0x03],
            session_id: vec![],
            cipher_suites: vec![0x13, 0x01],
            compression: vec![],
            extensions: Some(vec![]),
        }
    }
}

impl ClientHello {
    pub fn with_host(host: &[u8]) -> Self {
        Self {
            extensions: Some(vec![(0x0000, sni_payload(&[(0, host)]))]),
            ..Self::default()
        }
    }

    pub fn handshake(&self) -> Vec<u8> {
        let mut body = self.version.to_vec();
        body.extend_from_slice(&[0x5a; 32]);
        body.push(self.session_id.len() as u8);
        body.extend_from_slice(&self.session_id);
        body.extend_from_slice(&(self.cipher_suites.len() as u16).to_be_bytes());
        body.extend_from_slice(&self.cipher_suites);
        body.push(self.compression.len() as u8);
        body.extend_from_slice(&self.compression);
        if let Some(exts) = &self.extensions {
            let mut block = Vec::new();
            for (typ, payload) in exts {
                block.extend_from_slice(&typ.to_be_bytes());
                block.extend_from_slice(&(payload.len() as u16).to_be_bytes());
                block.extend_from_slice(payload);
            }
            body.extend_from_slice(&(block.len() as u16).to_be_bytes());
            body.extend(block);
        }

        let mut hs = vec![0x01];
        hs.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
        hs.extend(body);
        hs
    }

    pub fn record(&self) -> Vec<u8> {
        let hs = self.handshake();
        let mut rec = vec![0x16, 0x03, 0x01];
        rec.extend_from_slice(&(hs.len() as u16).to_be_bytes());
        rec.extend(hs);
        rec
    }
}

/// A server_name extension payload from `(name_type, name)` entries.
pub fn sni_payload(entries: &[(u8, &[u8])]) -> Vec<u8> {
    let mut list = Vec::new();
    for (typ, name) in entries {
        list.push(*typ);
        list.extend_from_slice(&(name.len() as u16).to_be_bytes());
        list.extend_from_slice(name);
    }
    let mut payload = (list.len() as u16).to_be_bytes().to_vec();
    payload.extend(list);
    payload
}
