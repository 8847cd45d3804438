//! Turning away a client whose ClientHello can't be routed.

/// A TLS 1.0 fatal handshake_failure alert record.
pub const HANDSHAKE_FAILURE_ALERT: [u8; 7] = [
    0x15, // Alert
    0x03, 0x01, // TLS 1.0
    0x00, 0x02, // Payload length
    0x02, 0x28, // Fatal, handshake failure
];

/// Send [`HANDSHAKE_FAILURE_ALERT`] and shut the writer down.
///
/// Best effort: the peer may already be gone, so write errors are logged
/// and dropped.
#[cfg(feature = "tokio")]
pub async fn reject<W: tokio::io::AsyncWrite>(mut writer: std::pin::Pin<&mut W>) {
    use tokio::io::AsyncWriteExt;

    if let Err(err) = writer.write_all(&HANDSHAKE_FAILURE_ALERT).await {
        log::debug!("failed to send TLS alert: {}", err);
        return;
    }
    if let Err(err) = writer.shutdown().await {
        log::debug!("failed to shut down after TLS alert: {}", err);
    }
}
