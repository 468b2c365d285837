//! Frame transport: length-prefixed, optionally zlib-compressed packet
//! frames over a blocking `TcpStream`.

use std::io::{Cursor, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use mc_protocol::{read_varint, varint_len, write_varint};

use crate::error::{ClientError, Result};

const READ_TIMEOUT: Duration = Duration::from_millis(500);

/// Wraps a `TcpStream` with Minecraft's framing and compression protocol.
/// Every frame read re-arms the socket's read timeout, so a stalled peer
/// surfaces as [`ClientError::TimedOut`] rather than hanging forever.
pub struct FrameTransport {
    stream: TcpStream,
    compression_threshold: Option<i32>,
    read_buf: Vec<u8>,
}

impl FrameTransport {
    pub fn new(stream: TcpStream) -> Result<Self> {
        stream.set_read_timeout(Some(READ_TIMEOUT))?;
        stream.set_nodelay(true)?;
        Ok(Self {
            stream,
            compression_threshold: None,
            read_buf: Vec::new(),
        })
    }

    pub fn set_compression(&mut self, threshold: Option<i32>) {
        self.compression_threshold = threshold.filter(|t| *t >= 0);
    }

    fn read_exact_timed(&mut self, buf: &mut [u8]) -> Result<()> {
        self.stream.set_read_timeout(Some(READ_TIMEOUT))?;
        match self.stream.read_exact(buf) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock || e.kind() == std::io::ErrorKind::TimedOut => {
                Err(ClientError::TimedOut(READ_TIMEOUT))
            }
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Err(ClientError::SocketClosed),
            Err(e) => Err(e.into()),
        }
    }

    fn read_varint_timed(&mut self) -> Result<i32> {
        let mut value = 0i32;
        let mut shift = 0u32;
        loop {
            let mut byte = [0u8; 1];
            self.read_exact_timed(&mut byte)?;
            value |= i32::from(byte[0] & 0x7F) << shift;
            if byte[0] & 0x80 == 0 {
                break;
            }
            shift += 7;
            if shift >= 35 {
                return Err(ClientError::Protocol(mc_protocol::ProtocolError::Overflow));
            }
        }
        Ok(value)
    }

    /// Read one frame, returning `(packet_id, body)` with compression
    /// already undone.
    pub fn read_frame(&mut self) -> Result<(i32, Vec<u8>)> {
        let total_len = self.read_varint_timed()? as usize;
        self.read_buf.clear();
        self.read_buf.resize(total_len, 0);
        self.read_exact_timed(&mut self.read_buf)?;

        let raw = if self.compression_threshold.is_some() {
            let mut cursor = Cursor::new(&self.read_buf[..]);
            let data_length = read_varint(&mut cursor)?;
            let tail_start = cursor.position() as usize;
            let tail = &self.read_buf[tail_start..];
            if data_length == 0 {
                tail.to_vec()
            } else {
                let mut decoder = ZlibDecoder::new(tail);
                let mut out = Vec::with_capacity(data_length as usize);
                decoder
                    .read_to_end(&mut out)
                    .map_err(ClientError::InflateFailed)?;
                if out.len() != data_length as usize {
                    return Err(ClientError::ProtocolViolation(format!(
                        "decompressed {} bytes, expected {data_length}",
                        out.len()
                    )));
                }
                out
            }
        } else {
            self.read_buf.clone()
        };

        let mut cursor = Cursor::new(&raw[..]);
        let packet_id = read_varint(&mut cursor)?;
        let body = raw[cursor.position() as usize..].to_vec();
        Ok((packet_id, body))
    }

    /// Write one frame for `(packet_id, body)`, compressing per the
    /// installed threshold.
    pub fn write_frame(&mut self, packet_id: i32, body: &[u8]) -> Result<()> {
        let mut inner = Vec::with_capacity(varint_len(packet_id) + body.len());
        write_varint(&mut inner, packet_id)?;
        inner.extend_from_slice(body);

        let mut frame = Vec::new();
        match self.compression_threshold {
            None => {
                write_varint(&mut frame, inner.len() as i32)?;
                frame.extend_from_slice(&inner);
            }
            Some(threshold) if inner.len() < threshold as usize => {
                write_varint(&mut frame, 1 + inner.len() as i32)?;
                write_varint(&mut frame, 0)?;
                frame.extend_from_slice(&inner);
            }
            Some(_) => {
                let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(&inner).map_err(ClientError::DeflateFailed)?;
                let compressed = encoder.finish().map_err(ClientError::DeflateFailed)?;
                let data_length_len = varint_len(inner.len() as i32);
                write_varint(&mut frame, (data_length_len + compressed.len()) as i32)?;
                write_varint(&mut frame, inner.len() as i32)?;
                frame.extend_from_slice(&compressed);
            }
        }

        let wrote = self.stream.write(&frame)?;
        if wrote != frame.len() {
            return Err(ClientError::ShortWrite {
                wrote,
                expected: frame.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    fn pair() -> (FrameTransport, FrameTransport) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || listener.accept().unwrap().0);
        let client = TcpStream::connect(addr).unwrap();
        let server = server.join().unwrap();
        (
            FrameTransport::new(client).unwrap(),
            FrameTransport::new(server).unwrap(),
        )
    }

    #[test]
    fn roundtrips_uncompressed_frame() {
        let (mut a, mut b) = pair();
        a.write_frame(5, b"hello").unwrap();
        let (id, body) = b.read_frame().unwrap();
        assert_eq!(id, 5);
        assert_eq!(body, b"hello");
    }

    #[test]
    fn roundtrips_below_threshold_uncompressed() {
        let (mut a, mut b) = pair();
        a.set_compression(Some(64));
        b.set_compression(Some(64));
        a.write_frame(1, b"short").unwrap();
        let (id, body) = b.read_frame().unwrap();
        assert_eq!(id, 1);
        assert_eq!(body, b"short");
    }

    #[test]
    fn roundtrips_above_threshold_compressed() {
        let (mut a, mut b) = pair();
        a.set_compression(Some(4));
        b.set_compression(Some(4));
        let payload = vec![0x42u8; 4096];
        a.write_frame(2, &payload).unwrap();
        let (id, body) = b.read_frame().unwrap();
        assert_eq!(id, 2);
        assert_eq!(body, payload);
    }
}
