use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Protocol(#[from] mc_protocol::ProtocolError),
    #[error(transparent)]
    Data(#[from] mc_data::DataError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zlib inflate failed: {0}")]
    InflateFailed(std::io::Error),
    #[error("zlib deflate failed: {0}")]
    DeflateFailed(std::io::Error),
    #[error("socket read timed out after {0:?}")]
    TimedOut(std::time::Duration),
    #[error("short write: wrote {wrote} of {expected} bytes")]
    ShortWrite { wrote: usize, expected: usize },
    #[error("socket closed by peer")]
    SocketClosed,
    #[error("protocol violation: {0}")]
    ProtocolViolation(String),
    #[error("server demanded encryption and no EncryptionHook is installed")]
    EncryptionUnsupported,
    #[error("event callback aborted the current packet")]
    CallbackAborted,
}

pub type Result<T> = std::result::Result<T, ClientError>;
