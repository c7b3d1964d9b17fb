//! Decoder-facing byte streaming
//!
//! A [`FileSession`] holds the single currently-open file; the decoder
//! consumes it through the [`ByteStream`] capability trait and never touches
//! storage directly.

mod adapter;
mod session;

pub use adapter::ByteStream;
pub use session::FileSession;
