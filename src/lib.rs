//! GIF Carousel Library
//!
//! Indexed GIF file browsing and byte streaming for animated matrix
//! displays. Files on mounted storage are addressed by a zero-based index
//! re-derived from directory traversal order, and a decoder consumes the
//! selected file through the [`stream::ByteStream`] primitives without any
//! filesystem knowledge of its own.

pub mod cli;
pub mod config;
pub mod storage;
pub mod stream;
