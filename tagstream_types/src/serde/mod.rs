//! # Serialization format
//!
//! Every value is written as a Data Type Metadata tag (DTM) followed by the
//! value's own encoding.
//!
//! ```text
//! struct Envelope {
//!     dtm:        uvarint,    // 1 to 5 bytes. Never exceeds u32::MAX.
//!     payload:    [u8; _],    // Length and layout owned by the payload's `Serializer`.
//! }
//! ```
//!
//! `uvarint` is unsigned LEB128: the integer is split into 7-bit groups,
//! least-significant group first. Each byte except the last has its high bit set.
//! Zero encodes to a single `0x00` byte.
//!
//! The DTM is an opaque discriminator chosen by the application.
//! Readers compare it for equality against the DTM they expect, and may read it
//! alone in order to route the payload to one of several envelopes.

mod dtm;
mod error;
mod lengths;
mod serializer;
pub mod varint;

pub use dtm::*;
pub use error::*;
pub use lengths::*;
pub use serializer::*;
