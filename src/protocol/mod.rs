//! Protocol Layer: Primitive Binary Stream
//!
//! Prinsip desain:
//! - Fixed-width: setiap primitive punya ukuran tetap
//! - Little-endian: konsisten antara writer dan reader
//! - No allocation: Encode/decode langsung ke/dari caller buffer

mod error;
mod stream;
mod traits;

pub use error::WireError;
pub use stream::{MessageReader, MessageWriter};
pub use traits::{Decode, Encode};
