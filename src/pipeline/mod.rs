pub mod codec;
pub mod roundtrip;

pub use codec::{Compressor, Decompressor};
pub use roundtrip::{verify_roundtrip, RoundtripReport};
