pub mod config;
pub mod wire;

pub use config::CodecConfig;
pub use wire::{decode, decode_with, encode, encode_into, encoded_len, DecodeError, Decoder};
