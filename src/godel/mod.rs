pub mod codec;
pub mod error;
pub mod pairing;

pub use codec::{decode_instruction, decode_program, encode_instruction, encode_program};
pub use error::DecodeError;
pub use pairing::{decode_sequence, encode_sequence, pair, unpair};
