pub mod amounts;
pub mod codec;
pub mod crypto_utils;
pub mod signer;
pub mod utils;
pub mod verifier;
