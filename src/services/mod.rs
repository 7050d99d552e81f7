pub mod nonce;
pub mod request;
pub mod signer;
pub mod transport;
