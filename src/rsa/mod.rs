// RSA Module - Main module file
// Public key components and their PKCS#1 encoding

pub mod bigint;
pub mod key;

pub use key::RsaPublicKey;
