//! Cryptographic operations used by the claim protocol

pub mod ecdsa;
