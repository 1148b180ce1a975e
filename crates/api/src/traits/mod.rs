//! Trait definitions for the xemcrypt public API

pub mod signature;

pub use signature::{Signature, SignatureDerive};
