/**
    This module combines all the boilerplate
    implementations of fmt::Display and more.
*/

use crate::{
    key::{KeyPair, KeyError},
    encoding::bs58check::Bs58Error,
    network::Network,
    util::encode_02x
};
use std::fmt;

/*
    key module impls
*/
impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode_02x(&self.public_key()))
    }
}

//Private key material is never shown
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyPair")
         .field("compressed", &self.compressed())
         .field("network", &self.network())
         .field("has_priv_key", &self.has_priv_key())
         .finish()
    }
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BadPrivateKeyLength { expected, found } => write!(f, "Expected {} byte private key, found {} bytes", expected, found),
            Self::PrivateKeyOutOfRange => write!(f, "Private key not in range [1, n)"),
            Self::InvalidPublicKey => write!(f, "Invalid public key point"),
            Self::InvalidWifLength(x) => write!(f, "Invalid WIF length: {}", x),
            Self::InvalidCompressionFlag(x) => write!(f, "Invalid compression flag: {:#04x}", x),
            Self::UnknownNetworkVersion(x) => write!(f, "Unknown network version: {:#04x}", x),
            Self::MissingPrivateKey => write!(f, "Missing private key"),
            Self::BadEntropyLength { expected, found } => write!(f, "Expected {} bytes of entropy, found {} bytes", expected, found),
            Self::Bs58(x) => write!(f, "{}", x),
            Self::Secp(x) => write!(f, "{}", x)
        }
    }
}

/*
    encoding module impls
*/
impl fmt::Display for Bs58Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidChar((c, i)) => write!(f, "Invalid base58 character '{}' at index {}", c, i),
            Self::NonAsciiChar(i) => write!(f, "Non ascii character at index {}", i),
            Self::InvalidLength(x) => write!(f, "Decoded data too short: {} bytes", x),
            Self::BadChecksum => write!(f, "Bad checksum"),
            Self::Unknown(x) => write!(f, "{}", x)
        }
    }
}

/*
    network module impls
*/
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
