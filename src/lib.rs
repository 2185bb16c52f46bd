/*
    Library to create, validate, serialize and use
    secp256k1 private/public key pairs for Bitcoin.

    Key pairs can be constructed from raw private key bytes,
    from an existing public key (verify only), from a
    wallet-import-format string or from OS entropy, and can
    be exported back to WIF with their network and compression
    metadata intact.

    References:
        - The Bitcoin Book (https://github.com/bitcoinbook/bitcoinbook/)
            most of the general concepts come from here

        - learn me a bitcoin (https://learnmeabitcoin.com/)
            for great visualisation of the WIF layout

        - The Rust-Bitcoin repository (https://github.com/rust-bitcoin/rust-bitcoin)
            for providing clear reference code and WIF test vectors.
*/

//Outward facing modules
pub mod key;
pub mod network;
pub mod encoding;
pub mod prelude;

//Modules for internal use
mod hash;
pub mod util;
mod entropy;
mod impls;

//Dependencies
use rand::rngs::OsRng;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey, Signature};
use sha2::{Digest, Sha256};
use once_cell::sync::OnceCell;
use bs58;
