/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_keypair::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    key::{
        KeyPair,
        KeyOptions,
        KeyError,
        PRIVATE_KEY_LEN
    },

    network::{
        Network,
        BITCOIN,
        TESTNET,
        ALL
    },

    encoding::bs58check::Bs58Error,

    util::{
        encode_02x,
        decode_02x,
        try_into
    }

};
