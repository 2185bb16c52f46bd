/*
    Module that bundles together the encoding schemes used
    for serialized private keys.
*/

pub mod bs58check;
