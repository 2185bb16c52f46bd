use rand::RngCore;

use crate::{
    OsRng
};

/**
    Generates the requested number of random bytes using OsRng.

    This is the default byte generator used for random key
    creation. Key generation can also be run with a caller
    supplied generator instead.
*/
pub fn random_bytes(size: usize) -> Vec<u8> {
    let mut osrng = osrng();
    let mut bytes: Vec<u8> = vec![0; size];
    osrng.fill_bytes(&mut bytes);
    bytes
}

/**
    Returns new entropy source
*/
fn osrng() -> OsRng {
    match OsRng::new() {
        Ok(g) => g,
        Err(e) => panic!("Failed to obtain OS RNG: {}", e)
    }
}
