/*
    Hash module containing the hash functions needed to
    checksum Base58Check encoded data.
*/

use crate::{
    Sha256, Digest
};

/*
    Takes in a byte array and returns the sha256 hash of it
*/
pub fn sha256<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/*
    Double sha256. Used for the 4 byte checksum on serialized keys.
*/
pub fn sha256d<T>(input: T) -> [u8; 32]
where T: AsRef<[u8]>
{
    sha256(sha256(input))
}
