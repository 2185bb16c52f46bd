use crate::{
    bs58,
    hash,
    util::try_into
};

//Length of the sha256d checksum appended to check encoded data.
const CHECKSUM_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bs58Error {
    InvalidChar((char, usize)),
    NonAsciiChar(usize),
    InvalidLength(usize),
    BadChecksum,
    Unknown(String)
}

/**
    Returns the Base58Check encoded value of the version byte
    followed by the payload.
    * The checksum is the first 4 bytes of the double sha256
      of version | payload.
*/
pub fn check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = vec![version];
    data.extend_from_slice(payload);

    //Create the checksum of the data and append it.
    let checksum = hash::sha256d(&data);
    data.extend_from_slice(&checksum[0..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/**
    Decodes a given Base58 string into a byte vector.
    DOES NOT verify or remove the checksum if present.
*/
pub fn decode(encoded: &str) -> Result<Vec<u8>, Bs58Error> {
    match bs58::decode(encoded).into_vec() {
        Ok(x) => Ok(x),
        Err(x) => {
            match x {
                bs58::decode::Error::InvalidCharacter { character: c, index: i } => Err(Bs58Error::InvalidChar((c, i))),
                bs58::decode::Error::NonAsciiCharacter { index: i } => Err(Bs58Error::NonAsciiChar(i)),
                x => Err(Bs58Error::Unknown(x.to_string()))
            }
        }
    }
}

/**
    Validate the checksum on a Base58Check encoded string
*/
pub fn validate_checksum(encoded: &str) -> Result<bool, Bs58Error> {
    let bytes = decode(encoded)?;
    if bytes.len() < CHECKSUM_LEN { return Err(Bs58Error::InvalidLength(bytes.len())) }

    let payload = &bytes[..bytes.len()-CHECKSUM_LEN];
    let extracted_checksum: [u8; 4] = try_into(bytes[bytes.len()-CHECKSUM_LEN..].to_vec());
    let derived_checksum: [u8; 4] = try_into(hash::sha256d(payload)[0..CHECKSUM_LEN].to_vec());

    Ok(extracted_checksum == derived_checksum)
}

/**
    Returns the decoded payload with the checksum verified and removed.
    The version byte is NOT removed as interpreting it is up to the caller.
*/
pub fn check_decode(encoded: &str) -> Result<Vec<u8>, Bs58Error> {
    let bytes = decode(encoded)?;
    if bytes.len() < CHECKSUM_LEN { return Err(Bs58Error::InvalidLength(bytes.len())) }

    let split = bytes.len() - CHECKSUM_LEN;
    if hash::sha256d(&bytes[..split])[0..CHECKSUM_LEN] != bytes[split..] {
        return Err(Bs58Error::BadChecksum)
    }

    Ok(bytes[..split].to_vec())
}
