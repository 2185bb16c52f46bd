/*
    Key pair module.

    Implements construction, validation, WIF serialization
    and signing/verification for secp256k1 key pairs.

    A key pair either holds a private key, from which the
    public key point is derived on first use and cached, or
    only a public key, in which case it can verify signatures
    but never produce them.

    Key material is not zeroized on drop.
*/

use crate::{
    Message,
    OnceCell,
    PublicKey,
    Secp256k1,
    SecretKey,
    Signature,
    encoding::bs58check,
    encoding::bs58check::Bs58Error,
    entropy,
    network,
    network::Network
};

//Length of a raw private key in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

//Marker byte appended to a WIF payload when the public key
//is to be serialized in compressed form.
const COMPRESSION_MARKER: u8 = 0x01;

#[derive(Debug, Clone, PartialEq)]
pub enum KeyError {
    BadPrivateKeyLength { expected: usize, found: usize },
    PrivateKeyOutOfRange,
    InvalidPublicKey,
    InvalidWifLength(usize),
    InvalidCompressionFlag(u8),
    UnknownNetworkVersion(u8),
    MissingPrivateKey,
    BadEntropyLength { expected: usize, found: usize },
    Bs58(Bs58Error),
    Secp(secp256k1::Error)
}

impl From<Bs58Error> for KeyError {
    fn from(error: Bs58Error) -> Self {
        KeyError::Bs58(error)
    }
}

/**
    Options recognised by the key pair constructors.

    Defaults to a compressed public key on the bitcoin network.
*/
#[derive(Debug, Clone, Copy)]
pub struct KeyOptions {
    pub compressed: bool,
    pub network: Network
}

impl Default for KeyOptions {
    fn default() -> Self {
        KeyOptions {
            compressed: true,
            network: network::BITCOIN
        }
    }
}

#[derive(Clone)]
pub struct KeyPair {
    privkey: Option<SecretKey>,
    point: OnceCell<PublicKey>,
    compressed: bool,
    network: Network
}

impl KeyPair {

    /**
        Creates a key pair from raw private key bytes.

        The key must be exactly 32 bytes and lie strictly
        between 0 and the curve group order. The public key
        is not derived here, only on first access.
    */
    pub fn from_priv_key(d: &[u8], options: KeyOptions) -> Result<Self, KeyError> {
        if d.len() != PRIVATE_KEY_LEN {
            return Err(KeyError::BadPrivateKeyLength { expected: PRIVATE_KEY_LEN, found: d.len() })
        }

        let privkey = SecretKey::from_slice(d).map_err(|_| KeyError::PrivateKeyOutOfRange)?;
        Ok(KeyPair {
            privkey: Some(privkey),
            point: OnceCell::new(),
            compressed: options.compressed,
            network: options.network
        })
    }

    /**
        Creates a verify-only key pair from a serialized public key.

        When no compression flag is supplied it is inferred from the
        encoding of the given key (33 bytes compressed, 65 bytes
        uncompressed). An explicit flag re-serializes the point in
        the requested form instead. Signing with the resulting key
        pair always fails.
    */
    pub fn from_pub_key(q: &[u8], compressed: Option<bool>, network: Network) -> Result<Self, KeyError> {
        let point = PublicKey::from_slice(q).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(KeyPair {
            privkey: None,
            point: OnceCell::with_value(point),
            compressed: compressed.unwrap_or(q.len() == 33),
            network
        })
    }

    /**
        Imports a key pair from a wallet-import-format string.

        The version byte of the decoded payload is matched against
        the candidate networks in order and the first match wins.
        Pass a single element slice when the network is known.
    */
    pub fn from_wif(wif: &str, networks: &[Network]) -> Result<Self, KeyError> {
        let payload = bs58check::check_decode(wif)?;

        //Payload is: version byte | 32 key bytes | optional compression marker
        let compressed = match payload.len() {
            33 => false,
            34 => {
                if payload[33] != COMPRESSION_MARKER {
                    return Err(KeyError::InvalidCompressionFlag(payload[33]))
                }
                true
            },
            x => return Err(KeyError::InvalidWifLength(x))
        };

        let network = match Network::from_wif_byte(payload[0], networks) {
            Some(x) => x,
            None => return Err(KeyError::UnknownNetworkVersion(payload[0]))
        };

        Self::from_priv_key(&payload[1..33], KeyOptions { compressed, network })
    }

    /**
        Creates a key pair from a random private key drawn from OsRng.
    */
    pub fn make_random(options: KeyOptions) -> Result<Self, KeyError> {
        Self::make_random_with_rng(options, entropy::random_bytes)
    }

    /**
        Creates a key pair from a random private key drawn from the
        given byte generator.

        Candidates outside the valid scalar range are discarded and
        redrawn until an in-range value is found. The loop has no
        iteration cap, so a generator that never produces an in-range
        value will spin forever. A generator that returns the wrong
        number of bytes fails immediately instead.
    */
    pub fn make_random_with_rng<F>(options: KeyOptions, mut rng: F) -> Result<Self, KeyError>
    where F: FnMut(usize) -> Vec<u8>
    {
        loop {
            let candidate = rng(PRIVATE_KEY_LEN);
            if candidate.len() != PRIVATE_KEY_LEN {
                return Err(KeyError::BadEntropyLength { expected: PRIVATE_KEY_LEN, found: candidate.len() })
            }

            //Rejection sampling. Out of range draws are thrown away.
            if SecretKey::from_slice(&candidate).is_err() {
                continue
            }

            return Self::from_priv_key(&candidate, options)
        }
    }

    /**
        Returns the serialized public key.
        33 bytes if compressed, 65 bytes otherwise.

        For key pairs built from a private key the curve point is
        computed on the first call and reused afterwards.
    */
    pub fn public_key(&self) -> Vec<u8> {
        let point = self.point();
        if self.compressed {
            point.serialize().to_vec()
        } else {
            point.serialize_uncompressed().to_vec()
        }
    }

    /**
        Returns the raw private key bytes, or None for a
        verify-only key pair.
    */
    pub fn priv_key_bytes(&self) -> Option<[u8; 32]> {
        self.privkey.as_ref().map(|privkey| {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(&privkey[..]);
            bytes
        })
    }

    pub fn has_priv_key(&self) -> bool {
        self.privkey.is_some()
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /**
        Exports the private key as a wallet-import-format string.
        * The compression marker byte is appended for key pairs
          carrying the compressed flag.
    */
    pub fn to_wif(&self) -> Result<String, KeyError> {
        let key = match self.priv_key_bytes() {
            Some(x) => x,
            None => return Err(KeyError::MissingPrivateKey)
        };

        let mut payload = key.to_vec();
        if self.compressed {
            payload.push(COMPRESSION_MARKER);
        }

        Ok(bs58check::check_encode(self.network.wif, &payload))
    }

    /**
        Signs a 32 byte digest and returns the compact 64 byte
        signature r|s.

        Signatures are deterministic per RFC6979. When low_r is set
        the nonce is ground until the big-endian r component has its
        top bit clear, which keeps the DER form of the signature a
        byte shorter and rules out a known malleability class. Both
        forms verify equally.
    */
    pub fn sign(&self, hash: &[u8], low_r: bool) -> Result<[u8; 64], KeyError> {
        let privkey = match &self.privkey {
            Some(x) => x,
            None => return Err(KeyError::MissingPrivateKey)
        };
        let message = Message::from_slice(hash).map_err(KeyError::Secp)?;

        let secp = Secp256k1::new();
        let signature = if low_r {
            secp.sign_low_r(&message, privkey)
        } else {
            secp.sign(&message, privkey)
        };

        Ok(signature.serialize_compact())
    }

    /**
        Verifies a compact signature over a 32 byte digest against
        this key pair's public key.

        A well formed signature that does not match returns Ok(false)
        rather than an error. Only malformed inputs error.
    */
    pub fn verify(&self, hash: &[u8], signature: &[u8]) -> Result<bool, KeyError> {
        let message = Message::from_slice(hash).map_err(KeyError::Secp)?;
        let signature = Signature::from_compact(signature).map_err(KeyError::Secp)?;

        let secp = Secp256k1::new();
        Ok(secp.verify(&message, &signature, self.point()).is_ok())
    }

    /**
        Returns the public key point, deriving and caching it from
        the private key on the first call. Verify-only key pairs had
        their point stored at construction.
    */
    fn point(&self) -> &PublicKey {
        self.point.get_or_init(|| {
            let secp = Secp256k1::new();
            let privkey = self.privkey.as_ref().expect("Key pair with neither key");
            PublicKey::from_secret_key(&secp, privkey)
        })
    }
}
