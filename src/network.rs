/*
    Network parameter catalog.

    Each network carries the version byte used to tag
    wallet-import-format private keys for that network.
    This library reads nothing else from a network entry,
    so callers are free to define their own.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    pub name: &'static str,
    pub wif: u8
}

pub const BITCOIN: Network = Network { name: "bitcoin", wif: 0x80 };
pub const TESTNET: Network = Network { name: "testnet", wif: 0xEF };

//Default candidate list for WIF decoding when the caller
//does not know which network the string belongs to.
pub const ALL: [Network; 2] = [BITCOIN, TESTNET];

impl Network {
    /**
        Scans the candidate list in order and returns the first
        network whose WIF version byte matches.
    */
    pub fn from_wif_byte(byte: u8, candidates: &[Network]) -> Option<Network> {
        candidates.iter().copied().find(|network| network.wif == byte)
    }
}
