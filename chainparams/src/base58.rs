//! Base58 version-prefix table.
//!
//! The table is total: every [`Base58Type`] has an entry on every network,
//! enforced by the struct layout rather than a runtime lookup.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubKeyAddress,
    ScriptAddress,
    SecretKey,
    StealthAddress,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubKeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::StealthAddress,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    pub pubkey_address: Vec<u8>,
    pub script_address: Vec<u8>,
    pub secret_key: Vec<u8>,
    pub stealth_address: Vec<u8>,
    pub ext_public_key: Vec<u8>,
    pub ext_secret_key: Vec<u8>,
}

impl Base58Prefixes {
    pub fn get(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubKeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::StealthAddress => &self.stealth_address,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &[u8])> + '_ {
        Base58Type::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
