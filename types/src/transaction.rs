//! Transaction model.
//!
//! Transactions carry their own timestamp between the version and the
//! inputs, as required by the proof-of-stake kernel.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::encode::Encodable;
use crate::hash::Hash256;
use crate::script::Script;

/// Reference to a previous transaction output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The outpoint spent by coinbase inputs.
    pub const NULL: Self = Self {
        txid: Hash256::ZERO,
        vout: u32::MAX,
    };

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl Encodable for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.txid.as_bytes());
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxIn {
    /// A coinbase input carrying `script_sig`.
    pub fn coinbase(script_sig: Script) -> Self {
        Self {
            previous_output: OutPoint::NULL,
            script_sig,
            sequence: u32::MAX,
        }
    }
}

impl Encodable for TxIn {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.previous_output.consensus_encode(out);
        self.script_sig.consensus_encode(out);
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Script,
}

impl TxOut {
    /// The empty output: zero value, empty script.
    pub fn empty() -> Self {
        Self {
            value: Amount::ZERO,
            script_pubkey: Script::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_zero() && self.script_pubkey.is_empty()
    }
}

impl Encodable for TxOut {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.units().to_le_bytes());
        self.script_pubkey.consensus_encode(out);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}

impl Encodable for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        self.inputs.consensus_encode(out);
        self.outputs.consensus_encode(out);
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coinbase() -> Transaction {
        Transaction {
            version: 1,
            time: 1_615_521_906,
            inputs: vec![TxIn::coinbase(Script::new().push_int(0))],
            outputs: vec![TxOut::empty()],
            lock_time: 0,
        }
    }

    #[test]
    fn coinbase_detection() {
        assert!(coinbase().is_coinbase());
        let mut tx = coinbase();
        tx.inputs[0].previous_output.vout = 0;
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn encoding_layout() {
        let bytes = coinbase().to_bytes();
        // version + time + 1 input (32 + 4 + 2 + 4) + 1 empty output (8 + 1) + lock time
        assert_eq!(bytes.len(), 4 + 4 + 1 + 42 + 1 + 9 + 4);
        assert_eq!(&bytes[..4], &1i32.to_le_bytes());
        assert_eq!(&bytes[4..8], &1_615_521_906u32.to_le_bytes());
        assert_eq!(bytes[8], 1);
        assert_eq!(&bytes[9..41], &[0u8; 32]);
        assert_eq!(&bytes[41..45], &[0xff; 4]);
    }

    #[test]
    fn empty_output() {
        assert!(TxOut::empty().is_empty());
        let paid = TxOut {
            value: crate::COIN,
            script_pubkey: Script::new(),
        };
        assert!(!paid.is_empty());
    }
}
