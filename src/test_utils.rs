//! Shared test utilities and Mother pattern factories.
//!
//! `TransactionMother` builds parsed transactions for presentation tests;
//! `JsonMother` builds raw indexer records for parsing and client tests.
#![allow(dead_code)]

use serde_json::{Value, json};

use crate::constants::P2PKH_LOCK_SCRIPT_HASH;
use crate::domain::Transaction;
use crate::domain::TransactionDetails;
use crate::domain::TxStatus;
use crate::domain::transaction::types::{
    AssetOutPoint, AssetTransferInput, AssetTransferOutput, ComposeAssetDetails,
    DecomposeAssetDetails, MintAssetDetails, PayDetails, SetRegularKeyDetails, StoreDetails,
    TransferAssetDetails,
};

pub const MINT_ASSET_TYPE: &str =
    "4100000000000000000000000000000000000000000000000000000000000001";

// ============================================================================
// Transaction Mother
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    /// A confirmed, successful transaction with the given payload.
    #[must_use]
    pub fn with_details(hash: &str, details: TransactionDetails) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            block_number: Some(1_234),
            seq: 7,
            fee: "100000".to_string(),
            signer: "tccqsigner".to_string(),
            network_id: "tc".to_string(),
            status: TxStatus::Confirmed {
                transaction_index: 2,
            },
            timestamp: Some(1_700_000_000),
            details,
        }
    }

    #[must_use]
    pub fn pay(hash: &str, quantity: &str) -> Transaction {
        Self::with_details(
            hash,
            TransactionDetails::Pay(PayDetails {
                quantity: quantity.to_string(),
                receiver: "tccqreceiver".to_string(),
            }),
        )
    }

    #[must_use]
    pub fn set_regular_key(hash: &str) -> Transaction {
        Self::with_details(
            hash,
            TransactionDetails::SetRegularKey(SetRegularKeyDetails {
                key: "0x1d2c3b4a".to_string(),
            }),
        )
    }

    #[must_use]
    pub fn store(hash: &str) -> Transaction {
        Self::with_details(
            hash,
            TransactionDetails::Store(StoreDetails {
                content: "hello".to_string(),
                certifier: "tccqcertifier".to_string(),
            }),
        )
    }

    #[must_use]
    pub fn mint_asset(hash: &str, metadata: &str) -> Transaction {
        Self::with_details(
            hash,
            TransactionDetails::MintAsset(MintAssetDetails {
                lock_script_hash: P2PKH_LOCK_SCRIPT_HASH.to_string(),
                parameters: vec![vec![0x01, 0xff], vec![0xbe, 0xef]],
                asset_type: MINT_ASSET_TYPE.to_string(),
                supply: None,
                approver: None,
                recipient: None,
                metadata: metadata.to_string(),
            }),
        )
    }

    #[must_use]
    pub fn transfer_asset(hash: &str, inputs: usize, outputs: usize, burns: usize) -> Transaction {
        Self::with_details(
            hash,
            TransactionDetails::TransferAsset(TransferAssetDetails {
                inputs: (0..inputs).map(Self::input).collect(),
                outputs: (0..outputs).map(Self::output).collect(),
                burns: (0..burns).map(Self::input).collect(),
            }),
        )
    }

    #[must_use]
    pub fn compose_asset(hash: &str, inputs: usize) -> Transaction {
        Self::with_details(
            hash,
            TransactionDetails::ComposeAsset(ComposeAssetDetails {
                inputs: (0..inputs).map(Self::input).collect(),
                asset_type: MINT_ASSET_TYPE.to_string(),
                recipient: Some("tccqrecipient".to_string()),
                supply: "1".to_string(),
                lock_script_hash: P2PKH_LOCK_SCRIPT_HASH.to_string(),
                parameters: vec![vec![0x01]],
            }),
        )
    }

    #[must_use]
    pub fn decompose_asset(hash: &str, outputs: usize) -> Transaction {
        Self::with_details(
            hash,
            TransactionDetails::DecomposeAsset(DecomposeAssetDetails {
                input: Self::input(0),
                outputs: (0..outputs).map(Self::output).collect(),
            }),
        )
    }

    #[must_use]
    pub fn unknown(hash: &str, tag: &str) -> Transaction {
        Self::with_details(
            hash,
            TransactionDetails::Unknown {
                tag: tag.to_string(),
            },
        )
    }

    /// Input `i`, spending output `i` of a previous transaction.
    #[must_use]
    pub fn input(i: usize) -> AssetTransferInput {
        AssetTransferInput {
            prev_out: AssetOutPoint {
                tracker: format!("{i:064x}"),
                index: i as u64,
                asset_type: MINT_ASSET_TYPE.to_string(),
                owner: Some("tccqowner".to_string()),
                quantity: "100".to_string(),
            },
            lock_script: vec![0x30, 0x01],
            unlock_script: vec![0x32, 0x00],
        }
    }

    #[must_use]
    pub fn output(i: usize) -> AssetTransferOutput {
        AssetTransferOutput {
            asset_type: MINT_ASSET_TYPE.to_string(),
            owner: Some(format!("tccqowner{i}")),
            quantity: "50".to_string(),
            lock_script_hash: P2PKH_LOCK_SCRIPT_HASH.to_string(),
            parameters: vec![vec![0xaa, i as u8]],
        }
    }
}

// ============================================================================
// JSON Mother
// ============================================================================

pub struct JsonMother;

impl JsonMother {
    pub const PAY_HASH: &'static str =
        "5ea8ee1bc4b1e3e40d6e4b2de1b5c7c2d2bf0cc3e9e4b4b62b8ea3ab9a5c0f71";

    /// A confirmed, successful record of type `tag` with `payload`.
    #[must_use]
    pub fn record(hash: &str, tag: &str, payload: Value) -> Value {
        json!({
            "hash": hash,
            "type": tag,
            "blockNumber": 1_234,
            "transactionIndex": 2,
            "seq": 7,
            "fee": "100000",
            "signer": "tccq9h7vnl68frvqapzv3tujrxtxtwqdnxw6yamrrgd",
            "networkId": "tc",
            "isPending": false,
            "success": true,
            "timestamp": 1_700_000_000,
            tag: payload,
        })
    }

    #[must_use]
    pub fn pay() -> Value {
        Self::record(
            Self::PAY_HASH,
            "pay",
            json!({
                "quantity": "1500000000000000000",
                "receiver": "tccqyqjsh4vtl8ek3dqkk4qjy9zs4q9rjqh9sfsdwe5",
            }),
        )
    }

    #[must_use]
    pub fn store() -> Value {
        Self::record(
            "0x2a",
            "store",
            json!({
                "content": "CodeChain",
                "certifier": "tcaqyqckq0zgdxgpck6tjdg4qmp52p2vx3qaexqnegylk",
            }),
        )
    }

    #[must_use]
    pub fn mint_asset() -> Value {
        Self::record(
            "0x3b",
            "mintAsset",
            json!({
                "lockScriptHash": P2PKH_LOCK_SCRIPT_HASH,
                "parameters": ["0x01ff", [190, 239]],
                "assetType": MINT_ASSET_TYPE,
                "supply": "1000",
                "approver": null,
                "recipient": "tcaqyqckq0zgdxgpck6tjdg4qmp52p2vx3qaexqnegylk",
                "metadata": "{\"name\":\"Gold\"}",
            }),
        )
    }

    #[must_use]
    pub fn transfer_asset(inputs: usize, outputs: usize, burns: usize) -> Value {
        Self::record(
            "0x4c",
            "transferAsset",
            json!({
                "inputs": (0..inputs).map(Self::input).collect::<Vec<_>>(),
                "outputs": (0..outputs).map(Self::output).collect::<Vec<_>>(),
                "burns": (0..burns).map(Self::input).collect::<Vec<_>>(),
            }),
        )
    }

    #[must_use]
    pub fn compose_asset(inputs: usize) -> Value {
        Self::record(
            "0x5d",
            "composeAsset",
            json!({
                "inputs": (0..inputs).map(Self::input).collect::<Vec<_>>(),
                "assetType": MINT_ASSET_TYPE,
                "recipient": null,
                "supply": 1,
                "lockScriptHash": P2PKH_LOCK_SCRIPT_HASH,
                "parameters": [],
            }),
        )
    }

    #[must_use]
    pub fn decompose_asset(outputs: usize) -> Value {
        Self::record(
            "0x6e",
            "decomposeAsset",
            json!({
                "input": Self::input(0),
                "outputs": (0..outputs).map(Self::output).collect::<Vec<_>>(),
            }),
        )
    }

    #[must_use]
    pub fn input(i: usize) -> Value {
        json!({
            "prevOut": {
                "tracker": format!("0x{i:064x}"),
                "index": i,
                "assetType": MINT_ASSET_TYPE,
                "owner": "tcaqyqckq0zgdxgpck6tjdg4qmp52p2vx3qaexqnegylk",
                "quantity": "100",
            },
            "lockScript": [0x30, 0x01],
            "unlockScript": {"type": "Buffer", "data": [0x32, 0x00]},
        })
    }

    #[must_use]
    pub fn output(i: usize) -> Value {
        json!({
            "assetType": MINT_ASSET_TYPE,
            "owner": null,
            "quantity": 50,
            "lockScriptHash": P2PKH_LOCK_SCRIPT_HASH,
            "parameters": [format!("{i:02x}")],
        })
    }
}
