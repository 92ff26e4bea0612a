// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Queue entries handed to the broadcast worker.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::blockchain::ChainId;

/// Label telling the worker how to interpret a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    /// Raw value transfer of the native asset
    None,
    /// ERC-20 contract call
    Erc20,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::None => "none",
            Extension::Erc20 => "erc20",
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work for the broadcast worker.
///
/// Serialized with an explicit `extension` tag so the worker can dispatch
/// without inspecting the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "extension")]
pub enum SubmissionRecord {
    /// Native asset transfer. `value` is a 32-byte `0x` hex word and
    /// `data` is always `"0x"`.
    #[serde(rename = "none", rename_all = "camelCase")]
    RawValueTransfer {
        chain_id: ChainId,
        from_address: String,
        to_address: String,
        value: String,
        data: String,
    },

    /// Token transfer. `encoded_call` is the ABI-encoded
    /// `transfer(address,uint256)` call.
    #[serde(rename = "erc20", rename_all = "camelCase")]
    ContractCallTransfer {
        chain_id: ChainId,
        from_address: String,
        contract_address: String,
        encoded_call: String,
        simulate_only: bool,
    },
}

impl SubmissionRecord {
    pub fn extension(&self) -> Extension {
        match self {
            SubmissionRecord::RawValueTransfer { .. } => Extension::None,
            SubmissionRecord::ContractCallTransfer { .. } => Extension::Erc20,
        }
    }

    pub fn chain_id(&self) -> ChainId {
        match self {
            SubmissionRecord::RawValueTransfer { chain_id, .. }
            | SubmissionRecord::ContractCallTransfer { chain_id, .. } => *chain_id,
        }
    }
}

/// Identifier the queue assigns to an accepted record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct QueueId(String);

impl QueueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<QueueId> for String {
    fn from(value: QueueId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_transfer_serializes_with_none_tag() {
        let record = SubmissionRecord::RawValueTransfer {
            chain_id: 1,
            from_address: "0xfrom".into(),
            to_address: "0xto".into(),
            value: "0x01".into(),
            data: "0x".into(),
        };

        assert_eq!(record.extension(), Extension::None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "extension": "none",
                "chainId": 1,
                "fromAddress": "0xfrom",
                "toAddress": "0xto",
                "value": "0x01",
                "data": "0x"
            })
        );
    }

    #[test]
    fn contract_call_keeps_its_tag_through_storage() {
        let record = SubmissionRecord::ContractCallTransfer {
            chain_id: 43113,
            from_address: "0xfrom".into(),
            contract_address: "0xtoken".into(),
            encoded_call: "0xa9059cbb".into(),
            simulate_only: true,
        };

        let stored = serde_json::to_string(&record).unwrap();
        assert!(stored.contains(r#""extension":"erc20""#));

        let restored: SubmissionRecord = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored.extension(), Extension::Erc20);
        assert_eq!(restored.chain_id(), 43113);
        assert_eq!(restored, record);
    }
}
