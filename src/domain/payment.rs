use crate::config::{DEFAULT_CHANGE_ADDRESS, DEFAULT_LOVELACE_AMOUNT, DEFAULT_RECEIVER_ADDRESS};
use crate::error::{AnvilError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An amount in lovelace, the smallest unit of ada.
///
/// Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lovelace(u64);

impl Lovelace {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl From<u64> for Lovelace {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single payment destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutput {
    pub address: String,
    pub lovelace: Lovelace,
}

impl PaymentOutput {
    pub fn new(address: impl Into<String>, lovelace: impl Into<Lovelace>) -> Self {
        Self {
            address: address.into(),
            lovelace: lovelace.into(),
        }
    }
}

/// Parses `ADDRESS:LOVELACE`, splitting on the last colon.
impl FromStr for PaymentOutput {
    type Err = AnvilError;

    fn from_str(s: &str) -> Result<Self> {
        let (address, amount) = s.rsplit_once(':').ok_or_else(|| {
            AnvilError::ConfigError(format!("expected ADDRESS:LOVELACE, got '{s}'"))
        })?;
        let address = address.trim();
        if address.is_empty() {
            return Err(AnvilError::ConfigError(format!(
                "missing address in output '{s}'"
            )));
        }
        let lovelace: u64 = amount.trim().parse().map_err(|e| {
            AnvilError::ConfigError(format!("invalid lovelace amount '{amount}': {e}"))
        })?;

        Ok(Self::new(address, lovelace))
    }
}

/// Body of a transaction build request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub change_address: String,
    pub outputs: Vec<PaymentOutput>,
}

impl PaymentRequest {
    pub fn new(change_address: impl Into<String>, outputs: Vec<PaymentOutput>) -> Self {
        Self {
            change_address: change_address.into(),
            outputs,
        }
    }

    /// Encodes the request as a UTF-8 JSON body.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(AnvilError::EncodeError)
    }
}

/// The fixed preprod payment: one output of 10 ada to the demo receiver.
impl Default for PaymentRequest {
    fn default() -> Self {
        Self::new(
            DEFAULT_CHANGE_ADDRESS,
            vec![PaymentOutput::new(
                DEFAULT_RECEIVER_ADDRESS,
                DEFAULT_LOVELACE_AMOUNT,
            )],
        )
    }
}
