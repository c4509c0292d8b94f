use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chain::messages::{coins, Msg};
use crate::chain::proto::{Coin, Fee};
use crate::chain::{ChainInfo, SigningClient};
use crate::config::TxConfig;

/// Fee as the signer sees it: coins plus a gas limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: u64,
}

impl StdFee {
    pub fn new(denom: &str, amount: u128, gas: u64) -> Self {
        Self {
            amount: coins(amount, denom),
            gas,
        }
    }
}

impl From<&StdFee> for Fee {
    fn from(fee: &StdFee) -> Self {
        Fee {
            amount: fee.amount.clone(),
            gas_limit: fee.gas,
            ..Default::default()
        }
    }
}

/// Simulation-based fee estimation for one chain
#[derive(Debug, Clone, PartialEq)]
pub struct FeeEstimator {
    pub fee_denom: String,
    pub gas_price: Option<f64>,
    pub gas_adjustment: f64,
    pub default_fee_amount: u64,
    pub default_gas: u64,
}

impl FeeEstimator {
    pub fn from_chain(chain: &ChainInfo, config: &TxConfig) -> Self {
        Self {
            fee_denom: chain.fee_denom.clone(),
            gas_price: chain.gas_price,
            gas_adjustment: config.gas_adjustment,
            default_fee_amount: config.default_fee_amount,
            default_gas: config.default_gas,
        }
    }

    pub fn default_fee(&self) -> StdFee {
        StdFee::new(&self.fee_denom, u128::from(self.default_fee_amount), self.default_gas)
    }

    /// `gas_used * gas_adjustment` rounded up, paid at `gas_price`.
    /// `None` without a usable gas price.
    pub fn fee_for_gas(&self, gas_used: u64) -> Option<StdFee> {
        let price = self.gas_price.filter(|p| p.is_finite() && *p >= 0.0)?;
        let adjustment = if self.gas_adjustment.is_finite() && self.gas_adjustment > 0.0 {
            self.gas_adjustment
        } else {
            1.0
        };

        let gas = (gas_used as f64 * adjustment).ceil() as u64;
        let amount = (gas as f64 * price).ceil() as u128;
        Some(StdFee::new(&self.fee_denom, amount, gas))
    }

    /// Never fails: simulation errors, missing or zero gas info and missing gas price
    /// all yield [`Self::default_fee`].
    pub async fn estimate_fee(
        &self,
        client: &dyn SigningClient,
        signer: &str,
        messages: &[Msg],
        memo: &str,
    ) -> StdFee {
        if self.gas_price.is_none() {
            debug!("No gas price for {}, using default fee", self.fee_denom);
            return self.default_fee();
        }

        match client.simulate(signer, messages, memo).await {
            Ok(Some(gas_used)) if gas_used > 0 => match self.fee_for_gas(gas_used) {
                Some(fee) => {
                    debug!("Simulated {} gas, fee {:?}", gas_used, fee.amount);
                    fee
                }
                None => self.default_fee(),
            },
            Ok(_) => {
                warn!(
                    "Simulation returned no gas info, falling back on default fee of {}{}",
                    self.default_fee_amount, self.fee_denom
                );
                self.default_fee()
            }
            Err(e) => {
                warn!("Failed to simulate tx, falling back on default fee: {}", e);
                self.default_fee()
            }
        }
    }
}
