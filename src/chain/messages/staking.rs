use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use super::memo::{encode_validator_memo, MemoIntent, MemoLayout};
use super::{bank, Msg};
use crate::chain::proto::quicksilver::interchainstaking::v1::{MsgRequestRedemption, MsgSignalIntent};
use crate::chain::proto::Coin;

/// Share of delegation a validator should receive, `weight` in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorIntent {
    pub valoper_address: String,
    pub weight: f64,
}

impl ValidatorIntent {
    pub fn new(valoper_address: &str, weight: f64) -> Self {
        Self {
            valoper_address: valoper_address.to_string(),
            weight,
        }
    }
}

impl From<&ValidatorIntent> for MemoIntent {
    fn from(intent: &ValidatorIntent) -> Self {
        MemoIntent::new(&intent.valoper_address, intent.weight)
    }
}

/// Wire form of an intent list: `0.5000cosmosvaloper1..,0.5000cosmosvaloper1..`
pub fn format_intents(intents: &[ValidatorIntent]) -> String {
    intents
        .iter()
        .map(|i| format!("{:.4}{}", i.weight, i.valoper_address))
        .collect::<Vec<_>>()
        .join(",")
}

/// Inverse of [`format_intents`]
pub fn parse_intents(input: &str) -> Result<Vec<ValidatorIntent>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            let split = entry
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .ok_or_else(|| anyhow!("Intent {:?} has no validator address", entry))?;
            let (weight, address) = entry.split_at(split);
            let weight: f64 = weight
                .parse()
                .map_err(|_| anyhow!("Intent {:?} has no weight", entry))?;
            Ok(ValidatorIntent::new(address, weight))
        })
        .collect()
}

/// Give the last validator whatever the others leave, so the weights sum to 1
pub fn normalize_intents(intents: &[ValidatorIntent]) -> Vec<ValidatorIntent> {
    let mut normalized = intents.to_vec();
    if let Some((last, rest)) = normalized.split_last_mut() {
        let assigned: f64 = rest.iter().map(|i| i.weight).sum();
        last.weight = (1.0 - assigned).max(0.0);
    }
    normalized
}

/// Re-weight delegation intent for `chain_id`
pub fn signal_intent(chain_id: &str, intents: &[ValidatorIntent], from_address: &str) -> Msg {
    Msg::SignalIntent(MsgSignalIntent {
        chain_id: chain_id.to_string(),
        intents: format_intents(intents),
        from_address: from_address.to_string(),
    })
}

/// Burn qAssets in exchange for the native token delivered to `destination_address`
pub fn request_redemption(value: Coin, from_address: &str, destination_address: &str) -> Msg {
    Msg::RequestRedemption(MsgRequestRedemption {
        value: Some(value),
        destination_address: destination_address.to_string(),
        from_address: from_address.to_string(),
    })
}

/// Liquid stake on the host zone: a plain bank send to the zone's deposit address,
/// with validator intent carried in the memo. Returns the message and the memo.
pub fn liquid_stake(
    from_address: &str,
    deposit_address: &str,
    amount: Coin,
    intents: &[ValidatorIntent],
    layout: MemoLayout,
) -> Result<(Msg, String)> {
    if deposit_address.is_empty() {
        bail!("Zone has no deposit address");
    }

    let memo_intents: Vec<MemoIntent> = intents.iter().map(MemoIntent::from).collect();
    let memo = encode_validator_memo(&memo_intents, layout)?;

    Ok((bank::send(from_address, deposit_address, vec![amount]), memo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::messages::coin;
    use crate::chain::messages::memo::{decode_validator_memo, DEFAULT_ADDRESS_LEN};
    use crate::chain::wallet::encode_address;

    #[test]
    fn test_intent_wire_format() {
        let intents = [
            ValidatorIntent::new("cosmosvaloper1aaa", 0.3),
            ValidatorIntent::new("cosmosvaloper1bbb", 0.7),
        ];
        assert_eq!(format_intents(&intents), "0.3000cosmosvaloper1aaa,0.7000cosmosvaloper1bbb");
        assert_eq!(parse_intents(&format_intents(&intents)).unwrap(), intents);
        assert!(parse_intents("").unwrap().is_empty());
        assert!(parse_intents("cosmosvaloper1aaa").is_err());
    }

    #[test]
    fn test_signal_intent_payload() {
        let msg = signal_intent("cosmoshub-4", &[ValidatorIntent::new("cosmosvaloper1x", 1.0)], "quick1a");
        match msg {
            Msg::SignalIntent(m) => {
                assert_eq!(m.chain_id, "cosmoshub-4");
                assert_eq!(m.intents, "1.0000cosmosvaloper1x");
                assert_eq!(m.from_address, "quick1a");
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_normalize_assigns_remainder_to_last() {
        let intents = [
            ValidatorIntent::new("a", 0.33),
            ValidatorIntent::new("b", 0.33),
            ValidatorIntent::new("c", 0.33),
        ];
        let normalized = normalize_intents(&intents);
        assert!((normalized[2].weight - 0.34).abs() < 1e-9);
        let total: f64 = normalized.iter().map(|i| i.weight).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(normalize_intents(&[]).is_empty());
    }

    #[test]
    fn test_request_redemption_fields() {
        match request_redemption(coin(5, "uqatom"), "quick1a", "cosmos1a") {
            Msg::RequestRedemption(m) => {
                assert_eq!(m.value, Some(coin(5, "uqatom")));
                assert_eq!(m.from_address, "quick1a");
                assert_eq!(m.destination_address, "cosmos1a");
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_liquid_stake_carries_memo() {
        let valoper = encode_address("cosmosvaloper", &[7u8; 20]).unwrap();
        let (msg, memo) = liquid_stake(
            "cosmos1sender",
            "cosmos1deposit",
            coin(1_000_000, "uatom"),
            &[ValidatorIntent::new(&valoper, 1.0)],
            MemoLayout::PerValidator,
        )
        .unwrap();

        match msg {
            Msg::Send(m) => assert_eq!(m.to_address, "cosmos1deposit"),
            other => panic!("unexpected message {:?}", other),
        }
        let decoded = decode_validator_memo(&memo, DEFAULT_ADDRESS_LEN, MemoLayout::PerValidator).unwrap();
        assert_eq!(decoded[0].weight_byte, 200);
        assert_eq!(decoded[0].address_bytes, vec![7u8; 20]);

        let (_, memo) = liquid_stake("a", "b", coin(1, "uatom"), &[], MemoLayout::PerValidator).unwrap();
        assert!(memo.is_empty());
        assert!(liquid_stake("a", "", coin(1, "uatom"), &[], MemoLayout::PerValidator).is_err());
    }
}
