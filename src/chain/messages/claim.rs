use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::Msg;
use crate::chain::proto::quicksilver::participationrewards::v1::MsgSubmitClaim;
use crate::chain::proto::tendermint::crypto::{ProofOp, ProofOps};

pub use crate::chain::proto::quicksilver::claimsmanager::v1::{ClaimType, Proof};

/// Participation / airdrop claim backed by cross-chain state proofs
pub fn submit_claim(
    user_address: &str,
    zone: &str,
    src_zone: &str,
    claim_type: ClaimType,
    proofs: Vec<Proof>,
) -> Msg {
    Msg::SubmitClaim(MsgSubmitClaim {
        user_address: user_address.to_string(),
        zone: zone.to_string(),
        src_zone: src_zone.to_string(),
        claim_type: claim_type as i32,
        proofs,
    })
}

/// Claim as served by the claims lookup service: byte fields are base64
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimJson {
    pub user_address: String,
    pub zone: String,
    pub src_zone: String,
    pub claim_type: i32,
    #[serde(default)]
    pub proofs: Vec<ProofJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofJson {
    pub key: String,
    pub data: String,
    #[serde(default)]
    pub proof_ops: Option<ProofOpsJson>,
    pub height: u64,
    #[serde(default)]
    pub proof_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofOpsJson {
    pub ops: Vec<ProofOpJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofOpJson {
    #[serde(rename = "type")]
    pub op_type: String,
    pub key: String,
    pub data: String,
}

impl ClaimJson {
    pub fn into_msg(self) -> Result<Msg> {
        let claim_type = ClaimType::try_from(self.claim_type)
            .map_err(|_| anyhow::anyhow!("Unknown claim type {}", self.claim_type))?;
        let proofs = self
            .proofs
            .into_iter()
            .map(Proof::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(submit_claim(&self.user_address, &self.zone, &self.src_zone, claim_type, proofs))
    }
}

impl TryFrom<ProofJson> for Proof {
    type Error = anyhow::Error;

    fn try_from(proof: ProofJson) -> Result<Self> {
        let proof_ops = proof
            .proof_ops
            .map(|ops| -> Result<ProofOps> {
                let ops = ops
                    .ops
                    .into_iter()
                    .map(|op| -> Result<ProofOp> {
                        Ok(ProofOp {
                            r#type: op.op_type,
                            key: STANDARD.decode(&op.key).context("proof op key")?,
                            data: STANDARD.decode(&op.data).context("proof op data")?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ProofOps { ops })
            })
            .transpose()?;

        Ok(Proof {
            key: STANDARD.decode(&proof.key).context("proof key")?,
            data: STANDARD.decode(&proof.data).context("proof data")?,
            proof_ops,
            height: i64::try_from(proof.height).context("proof height")?,
            proof_type: proof.proof_type.unwrap_or_default(),
        })
    }
}
