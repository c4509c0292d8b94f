/// Protobuf definitions for the Cosmos SDK, IBC and Quicksilver messages used by the
/// transaction pipeline. Field tags mirror the upstream `.proto` schemas; only the
/// fields this crate reads or writes are declared (prost skips unknown fields).

pub mod cosmos {
    pub mod base {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, serde::Serialize, serde::Deserialize)]
            pub struct Coin {
                #[prost(string, tag = "1")]
                pub denom: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub amount: ::prost::alloc::string::String,
            }
        }
    }

    pub mod bank {
        pub mod v1beta1 {
            use super::super::base::v1beta1::Coin;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgSend {
                #[prost(string, tag = "1")]
                pub from_address: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub to_address: ::prost::alloc::string::String,
                #[prost(message, repeated, tag = "3")]
                pub amount: ::prost::alloc::vec::Vec<Coin>,
            }
        }
    }

    /// Liquid staking module messages (LSM), as deployed on the Cosmos Hub
    pub mod staking {
        pub mod v1beta1 {
            use super::super::base::v1beta1::Coin;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgTokenizeShares {
                #[prost(string, tag = "1")]
                pub delegator_address: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub validator_address: ::prost::alloc::string::String,
                #[prost(message, optional, tag = "3")]
                pub amount: ::core::option::Option<Coin>,
                #[prost(string, tag = "4")]
                pub tokenized_share_owner: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgRedeemTokensForShares {
                #[prost(string, tag = "1")]
                pub delegator_address: ::prost::alloc::string::String,
                #[prost(message, optional, tag = "2")]
                pub amount: ::core::option::Option<Coin>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgDisableTokenizeShares {
                #[prost(string, tag = "1")]
                pub delegator_address: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgEnableTokenizeShares {
                #[prost(string, tag = "1")]
                pub delegator_address: ::prost::alloc::string::String,
            }
        }
    }

    pub mod gov {
        pub mod v1 {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum VoteOption {
                Unspecified = 0,
                Yes = 1,
                Abstain = 2,
                No = 3,
                NoWithVeto = 4,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgVote {
                #[prost(uint64, tag = "1")]
                pub proposal_id: u64,
                #[prost(string, tag = "2")]
                pub voter: ::prost::alloc::string::String,
                #[prost(enumeration = "VoteOption", tag = "3")]
                pub option: i32,
                #[prost(string, tag = "4")]
                pub metadata: ::prost::alloc::string::String,
            }
        }
    }

    pub mod authz {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GenericAuthorization {
                #[prost(string, tag = "1")]
                pub msg: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Grant {
                #[prost(message, optional, tag = "1")]
                pub authorization: ::core::option::Option<::prost_types::Any>,
                #[prost(message, optional, tag = "2")]
                pub expiration: ::core::option::Option<::prost_types::Timestamp>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgGrant {
                #[prost(string, tag = "1")]
                pub granter: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub grantee: ::prost::alloc::string::String,
                #[prost(message, optional, tag = "3")]
                pub grant: ::core::option::Option<Grant>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgRevoke {
                #[prost(string, tag = "1")]
                pub granter: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub grantee: ::prost::alloc::string::String,
                #[prost(string, tag = "3")]
                pub msg_type_url: ::prost::alloc::string::String,
            }
        }
    }

    pub mod crypto {
        pub mod secp256k1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct PubKey {
                #[prost(bytes = "vec", tag = "1")]
                pub key: ::prost::alloc::vec::Vec<u8>,
            }
        }
    }

    pub mod auth {
        pub mod v1beta1 {
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct BaseAccount {
                #[prost(string, tag = "1")]
                pub address: ::prost::alloc::string::String,
                #[prost(message, optional, tag = "2")]
                pub pub_key: ::core::option::Option<::prost_types::Any>,
                #[prost(uint64, tag = "3")]
                pub account_number: u64,
                #[prost(uint64, tag = "4")]
                pub sequence: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryAccountRequest {
                #[prost(string, tag = "1")]
                pub address: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct QueryAccountResponse {
                #[prost(message, optional, tag = "1")]
                pub account: ::core::option::Option<::prost_types::Any>,
            }
        }
    }

    pub mod tx {
        pub mod v1beta1 {
            use super::super::base::v1beta1::Coin;

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum SignMode {
                Unspecified = 0,
                Direct = 1,
            }

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum BroadcastMode {
                Unspecified = 0,
                Block = 1,
                Sync = 2,
                Async = 3,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct TxBody {
                #[prost(message, repeated, tag = "1")]
                pub messages: ::prost::alloc::vec::Vec<::prost_types::Any>,
                #[prost(string, tag = "2")]
                pub memo: ::prost::alloc::string::String,
                #[prost(uint64, tag = "3")]
                pub timeout_height: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct ModeInfo {
                #[prost(oneof = "mode_info::Sum", tags = "1")]
                pub sum: ::core::option::Option<mode_info::Sum>,
            }

            pub mod mode_info {
                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct Single {
                    #[prost(enumeration = "super::SignMode", tag = "1")]
                    pub mode: i32,
                }

                #[derive(Clone, PartialEq, ::prost::Oneof)]
                pub enum Sum {
                    #[prost(message, tag = "1")]
                    Single(Single),
                }
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SignerInfo {
                #[prost(message, optional, tag = "1")]
                pub public_key: ::core::option::Option<::prost_types::Any>,
                #[prost(message, optional, tag = "2")]
                pub mode_info: ::core::option::Option<ModeInfo>,
                #[prost(uint64, tag = "3")]
                pub sequence: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Fee {
                #[prost(message, repeated, tag = "1")]
                pub amount: ::prost::alloc::vec::Vec<Coin>,
                #[prost(uint64, tag = "2")]
                pub gas_limit: u64,
                #[prost(string, tag = "3")]
                pub payer: ::prost::alloc::string::String,
                #[prost(string, tag = "4")]
                pub granter: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct AuthInfo {
                #[prost(message, repeated, tag = "1")]
                pub signer_infos: ::prost::alloc::vec::Vec<SignerInfo>,
                #[prost(message, optional, tag = "2")]
                pub fee: ::core::option::Option<Fee>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SignDoc {
                #[prost(bytes = "vec", tag = "1")]
                pub body_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(bytes = "vec", tag = "2")]
                pub auth_info_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(string, tag = "3")]
                pub chain_id: ::prost::alloc::string::String,
                #[prost(uint64, tag = "4")]
                pub account_number: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct TxRaw {
                #[prost(bytes = "vec", tag = "1")]
                pub body_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(bytes = "vec", tag = "2")]
                pub auth_info_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(bytes = "vec", repeated, tag = "3")]
                pub signatures: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GasInfo {
                #[prost(uint64, tag = "1")]
                pub gas_wanted: u64,
                #[prost(uint64, tag = "2")]
                pub gas_used: u64,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SimulateRequest {
                #[prost(bytes = "vec", tag = "2")]
                pub tx_bytes: ::prost::alloc::vec::Vec<u8>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct SimulateResponse {
                #[prost(message, optional, tag = "1")]
                pub gas_info: ::core::option::Option<GasInfo>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct BroadcastTxRequest {
                #[prost(bytes = "vec", tag = "1")]
                pub tx_bytes: ::prost::alloc::vec::Vec<u8>,
                #[prost(enumeration = "BroadcastMode", tag = "2")]
                pub mode: i32,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct TxResponse {
                #[prost(int64, tag = "1")]
                pub height: i64,
                #[prost(string, tag = "2")]
                pub txhash: ::prost::alloc::string::String,
                #[prost(string, tag = "3")]
                pub codespace: ::prost::alloc::string::String,
                #[prost(uint32, tag = "4")]
                pub code: u32,
                #[prost(string, tag = "6")]
                pub raw_log: ::prost::alloc::string::String,
                #[prost(int64, tag = "9")]
                pub gas_wanted: i64,
                #[prost(int64, tag = "10")]
                pub gas_used: i64,
                #[prost(message, repeated, tag = "13")]
                pub events: ::prost::alloc::vec::Vec<super::super::super::tendermint::abci::Event>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct BroadcastTxResponse {
                #[prost(message, optional, tag = "1")]
                pub tx_response: ::core::option::Option<TxResponse>,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GetTxRequest {
                #[prost(string, tag = "1")]
                pub hash: ::prost::alloc::string::String,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct GetTxResponse {
                #[prost(message, optional, tag = "2")]
                pub tx_response: ::core::option::Option<TxResponse>,
            }
        }
    }
}

pub mod tendermint {
    pub mod abci {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct EventAttribute {
            #[prost(string, tag = "1")]
            pub key: ::prost::alloc::string::String,
            #[prost(string, tag = "2")]
            pub value: ::prost::alloc::string::String,
            #[prost(bool, tag = "3")]
            pub index: bool,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Event {
            #[prost(string, tag = "1")]
            pub r#type: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "2")]
            pub attributes: ::prost::alloc::vec::Vec<EventAttribute>,
        }
    }

    pub mod crypto {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ProofOp {
            #[prost(string, tag = "1")]
            pub r#type: ::prost::alloc::string::String,
            #[prost(bytes = "vec", tag = "2")]
            pub key: ::prost::alloc::vec::Vec<u8>,
            #[prost(bytes = "vec", tag = "3")]
            pub data: ::prost::alloc::vec::Vec<u8>,
        }

        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ProofOps {
            #[prost(message, repeated, tag = "1")]
            pub ops: ::prost::alloc::vec::Vec<ProofOp>,
        }
    }
}

pub mod ibc {
    pub mod core {
        pub mod client {
            pub mod v1 {
                #[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
                pub struct Height {
                    #[prost(uint64, tag = "1")]
                    pub revision_number: u64,
                    #[prost(uint64, tag = "2")]
                    pub revision_height: u64,
                }
            }
        }
    }

    pub mod applications {
        pub mod transfer {
            pub mod v1 {
                use crate::chain::proto::cosmos::base::v1beta1::Coin;
                use crate::chain::proto::ibc::core::client::v1::Height;

                #[derive(Clone, PartialEq, ::prost::Message)]
                pub struct MsgTransfer {
                    #[prost(string, tag = "1")]
                    pub source_port: ::prost::alloc::string::String,
                    #[prost(string, tag = "2")]
                    pub source_channel: ::prost::alloc::string::String,
                    #[prost(message, optional, tag = "3")]
                    pub token: ::core::option::Option<Coin>,
                    #[prost(string, tag = "4")]
                    pub sender: ::prost::alloc::string::String,
                    #[prost(string, tag = "5")]
                    pub receiver: ::prost::alloc::string::String,
                    #[prost(message, optional, tag = "6")]
                    pub timeout_height: ::core::option::Option<Height>,
                    #[prost(uint64, tag = "7")]
                    pub timeout_timestamp: u64,
                    #[prost(string, tag = "8")]
                    pub memo: ::prost::alloc::string::String,
                }
            }
        }
    }
}

pub mod quicksilver {
    pub mod interchainstaking {
        pub mod v1 {
            use crate::chain::proto::cosmos::base::v1beta1::Coin;

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgRequestRedemption {
                #[prost(message, optional, tag = "1")]
                pub value: ::core::option::Option<Coin>,
                #[prost(string, tag = "2")]
                pub destination_address: ::prost::alloc::string::String,
                #[prost(string, tag = "3")]
                pub from_address: ::prost::alloc::string::String,
            }

            /// `intents` is the chain's comma-separated `<weight><valoper>` list.
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgSignalIntent {
                #[prost(string, tag = "1")]
                pub chain_id: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub intents: ::prost::alloc::string::String,
                #[prost(string, tag = "3")]
                pub from_address: ::prost::alloc::string::String,
            }
        }
    }

    pub mod claimsmanager {
        pub mod v1 {
            use crate::chain::proto::tendermint::crypto::ProofOps;

            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
            #[repr(i32)]
            pub enum ClaimType {
                Undefined = 0,
                LiquidToken = 1,
                OsmosisPool = 2,
                CrescentPool = 3,
                SifchainPool = 4,
            }

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Proof {
                #[prost(bytes = "vec", tag = "1")]
                pub key: ::prost::alloc::vec::Vec<u8>,
                #[prost(bytes = "vec", tag = "2")]
                pub data: ::prost::alloc::vec::Vec<u8>,
                #[prost(message, optional, tag = "3")]
                pub proof_ops: ::core::option::Option<ProofOps>,
                #[prost(int64, tag = "4")]
                pub height: i64,
                #[prost(string, tag = "5")]
                pub proof_type: ::prost::alloc::string::String,
            }
        }
    }

    pub mod participationrewards {
        pub mod v1 {
            use crate::chain::proto::quicksilver::claimsmanager::v1::{ClaimType, Proof};

            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct MsgSubmitClaim {
                #[prost(string, tag = "1")]
                pub user_address: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub zone: ::prost::alloc::string::String,
                #[prost(string, tag = "3")]
                pub src_zone: ::prost::alloc::string::String,
                #[prost(enumeration = "ClaimType", tag = "4")]
                pub claim_type: i32,
                #[prost(message, repeated, tag = "5")]
                pub proofs: ::prost::alloc::vec::Vec<Proof>,
            }
        }
    }
}

// Re-export commonly used types for convenience
pub use cosmos::base::v1beta1::Coin;
pub use cosmos::tx::v1beta1::{
    AuthInfo, BroadcastMode, BroadcastTxRequest, BroadcastTxResponse, Fee, GetTxRequest,
    GetTxResponse, ModeInfo, SignDoc, SignMode, SignerInfo, SimulateRequest, SimulateResponse,
    TxBody, TxRaw, TxResponse,
};
pub use cosmos::auth::v1beta1::{BaseAccount, QueryAccountRequest, QueryAccountResponse};
pub use prost_types::Any;
