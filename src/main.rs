use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zeroize::Zeroizing;

use quicksilver_tx::chain::messages::memo::{
    decode_validator_memo, encode_validator_memo, MemoIntent, MemoLayout, DEFAULT_ADDRESS_LEN,
};
use quicksilver_tx::chain::messages::staking::ValidatorIntent;
use quicksilver_tx::chain::messages::{
    authz, bank, claim, gov, ibc, lsm, parse_coin, staking, Msg, MSG_SUBMIT_CLAIM_TYPE_URL,
};
use quicksilver_tx::chain::{
    ChainClient, ChainRegistry, CosmosWallet, Disconnected, LocalWalletConnection,
    WalletConnection,
};
use quicksilver_tx::config::{self, Config, MNEMONIC_ENV};
use quicksilver_tx::{FeeEstimator, StdFee, TracingNotifier, TxContext, TxOptions};

#[derive(Parser)]
#[command(name = "quicksilver-tx")]
#[command(about = "Compose, sign and broadcast Quicksilver transactions", version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TxArgs {
    /// Explicit fee such as 5000uqck; simulated when omitted
    #[arg(long)]
    fee: Option<String>,

    /// Gas limit paired with --fee
    #[arg(long, default_value = "500000")]
    gas: u64,

    /// Transaction memo
    #[arg(long, default_value = "")]
    memo: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a configuration file for a known chain
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "config.toml")]
        output: String,

        /// Chain name from the built-in registry
        #[arg(long, default_value = "quicksilver")]
        chain: String,

        /// Fetch the chain from a chain-registry chain.json instead
        #[arg(long)]
        registry_url: Option<String>,
    },

    /// List built-in chains
    Chains,

    /// Print the address derived from the mnemonic
    Address,

    /// Bank send
    Send {
        #[arg(long)]
        to: String,
        /// Amount with denom, e.g. 1000000uqck
        #[arg(long)]
        amount: String,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Vote on a governance proposal
    Vote {
        #[arg(long)]
        proposal: String,
        /// yes, no, abstain or no_with_veto
        #[arg(long)]
        option: String,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Signal validator intent for a host zone
    Intent {
        #[arg(long)]
        chain_id: String,
        /// valoper:weight, repeatable
        #[arg(long = "validator", value_parser = parse_intent, required = true)]
        validators: Vec<ValidatorIntent>,
        /// Assign the remaining weight to the last validator
        #[arg(long)]
        normalize: bool,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Redeem qAssets for the native token
    Redeem {
        #[arg(long)]
        amount: String,
        #[arg(long)]
        destination: String,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Liquid stake by depositing to the zone deposit address with an intent memo
    Stake {
        #[arg(long)]
        deposit_address: String,
        #[arg(long)]
        amount: String,
        /// valoper:weight, repeatable
        #[arg(long = "validator", value_parser = parse_intent)]
        validators: Vec<ValidatorIntent>,
        /// Use the single length-prefixed memo layout
        #[arg(long)]
        length_prefixed: bool,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// IBC transfer
    Transfer {
        #[arg(long, default_value = "transfer")]
        port: String,
        #[arg(long)]
        channel: String,
        #[arg(long)]
        receiver: String,
        #[arg(long)]
        amount: String,
        /// Memo carried inside the packet
        #[arg(long, default_value = "")]
        packet_memo: String,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Grant a generic authorization
    Grant {
        #[arg(long)]
        grantee: String,
        #[arg(long, default_value = MSG_SUBMIT_CLAIM_TYPE_URL)]
        msg_type: String,
        /// Revoke the claim authorization first, in the same transaction
        #[arg(long)]
        regrant: bool,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Revoke an authorization
    Revoke {
        #[arg(long)]
        grantee: String,
        #[arg(long, default_value = MSG_SUBMIT_CLAIM_TYPE_URL)]
        msg_type: String,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Submit claims from a JSON file (one claim or a list)
    Claim {
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Tokenize part of a delegation into LSM share tokens
    Tokenize {
        /// Validator operator address holding the delegation
        #[arg(long)]
        validator: String,
        #[arg(long)]
        amount: String,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Redeem LSM share tokens (<valoper>/<record id>) back into a delegation
    RedeemShares {
        #[arg(long)]
        amount: String,
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Lock the account against tokenizing delegations
    DisableTokenize {
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Lift the tokenize lock (after the unbonding period)
    EnableTokenize {
        #[command(flatten)]
        tx: TxArgs,
    },

    /// Encode or decode a validator-intent memo
    Memo {
        #[command(subcommand)]
        action: MemoCommand,
    },
}

#[derive(Subcommand)]
enum MemoCommand {
    Encode {
        #[arg(long = "validator", value_parser = parse_intent)]
        validators: Vec<ValidatorIntent>,
        #[arg(long)]
        length_prefixed: bool,
    },
    Decode {
        memo: String,
        /// Prefix for the decoded validator addresses
        #[arg(long, default_value = "cosmosvaloper")]
        prefix: String,
        #[arg(long, default_value_t = DEFAULT_ADDRESS_LEN)]
        address_len: usize,
        #[arg(long)]
        length_prefixed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quicksilver_tx=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output, chain, registry_url } => {
            let mut registry = ChainRegistry::builtin();
            let chain = match registry_url {
                Some(url) => {
                    let info = ChainRegistry::fetch_chain_json(&url, 30).await?;
                    let name = info.chain_name.clone();
                    registry.insert(info);
                    name
                }
                None => chain,
            };
            let config = Config::for_chain(&registry, &chain)?;
            config.save(&output)?;
            info!("Configuration file created at: {}", output);
        }
        Commands::Chains => {
            let registry = ChainRegistry::builtin();
            for name in registry.names() {
                if let Some(chain) = registry.get(name) {
                    println!("{:<22} {:<16} {}", name, chain.chain_id, chain.fee_denom);
                }
            }
        }
        Commands::Address => {
            let config = load_config(&cli.config)?;
            let mnemonic = read_mnemonic().ok_or_else(|| anyhow!("{} is not set", MNEMONIC_ENV))?;
            let wallet = CosmosWallet::from_mnemonic(&mnemonic, "", &config.chain.bech32_prefix)?;
            println!("{}", wallet.address);
        }
        Commands::Memo { action } => run_memo(action)?,
        command => {
            let ctx = connect(&cli.config).await?;
            let sender = ctx.address().unwrap_or_default();
            let (msgs, tx) = compose(command, &sender)?;
            submit(&ctx, msgs, tx).await?;
        }
    }

    Ok(())
}

fn load_config(path: &str) -> Result<Config> {
    let path = config::resolve_config_path(path);
    Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))
}

fn read_mnemonic() -> Option<Zeroizing<String>> {
    std::env::var(MNEMONIC_ENV)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .map(Zeroizing::new)
}

/// Wire the submission context from config and environment
async fn connect(config_path: &str) -> Result<TxContext> {
    let config = load_config(config_path)?;
    let chain = config.chain_info();
    let estimator = FeeEstimator::from_chain(&chain, &config.tx);

    let wallet: Arc<dyn WalletConnection> = match read_mnemonic() {
        Some(mnemonic) => {
            let wallet = CosmosWallet::from_mnemonic(&mnemonic, "", &config.chain.bech32_prefix)?;
            let mut client = ChainClient::new(config.client_config());
            client.connect().await?;
            info!("Using account {}", wallet.address);
            Arc::new(LocalWalletConnection::new(client, wallet))
        }
        None => {
            warn!("{} not set, no wallet connected", MNEMONIC_ENV);
            Arc::new(Disconnected)
        }
    };

    Ok(TxContext::new(chain, estimator, wallet, Arc::new(TracingNotifier::new())))
}

/// Build the message batch for a transaction subcommand
fn compose(command: Commands, sender: &str) -> Result<(Vec<Msg>, TxArgs)> {
    let composed = match command {
        Commands::Send { to, amount, tx } => {
            (vec![bank::send(sender, &to, vec![parse_coin(&amount)?])], tx)
        }
        Commands::Vote { proposal, option, tx } => {
            let proposal_id = gov::parse_proposal_id(&proposal)?;
            let option = gov::parse_vote_option(&option)?;
            (vec![gov::vote(proposal_id, sender, option)], tx)
        }
        Commands::Intent { chain_id, validators, normalize, tx } => {
            let validators = if normalize {
                staking::normalize_intents(&validators)
            } else {
                validators
            };
            (vec![staking::signal_intent(&chain_id, &validators, sender)], tx)
        }
        Commands::Redeem { amount, destination, tx } => {
            (vec![staking::request_redemption(parse_coin(&amount)?, sender, &destination)], tx)
        }
        Commands::Stake { deposit_address, amount, validators, length_prefixed, mut tx } => {
            let (msg, memo) = staking::liquid_stake(
                sender,
                &deposit_address,
                parse_coin(&amount)?,
                &validators,
                layout(length_prefixed),
            )?;
            if !tx.memo.is_empty() {
                warn!("--memo is replaced by the validator intent memo");
            }
            tx.memo = memo;
            (vec![msg], tx)
        }
        Commands::Transfer { port, channel, receiver, amount, packet_memo, tx } => {
            let params = ibc::TransferParams {
                source_port: port,
                source_channel: channel,
                sender: sender.to_string(),
                receiver,
                token: parse_coin(&amount)?,
                timeout_height: None,
                memo: packet_memo,
            };
            (vec![ibc::transfer_now(&params)], tx)
        }
        Commands::Grant { grantee, msg_type, regrant, tx } => {
            let msgs = if regrant {
                authz::regrant_claim_authorization(sender, &grantee)
            } else {
                vec![authz::grant_generic(sender, &grantee, &msg_type)]
            };
            (msgs, tx)
        }
        Commands::Revoke { grantee, msg_type, tx } => {
            (vec![authz::revoke(sender, &grantee, &msg_type)], tx)
        }
        Commands::Claim { file, tx } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let claims: Vec<claim::ClaimJson> = match serde_json::from_str(&content) {
                Ok(claims) => claims,
                Err(_) => vec![serde_json::from_str(&content)?],
            };
            let msgs = claims
                .into_iter()
                .map(claim::ClaimJson::into_msg)
                .collect::<Result<Vec<_>>>()?;
            (msgs, tx)
        }
        Commands::Tokenize { validator, amount, tx } => {
            (vec![lsm::tokenize_shares(sender, &validator, parse_coin(&amount)?)], tx)
        }
        Commands::RedeemShares { amount, tx } => {
            (vec![lsm::redeem_tokens_for_shares(sender, parse_coin(&amount)?)], tx)
        }
        Commands::DisableTokenize { tx } => (vec![lsm::disable_tokenize_shares(sender)], tx),
        Commands::EnableTokenize { tx } => (vec![lsm::enable_tokenize_shares(sender)], tx),
        Commands::Init { .. } | Commands::Chains | Commands::Address | Commands::Memo { .. } => {
            bail!("Not a transaction command")
        }
    };
    Ok(composed)
}

async fn submit(ctx: &TxContext, msgs: Vec<Msg>, tx: TxArgs) -> Result<()> {
    // An empty sender is left for the submitter to report as a missing wallet.
    if ctx.address().is_some() {
        for msg in &msgs {
            msg.validate_basic()?;
        }
    }

    let mut options = TxOptions::new().memo(tx.memo);
    if let Some(fee) = tx.fee {
        let coin = parse_coin(&fee)?;
        let amount: u128 = coin.amount.parse()?;
        options = options.fee(StdFee::new(&coin.denom, amount, tx.gas));
    }

    let result = ctx.tx(&msgs, options).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.success {
        bail!("{}", result.error.unwrap_or_default());
    }
    if let Some(hash) = &result.tx_hash {
        info!("Explorer: {}", ctx.chain().explorer_tx_url(hash));
    }
    if let Some(denom) = result.tokenized_share_denom() {
        info!("Share token denom: {}", denom);
    }
    Ok(())
}

fn run_memo(action: MemoCommand) -> Result<()> {
    match action {
        MemoCommand::Encode { validators, length_prefixed } => {
            let intents: Vec<MemoIntent> = validators.iter().map(MemoIntent::from).collect();
            println!("{}", encode_validator_memo(&intents, layout(length_prefixed))?);
        }
        MemoCommand::Decode { memo, prefix, address_len, length_prefixed } => {
            for intent in decode_validator_memo(&memo, address_len, layout(length_prefixed))? {
                println!("{} {:.3}", intent.valoper_address(&prefix)?, intent.weight());
            }
        }
    }
    Ok(())
}

fn layout(length_prefixed: bool) -> MemoLayout {
    if length_prefixed {
        MemoLayout::LengthPrefixed
    } else {
        MemoLayout::PerValidator
    }
}

/// Parse `valoper:weight`
fn parse_intent(input: &str) -> Result<ValidatorIntent, String> {
    let (address, weight) = input
        .rsplit_once(':')
        .ok_or_else(|| format!("expected valoper:weight, got {:?}", input))?;
    let weight: f64 = weight
        .parse()
        .map_err(|_| format!("invalid weight in {:?}", input))?;
    Ok(ValidatorIntent::new(address, weight))
}
