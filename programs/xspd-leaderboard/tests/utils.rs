// Test utilities for the leaderboard program

#![allow(dead_code)]

use std::path::PathBuf;

use anchor_lang::AccountDeserialize;
use litesvm::{types::TransactionResult, LiteSVM};
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use xspd_leaderboard::constants as seeds;

// Program ID matching declare_id!
pub const LEADERBOARD_PROGRAM_ID: Pubkey = Pubkey::new_from_array(xspd_leaderboard::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
use solana_system_interface::program::ID as system_program;

pub const DECIMALS: u8 = 9;

// Deterministic starting clock; a zero timestamp would read as "never distributed"
pub const GENESIS_TIMESTAMP: i64 = 1_700_000_000;

pub const REFERENCE_PRICE: u64 = 100;
pub const REWARD_PER_TRADE: u64 = 10_000_000;
pub const TRADE_COOLDOWN: i64 = 30;
pub const DISTRIBUTION_INTERVAL: i64 = 3_600;
pub const PRICE_TOLERANCE_BPS: u16 = 50;
pub const MAX_FAILED_TRADES: u64 = 5;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Workspace target first, then a program-local one
fn program_binary() -> Vec<u8> {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        manifest.join("../../target/deploy/xspd_leaderboard.so"),
        manifest.join("target/deploy/xspd_leaderboard.so"),
    ];
    candidates
        .iter()
        .find_map(|path| std::fs::read(path).ok())
        .unwrap_or_else(|| {
            panic!(
                "xspd_leaderboard.so not found in {:?}; run `anchor build` before the integration tests",
                candidates
            )
        })
}

// Setup LiteSVM with the leaderboard program and a non-zero clock
pub fn setup_svm() -> LiteSVM {
    let program_bytes = program_binary();

    let mut svm = LiteSVM::new();
    svm.add_program(LEADERBOARD_PROGRAM_ID, &program_bytes)
        .expect("Failed to add leaderboard program");

    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp = GENESIS_TIMESTAMP;
    svm.set_sysvar(&clock);

    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

/// Sign and send, then expire the blockhash so an identical follow-up
/// transaction is not rejected as already processed.
pub fn send(svm: &mut LiteSVM, ixs: &[Instruction], payer: &Keypair, signers: &[&Keypair]) -> TransactionResult {
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), signers, svm.latest_blockhash());
    let result = svm.send_transaction(tx);
    svm.expire_blockhash();
    result
}

/// Asserts the transaction failed with the named program error.
pub fn assert_program_error(result: TransactionResult, error_name: &str) {
    match result {
        Ok(_) => panic!("expected {} but the transaction succeeded", error_name),
        Err(failed) => {
            let needle = format!("Error Code: {}", error_name);
            assert!(
                failed.meta.logs.iter().any(|line| line.contains(&needle)),
                "expected {}, got {:?}\nlogs: {:#?}",
                error_name,
                failed.err,
                failed.meta.logs
            );
        }
    }
}

/// Fetch and decode a program account
pub fn fetch_account<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm.get_account(address).expect("Account should exist");
    T::try_deserialize(&mut account.data.as_slice()).expect("Account should deserialize")
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, token_account).expect("Token account should exist");
    account.amount
}

pub fn same_key(program_key: &anchor_lang::prelude::Pubkey, key: &Pubkey) -> bool {
    program_key.to_bytes() == key.to_bytes()
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

pub fn now(svm: &LiteSVM) -> i64 {
    let clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp
}

// ======================== PDAs ========================

pub fn derive_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::CONFIG], &LEADERBOARD_PROGRAM_ID)
}

fn derive_config_child(seed: &[u8]) -> (Pubkey, u8) {
    let (config, _) = derive_config_pda();
    Pubkey::find_program_address(&[seed, config.as_ref()], &LEADERBOARD_PROGRAM_ID)
}

pub fn derive_vault_authority_pda() -> (Pubkey, u8) {
    derive_config_child(seeds::VAULT_AUTHORITY)
}

pub fn derive_treasury_pda() -> (Pubkey, u8) {
    derive_config_child(seeds::TREASURY)
}

pub fn derive_treasury_vault_pda() -> (Pubkey, u8) {
    derive_config_child(seeds::TREASURY_VAULT)
}

pub fn derive_staking_pool_pda() -> (Pubkey, u8) {
    derive_config_child(seeds::STAKING_POOL)
}

pub fn derive_staking_vault_pda() -> (Pubkey, u8) {
    derive_config_child(seeds::STAKING_VAULT)
}

pub fn derive_price_reference_pda() -> (Pubkey, u8) {
    derive_config_child(seeds::PRICE_REFERENCE)
}

pub fn derive_trader_stats_pda(trader: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::TRADER_STATS, trader.as_ref()], &LEADERBOARD_PROGRAM_ID)
}

pub fn derive_stake_record_pda(trader: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::STAKE_RECORD, trader.as_ref()], &LEADERBOARD_PROGRAM_ID)
}

// ======================== INSTRUCTION BUILDERS ========================

// Borsh layout of InitializeParams with RewardPolicy::PerTrade (variant 0)
fn encode_initialize_params(reward_per_trade: u64) -> Vec<u8> {
    borsh::to_vec(&(
        DISTRIBUTION_INTERVAL,
        TRADE_COOLDOWN,
        PRICE_TOLERANCE_BPS,
        0i64, // stake_lock_seconds
        MAX_FAILED_TRADES,
        0u8,
        reward_per_trade,
    ))
    .expect("Params should serialize")
}

fn with_args(method: &str, args: Vec<u8>) -> Vec<u8> {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(&args);
    data
}

fn amount_arg(amount: u64) -> Vec<u8> {
    borsh::to_vec(&amount).expect("Amount should serialize")
}

pub fn build_initialize_ix(admin: &Pubkey, token_mint: &Pubkey, reward_per_trade: u64) -> Instruction {
    let (config, _) = derive_config_pda();
    let (vault_authority, _) = derive_vault_authority_pda();

    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: with_args("initialize", encode_initialize_params(reward_per_trade)),
    }
}

pub fn build_initialize_vaults_ix(admin: &Pubkey, token_mint: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda();

    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(*token_mint, false),
            AccountMeta::new_readonly(derive_vault_authority_pda().0, false),
            AccountMeta::new(derive_treasury_pda().0, false),
            AccountMeta::new(derive_treasury_vault_pda().0, false),
            AccountMeta::new(derive_staking_pool_pda().0, false),
            AccountMeta::new(derive_staking_vault_pda().0, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("initialize_vaults").to_vec(),
    }
}

pub fn build_update_reference_price_ix(admin: &Pubkey, price: u64) -> Instruction {
    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(derive_config_pda().0, false),
            AccountMeta::new(derive_price_reference_pda().0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: with_args("update_reference_price", amount_arg(price)),
    }
}

pub fn build_fund_treasury_ix(funder: &Pubkey, funder_token_account: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*funder, true),
            AccountMeta::new_readonly(derive_config_pda().0, false),
            AccountMeta::new(derive_treasury_pda().0, false),
            AccountMeta::new(derive_treasury_vault_pda().0, false),
            AccountMeta::new(*funder_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: with_args("fund_treasury", amount_arg(amount)),
    }
}

pub fn build_register_trader_ix(trader: &Pubkey) -> Instruction {
    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*trader, true),
            AccountMeta::new_readonly(derive_config_pda().0, false),
            AccountMeta::new(derive_trader_stats_pda(trader).0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("register_trader").to_vec(),
    }
}

// An absent optional account is passed as the program id
pub fn build_record_trade_ix(trader: &Pubkey, volume: u64, price: u64, with_price_reference: bool) -> Instruction {
    let price_reference = if with_price_reference {
        derive_price_reference_pda().0
    } else {
        LEADERBOARD_PROGRAM_ID
    };

    let mut args = amount_arg(volume);
    args.extend_from_slice(&amount_arg(price));

    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*trader, true),
            AccountMeta::new(derive_trader_stats_pda(trader).0, false),
            AccountMeta::new(derive_config_pda().0, false),
            AccountMeta::new_readonly(price_reference, false),
        ],
        data: with_args("record_trade", args),
    }
}

pub fn build_record_failed_trade_ix(trader: &Pubkey) -> Instruction {
    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*trader, true),
            AccountMeta::new(derive_trader_stats_pda(trader).0, false),
            AccountMeta::new_readonly(derive_config_pda().0, false),
        ],
        data: anchor_discriminator("record_failed_trade").to_vec(),
    }
}

/// `recipients` are (trader, trader_token_account) pairs
pub fn build_distribute_rewards_ix(admin: &Pubkey, recipients: &[(Pubkey, Pubkey)]) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new_readonly(*admin, true),
        AccountMeta::new(derive_config_pda().0, false),
        AccountMeta::new(derive_treasury_pda().0, false),
        AccountMeta::new(derive_treasury_vault_pda().0, false),
        AccountMeta::new_readonly(derive_vault_authority_pda().0, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ];
    for (trader, token_account) in recipients {
        accounts.push(AccountMeta::new(derive_trader_stats_pda(trader).0, false));
        accounts.push(AccountMeta::new(*token_account, false));
    }

    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts,
        data: anchor_discriminator("distribute_rewards").to_vec(),
    }
}

pub fn build_stake_tokens_ix(trader: &Pubkey, trader_token_account: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*trader, true),
            AccountMeta::new_readonly(derive_config_pda().0, false),
            AccountMeta::new(derive_stake_record_pda(trader).0, false),
            AccountMeta::new(derive_staking_pool_pda().0, false),
            AccountMeta::new(derive_staking_vault_pda().0, false),
            AccountMeta::new(*trader_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: with_args("stake_tokens", amount_arg(amount)),
    }
}

pub fn build_withdraw_stake_ix(
    trader: &Pubkey,
    admin: &Pubkey,
    trader_token_account: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*trader, true),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(derive_config_pda().0, false),
            AccountMeta::new(derive_stake_record_pda(trader).0, false),
            AccountMeta::new(derive_staking_pool_pda().0, false),
            AccountMeta::new(derive_staking_vault_pda().0, false),
            AccountMeta::new_readonly(derive_vault_authority_pda().0, false),
            AccountMeta::new(*trader_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: with_args("withdraw_stake", amount_arg(amount)),
    }
}

pub fn build_claim_rewards_ix(trader: &Pubkey, admin: &Pubkey, trader_token_account: &Pubkey) -> Instruction {
    Instruction {
        program_id: LEADERBOARD_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*trader, true),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(derive_config_pda().0, false),
            AccountMeta::new(derive_trader_stats_pda(trader).0, false),
            AccountMeta::new(derive_treasury_pda().0, false),
            AccountMeta::new(derive_treasury_vault_pda().0, false),
            AccountMeta::new_readonly(derive_vault_authority_pda().0, false),
            AccountMeta::new(*trader_token_account, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("claim_rewards").to_vec(),
    }
}

// ======================== SCENARIO SETUP ========================

pub struct Deployment {
    pub admin: Keypair,
    pub token_mint: Pubkey,
    pub admin_token_account: Pubkey,
}

/// Config, vaults and a published reference price, with the treasury funded
/// by `treasury_funding` tokens (skipped when zero).
pub fn deploy(svm: &mut LiteSVM, treasury_funding: u64) -> Deployment {
    let admin = create_funded_account(svm, 10_000_000_000);

    let token_mint = CreateMint::new(svm, &admin)
        .authority(&admin.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Mint creation should succeed");

    let admin_token_account = CreateAssociatedTokenAccount::new(svm, &admin, &token_mint)
        .owner(&admin.pubkey())
        .send()
        .expect("Admin ATA creation should succeed");

    let ixs = [
        build_initialize_ix(&admin.pubkey(), &token_mint, REWARD_PER_TRADE),
        build_initialize_vaults_ix(&admin.pubkey(), &token_mint),
        build_update_reference_price_ix(&admin.pubkey(), REFERENCE_PRICE),
    ];
    send(svm, &ixs, &admin, &[&admin]).expect("Deployment should succeed");

    if treasury_funding > 0 {
        MintTo::new(svm, &admin, &token_mint, &admin_token_account, treasury_funding)
            .owner(&admin)
            .send()
            .expect("Minting should succeed");
        let ix = build_fund_treasury_ix(&admin.pubkey(), &admin_token_account, treasury_funding);
        send(svm, &[ix], &admin, &[&admin]).expect("Treasury funding should succeed");
    }

    Deployment {
        admin,
        token_mint,
        admin_token_account,
    }
}

/// Registered trader holding `balance` tokens in their associated account
pub fn onboard_trader(svm: &mut LiteSVM, deployment: &Deployment, balance: u64) -> (Keypair, Pubkey) {
    let trader = create_funded_account(svm, 1_000_000_000);

    let token_account = CreateAssociatedTokenAccount::new(svm, &deployment.admin, &deployment.token_mint)
        .owner(&trader.pubkey())
        .send()
        .expect("Trader ATA creation should succeed");

    if balance > 0 {
        MintTo::new(svm, &deployment.admin, &deployment.token_mint, &token_account, balance)
            .owner(&deployment.admin)
            .send()
            .expect("Minting should succeed");
    }

    let ix = build_register_trader_ix(&trader.pubkey());
    send(svm, &[ix], &trader, &[&trader]).expect("Registration should succeed");

    (trader, token_account)
}
