#![no_std]

use soroban_sdk::{contract, Address, BytesN, Env, String};

mod contract_admin;
mod contract_clicker;
mod contract_token;
mod errors;
mod storage;
mod tests;
mod types;

use types::Player;

pub const CLICKS_PER_MINT: u64 = 100;
pub const LEGENDARY_CHANCE: u64 = 10; // percent of the roll space
pub const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub const COMMON_URI: &str = "{\"name\":\"Common NFT\",\"image\":\"ipfs://QmXYZ/Common.png\"}";
pub const LEGENDARY_URI: &str =
    "{\"name\":\"Legendary NFT\",\"image\":\"ipfs://QmXYZ/Legendary.png\"}";

#[contract]
pub struct Contract;

pub trait AdminTrait {
    fn pause(env: Env);

    fn unpause(env: Env);

    fn upgrade(env: Env, hash: BytesN<32>);
}

pub trait ClickerTrait {
    fn claim_clicks(env: Env, player: Address, count: u64);

    fn get_player(env: Env, player: Address) -> Player;
}

pub trait TokenTrait {
    fn token_uri(env: Env, token_id: u32) -> String;

    fn balance_of(env: Env, owner: Address) -> u32;

    fn owner_of(env: Env, token_id: u32) -> Address;

    fn transfer(env: Env, from: Address, to: Address, token_id: u32);
}
