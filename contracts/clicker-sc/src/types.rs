use soroban_sdk::{contracttype, Address, Env, String};

use crate::{COMMON_URI, LEGENDARY_URI};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub total_clicks: u64,
    pub nft_count: u32,
}

impl Player {
    pub fn zero() -> Self {
        Player {
            total_clicks: 0,
            nft_count: 0,
        }
    }
}

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rarity {
    Common,
    Legendary,
}

impl Rarity {
    pub fn name(&self, env: &Env) -> String {
        match self {
            Rarity::Common => String::from_str(env, "Common"),
            Rarity::Legendary => String::from_str(env, "Legendary"),
        }
    }

    pub fn uri(&self, env: &Env) -> String {
        match self {
            Rarity::Common => String::from_str(env, COMMON_URI),
            Rarity::Legendary => String::from_str(env, LEGENDARY_URI),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub owner: Address,
    pub rarity: Rarity,
    pub minted_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Storage {
    Admin,                // : address
    Paused,               // : bool
    TokenCount,           // : u32
    Player(Address),      // (player) : Player
    Token(u32),           // (token_id) : Token
    OwnerTokens(Address), // (owner) : Vec<u32>
}
