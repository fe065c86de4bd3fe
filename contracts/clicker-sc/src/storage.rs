use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::{
    errors::Errors,
    types::{Player, Storage, Token},
    WEEK_OF_LEDGERS,
};

pub fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

fn extend_persistent_ttl(env: &Env, key: &Storage) {
    let max_ttl = env.storage().max_ttl();

    env.storage()
        .persistent()
        .extend_ttl::<Storage>(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get::<Storage, Address>(&Storage::Admin)
        .unwrap_or_else(|| panic_with_error!(&env, &Errors::AdminMissing))
}
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .set::<Storage, Address>(&Storage::Admin, admin);
}

pub fn get_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<Storage, bool>(&Storage::Paused)
        .unwrap_or(false)
}
pub fn set_paused(env: &Env, paused: bool) {
    env.storage()
        .instance()
        .set::<Storage, bool>(&Storage::Paused, &paused);
}

pub fn get_token_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get::<Storage, u32>(&Storage::TokenCount)
        .unwrap_or(0)
}
// Token ids are handed out sequentially from 1 and never reused
pub fn bump_token_count(env: &Env) -> u32 {
    let token_id = get_token_count(env) + 1;

    env.storage()
        .instance()
        .set::<Storage, u32>(&Storage::TokenCount, &token_id);

    token_id
}

pub fn get_player(env: &Env, player: Address) -> Option<Player> {
    env.storage()
        .persistent()
        .get::<Storage, Player>(&Storage::Player(player))
}
pub fn set_player(env: &Env, player: Address, record: &Player) {
    let key = Storage::Player(player);

    env.storage()
        .persistent()
        .set::<Storage, Player>(&key, record);

    extend_persistent_ttl(env, &key);
}

pub fn get_token(env: &Env, token_id: u32) -> Option<Token> {
    env.storage()
        .persistent()
        .get::<Storage, Token>(&Storage::Token(token_id))
}
pub fn set_token(env: &Env, token_id: u32, token: &Token) {
    let key = Storage::Token(token_id);

    env.storage().persistent().set::<Storage, Token>(&key, token);

    extend_persistent_ttl(env, &key);
}

pub fn get_owner_tokens(env: &Env, owner: Address) -> Vec<u32> {
    env.storage()
        .persistent()
        .get::<Storage, Vec<u32>>(&Storage::OwnerTokens(owner))
        .unwrap_or_else(|| Vec::new(env))
}
pub fn set_owner_tokens(env: &Env, owner: Address, token_ids: &Vec<u32>) {
    let key = Storage::OwnerTokens(owner);

    env.storage()
        .persistent()
        .set::<Storage, Vec<u32>>(&key, token_ids);

    extend_persistent_ttl(env, &key);
}
