use crate::ContractArgs;
use soroban_sdk::{contractimpl, panic_with_error, symbol_short, Address, Env, String};

use crate::{
    errors::Errors,
    storage::{extend_instance_ttl, get_owner_tokens, get_token, set_owner_tokens, set_token},
    Contract, ContractClient, TokenTrait,
};

#[contractimpl]
impl TokenTrait for Contract {
    fn token_uri(env: Env, token_id: u32) -> String {
        let token = get_token(&env, token_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::TokenMissing));

        token.rarity.uri(&env)
    }

    fn balance_of(env: Env, owner: Address) -> u32 {
        get_owner_tokens(&env, owner).len()
    }

    fn owner_of(env: Env, token_id: u32) -> Address {
        let token = get_token(&env, token_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::TokenMissing));

        token.owner
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();

        let mut token = get_token(&env, token_id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::TokenMissing));

        if token.owner != from {
            panic_with_error!(&env, &Errors::NotTokenOwner);
        }

        let mut from_tokens = get_owner_tokens(&env, from.clone());
        if let Some(index) = from_tokens.first_index_of(token_id) {
            from_tokens.remove(index);
        }
        set_owner_tokens(&env, from.clone(), &from_tokens);

        let mut to_tokens = get_owner_tokens(&env, to.clone());
        to_tokens.push_back(token_id);
        set_owner_tokens(&env, to.clone(), &to_tokens);

        token.owner = to.clone();
        set_token(&env, token_id, &token);

        env.events()
            .publish((symbol_short!("transfer"), from, to), token_id);

        extend_instance_ttl(&env);
    }
}
