use crate::ContractArgs;
use soroban_sdk::{contractimpl, panic_with_error, Address, BytesN, Env};

use crate::{
    errors::Errors,
    storage::{extend_instance_ttl, get_admin, get_paused, set_admin, set_paused},
    AdminTrait, Contract, ContractClient,
};

#[contractimpl]
impl Contract {
    pub fn __constructor(env: Env, admin: Address) {
        set_admin(&env, &admin);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl AdminTrait for Contract {
    fn pause(env: Env) {
        let admin = get_admin(&env);

        admin.require_auth();

        if get_paused(&env) {
            panic_with_error!(&env, &Errors::GamePaused);
        }

        set_paused(&env, true);

        // no `extend_instance_ttl` as the game is being paused
    }

    fn unpause(env: Env) {
        let admin = get_admin(&env);

        admin.require_auth();

        if !get_paused(&env) {
            panic_with_error!(&env, &Errors::GameNotPaused);
        }

        set_paused(&env, false);

        extend_instance_ttl(&env);
    }

    fn upgrade(env: Env, hash: BytesN<32>) {
        let admin = get_admin(&env);

        admin.require_auth();

        env.deployer().update_current_contract_wasm(hash);

        extend_instance_ttl(&env);
    }
}
