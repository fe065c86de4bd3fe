extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{Contract, ContractClient};

pub fn setup() -> (Env, Address, ContractClient<'static>) {
    let env = Env::default();

    env.mock_all_auths();

    let admin: Address = Address::generate(&env);

    let contract_address = env.register(Contract, (&admin,));
    let client = ContractClient::new(&env, &contract_address);

    (env, admin, client)
}

pub fn to_std_string(s: &String) -> std::string::String {
    let mut buf = std::vec![0u8; s.len() as usize];

    s.copy_into_slice(&mut buf);

    std::string::String::from_utf8(buf).unwrap()
}
