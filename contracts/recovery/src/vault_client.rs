use soroban_sdk::{contractclient, Address, Env};

/// The part of the vault contract recovery talks to.
#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    fn get_owner(env: Env) -> Address;

    /// Fails unless `caller` is the recovery contract configured in the vault.
    fn admin_set_owner(env: Env, caller: Address, new_owner: Address);
}
