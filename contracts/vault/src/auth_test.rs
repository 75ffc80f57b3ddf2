use crate::{VaultContract, VaultContractClient};
use soroban_sdk::{
    testutils::{Address as _, MockAuth, MockAuthInvoke},
    token::{self, StellarAssetClient},
    Address, Env, IntoVal,
};

struct Setup {
    env: Env,
    client: VaultContractClient<'static>,
    vault: Address,
    owner: Address,
    asset: Address,
    recovery: Address,
    token: token::Client<'static>,
}

fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();

    let vault = env.register(VaultContract, ());
    let client = VaultContractClient::new(&env, &vault);
    let owner = Address::generate(&env);
    let recovery = Address::generate(&env);
    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let token = token::Client::new(&env, &asset);

    client.init(&owner, &asset, &Some(recovery.clone()), &0, &0, &0);
    StellarAssetClient::new(&env, &asset).mint(&vault, &1_000);

    Setup {
        env,
        client,
        vault,
        owner,
        asset,
        recovery,
        token,
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_requires_owner_signature() {
    let env = Env::default();
    let vault = env.register(VaultContract, ());
    let client = VaultContractClient::new(&env, &vault);
    let owner = Address::generate(&env);
    let asset = Address::generate(&env);

    assert!(client.try_init(&owner, &asset, &None, &0, &0, &0).is_err());
    assert!(client.try_get_config().is_err());
}

#[test]
fn init_is_signed_by_owner() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = env.register(VaultContract, ());
    let client = VaultContractClient::new(&env, &vault);
    let owner = Address::generate(&env);
    let asset = Address::generate(&env);

    client.init(&owner, &asset, &None, &0, &0, &0);

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, owner);
}

// ── withdraw ──────────────────────────────────────────────────────────────────

#[test]
fn withdraw_is_signed_by_owner() {
    let s = setup();
    let recipient = Address::generate(&s.env);

    s.client.withdraw(&s.owner, &100, &recipient, &s.asset);

    let auths = s.env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, s.owner);
}

#[test]
fn unsigned_owner_withdraw_is_rejected() {
    let s = setup();
    let recipient = Address::generate(&s.env);

    s.env.set_auths(&[]);
    assert!(s
        .client
        .try_withdraw(&s.owner, &100, &recipient, &s.asset)
        .is_err());

    assert_eq!(s.token.balance(&s.vault), 1_000);
    assert_eq!(s.token.balance(&recipient), 0);
    assert_eq!(s.client.get_config().day_total, 0);
}

#[test]
fn withdraw_signed_by_someone_else_is_rejected() {
    let s = setup();
    let thief = Address::generate(&s.env);

    s.env.mock_auths(&[MockAuth {
        address: &thief,
        invoke: &MockAuthInvoke {
            contract: &s.vault,
            fn_name: "withdraw",
            args: (s.owner.clone(), 100_i128, thief.clone(), s.asset.clone()).into_val(&s.env),
            sub_invokes: &[],
        },
    }]);
    assert!(s
        .client
        .try_withdraw(&s.owner, &100, &thief, &s.asset)
        .is_err());
    assert_eq!(s.token.balance(&thief), 0);

    s.env.mock_auths(&[MockAuth {
        address: &s.owner,
        invoke: &MockAuthInvoke {
            contract: &s.vault,
            fn_name: "withdraw",
            args: (s.owner.clone(), 100_i128, thief.clone(), s.asset.clone()).into_val(&s.env),
            sub_invokes: &[],
        },
    }]);
    assert_eq!(s.client.withdraw(&s.owner, &100, &thief, &s.asset), 100);
    assert_eq!(s.token.balance(&thief), 100);
}

// ── admin_set_owner ───────────────────────────────────────────────────────────

#[test]
fn set_owner_is_signed_by_recovery() {
    let s = setup();
    let new_owner = Address::generate(&s.env);

    s.client.admin_set_owner(&s.recovery, &new_owner);

    let auths = s.env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, s.recovery);
    assert_eq!(s.client.get_owner(), new_owner);
}

#[test]
fn unsigned_set_owner_is_rejected() {
    let s = setup();
    let new_owner = Address::generate(&s.env);

    s.env.set_auths(&[]);
    assert!(s.client.try_admin_set_owner(&s.recovery, &new_owner).is_err());
    assert_eq!(s.client.get_owner(), s.owner);
}
