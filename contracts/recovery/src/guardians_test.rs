use crate::{RecoveryContract, RecoveryContractClient, RecoveryError};
use soroban_sdk::{testutils::Address as _, Address, Env};

fn setup(threshold: u32, admin_is_participant: bool) -> (Env, RecoveryContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let id = env.register(RecoveryContract, ());
    let client = RecoveryContractClient::new(&env, &id);
    let admin = Address::generate(&env);
    client.init_guardians(&admin, &threshold, &admin_is_participant);
    (env, client, admin)
}

// ── init_guardians ────────────────────────────────────────────────────────────

#[test]
fn init_guardians_sets_admin_and_threshold() {
    let (_, client, admin) = setup(2, false);
    assert_eq!(client.get_guardian_admin(), admin);
    assert_eq!(client.get_threshold(), 2);
    assert_eq!(client.get_guardians().len(), 0);
    assert!(!client.get_guardian_config().admin_is_participant);
}

#[test]
#[should_panic(expected = "Error(Contract, #101)")]
fn init_guardians_twice_panics() {
    let (env, client, _) = setup(1, false);
    client.init_guardians(&Address::generate(&env), &1, &false);
}

#[test]
fn init_guardians_rejects_zero_threshold() {
    let env = Env::default();
    env.mock_all_auths();
    let id = env.register(RecoveryContract, ());
    let client = RecoveryContractClient::new(&env, &id);

    let res = client.try_init_guardians(&Address::generate(&env), &0, &false);
    assert_eq!(res, Err(Ok(RecoveryError::InvalidThreshold)));
    assert_eq!(client.try_get_threshold(), Err(Ok(RecoveryError::NotInitialized)));
}

// ── add_guardian ──────────────────────────────────────────────────────────────

#[test]
fn add_guardian_registers_identity() {
    let (env, client, admin) = setup(2, false);
    let g1 = Address::generate(&env);
    let g2 = Address::generate(&env);

    client.add_guardian(&admin, &g1);
    client.add_guardian(&admin, &g2);

    let guardians = client.get_guardians();
    assert_eq!(guardians.len(), 2);
    assert!(client.is_guardian(&g1));
    assert!(client.is_guardian(&g2));
    assert!(!client.is_guardian(&admin));
}

#[test]
#[should_panic(expected = "Error(Contract, #100)")]
fn add_guardian_non_admin_panics() {
    let (env, client, _) = setup(1, false);
    let rando = Address::generate(&env);
    client.add_guardian(&rando, &rando);
}

#[test]
fn add_guardian_duplicate_rejected() {
    let (env, client, admin) = setup(1, false);
    let g = Address::generate(&env);
    client.add_guardian(&admin, &g);

    let res = client.try_add_guardian(&admin, &g);
    assert_eq!(res, Err(Ok(RecoveryError::GuardianAlreadyExists)));
    assert_eq!(client.get_guardians().len(), 1);
}

#[test]
fn is_guardian_false_before_init() {
    let env = Env::default();
    let id = env.register(RecoveryContract, ());
    let client = RecoveryContractClient::new(&env, &id);
    assert!(!client.is_guardian(&Address::generate(&env)));
}

// ── remove_guardian ───────────────────────────────────────────────────────────

#[test]
fn remove_guardian_success() {
    let (env, client, admin) = setup(1, false);
    let g1 = Address::generate(&env);
    let g2 = Address::generate(&env);
    client.add_guardian(&admin, &g1);
    client.add_guardian(&admin, &g2);

    client.remove_guardian(&admin, &g1);
    assert!(!client.is_guardian(&g1));
    assert!(client.is_guardian(&g2));
    assert_eq!(client.get_guardians().len(), 1);
}

#[test]
fn remove_guardian_unknown_rejected() {
    let (env, client, admin) = setup(1, false);
    let res = client.try_remove_guardian(&admin, &Address::generate(&env));
    assert_eq!(res, Err(Ok(RecoveryError::GuardianNotFound)));
}

#[test]
fn remove_guardian_cannot_break_quorum() {
    let (env, client, admin) = setup(2, false);
    let g1 = Address::generate(&env);
    let g2 = Address::generate(&env);
    client.add_guardian(&admin, &g1);
    client.add_guardian(&admin, &g2);

    let res = client.try_remove_guardian(&admin, &g1);
    assert_eq!(res, Err(Ok(RecoveryError::InvalidThreshold)));
    assert!(client.is_guardian(&g1));
}

#[test]
fn remove_guardian_counts_participating_admin() {
    let (env, client, admin) = setup(2, true);
    let g1 = Address::generate(&env);
    let g2 = Address::generate(&env);
    client.add_guardian(&admin, &g1);
    client.add_guardian(&admin, &g2);

    // admin + g2 still reach 2
    client.remove_guardian(&admin, &g1);
    assert_eq!(client.get_guardians().len(), 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #100)")]
fn remove_guardian_non_admin_panics() {
    let (env, client, admin) = setup(1, false);
    let g = Address::generate(&env);
    client.add_guardian(&admin, &g);
    client.remove_guardian(&g, &g);
}

// ── set_threshold ─────────────────────────────────────────────────────────────

#[test]
fn set_threshold_within_bounds() {
    let (env, client, admin) = setup(1, false);
    client.add_guardian(&admin, &Address::generate(&env));
    client.add_guardian(&admin, &Address::generate(&env));

    client.set_threshold(&admin, &2);
    assert_eq!(client.get_threshold(), 2);
}

#[test]
fn set_threshold_rejects_out_of_bounds() {
    let (env, client, admin) = setup(1, false);
    client.add_guardian(&admin, &Address::generate(&env));
    client.add_guardian(&admin, &Address::generate(&env));

    assert_eq!(
        client.try_set_threshold(&admin, &0),
        Err(Ok(RecoveryError::InvalidThreshold))
    );
    assert_eq!(
        client.try_set_threshold(&admin, &3),
        Err(Ok(RecoveryError::InvalidThreshold))
    );
    assert_eq!(client.get_threshold(), 1);
}

#[test]
fn set_threshold_allows_admin_seat_when_participating() {
    let (env, client, admin) = setup(1, true);
    client.add_guardian(&admin, &Address::generate(&env));
    client.add_guardian(&admin, &Address::generate(&env));

    client.set_threshold(&admin, &3);
    assert_eq!(client.get_threshold(), 3);
}

#[test]
fn admin_listed_as_guardian_is_counted_once() {
    let (env, client, admin) = setup(1, true);
    client.add_guardian(&admin, &admin);
    client.add_guardian(&admin, &Address::generate(&env));

    assert_eq!(
        client.try_set_threshold(&admin, &3),
        Err(Ok(RecoveryError::InvalidThreshold))
    );
    client.set_threshold(&admin, &2);
}

#[test]
#[should_panic(expected = "Error(Contract, #100)")]
fn set_threshold_non_admin_panics() {
    let (env, client, _) = setup(1, false);
    client.set_threshold(&Address::generate(&env), &1);
}
