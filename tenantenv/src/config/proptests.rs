//! Property-based tests for tier merging.

use super::{ConfigMerger, DefaultEnv, MergeInputs};
use crate::env::EnvVars;
use crate::keys;
use crate::topology::{Pool, TenantTopology, TopologyDeriver};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][A-Z0-9_]{0,12}",
        Just(keys::SERVER_URL.to_string()),
        Just(keys::ARGS.to_string()),
        Just(keys::BROWSER_REDIRECT_URL.to_string()),
        Just(keys::UPDATE.to_string()),
        Just(keys::PROMETHEUS_JOB_ID.to_string()),
    ]
}

fn vars_strategy() -> impl Strategy<Value = EnvVars> {
    prop::collection::vec((name_strategy(), "[ -~]{0,16}"), 0..10)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn topology_strategy() -> impl Strategy<Value = TenantTopology> {
    (
        "[a-z]{0,8}",
        "[a-z-]{0,8}",
        prop::collection::vec((1u32..=32, 1u32..=16), 0..4),
        prop::option::of(prop_oneof![Just(String::new()), "https?://[a-z.]{1,12}"]),
    )
        .prop_map(|(name, namespace, pools, domain)| {
            let mut topology = TenantTopology::new(name, namespace);
            for (idx, (servers, volumes)) in pools.into_iter().enumerate() {
                topology = topology.with_pool(Pool::new(format!("pool-{idx}"), servers, volumes));
            }
            topology.console_domain = domain;
            topology
        })
}

fn merge(topology: &TenantTopology, persisted: &EnvVars, overrides: &EnvVars) -> EnvVars {
    ConfigMerger::merge(MergeInputs {
        defaults: &DefaultEnv::default(),
        derived: &TopologyDeriver::derive(topology),
        persisted,
        overrides,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // A user override always ends up in the result verbatim
    #[test]
    fn user_overrides_always_win(
        topology in topology_strategy(),
        persisted in vars_strategy(),
        overrides in vars_strategy()
    ) {
        let merged = merge(&topology, &persisted, &overrides);
        for (name, value) in overrides.iter() {
            prop_assert_eq!(merged.get(name), Some(value));
        }
    }

    // Without overrides, topology-owned keys never carry persisted values
    #[test]
    fn topology_owned_keys_are_fresh(
        topology in topology_strategy(),
        persisted in vars_strategy()
    ) {
        let merged = merge(&topology, &persisted, &EnvVars::new());
        let derived = TopologyDeriver::derive(&topology);

        prop_assert_eq!(merged.get(keys::SERVER_URL), Some(derived.server_url.as_str()));
        prop_assert_eq!(merged.get(keys::ARGS), Some(derived.args.as_str()));
        prop_assert_eq!(
            merged.get(keys::BROWSER_REDIRECT_URL),
            topology.console_domain()
        );
    }

    // Every persisted name survives the merge unless it is topology-owned
    #[test]
    fn persisted_names_survive(
        topology in topology_strategy(),
        persisted in vars_strategy()
    ) {
        let merged = merge(&topology, &persisted, &EnvVars::new());
        for (name, value) in persisted.iter() {
            if !keys::TOPOLOGY_OWNED.contains(&name) {
                prop_assert_eq!(merged.get(name), Some(value));
            }
        }
    }

    // Default and derived keys are always present
    #[test]
    fn base_keys_always_present(
        topology in topology_strategy(),
        persisted in vars_strategy(),
        overrides in vars_strategy()
    ) {
        let merged = merge(&topology, &persisted, &overrides);
        for name in [
            keys::SERVER_URL,
            keys::ARGS,
            keys::PROMETHEUS_JOB_ID,
            keys::UPDATE,
            keys::UPDATE_MINISIGN_PUBKEY,
        ] {
            prop_assert!(merged.contains(name));
        }
    }

    // Merging is deterministic
    #[test]
    fn merge_is_deterministic(
        topology in topology_strategy(),
        persisted in vars_strategy(),
        overrides in vars_strategy()
    ) {
        prop_assert_eq!(
            merge(&topology, &persisted, &overrides),
            merge(&topology, &persisted, &overrides)
        );
    }
}
