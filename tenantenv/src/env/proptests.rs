//! Property-based tests for the export codec.

use super::{EnvCodec, EnvVars};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,24}"
}

// Printable text plus the characters the codec has to escape or carry
// across lines.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,40}",
        "[a-z\"\\\\\n\t#= ]{0,40}",
        "\\PC{0,20}",
    ]
}

fn vars_strategy() -> impl Strategy<Value = EnvVars> {
    prop::collection::vec((name_strategy(), value_strategy()), 0..16)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    // parse(serialize(c)) == c
    #[test]
    fn serialize_then_parse_roundtrips(vars in vars_strategy()) {
        let text = EnvCodec::serialize(&vars);
        let parsed = EnvCodec::parse_with_report(&text);
        prop_assert!(parsed.is_clean());
        prop_assert_eq!(parsed.vars, vars);
    }

    // Output order never depends on input order
    #[test]
    fn serialize_ignores_insertion_order(
        pairs in prop::collection::vec((name_strategy(), "[a-z0-9]{0,8}"), 0..16)
    ) {
        let forward: EnvVars = pairs.into_iter().collect();
        let mut entries = forward.to_vec();
        entries.reverse();
        let reversed: EnvVars = entries.into_iter().collect();
        prop_assert_eq!(EnvCodec::serialize(&forward), EnvCodec::serialize(&reversed));
    }

    // Lines are strictly ascending by name
    #[test]
    fn serialized_names_strictly_ascending(vars in vars_strategy()) {
        let text = EnvCodec::serialize(&vars);
        let names: Vec<&str> = vars.names().collect();
        for pair in names.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        let mut last = None;
        for name in names {
            let pos = text.find(&format!("export {name}=\"")).unwrap();
            if let Some(prev) = last {
                prop_assert!(pos > prev);
            }
            last = Some(pos);
        }
        prop_assert!(text.is_empty() || text.ends_with('\n'));
    }

    // Indenting every line does not change the result
    #[test]
    fn leading_indentation_is_ignored(
        vars in prop::collection::vec((name_strategy(), "[ -~]{0,20}"), 0..8)
            .prop_map(|pairs| pairs.into_iter().collect::<EnvVars>()),
        indent in "[ \t]{0,4}"
    ) {
        let text = EnvCodec::serialize(&vars);
        let indented: String = text
            .lines()
            .map(|line| format!("{indent}{line}\n"))
            .collect();
        prop_assert_eq!(EnvCodec::parse(&indented), vars);
    }

    // Parsing arbitrary input never panics
    #[test]
    fn parse_never_panics(text in "\\PC{0,200}") {
        let _ = EnvCodec::parse_with_report(&text);
    }
}
