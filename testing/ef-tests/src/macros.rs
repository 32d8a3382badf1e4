/// Runs a consensus container against the official `ssz_static` vectors:
/// the YAML value must round-trip through SSZ to the recorded bytes and
/// hash to the recorded root. Assets are expected under `mainnet/` next to
/// the crate; the suite is gated behind the `ef-tests` feature.
#[macro_export]
macro_rules! test_consensus_type {
    ($struct_name:ident) => {
        paste::paste! {
            #[cfg(test)]
            #[allow(non_snake_case)]
            mod [<tests_ $struct_name>] {
                use super::*;
                use rstest::rstest;
                use serde_yaml::Value;
                use std::str::FromStr;
                use tree_hash::TreeHash;
                use ssz::{Decode, Encode};

                #[rstest]
                #[case("case_0")]
                #[case("case_1")]
                #[case("case_2")]
                #[case("case_3")]
                #[case("case_4")]
                fn test_type(#[case] case: &str) {
                    let path = format!(
                        "mainnet/tests/mainnet/deneb/ssz_static/{}/ssz_random/{case}/",
                        stringify!($struct_name)
                    );

                    let hash_root = {
                        let content = std::fs::read_to_string(format!("{path}roots.yaml"))
                            .expect("cannot find test asset");
                        let value: Value = serde_yaml::from_str(&content).unwrap();
                        alloy_primitives::B256::from_str(value.get("root").unwrap().as_str().unwrap())
                            .unwrap()
                    };

                    let expected = {
                        let value = std::fs::read_to_string(format!("{path}value.yaml"))
                            .expect("cannot find test asset");
                        serde_yaml::from_str::<$struct_name>(&value).unwrap()
                    };

                    let ssz = $crate::utils::read_ssz_snappy_bytes(
                        std::path::Path::new(&format!("{path}serialized.ssz_snappy")),
                    )
                    .expect("cannot find test asset");

                    assert_eq!(ssz, expected.as_ssz_bytes());
                    assert_eq!(expected, $struct_name::from_ssz_bytes(&ssz).unwrap());
                    assert_eq!(hash_root, expected.tree_hash_root());
                }
            }
        }
    };
}
