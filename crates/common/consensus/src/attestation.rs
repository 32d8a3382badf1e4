use serde::{Deserialize, Serialize};
use ssz_types::{typenum, BitList};

use crate::{attestation_data::AttestationData, signature::BlsSignature};

/// Validator participation carried by an attestation.
///
/// The encoding is fork-dependent: originally a flat bitlist over the
/// committee named by `data.index`, later a committee index travelling next
/// to its bits. Either shape is resolved into a normalized index list by the
/// committee cache before fork choice looks at it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Participation {
    AggregationBits(BitList<typenum::U2048>),
    CommitteeBits {
        committee_index: u64,
        aggregation_bits: BitList<typenum::U2048>,
    },
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Attestation {
    pub participation: Participation,
    pub data: AttestationData,
    pub signature: BlsSignature,
}
