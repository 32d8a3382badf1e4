use alloy_primitives::map::HashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    attestation::{Attestation, Participation},
    indexed_attestation::IndexedAttestation,
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CommitteeError {
    #[error("no committee exists for slot {slot} at committee index {index}")]
    NoCommittee { slot: u64, index: u64 },
    #[error("aggregation bits hold {bits} bits but the committee has {committee} members")]
    BitlistLengthMismatch { bits: usize, committee: usize },
}

/// Committee assignments for the slots a checkpoint's chain can attest from:
/// per slot, the ordered committees, each an ordered list of validator
/// indices. Shuffling happens upstream; the cache only answers lookups.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct CommitteeCache {
    pub committees: HashMap<u64, Vec<Vec<u64>>>,
}

impl CommitteeCache {
    pub fn committees_at_slot(&self, slot: u64) -> u64 {
        self.committees
            .get(&slot)
            .map_or(0, |committees| committees.len() as u64)
    }

    pub fn get_beacon_committee(&self, slot: u64, index: u64) -> Result<&[u64], CommitteeError> {
        self.committees
            .get(&slot)
            .and_then(|committees| committees.get(index as usize))
            .map(Vec::as_slice)
            .ok_or(CommitteeError::NoCommittee { slot, index })
    }

    /// Resolves an attestation's participation into the validator indices
    /// that attested, sorted by increasing index.
    pub fn get_indexed_attestation(
        &self,
        attestation: &Attestation,
    ) -> Result<IndexedAttestation, CommitteeError> {
        let (committee_index, aggregation_bits) = match &attestation.participation {
            Participation::AggregationBits(aggregation_bits) => {
                (attestation.data.index, aggregation_bits)
            }
            Participation::CommitteeBits {
                committee_index,
                aggregation_bits,
            } => (*committee_index, aggregation_bits),
        };

        let committee = self.get_beacon_committee(attestation.data.slot, committee_index)?;
        if aggregation_bits.len() != committee.len() {
            return Err(CommitteeError::BitlistLengthMismatch {
                bits: aggregation_bits.len(),
                committee: committee.len(),
            });
        }

        let attesting_indices = committee
            .iter()
            .enumerate()
            .filter(|(position, _)| aggregation_bits.get(*position).unwrap_or(false))
            .map(|(_, validator_index)| *validator_index)
            .sorted_unstable()
            .collect::<Vec<_>>();

        Ok(IndexedAttestation {
            attesting_indices: attesting_indices.into(),
            data: attestation.data.clone(),
            signature: attestation.signature.clone(),
        })
    }
}
