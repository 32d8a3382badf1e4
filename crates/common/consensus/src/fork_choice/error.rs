use alloy_primitives::B256;
use thiserror::Error;

use crate::committee::CommitteeError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    #[error("block {root} is not known to the store")]
    UnknownBlock { root: B256 },
}

/// Reasons an attestation is refused admission into fork choice. All of them
/// are terminal for the attestation and leave the store untouched; none are
/// fatal to the caller.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AttestationError {
    #[error("attestation targets epoch {target_epoch} but its slot {slot} lies in epoch {computed_epoch}")]
    InvalidTargetEpoch {
        target_epoch: u64,
        slot: u64,
        computed_epoch: u64,
    },

    #[error(
        "attestation target epoch {target_epoch} is before the previous epoch \
         (current epoch: {current_epoch})"
    )]
    TargetEpochTooOld {
        target_epoch: u64,
        current_epoch: u64,
    },

    #[error("attestation target epoch {target_epoch} is after the current epoch {current_epoch}")]
    TargetEpochInFuture {
        target_epoch: u64,
        current_epoch: u64,
    },

    #[error("attestation for slot {slot} is not yet due at current slot {current_slot}")]
    AttestationNotYetDue { slot: u64, current_slot: u64 },

    #[error("attestation target block {root} is not known to the store")]
    UnknownTargetBlock { root: B256 },

    #[error("attestation head block {root} is not known to the store")]
    UnknownHeadBlock { root: B256 },

    #[error("attestation head block at slot {block_slot} is newer than the attestation slot {slot}")]
    HeadBlockFromFuture { block_slot: u64, slot: u64 },

    #[error(
        "attestation target {target_root} is not the ancestor of head {head_root} \
         at the target epoch's first slot"
    )]
    InconsistentTargetAndHead { target_root: B256, head_root: B256 },

    #[error("attestation participation does not resolve against its committee: {source}")]
    MalformedAttestation {
        #[from]
        source: CommitteeError,
    },
}
