use alloy_primitives::{map::HashMap, B256};
use serde::{Deserialize, Serialize};
use tree_hash::TreeHash;

use super::{
    error::{AttestationError, StoreError},
    helpers::{
        constants::{GENESIS_SLOT, SECONDS_PER_SLOT},
        misc::{compute_epoch_at_slot, compute_start_slot_at_epoch},
    },
    latest_message::LatestMessage,
};
use crate::{
    attestation::Attestation, beacon_block_header::BeaconBlockHeader, checkpoint::Checkpoint,
    committee::CommitteeCache,
};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Store {
    pub time: u64,
    pub genesis_time: u64,
    pub blocks: HashMap<B256, BeaconBlockHeader>,
    pub checkpoint_states: HashMap<Checkpoint, CommitteeCache>,
    pub latest_messages: HashMap<u64, LatestMessage>,
}

/// Seeds a store at an anchor block (genesis, or a finalized checkpoint
/// block when syncing from one). The anchor's committee assignments must be
/// supplied by the caller since shuffling is computed upstream.
pub fn get_forkchoice_store(
    anchor_block: BeaconBlockHeader,
    anchor_committees: CommitteeCache,
    genesis_time: u64,
) -> Store {
    let anchor_root = anchor_block.tree_hash_root();
    let anchor_checkpoint = Checkpoint {
        epoch: compute_epoch_at_slot(anchor_block.slot),
        root: anchor_root,
    };
    let time = genesis_time + SECONDS_PER_SLOT * anchor_block.slot;

    let mut blocks = HashMap::default();
    blocks.insert(anchor_root, anchor_block);
    let mut checkpoint_states = HashMap::default();
    checkpoint_states.insert(anchor_checkpoint, anchor_committees);

    Store {
        time,
        genesis_time,
        blocks,
        checkpoint_states,
        latest_messages: HashMap::default(),
    }
}

impl Store {
    pub fn get_current_slot(&self) -> u64 {
        GENESIS_SLOT + self.get_slots_since_genesis()
    }

    pub fn get_slots_since_genesis(&self) -> u64 {
        (self.time - self.genesis_time) / SECONDS_PER_SLOT
    }

    pub fn get_current_epoch(&self) -> u64 {
        compute_epoch_at_slot(self.get_current_slot())
    }

    /// Advances the store clock. Time never moves backwards.
    pub fn on_tick(&mut self, time: u64) {
        if time > self.time {
            self.time = time;
        }
    }

    pub fn contains_block(&self, root: B256) -> bool {
        self.blocks.contains_key(&root)
    }

    pub fn get_block(&self, root: B256) -> Result<&BeaconBlockHeader, StoreError> {
        self.blocks
            .get(&root)
            .ok_or(StoreError::UnknownBlock { root })
    }

    /// Registers a header under its hash tree root and returns that root.
    pub fn insert_block(&mut self, header: BeaconBlockHeader) -> B256 {
        let root = header.tree_hash_root();
        self.blocks.insert(root, header);
        root
    }

    /// Registers the committee assignments reachable from a checkpoint.
    pub fn insert_checkpoint_state(&mut self, checkpoint: Checkpoint, committees: CommitteeCache) {
        self.checkpoint_states.insert(checkpoint, committees);
    }

    pub fn get_ancestor(&self, root: B256, slot: u64) -> Result<B256, StoreError> {
        let mut root = root;
        let mut block = self.get_block(root)?;
        while block.slot > slot {
            root = block.parent_root;
            block = self.get_block(root)?;
        }
        Ok(root)
    }

    pub fn get_checkpoint_block(&self, root: B256, epoch: u64) -> Result<B256, StoreError> {
        let epoch_first_slot = compute_start_slot_at_epoch(epoch);
        self.get_ancestor(root, epoch_first_slot)
    }

    /// Sole mutator of `latest_messages`: a vote only replaces an existing
    /// entry when its target epoch is strictly newer.
    pub fn record_latest_message(&mut self, validator_index: u64, epoch: u64, root: B256) {
        let is_newer = self
            .latest_messages
            .get(&validator_index)
            .map_or(true, |message| message.epoch < epoch);
        if is_newer {
            self.latest_messages
                .insert(validator_index, LatestMessage { epoch, root });
        }
    }

    /// Runs every admission check without touching the store. Check order
    /// matters: later checks assume earlier ones hold.
    pub fn validate_on_attestation(
        &self,
        attestation: &Attestation,
    ) -> Result<(), AttestationError> {
        let data = &attestation.data;
        let target = data.target;

        let computed_epoch = compute_epoch_at_slot(data.slot);
        if target.epoch != computed_epoch {
            return Err(AttestationError::InvalidTargetEpoch {
                target_epoch: target.epoch,
                slot: data.slot,
                computed_epoch,
            });
        }

        let current_slot = self.get_current_slot();
        let current_epoch = compute_epoch_at_slot(current_slot);

        // Only the current and previous epochs are admissible. The lower
        // bound is written additively so it also holds at epoch zero.
        if target.epoch + 1 < current_epoch {
            return Err(AttestationError::TargetEpochTooOld {
                target_epoch: target.epoch,
                current_epoch,
            });
        }
        if target.epoch > current_epoch {
            return Err(AttestationError::TargetEpochInFuture {
                target_epoch: target.epoch,
                current_epoch,
            });
        }

        // A vote only counts once a full slot has elapsed since the slot it
        // claims to observe.
        if current_slot < data.slot + 1 {
            return Err(AttestationError::AttestationNotYetDue {
                slot: data.slot,
                current_slot,
            });
        }

        if !self.contains_block(target.root) {
            return Err(AttestationError::UnknownTargetBlock { root: target.root });
        }
        let head_block = self
            .blocks
            .get(&data.beacon_block_root)
            .ok_or(AttestationError::UnknownHeadBlock {
                root: data.beacon_block_root,
            })?;

        if head_block.slot > data.slot {
            return Err(AttestationError::HeadBlockFromFuture {
                block_slot: head_block.slot,
                slot: data.slot,
            });
        }

        let target_ancestor = self
            .get_checkpoint_block(data.beacon_block_root, target.epoch)
            .map_err(|error| match error {
                StoreError::UnknownBlock { root } => AttestationError::UnknownHeadBlock { root },
            })?;
        if target_ancestor != target.root {
            return Err(AttestationError::InconsistentTargetAndHead {
                target_root: target.root,
                head_root: data.beacon_block_root,
            });
        }

        Ok(())
    }

    /// Admits an attestation into fork choice. On success the latest message
    /// of every attesting index is updated; on rejection the store is left
    /// untouched.
    pub fn on_attestation(&mut self, attestation: &Attestation) -> Result<(), AttestationError> {
        self.validate_on_attestation(attestation)?;

        let target = attestation.data.target;
        let target_committees = self
            .checkpoint_states
            .get(&target)
            .ok_or(AttestationError::UnknownTargetBlock { root: target.root })?;
        let indexed_attestation = target_committees.get_indexed_attestation(attestation)?;

        for validator_index in indexed_attestation.attesting_indices.iter() {
            self.record_latest_message(
                *validator_index,
                target.epoch,
                attestation.data.beacon_block_root,
            );
        }

        Ok(())
    }
}
