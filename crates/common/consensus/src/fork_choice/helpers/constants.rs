pub const GENESIS_EPOCH: u64 = 0;
pub const GENESIS_SLOT: u64 = 0;
pub const SECONDS_PER_SLOT: u64 = 12;
pub const SLOTS_PER_EPOCH: u64 = 32;
