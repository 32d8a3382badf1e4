pub mod attestation;
pub mod attestation_data;
pub mod beacon_block_header;
pub mod checkpoint;
pub mod committee;
pub mod fork_choice;
pub mod indexed_attestation;
pub mod signature;
