pub mod test_batch;
pub mod test_merkle;
pub mod test_phase;
