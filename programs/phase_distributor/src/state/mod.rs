pub mod claim_record;
pub mod distributor;
pub mod phase;

pub use claim_record::*;
pub use distributor::*;
pub use phase::*;
