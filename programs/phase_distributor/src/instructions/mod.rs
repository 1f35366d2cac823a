pub mod batch_distribute;
pub mod claim;
pub mod create_phase;
pub mod deactivate_phase;
pub mod emergency_withdraw;
pub mod initialize;
pub mod pause;
pub mod phase_status;
pub mod set_active_phase;
pub mod update_phase;

pub use batch_distribute::*;
pub use claim::*;
pub use create_phase::*;
pub use deactivate_phase::*;
pub use emergency_withdraw::*;
pub use initialize::*;
pub use pause::*;
pub use phase_status::*;
pub use set_active_phase::*;
pub use update_phase::*;
