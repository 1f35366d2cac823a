use anchor_lang::prelude::*;

/// Event emitted when a new distributor is initialized
#[event]
pub struct DistributorInitialized {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Admin of the distributor
    pub admin: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Amount of tokens deposited into the vault at initialization
    pub initial_funding: u64,
}

/// Event emitted when a phase is appended to the registry
#[event]
pub struct PhaseCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Registry position of the new phase
    pub phase_index: u8,
    /// Eligibility commitment for the phase
    pub merkle_root: [u8; 32],
    /// Fixed entitlement paid per successful claim
    pub per_claim_amount: u64,
    /// Unix timestamp after which claims are refused
    pub expiry: i64,
    /// Whether the phase was activated on creation
    pub active: bool,
}

/// Event emitted when phase parameters are updated
#[event]
pub struct PhaseUpdated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Registry position of the updated phase
    pub phase_index: u8,
    /// Eligibility commitment after the update
    pub merkle_root: [u8; 32],
    /// Per-claim amount after the update
    pub per_claim_amount: u64,
    /// Expiry after the update
    pub expiry: i64,
}

/// Event emitted when a phase is activated and made current
#[event]
pub struct PhaseActivated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Registry position of the activated phase
    pub phase_index: u8,
}

/// Event emitted when a phase is deactivated
#[event]
pub struct PhaseDeactivated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Registry position of the deactivated phase
    pub phase_index: u8,
}

/// Event emitted when tokens are claimed
#[event]
pub struct TokensClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Phase the claim was redeemed against
    pub phase_index: u8,
    /// Amount of tokens transferred to the claimant
    pub amount: u64,
    /// Total amount claimed from the distributor by all users
    pub total_claimed: u64,
}

/// Event emitted once at the end of a batch distribution
#[event]
pub struct BatchDistributed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Phase the batch was redeemed against
    pub phase_index: u8,
    /// Number of entries committed and paid out
    pub success_count: u32,
    /// Number of entries skipped (null, already claimed, or unprovable)
    pub skip_count: u32,
}

/// Event emitted when the distributor is paused
#[event]
pub struct DistributorPaused {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Admin who paused the distributor
    pub admin: Pubkey,
}

/// Event emitted when the distributor is unpaused
#[event]
pub struct DistributorUnpaused {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Admin who unpaused the distributor
    pub admin: Pubkey,
}

/// Event emitted when the admin sweeps vault funds
#[event]
pub struct EmergencyWithdrawal {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Admin who performed the withdrawal
    pub admin: Pubkey,
    /// Owner of the token account that received the funds
    pub recipient: Pubkey,
    /// Amount of tokens withdrawn
    pub amount: u64,
}
