use anchor_lang::prelude::*;

#[error_code]
pub enum PhaseDistributorError {
    // Access control errors
    #[msg("Only the admin can perform this action")]
    Unauthorized,
    #[msg("Distributor is paused")]
    ProgramPaused,

    // Phase validation errors
    #[msg("Per-claim amount must be greater than zero")]
    ZeroAmount,
    #[msg("Expiry must be in the future")]
    ExpiryNotInFuture,
    #[msg("Maximum number of phases reached")]
    RegistryFull,
    #[msg("Phase index out of range")]
    InvalidPhase,
    #[msg("Merkle root cannot be empty")]
    InvalidMerkleRoot,

    // Claim errors
    #[msg("Phase is not active")]
    PhaseNotActive,
    #[msg("Claiming period for this phase has ended")]
    ClaimingEnded,
    #[msg("Account has already claimed in this phase")]
    AlreadyClaimed,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // Batch distribution errors
    #[msg("Claimants and proofs arrays differ in length")]
    ArrayLengthMismatch,
    #[msg("Claim record account does not match the expected derivation")]
    InvalidClaimAccount,

    // Withdrawal errors
    #[msg("Recipient cannot be the zero address")]
    ZeroRecipient,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
