use anchor_lang::prelude::*;

// Codes 6000..=6011 are relied on by deployed clients, keep their order.
#[error_code]
pub enum SquadError {
    #[msg("Squad size must be between 2 and 8 members")]
    InvalidSquadSize,

    #[msg("Name is too long")]
    NameTooLong,

    #[msg("Squad is full")]
    SquadFull,

    #[msg("Invalid amount")]
    InvalidAmount,

    #[msg("Insufficient stake")]
    InsufficientStake,

    #[msg("Unauthorized oracle")]
    UnauthorizedOracle,

    #[msg("No members in squad")]
    NoMembers,

    #[msg("No rewards to distribute")]
    NoRewards,

    #[msg("Zero total weight")]
    ZeroTotalWeight,

    #[msg("Math overflow")]
    Overflow,

    #[msg("Math underflow")]
    Underflow,

    #[msg("Division by zero")]
    DivisionByZero,

    // Squad and member validation
    #[msg("Squad name cannot be empty")]
    NameEmpty,

    #[msg("Activity score must be between 0 and 100")]
    InvalidActivityScore,

    #[msg("Only the config admin can perform this action")]
    UnauthorizedAdmin,

    #[msg("Token mint does not match the configured game mint")]
    InvalidTokenMint,

    #[msg("Token account has the wrong mint or owner")]
    InvalidTokenAccount,

    #[msg("Account is not a member of this squad")]
    InvalidMemberAccount,

    #[msg("Every squad member must be supplied exactly once")]
    MemberListMismatch,

    #[msg("Member supplied more than once")]
    DuplicateMember,

    #[msg("Basis points cannot exceed 10000")]
    InvalidBasisPoints,

    // Commit-reveal
    #[msg("Day must be the current UTC day")]
    InvalidDay,

    #[msg("Commit phase is closed")]
    NotCommitPhase,

    #[msg("Reveal phase is not open")]
    NotRevealPhase,

    #[msg("Settlement phase has not started")]
    NotSettlementPhase,

    #[msg("A choice was already committed for this day")]
    AlreadyCommitted,

    #[msg("No choice was committed for this day")]
    NotCommitted,

    #[msg("Choice was already revealed")]
    AlreadyRevealed,

    #[msg("Choice must be 0 (split) or 1 (steal)")]
    InvalidChoice,

    #[msg("Revealed choice and salt do not match the commitment")]
    CommitmentMismatch,

    #[msg("Round already settled")]
    RoundAlreadySettled,

    #[msg("Round has not been settled")]
    RoundNotSettled,

    #[msg("Choice was never revealed")]
    NotRevealed,

    #[msg("Payout already claimed")]
    AlreadyClaimed,
}
