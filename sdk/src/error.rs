use anchor_lang::prelude::Pubkey;
use splitsquads::errors::SquadError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Anchor error: {0}")]
    AnchorError(#[from] anchor_lang::error::Error),
    #[error("RPC error: {0}")]
    RpcError(Box<solana_client::client_error::ClientError>),
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),
    #[error("Account {0} already exists")]
    AccountAlreadyExists(Pubkey),
    #[error("Token account {account} holds {available}, needs {required}")]
    InsufficientFunds {
        account: Pubkey,
        available: u64,
        required: u64,
    },
    #[error("Salt must be {expected} bytes, got {actual}")]
    InvalidSaltLength { expected: usize, actual: usize },
    #[error("Failed to decode hex: {0}")]
    DecodeHexError(#[from] hex::FromHexError),
}

impl From<solana_client::client_error::ClientError> for Error {
    fn from(value: solana_client::client_error::ClientError) -> Self {
        Self::RpcError(Box::new(value))
    }
}

impl Error {
    // Program error carried by this failure, if any
    pub fn squad_error(&self) -> Option<SquadError> {
        match self {
            Error::AnchorError(anchor_lang::error::Error::AnchorError(e)) => {
                squad_error_from_code(e.error_code_number)
            }
            _ => None,
        }
    }
}

const SQUAD_ERRORS: [SquadError; 34] = [
    SquadError::InvalidSquadSize,
    SquadError::NameTooLong,
    SquadError::SquadFull,
    SquadError::InvalidAmount,
    SquadError::InsufficientStake,
    SquadError::UnauthorizedOracle,
    SquadError::NoMembers,
    SquadError::NoRewards,
    SquadError::ZeroTotalWeight,
    SquadError::Overflow,
    SquadError::Underflow,
    SquadError::DivisionByZero,
    SquadError::NameEmpty,
    SquadError::InvalidActivityScore,
    SquadError::UnauthorizedAdmin,
    SquadError::InvalidTokenMint,
    SquadError::InvalidTokenAccount,
    SquadError::InvalidMemberAccount,
    SquadError::MemberListMismatch,
    SquadError::DuplicateMember,
    SquadError::InvalidBasisPoints,
    SquadError::InvalidDay,
    SquadError::NotCommitPhase,
    SquadError::NotRevealPhase,
    SquadError::NotSettlementPhase,
    SquadError::AlreadyCommitted,
    SquadError::NotCommitted,
    SquadError::AlreadyRevealed,
    SquadError::InvalidChoice,
    SquadError::CommitmentMismatch,
    SquadError::RoundAlreadySettled,
    SquadError::RoundNotSettled,
    SquadError::NotRevealed,
    SquadError::AlreadyClaimed,
];

// Maps a custom program error code (6000 + index) back to its variant
pub fn squad_error_from_code(code: u32) -> Option<SquadError> {
    SQUAD_ERRORS.into_iter().find(|e| u32::from(*e) == code)
}
