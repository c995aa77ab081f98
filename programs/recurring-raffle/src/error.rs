use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Contribution is below the entrance fee")]
    InsufficientContribution,
    #[msg("Raffle is not open for entries")]
    NotOpen,
    #[msg("Upkeep not needed: interval, state, balance or players check failed")]
    UpkeepNotNeeded,
    #[msg("Randomness delivered for an unknown request")]
    UnknownRequest,
    #[msg("Prize transfer failed")]
    TransferFailed,
    #[msg("Player index out of range")]
    IndexOutOfRange,
    #[msg("Raffle has reached its maximum number of entries")]
    LedgerFull,
    #[msg("No players to draw a winner from")]
    EmptyLedger,
    #[msg("Randomness callback carried no random words")]
    NoRandomWords,
    #[msg("Entrance fee must be greater than zero")]
    InvalidEntranceFee,
    #[msg("Account is not the configured VRF coordinator")]
    InvalidCoordinator,
    #[msg("Only the VRF coordinator authority can fulfill randomness")]
    OnlyCoordinatorCanFulfill,
    #[msg("Vault does not belong to this raffle")]
    InvalidVault,
}
