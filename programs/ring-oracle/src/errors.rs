use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Hook already initialized for this mint")]
    AlreadyInitialized,

    #[msg("Supplied account does not match the registered account set")]
    AccountMismatch,

    #[msg("Vault mint is not part of the registered pair")]
    MintNotInPair,

    #[msg("Price ring does not match the expected layout")]
    MalformedStore,

    #[msg("Derived price must be positive")]
    InvalidPrice,

    #[msg("Arithmetic overflow")]
    Overflow,
}
