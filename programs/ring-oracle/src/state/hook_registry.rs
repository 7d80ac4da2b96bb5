use anchor_lang::prelude::*;

use crate::errors::OracleError;

/// Per-mint descriptor wiring the instrumented mint to its pool, reserve
/// vaults and price ring. Written once at initialization, never updated.
///
/// Token-2022 resolves the transfer account set from the paired
/// ExtraAccountMetaList PDA; this account holds the same identities in
/// program-readable form so the hook can check what it was actually handed.
#[account]
pub struct HookRegistry {
    /// Instrumented Token-2022 mint
    pub mint: Pubkey,
    /// Pool the pair trades in
    pub pool: Pubkey,
    /// Vault holding reserves of `mint`
    pub base_vault: Pubkey,
    /// Vault holding the quote-side reserves
    pub quote_vault: Pubkey,
    /// Mint of the quote side
    pub quote_mint: Pubkey,
    /// Paired price ring account
    pub price_ring: Pubkey,
    /// Decimals of the instrumented mint, captured at initialization
    pub base_decimals: u8,
    /// Decimals of the quote mint
    pub quote_decimals: u8,
    /// PDA bump
    pub bump: u8,
}

impl HookRegistry {
    pub const SIZE: usize = 32 * 6 + 1 + 1 + 1;
    pub const SEED: &'static [u8] = b"hook_registry";

    /// Compares a transfer's supplied account set against the recorded one.
    /// The hook trusts nothing it is handed until this passes.
    pub fn validate_transfer_accounts(
        &self,
        pool: Pubkey,
        base_vault: Pubkey,
        quote_vault: Pubkey,
        base_vault_mint: Pubkey,
        quote_vault_mint: Pubkey,
        price_ring: Pubkey,
    ) -> Result<()> {
        require_keys_eq!(pool, self.pool, OracleError::AccountMismatch);
        require_keys_eq!(base_vault, self.base_vault, OracleError::AccountMismatch);
        require_keys_eq!(quote_vault, self.quote_vault, OracleError::AccountMismatch);
        require_keys_eq!(price_ring, self.price_ring, OracleError::AccountMismatch);
        require_keys_eq!(base_vault_mint, self.mint, OracleError::MintNotInPair);
        require_keys_eq!(quote_vault_mint, self.quote_mint, OracleError::MintNotInPair);
        Ok(())
    }
}
