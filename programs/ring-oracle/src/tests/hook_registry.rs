use anchor_lang::prelude::*;

use crate::errors::OracleError;
use crate::state::HookRegistry;

fn registry() -> HookRegistry {
    HookRegistry {
        mint: Pubkey::new_unique(),
        pool: Pubkey::new_unique(),
        base_vault: Pubkey::new_unique(),
        quote_vault: Pubkey::new_unique(),
        quote_mint: Pubkey::new_unique(),
        price_ring: Pubkey::new_unique(),
        base_decimals: 9,
        quote_decimals: 6,
        bump: 254,
    }
}

fn validate(r: &HookRegistry, pool: Pubkey, base_vault: Pubkey, ring: Pubkey) -> Result<()> {
    r.validate_transfer_accounts(pool, base_vault, r.quote_vault, r.mint, r.quote_mint, ring)
}

#[test]
fn recorded_account_set_is_accepted() {
    let r = registry();
    assert!(validate(&r, r.pool, r.base_vault, r.price_ring).is_ok());
}

#[test]
fn foreign_pool_is_rejected() {
    let r = registry();
    assert_eq!(
        validate(&r, Pubkey::new_unique(), r.base_vault, r.price_ring),
        Err(OracleError::AccountMismatch.into())
    );
}

#[test]
fn foreign_vault_is_rejected() {
    let r = registry();
    assert_eq!(
        validate(&r, r.pool, Pubkey::new_unique(), r.price_ring),
        Err(OracleError::AccountMismatch.into())
    );
}

#[test]
fn swapped_vaults_are_rejected() {
    let r = registry();
    assert_eq!(
        r.validate_transfer_accounts(
            r.pool,
            r.quote_vault,
            r.base_vault,
            r.quote_mint,
            r.mint,
            r.price_ring,
        ),
        Err(OracleError::AccountMismatch.into())
    );
}

#[test]
fn foreign_ring_is_rejected() {
    let r = registry();
    assert_eq!(
        validate(&r, r.pool, r.base_vault, Pubkey::new_unique()),
        Err(OracleError::AccountMismatch.into())
    );
}

#[test]
fn vault_with_foreign_mint_is_rejected() {
    let r = registry();
    assert_eq!(
        r.validate_transfer_accounts(
            r.pool,
            r.base_vault,
            r.quote_vault,
            Pubkey::new_unique(),
            r.quote_mint,
            r.price_ring,
        ),
        Err(OracleError::MintNotInPair.into())
    );
    assert_eq!(
        r.validate_transfer_accounts(
            r.pool,
            r.base_vault,
            r.quote_vault,
            r.mint,
            Pubkey::new_unique(),
            r.price_ring,
        ),
        Err(OracleError::MintNotInPair.into())
    );
}
