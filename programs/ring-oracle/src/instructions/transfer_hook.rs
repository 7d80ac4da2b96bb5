use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;

use crate::constants::EXTRA_ACCOUNT_METAS_SEED;
use crate::math::reserve_ratio_price;
use crate::state::{HookRegistry, PricePoint, PriceRing};

/// Executed by Token-2022 before every transfer of an instrumented mint.
///
/// Validates the resolved account set against the registry, samples the
/// pool's post-trade reserve ratio and appends it to the mint's price ring.
/// Any failure aborts the enclosing transfer, so a sample is recorded if and
/// only if the tokens actually move.
pub fn transfer_hook(ctx: Context<TransferHook>) -> Result<()> {
    // Pool creation moves instrumented tokens before the pool id exists, so
    // the meta list cannot be populated yet at that point. Let those early
    // transfers through unrecorded.
    if ctx.accounts.extra_account_meta_list.data_is_empty() {
        msg!("Transfer hook not configured for this mint yet; allowing transfer");
        return Ok(());
    }

    let registry = &ctx.accounts.hook_registry;
    let base_vault = &ctx.accounts.base_vault;
    let quote_vault = &ctx.accounts.quote_vault;

    // The transfer-construction layer accepts arbitrary account lists, so
    // everything beyond the PDA-derived accounts is checked against the
    // identities recorded at initialization.
    registry.validate_transfer_accounts(
        ctx.accounts.pool.key(),
        base_vault.key(),
        quote_vault.key(),
        base_vault.mint,
        quote_vault.mint,
        ctx.accounts.price_ring.key(),
    )?;

    // Vault balances already reflect this transfer; the ratio is the
    // post-trade spot price.
    let price = reserve_ratio_price(
        base_vault.amount,
        quote_vault.amount,
        registry.base_decimals,
        registry.quote_decimals,
    )?;
    let slot = Clock::get()?.slot;

    let mut ring = ctx.accounts.price_ring.load_mut()?;
    let index = ring.head;
    ring.append(PricePoint { slot, price })?;
    drop(ring);

    emit!(PriceRecorded {
        mint: ctx.accounts.mint.key(),
        slot,
        price,
        index,
    });
    msg!("Recorded price {} at slot {}", price, slot);

    Ok(())
}

#[event]
pub struct PriceRecorded {
    pub mint: Pubkey,
    pub slot: u64,
    pub price: u64,
    /// Ring slot the sample was written to
    pub index: u32,
}

/// Account order is fixed by the transfer-hook interface: the four transfer
/// accounts, the meta list, then the extras in the order they were
/// registered at initialization.
#[derive(Accounts)]
pub struct TransferHook<'info> {
    /// CHECK: source token account of the transfer
    pub source: UncheckedAccount<'info>,

    /// CHECK: instrumented mint; used for PDA derivation and event payload
    pub mint: UncheckedAccount<'info>,

    /// CHECK: destination token account of the transfer
    pub destination: UncheckedAccount<'info>,

    /// CHECK: transfer authority (the pool's signer PDA when the transfer is
    /// part of a swap)
    pub owner: UncheckedAccount<'info>,

    /// CHECK: TLV account Token-2022 resolved the extra accounts from
    #[account(
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,

    /// CHECK: AMM pool; validated against the registry by key
    pub pool: UncheckedAccount<'info>,

    pub base_vault: InterfaceAccount<'info, TokenAccount>,

    pub quote_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        seeds = [HookRegistry::SEED, mint.key().as_ref()],
        bump = hook_registry.bump
    )]
    pub hook_registry: Account<'info, HookRegistry>,

    #[account(
        mut,
        seeds = [PriceRing::SEED, mint.key().as_ref()],
        bump = price_ring.load()?.bump
    )]
    pub price_ring: AccountLoader<'info, PriceRing>,
}
