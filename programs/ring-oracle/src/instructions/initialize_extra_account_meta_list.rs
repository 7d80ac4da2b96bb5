use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_spl::token_interface::{Mint, TokenAccount};
use spl_tlv_account_resolution::{
    account::ExtraAccountMeta, seeds::Seed, state::ExtraAccountMetaList,
};
use spl_transfer_hook_interface::instruction::ExecuteInstruction;
use std::mem::size_of;

use crate::constants::{EXTRA_ACCOUNT_METAS_SEED, RING_CAPACITY};
use crate::errors::OracleError;
use crate::state::{HookRegistry, PricePoint, PriceRing};

/// One-time wiring of a mint to its pool pair.
///
/// Records the account set Token-2022 must append to every transfer of the
/// mint (pool, both vaults, registry, ring), persists the same identities in
/// the registry for hook-time validation, and creates the empty price ring.
/// The mint's transfer-hook extension must already point at this program;
/// that binding happens at mint creation and is outside this instruction.
pub fn initialize_extra_account_meta_list(
    ctx: Context<InitializeExtraAccountMetaList>,
) -> Result<()> {
    let mint_key = ctx.accounts.mint.key();
    let pool_key = ctx.accounts.pool.key();
    let base_vault = &ctx.accounts.base_vault;
    let quote_vault = &ctx.accounts.quote_vault;
    let quote_mint_key = ctx.accounts.quote_mint.key();

    // Only the party controlling the mint may wire it to a pool.
    match ctx.accounts.mint.mint_authority {
        COption::Some(mint_authority) => require_keys_eq!(
            mint_authority,
            ctx.accounts.authority.key(),
            OracleError::Unauthorized
        ),
        COption::None => return err!(OracleError::Unauthorized),
    }

    // The instrumented mint must sit on exactly one side of the pair.
    require!(quote_mint_key != mint_key, OracleError::MintNotInPair);
    require_keys_eq!(base_vault.mint, mint_key, OracleError::MintNotInPair);
    require_keys_eq!(quote_vault.mint, quote_mint_key, OracleError::MintNotInPair);

    require!(
        ctx.accounts.extra_account_meta_list.data_is_empty(),
        OracleError::AlreadyInitialized
    );

    // Account order here is the order Token-2022 appends them to the hook
    // CPI, after source/mint/destination/owner and the meta list itself.
    // Registry and ring resolve from the mint key (account index 1 of the
    // execute instruction); pool and vaults are foreign keys, recorded as-is.
    let metas = vec![
        ExtraAccountMeta::new_with_pubkey(&pool_key, false, false)?,
        ExtraAccountMeta::new_with_pubkey(&base_vault.key(), false, false)?,
        ExtraAccountMeta::new_with_pubkey(&quote_vault.key(), false, false)?,
        ExtraAccountMeta::new_with_seeds(
            &[
                Seed::Literal {
                    bytes: HookRegistry::SEED.to_vec(),
                },
                Seed::AccountKey { index: 1 },
            ],
            false,
            false,
        )?,
        ExtraAccountMeta::new_with_seeds(
            &[
                Seed::Literal {
                    bytes: PriceRing::SEED.to_vec(),
                },
                Seed::AccountKey { index: 1 },
            ],
            false,
            true,
        )?,
    ];

    let space = ExtraAccountMetaList::size_of(metas.len())? as u64;
    let lamports = Rent::get()?.minimum_balance(space as usize);
    let signer_seeds: &[&[&[u8]]] = &[&[
        EXTRA_ACCOUNT_METAS_SEED,
        mint_key.as_ref(),
        &[ctx.bumps.extra_account_meta_list],
    ]];
    create_account(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.extra_account_meta_list.to_account_info(),
            },
        )
        .with_signer(signer_seeds),
        lamports,
        space,
        ctx.program_id,
    )?;
    ExtraAccountMetaList::init::<ExecuteInstruction>(
        &mut ctx.accounts.extra_account_meta_list.try_borrow_mut_data()?,
        &metas,
    )?;

    let registry = &mut ctx.accounts.hook_registry;
    registry.mint = mint_key;
    registry.pool = pool_key;
    registry.base_vault = base_vault.key();
    registry.quote_vault = quote_vault.key();
    registry.quote_mint = quote_mint_key;
    registry.price_ring = ctx.accounts.price_ring.key();
    registry.base_decimals = ctx.accounts.mint.decimals;
    registry.quote_decimals = ctx.accounts.quote_mint.decimals;
    registry.bump = ctx.bumps.hook_registry;

    let mut ring = ctx.accounts.price_ring.load_init()?;
    ring.capacity = RING_CAPACITY as u32;
    ring.head = 0;
    ring.bump = ctx.bumps.price_ring;
    ring.points = [PricePoint::default(); RING_CAPACITY];

    emit!(HookRegistered {
        mint: mint_key,
        pool: pool_key,
        base_vault: base_vault.key(),
        quote_vault: quote_vault.key(),
        price_ring: ctx.accounts.price_ring.key(),
    });
    msg!(
        "Price ring initialized with {} slots for mint {}",
        RING_CAPACITY,
        mint_key
    );

    Ok(())
}

#[event]
pub struct HookRegistered {
    pub mint: Pubkey,
    pub pool: Pubkey,
    pub base_vault: Pubkey,
    pub quote_vault: Pubkey,
    pub price_ring: Pubkey,
}

#[derive(Accounts)]
pub struct InitializeExtraAccountMetaList<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Holder of the mint authority
    pub authority: Signer<'info>,

    /// The instrumented Token-2022 mint
    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: AMM pool account, owned by the external pool program; only its
    /// key is recorded.
    pub pool: UncheckedAccount<'info>,

    /// Pool vault holding reserves of `mint`
    pub base_vault: InterfaceAccount<'info, TokenAccount>,

    /// Pool vault holding the quote-side reserves
    pub quote_vault: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the quote side, read for its decimals
    pub quote_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: created here and written with the TLV layout Token-2022
    /// resolves extra transfer accounts from.
    #[account(
        mut,
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + HookRegistry::SIZE,
        seeds = [HookRegistry::SEED, mint.key().as_ref()],
        bump
    )]
    pub hook_registry: Account<'info, HookRegistry>,

    #[account(
        init,
        payer = payer,
        space = 8 + size_of::<PriceRing>(),
        seeds = [PriceRing::SEED, mint.key().as_ref()],
        bump
    )]
    pub price_ring: AccountLoader<'info, PriceRing>,

    pub system_program: Program<'info, System>,
}
