#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;

#[cfg(test)]
mod tests;

declare_id!("GvR1ngQmKxTdH6u9wZk4cJp8sN3yLfB2aWeD5oUhPjSC");

#[program]
pub mod ring_oracle {
    use super::*;

    /// One-time wiring of a mint to its pool: records the account set
    /// Token-2022 must supply on every transfer and creates the empty price
    /// ring.
    pub fn initialize_extra_account_meta_list(
        ctx: Context<InitializeExtraAccountMetaList>,
    ) -> Result<()> {
        instructions::initialize_extra_account_meta_list(ctx)
    }

    /// Invoked by Token-2022 before every transfer of an instrumented mint;
    /// samples the pool's reserve ratio into the mint's price ring.
    #[interface(spl_transfer_hook_interface::execute)]
    pub fn transfer_hook(ctx: Context<TransferHook>) -> Result<()> {
        instructions::transfer_hook(ctx)
    }
}
