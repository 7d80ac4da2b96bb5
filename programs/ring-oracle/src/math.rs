use anchor_lang::prelude::*;

use crate::constants::PRICE_DECIMALS;
use crate::errors::OracleError;

/// Quote-per-base spot price from current pool reserves, as a `u64` with
/// `PRICE_DECIMALS` fixed decimals.
///
/// Both mints' decimals are folded in so the result is a plain token ratio:
///
/// ```text
/// price = quote_reserve * 10^(PRICE_DECIMALS + base_decimals)
///         ---------------------------------------------------
///         base_reserve  * 10^(quote_decimals)
/// ```
///
/// No fee adjustment: the reserves are sampled after the pool has already
/// applied its curve, so the ratio is the post-trade spot price.
pub fn reserve_ratio_price(
    base_reserve: u64,
    quote_reserve: u64,
    base_decimals: u8,
    quote_decimals: u8,
) -> Result<u64> {
    require!(base_reserve > 0, OracleError::InvalidPrice);

    let numerator = (quote_reserve as u128)
        .checked_mul(pow10(PRICE_DECIMALS + base_decimals as u32)?)
        .ok_or(OracleError::Overflow)?;
    let denominator = (base_reserve as u128)
        .checked_mul(pow10(quote_decimals as u32)?)
        .ok_or(OracleError::Overflow)?;
    let price = numerator
        .checked_div(denominator)
        .ok_or(OracleError::Overflow)?;

    require!(price > 0, OracleError::InvalidPrice);
    u64::try_from(price).map_err(|_| error!(OracleError::Overflow))
}

fn pow10(exp: u32) -> Result<u128> {
    10u128.checked_pow(exp).ok_or(error!(OracleError::Overflow))
}
