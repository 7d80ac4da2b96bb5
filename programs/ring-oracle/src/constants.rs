/// Number of price samples a ring holds; fixed at creation, never resized.
pub const RING_CAPACITY: usize = 512;

/// Fixed-point decimals of recorded prices.
pub const PRICE_DECIMALS: u32 = 6;

/// Seed of the TLV account Token-2022 resolves extra transfer accounts from.
/// The tag is fixed by the transfer-hook interface and must not change.
pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";
