use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use std::mem::size_of;

use crate::constants::RING_CAPACITY;
use crate::errors::OracleError;

/// Rolling price history for one instrumented mint (one ring per mint).
///
/// Fixed capacity with a single write cursor; once the buffer wraps, the
/// oldest sample is silently overwritten. A zero-valued point is a slot that
/// has never been written; readers must skip those until the first wrap.
#[account(zero_copy)]
#[derive(Debug)]
pub struct PriceRing {
    /// Usable slots in `points`; persisted so readers and the hook can
    /// detect a store that does not match the compiled layout.
    pub capacity: u32,
    /// Index of the next slot to be written.
    pub head: u32,
    /// PDA bump
    pub bump: u8,
    pub _padding: [u8; 7],
    /// Sample storage; oldest data is overwritten first.
    pub points: [PricePoint; RING_CAPACITY],
}

const _: () = {
    assert!(size_of::<PriceRing>() == 4 + 4 + 1 + 7 + RING_CAPACITY * 16);
};

/// One recorded sample: the ledger slot it was taken at and the
/// quote-per-base price in fixed-point form. Written samples always carry a
/// positive price.
#[derive(Copy, Clone, Debug, AnchorSerialize, AnchorDeserialize, Zeroable, Pod, Default)]
#[repr(C)]
pub struct PricePoint {
    pub slot: u64,
    pub price: u64,
}

impl PriceRing {
    pub const SEED: &'static [u8] = b"price_ring";

    /// Sole mutating operation: writes `point` at `head`, then advances the
    /// cursor by one, modulo capacity.
    pub fn append(&mut self, point: PricePoint) -> Result<()> {
        require!(
            self.capacity as usize == RING_CAPACITY && (self.head as usize) < RING_CAPACITY,
            OracleError::MalformedStore
        );
        require!(point.price > 0, OracleError::InvalidPrice);

        self.points[self.head as usize] = point;
        self.head = (self.head + 1) % self.capacity;
        Ok(())
    }

    /// Most recently written sample, or `None` if nothing has been recorded.
    pub fn latest(&self) -> Option<PricePoint> {
        let idx = match self.head.checked_sub(1) {
            Some(prev) => prev,
            None => self.capacity.checked_sub(1)?,
        } as usize;
        let point = self.points.get(idx).copied()?;
        (point.price > 0).then_some(point)
    }
}
