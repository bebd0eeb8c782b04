use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    state::{Lottery, Round},
    utils::BulkPrice,
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CalculateAmount<'info> {
    #[account(
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(address = round.lottery @ ErrorCode::InvalidLotteryId)]
    pub lottery: Account<'info, Lottery>,
}

/// Read-only quote for buying `count` tickets in one order.
pub fn handler(ctx: Context<CalculateAmount>, _round_id: u64, count: u32) -> Result<BulkPrice> {
    ctx.accounts.lottery.bulk_price(count)
}
