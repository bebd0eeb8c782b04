use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    state::{Lottery, RewardRule},
};

#[derive(Accounts)]
#[instruction(lottery_id: String)]
pub struct GetRewardRules<'info> {
    #[account(
        seeds = [SEED_LOTTERY, lottery.id.as_bytes()],
        bump = lottery.bump,
        constraint = lottery.id == lottery_id @ ErrorCode::InvalidLotteryId,
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Registered rules with a non-zero value, ordered by match number.
pub fn handler(ctx: Context<GetRewardRules>, _lottery_id: String) -> Result<Vec<RewardRule>> {
    Ok(ctx.accounts.lottery.active_reward_rules().collect())
}
