use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::NewRewardRule,
    state::{Config, Lottery, RewardRule},
};

#[derive(Accounts)]
#[instruction(lottery_id: String)]
pub struct AddRewardRules<'info> {
    pub operator: Signer<'info>,

    #[account(
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.is_operator(&operator.key()) @ ErrorCode::OnlyOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_LOTTERY, lottery.id.as_bytes()],
        bump = lottery.bump,
        constraint = lottery.id == lottery_id @ ErrorCode::InvalidLotteryId,
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn handler(ctx: Context<AddRewardRules>, _lottery_id: String, rules: Vec<RewardRule>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.upsert_reward_rules(&rules)?;

    for rule in rules {
        emit!(NewRewardRule {
            lottery_id: lottery.id.clone(),
            match_number: rule.match_number,
            reward_unit: rule.reward_unit,
            reward_value: rule.reward_value,
        });
    }

    Ok(())
}
