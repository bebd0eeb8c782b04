use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::RoundDraw,
    state::{Config, Lottery, Round, RoundRandomness},
};

#[derive(Accounts)]
#[instruction(lottery_id: String)]
pub struct DrawRound<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.is_trigger_or_operator(&caller.key()) @ ErrorCode::OnlyTriggerOrOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [SEED_LOTTERY, lottery.id.as_bytes()],
        bump = lottery.bump,
        constraint = lottery.id == lottery_id @ ErrorCode::InvalidLotteryId,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &lottery.current_round_id.to_le_bytes()],
        bump,
    )]
    pub round: Option<Account<'info, Round>>,

    /// Absent until randomness was requested for the round.
    #[account(
        seeds = [SEED_RANDOM, &lottery.current_round_id.to_le_bytes()],
        bump,
    )]
    pub round_randomness: Option<Account<'info, RoundRandomness>>,
}

pub fn handler(ctx: Context<DrawRound>, _lottery_id: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let lottery = &ctx.accounts.lottery;
    let delivered = ctx
        .accounts
        .round_randomness
        .as_ref()
        .and_then(|r| r.delivered_numbers());
    let round = ctx.accounts.round.as_mut().ok_or(ErrorCode::NotTimeToDraw)?;

    round.draw(lottery, delivered, now)?;

    msg!(
        "lottery {} drew round {}: {:?}",
        lottery.id,
        round.id,
        round.winning_numbers
    );

    emit!(RoundDraw {
        lottery_id: lottery.id.clone(),
        round_id: round.id,
        winning_numbers: round.winning_numbers.clone(),
        drawn_time: now,
    });

    Ok(())
}
