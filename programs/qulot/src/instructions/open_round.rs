use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::RoundOpen,
    state::{Config, Lottery, Round},
};

#[derive(Accounts)]
#[instruction(lottery_id: String, round_id: u64)]
pub struct OpenRound<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.is_trigger_or_operator(&caller.key()) @ ErrorCode::OnlyTriggerOrOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_LOTTERY, lottery.id.as_bytes()],
        bump = lottery.bump,
        constraint = lottery.id == lottery_id @ ErrorCode::InvalidLotteryId,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The lottery's current round. Omitted for the first round.
    #[account(
        seeds = [SEED_ROUND, &lottery.current_round_id.to_le_bytes()],
        bump,
    )]
    pub previous_round: Option<Account<'info, Round>>,

    #[account(
        init,
        payer = caller,
        space = Round::SPACE,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump
    )]
    pub round: Account<'info, Round>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenRound>, _lottery_id: String, round_id: u64, draw_time: i64) -> Result<()> {
    ctx.accounts.config.issue_round_id(round_id)?;

    let now = Clock::get()?.unix_timestamp;
    let lottery_key = ctx.accounts.lottery.key();
    let lottery = &mut ctx.accounts.lottery;
    let previous = ctx.accounts.previous_round.as_deref();

    let round = &mut ctx.accounts.round;
    round.open(lottery, previous, round_id, draw_time, now)?;
    round.lottery = lottery_key;
    round.bump = ctx.bumps.round;

    msg!(
        "lottery {} opened round {} with {} carried over",
        lottery.id,
        round_id,
        round.total_amount
    );

    emit!(RoundOpen {
        lottery_id: lottery.id.clone(),
        round_id,
        first_round_id: round.first_round_id,
        total_amount: round.total_amount,
        open_time: now,
        draw_time,
    });

    Ok(())
}
