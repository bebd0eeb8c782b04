use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::RoundClose,
    state::{Config, Lottery, Round},
};

#[derive(Accounts)]
#[instruction(lottery_id: String)]
pub struct CloseRound<'info> {
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
}

pub fn handler(ctx: Context<CloseRound>, _lottery_id: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let lottery = &ctx.accounts.lottery;
    let round = ctx.accounts.round.as_mut().ok_or(ErrorCode::NotTimeToClose)?;

    round.close_sales(now)?;

    msg!("lottery {} closed round {}", lottery.id, round.id);

    emit!(RoundClose {
        lottery_id: lottery.id.clone(),
        round_id: round.id,
        total_tickets: round.total_tickets,
        total_amount: round.total_amount,
        close_time: now,
    });

    Ok(())
}
