use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::RoundReward,
    state::{Config, Lottery, Round},
};

#[derive(Accounts)]
#[instruction(lottery_id: String)]
pub struct RewardRound<'info> {
    pub caller: Signer<'info>,

    #[account(
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

    #[account(
        mut,
        seeds = [SEED_ROUND, &lottery.current_round_id.to_le_bytes()],
        bump,
    )]
    pub round: Option<Account<'info, Round>>,

    #[account(
        mut,
        address = lottery.vault @ ErrorCode::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury.key() == config.treasury @ ErrorCode::InvalidTreasury,
        constraint = treasury.mint == config.payment_mint @ ErrorCode::InvalidTreasury,
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<RewardRound>, _lottery_id: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Settle state first, then drop the borrows before the CPI
    let (round_id, total_amount, settlement) = {
        let lottery = &mut ctx.accounts.lottery;
        let round = ctx.accounts.round.as_mut().ok_or(ErrorCode::NotTimeToReward)?;
        let settlement = round.reward(lottery, now)?;
        (round.id, round.total_amount, settlement)
    };

    let lottery_id = ctx.accounts.lottery.id.clone();
    let lottery_bump = [ctx.accounts.lottery.bump];
    let signer_seeds: &[&[u8]] = &[SEED_LOTTERY, lottery_id.as_bytes(), &lottery_bump];

    if settlement.treasury_fee > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.lottery.to_account_info(),
                },
                &[signer_seeds],
            ),
            settlement.treasury_fee,
        )?;
    }

    msg!(
        "round {} rewarded: fee {}, payout {}, next round {}",
        round_id,
        settlement.treasury_fee,
        settlement.total_payout,
        settlement.amount_inject_next_round
    );

    emit!(RoundReward {
        lottery_id,
        round_id,
        total_amount,
        treasury_fee: settlement.treasury_fee,
        total_payout: settlement.total_payout,
        amount_inject_next_round: settlement.amount_inject_next_round,
        reward_time: now,
    });

    Ok(())
}
