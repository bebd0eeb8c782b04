use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::TicketsClaim,
    state::{Config, Lottery, Round, TicketBook},
};

#[derive(Accounts)]
#[instruction(round_id: u64, book_index: u32)]
pub struct ClaimTickets<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(address = round.lottery @ ErrorCode::InvalidLotteryId)]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [SEED_TICKETS, &round_id.to_le_bytes(), &book_index.to_le_bytes()],
        bump = ticket_book.bump,
    )]
    pub ticket_book: Account<'info, TicketBook>,

    #[account(
        mut,
        address = lottery.vault @ ErrorCode::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = claimer_token_account.mint == config.payment_mint @ ErrorCode::InvalidTokenAccount,
        constraint = claimer_token_account.owner == claimer.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub claimer_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<ClaimTickets>,
    round_id: u64,
    _book_index: u32,
    ticket_ids: Vec<u64>,
) -> Result<()> {
    let claimer = ctx.accounts.claimer.key();
    let amount = ctx
        .accounts
        .ticket_book
        .claim(&claimer, &ticket_ids, &ctx.accounts.round)?;

    let lottery_id = ctx.accounts.lottery.id.clone();
    let lottery_bump = [ctx.accounts.lottery.bump];
    let signer_seeds: &[&[u8]] = &[SEED_LOTTERY, lottery_id.as_bytes(), &lottery_bump];

    if amount > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.claimer_token_account.to_account_info(),
                    authority: ctx.accounts.lottery.to_account_info(),
                },
                &[signer_seeds],
            ),
            amount,
        )?;
    }

    emit!(TicketsClaim {
        claimer,
        round_id,
        ticket_ids,
        amount,
    });

    Ok(())
}
