use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::TicketsSettled,
    state::{Config, Lottery, Round, RoundStatus, TicketBook},
};

/// Ticket books are passed as writable remaining accounts, in book index order,
/// starting at the round's settlement cursor.
#[derive(Accounts)]
#[instruction(lottery_id: String)]
pub struct SettleTickets<'info> {
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

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, SettleTickets<'info>>,
    _lottery_id: String,
) -> Result<()> {
    let round = ctx.accounts.round.as_mut().ok_or(ErrorCode::NotTimeToReward)?;
    require!(round.is(RoundStatus::Drawn), ErrorCode::NotTimeToReward);

    let books = ctx.remaining_accounts;
    require!(
        !books.is_empty() && books.len() <= MAX_BOOKS_PER_SETTLE,
        ErrorCode::InvalidTicketBook
    );

    for info in books.iter() {
        require!(info.is_writable, ErrorCode::InvalidTicketBook);

        let mut book: Account<'info, TicketBook> = Account::try_from(info)?;
        round.settle_book(&mut book)?;
        book.exit(&crate::ID)?;
    }

    msg!(
        "round {} settled {}/{} ticket books",
        round.id,
        round.settled_books,
        round.book_count
    );

    emit!(TicketsSettled {
        round_id: round.id,
        books_settled: books.len() as u32,
        book_count: round.book_count,
    });

    Ok(())
}
