use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::TicketsAwarded,
    state::{Config, Round, RoundStatus, TicketBook},
};

/// Ticket books are passed as writable remaining accounts, in book index order,
/// starting at the round's award cursor.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct AwardTickets<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.is_trigger_or_operator(&caller.key()) @ ErrorCode::OnlyTriggerOrOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,
}

pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, AwardTickets<'info>>,
    _round_id: u64,
) -> Result<()> {
    let round = &mut ctx.accounts.round;
    require!(round.is(RoundStatus::Rewarded), ErrorCode::RoundNotRewarded);

    let books = ctx.remaining_accounts;
    require!(
        !books.is_empty() && books.len() <= MAX_BOOKS_PER_SETTLE,
        ErrorCode::InvalidTicketBook
    );

    for info in books.iter() {
        require!(info.is_writable, ErrorCode::InvalidTicketBook);

        let mut book: Account<'info, TicketBook> = Account::try_from(info)?;
        round.award_book(&mut book)?;
        book.exit(&crate::ID)?;
    }

    msg!(
        "round {} awarded {}/{} ticket books",
        round.id,
        round.awarded_books,
        round.book_count
    );

    emit!(TicketsAwarded {
        round_id: round.id,
        books_awarded: books.len() as u32,
        book_count: round.book_count,
    });

    Ok(())
}
