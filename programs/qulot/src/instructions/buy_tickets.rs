use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::TicketsPurchase,
    state::{Config, Lottery, Round, TicketBook},
};

/// One purchase order. Several orders go out as several instructions in one transaction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct BuyTicketsArgs {
    pub round_id: u64,
    /// Must equal the round's `book_count`.
    pub book_index: u32,
    pub beneficiary: Pubkey,
    pub number_sets: Vec<Vec<u8>>,
}

#[derive(Accounts)]
#[instruction(args: BuyTicketsArgs)]
pub struct BuyTickets<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(mut, seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &args.round_id.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(address = round.lottery @ ErrorCode::InvalidLotteryId)]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = buyer,
        space = TicketBook::space(args.number_sets.len().min(MAX_TICKETS_PER_BUY as usize)),
        seeds = [SEED_TICKETS, &args.round_id.to_le_bytes(), &args.book_index.to_le_bytes()],
        bump
    )]
    pub ticket_book: Account<'info, TicketBook>,

    #[account(
        mut,
        constraint = buyer_token_account.mint == config.payment_mint @ ErrorCode::InvalidTokenAccount,
        constraint = buyer_token_account.owner == buyer.key() @ ErrorCode::InvalidTokenAccount,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = lottery.vault @ ErrorCode::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BuyTickets>, args: BuyTicketsArgs) -> Result<()> {
    let price = ctx
        .accounts
        .round
        .sell_tickets(&ctx.accounts.lottery, args.book_index, &args.number_sets)?;
    require!(args.beneficiary != Pubkey::default(), ErrorCode::InvalidAddress);

    let count = args.number_sets.len() as u64;
    let first_ticket_id = ctx.accounts.config.issue_ticket_ids(count)?;

    let book = &mut ctx.accounts.ticket_book;
    book.round_id = args.round_id;
    book.lottery = ctx.accounts.lottery.key();
    book.owner = args.beneficiary;
    book.buyer = ctx.accounts.buyer.key();
    book.index = args.book_index;
    book.bump = ctx.bumps.ticket_book;
    book.issue_tickets(first_ticket_id, args.number_sets)?;
    let ticket_ids = book.ticket_ids();

    if price.final_amount > 0 {
        token::transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer_token_account.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                    authority: ctx.accounts.buyer.to_account_info(),
                },
            ),
            price.final_amount,
        )?;
    }

    emit!(TicketsPurchase {
        buyer: ctx.accounts.buyer.key(),
        beneficiary: args.beneficiary,
        round_id: args.round_id,
        ticket_ids,
        total_amount: price.total_amount,
        discount: price.discount,
        final_amount: price.final_amount,
    });

    Ok(())
}
