use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::NewLottery,
    state::{Config, Lottery},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AddLotteryArgs {
    pub picture: String,
    pub verbose_name: String,
    pub number_of_items: u8,
    pub min_value_per_item: u8,
    pub max_value_per_item: u8,
    pub period_days: Vec<u8>,
    pub period_hour_of_days: u8,
    pub max_number_tickets_per_buy: u32,
    pub price_per_ticket: u64,
    pub treasury_fee_percent: u8,
    pub amount_inject_next_round_percent: u8,
    pub discount_percent: u8,
    pub discount_threshold: u32,
}

impl AddLotteryArgs {
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.picture.is_empty() && self.picture.len() <= MAX_PICTURE_LEN,
            ErrorCode::InvalidPicture
        );
        require!(
            !self.verbose_name.is_empty() && self.verbose_name.len() <= MAX_VERBOSE_NAME_LEN,
            ErrorCode::InvalidVerboseName
        );
        require!(
            self.number_of_items >= 1 && self.number_of_items as usize <= MAX_NUMBER_OF_ITEMS,
            ErrorCode::InvalidNumberOfItems
        );
        require!(self.min_value_per_item >= 1, ErrorCode::InvalidMinValuePerItem);
        require!(
            self.max_value_per_item > self.min_value_per_item,
            ErrorCode::InvalidMaxValuePerItem
        );
        require!(
            !self.period_days.is_empty()
                && self.period_days.len() <= MAX_PERIOD_DAYS
                && self.period_days.iter().all(|d| *d <= 6),
            ErrorCode::InvalidPeriodDays
        );
        require!(self.period_hour_of_days <= 23, ErrorCode::InvalidPeriodHourOfDays);
        require!(
            self.max_number_tickets_per_buy >= 1
                && self.max_number_tickets_per_buy <= MAX_TICKETS_PER_BUY,
            ErrorCode::InvalidMaxNumberTicketsPerBuy
        );
        require!(self.price_per_ticket > 0, ErrorCode::InvalidPricePerTicket);
        require!(
            self.treasury_fee_percent as u64 <= PERCENT_DENOMINATOR,
            ErrorCode::InvalidTreasuryFeePercent
        );
        require!(
            self.treasury_fee_percent as u64 + self.amount_inject_next_round_percent as u64
                <= PERCENT_DENOMINATOR,
            ErrorCode::InvalidAmountInjectNextRoundPercent
        );
        require!(
            self.discount_percent as u64 <= PERCENT_DENOMINATOR,
            ErrorCode::InvalidDiscountPercent
        );
        Ok(())
    }
}

#[derive(Accounts)]
#[instruction(lottery_id: String)]
pub struct AddLottery<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.is_operator(&operator.key()) @ ErrorCode::OnlyOperator,
    )]
    pub config: Account<'info, Config>,

    /// Re-adding an id lands on the existing account and is rejected in the handler.
    #[account(
        init_if_needed,
        payer = operator,
        space = Lottery::SPACE,
        seeds = [SEED_LOTTERY, lottery_id.as_bytes()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init_if_needed,
        payer = operator,
        associated_token::mint = payment_mint,
        associated_token::authority = lottery,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = config.payment_mint)]
    pub payment_mint: Account<'info, Mint>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<AddLottery>, lottery_id: String, args: AddLotteryArgs) -> Result<()> {
    ctx.accounts.config.register_lottery(&lottery_id)?;
    args.validate()?;

    let lottery = &mut ctx.accounts.lottery;
    lottery.id = lottery_id;
    lottery.picture = args.picture;
    lottery.verbose_name = args.verbose_name;
    lottery.number_of_items = args.number_of_items;
    lottery.min_value_per_item = args.min_value_per_item;
    lottery.max_value_per_item = args.max_value_per_item;
    lottery.period_days = args.period_days;
    lottery.period_hour_of_days = args.period_hour_of_days;
    lottery.max_number_tickets_per_buy = args.max_number_tickets_per_buy;
    lottery.price_per_ticket = args.price_per_ticket;
    lottery.treasury_fee_percent = args.treasury_fee_percent;
    lottery.amount_inject_next_round_percent = args.amount_inject_next_round_percent;
    lottery.discount_percent = args.discount_percent;
    lottery.discount_threshold = args.discount_threshold;
    lottery.reward_rules = [0u8; MATCH_SLOTS];
    lottery.current_round_id = 0;
    lottery.amount_inject_next_round = 0;
    lottery.vault = ctx.accounts.vault.key();
    lottery.bump = ctx.bumps.lottery;

    msg!("lottery {} registered", lottery.id);

    emit!(NewLottery {
        lottery_id: lottery.id.clone(),
        verbose_name: lottery.verbose_name.clone(),
    });

    Ok(())
}
