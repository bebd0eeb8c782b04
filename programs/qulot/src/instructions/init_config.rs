use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::ConfigInitialized,
    state::{Config, JobRegistry},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitConfigArgs {
    pub operator: Pubkey,
    /// Scheduler signer. `Pubkey::default()` leaves lifecycle calls to the operator.
    pub trigger: Pubkey,
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = Config::SPACE,
        seeds = [SEED_CFG],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = payer,
        space = JobRegistry::SPACE,
        seeds = [SEED_JOBS],
        bump
    )]
    pub job_registry: Account<'info, JobRegistry>,

    pub payment_mint: Account<'info, Mint>,

    #[account(
        constraint = treasury.mint == payment_mint.key() @ ErrorCode::InvalidTreasury,
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitConfig>, args: InitConfigArgs) -> Result<()> {
    require!(args.operator != Pubkey::default(), ErrorCode::InvalidAddress);

    let cfg = &mut ctx.accounts.config;
    cfg.owner = ctx.accounts.owner.key();
    cfg.operator = args.operator;
    cfg.trigger = args.trigger;
    cfg.treasury = ctx.accounts.treasury.key();
    cfg.payment_mint = ctx.accounts.payment_mint.key();
    cfg.round_count = 0;
    cfg.ticket_count = 0;
    cfg.bump = ctx.bumps.config;
    cfg.lottery_ids = Vec::new();
    cfg.reserved = [0u8; 32];

    let registry = &mut ctx.accounts.job_registry;
    registry.job_ids = Vec::new();
    registry.bump = ctx.bumps.job_registry;

    msg!("config initialized, operator {}", cfg.operator);

    emit!(ConfigInitialized {
        owner: cfg.owner,
        operator: cfg.operator,
        trigger: cfg.trigger,
        treasury: cfg.treasury,
        payment_mint: cfg.payment_mint,
    });

    Ok(())
}
