use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    constants::*,
    errors::ErrorCode,
    events::TreasuryUpdated,
    state::Config,
};

#[derive(Accounts)]
pub struct SetTreasury<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        constraint = new_treasury.mint == config.payment_mint @ ErrorCode::InvalidTreasury,
    )]
    pub new_treasury: Account<'info, TokenAccount>,
}

pub fn handler(ctx: Context<SetTreasury>) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    let old_treasury = cfg.treasury;
    let new_treasury = ctx.accounts.new_treasury.key();

    require!(old_treasury != new_treasury, ErrorCode::InvalidTreasury);

    cfg.treasury = new_treasury;

    emit!(TreasuryUpdated {
        old_treasury,
        new_treasury,
        owner: ctx.accounts.new_treasury.owner,
    });

    Ok(())
}
