use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::ErrorCode,
    events::OwnershipTransferred,
    state::Config,
};

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    require!(new_owner != Pubkey::default(), ErrorCode::InvalidAddress);
    require!(new_owner != cfg.owner, ErrorCode::InvalidAddress);

    let old_owner = cfg.owner;
    cfg.owner = new_owner;

    emit!(OwnershipTransferred {
        old_owner,
        new_owner,
    });

    Ok(())
}
