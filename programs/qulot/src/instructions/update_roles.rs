use anchor_lang::prelude::*;
use crate::{constants::*, errors::ErrorCode, events::RolesUpdated, state::Config};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct UpdateRolesArgs {
    pub operator: Option<Pubkey>,
    /// `Pubkey::default()` disables the scheduler signer.
    pub trigger: Option<Pubkey>,
}

#[derive(Accounts)]
pub struct UpdateRoles<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.owner == owner.key() @ ErrorCode::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

pub fn handler(ctx: Context<UpdateRoles>, args: UpdateRolesArgs) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    if let Some(v) = args.operator {
        require!(v != Pubkey::default(), ErrorCode::InvalidAddress);
        cfg.operator = v;
    }
    if let Some(v) = args.trigger {
        cfg.trigger = v;
    }

    emit!(RolesUpdated {
        operator: cfg.operator,
        trigger: cfg.trigger,
    });

    Ok(())
}
