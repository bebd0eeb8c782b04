use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::TriggerJobRemoved,
    state::{Config, JobRegistry, TriggerJob},
};

#[derive(Accounts)]
#[instruction(job_id: String)]
pub struct RemoveTriggerJob<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.is_operator(&operator.key()) @ ErrorCode::OnlyOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(mut, seeds = [SEED_JOBS], bump = job_registry.bump)]
    pub job_registry: Account<'info, JobRegistry>,

    #[account(
        mut,
        close = operator,
        seeds = [SEED_JOB, job_id.as_bytes()],
        bump = job.bump,
        constraint = job.job_id == job_id @ ErrorCode::InvalidJobId,
    )]
    pub job: Account<'info, TriggerJob>,
}

pub fn handler(ctx: Context<RemoveTriggerJob>, job_id: String) -> Result<()> {
    ctx.accounts.job_registry.unregister(&job_id)?;

    emit!(TriggerJobRemoved { job_id });

    Ok(())
}
