use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::NewTriggerJob,
    state::{Config, JobRegistry, JobType, TriggerJob},
    utils::validate_cron_spec,
};

#[derive(Accounts)]
#[instruction(job_id: String)]
pub struct AddTriggerJob<'info> {
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

    /// Re-adding an id lands on the existing account and is rejected in the handler.
    #[account(
        init_if_needed,
        payer = operator,
        space = TriggerJob::SPACE,
        seeds = [SEED_JOB, job_id.as_bytes()],
        bump
    )]
    pub job: Account<'info, TriggerJob>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<AddTriggerJob>,
    job_id: String,
    lottery_id: String,
    cron_spec: String,
    job_type: JobType,
) -> Result<()> {
    require!(
        !job_id.is_empty() && job_id.len() <= MAX_ID_LEN,
        ErrorCode::InvalidJobId
    );
    require!(
        !lottery_id.is_empty() && ctx.accounts.config.has_lottery(&lottery_id),
        ErrorCode::InvalidLotteryId
    );
    validate_cron_spec(&cron_spec)?;

    ctx.accounts.job_registry.register(&job_id)?;

    let job = &mut ctx.accounts.job;
    job.job_id = job_id;
    job.lottery_id = lottery_id;
    job.cron_spec = cron_spec;
    job.job_type = job_type;
    job.created_at = Clock::get()?.unix_timestamp;
    job.bump = ctx.bumps.job;

    emit!(NewTriggerJob {
        job_id: job.job_id.clone(),
        lottery_id: job.lottery_id.clone(),
        cron_spec: job.cron_spec.clone(),
        job_type: job_type as u8,
    });

    Ok(())
}
