use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod state;
pub mod settlement;
pub mod utils;
pub mod instructions;

use instructions::*;
use state::{JobType, RewardRule};
use utils::BulkPrice;

#[cfg(feature = "devnet")]
declare_id!("HjSjQYyyRjjhmc7Sfy2K8BNsvwnZa9xvB5krAZuejLEt");

#[cfg(not(feature = "devnet"))]
declare_id!("9vuNfc62Mcd1dtEoDduaLEbS7t1iMdifmSUzM187dQiF");

#[program]
pub mod qulot {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, args: InitConfigArgs) -> Result<()> {
        init_config::handler(ctx, args)
    }

    pub fn update_roles(ctx: Context<UpdateRoles>, args: UpdateRolesArgs) -> Result<()> {
        update_roles::handler(ctx, args)
    }

    pub fn set_treasury(ctx: Context<SetTreasury>) -> Result<()> {
        set_treasury::handler(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        transfer_ownership::handler(ctx, new_owner)
    }

    pub fn add_lottery(
        ctx: Context<AddLottery>,
        lottery_id: String,
        args: AddLotteryArgs,
    ) -> Result<()> {
        add_lottery::handler(ctx, lottery_id, args)
    }

    pub fn add_reward_rules(
        ctx: Context<AddRewardRules>,
        lottery_id: String,
        rules: Vec<RewardRule>,
    ) -> Result<()> {
        add_reward_rules::handler(ctx, lottery_id, rules)
    }

    pub fn open_round(
        ctx: Context<OpenRound>,
        lottery_id: String,
        round_id: u64,
        draw_time: i64,
    ) -> Result<()> {
        open_round::handler(ctx, lottery_id, round_id, draw_time)
    }

    pub fn close_round(ctx: Context<CloseRound>, lottery_id: String) -> Result<()> {
        close_round::handler(ctx, lottery_id)
    }

    pub fn request_randomness(ctx: Context<RequestRandomness>, lottery_id: String) -> Result<()> {
        request_randomness::handler(ctx, lottery_id)
    }

    /// VRF oracle callback.
    pub fn consume_randomness(ctx: Context<ConsumeRandomness>, randomness: [u8; 32]) -> Result<()> {
        consume_randomness::handler(ctx, randomness)
    }

    /// Operator-only oracle stand-in. Only available with `devnet` feature.
    #[cfg(feature = "devnet")]
    pub fn mock_set_random_result(
        ctx: Context<MockSetRandomResult>,
        round_id: u64,
        numbers: Vec<u8>,
    ) -> Result<()> {
        mock_set_random_result::handler(ctx, round_id, numbers)
    }

    pub fn draw_round(ctx: Context<DrawRound>, lottery_id: String) -> Result<()> {
        draw_round::handler(ctx, lottery_id)
    }

    pub fn buy_tickets(ctx: Context<BuyTickets>, args: BuyTicketsArgs) -> Result<()> {
        buy_tickets::handler(ctx, args)
    }

    pub fn calculate_amount_for_bulk_tickets(
        ctx: Context<CalculateAmount>,
        round_id: u64,
        count: u32,
    ) -> Result<BulkPrice> {
        calculate_amount::handler(ctx, round_id, count)
    }

    pub fn get_reward_rules(
        ctx: Context<GetRewardRules>,
        lottery_id: String,
    ) -> Result<Vec<RewardRule>> {
        reward_rules::handler(ctx, lottery_id)
    }

    /// Scores a batch of ticket books; call until the round reports every book settled.
    pub fn settle_tickets<'info>(
        ctx: Context<'_, '_, 'info, 'info, SettleTickets<'info>>,
        lottery_id: String,
    ) -> Result<()> {
        settle_tickets::handler(ctx, lottery_id)
    }

    pub fn reward_round(ctx: Context<RewardRound>, lottery_id: String) -> Result<()> {
        reward_round::handler(ctx, lottery_id)
    }

    /// Writes prizes into a batch of ticket books; claims open once every book is awarded.
    pub fn award_tickets<'info>(
        ctx: Context<'_, '_, 'info, 'info, AwardTickets<'info>>,
        round_id: u64,
    ) -> Result<()> {
        award_tickets::handler(ctx, round_id)
    }

    pub fn claim_tickets(
        ctx: Context<ClaimTickets>,
        round_id: u64,
        book_index: u32,
        ticket_ids: Vec<u64>,
    ) -> Result<()> {
        claim_tickets::handler(ctx, round_id, book_index, ticket_ids)
    }

    pub fn add_trigger_job(
        ctx: Context<AddTriggerJob>,
        job_id: String,
        lottery_id: String,
        cron_spec: String,
        job_type: JobType,
    ) -> Result<()> {
        add_trigger_job::handler(ctx, job_id, lottery_id, cron_spec, job_type)
    }

    pub fn remove_trigger_job(ctx: Context<RemoveTriggerJob>, job_id: String) -> Result<()> {
        remove_trigger_job::handler(ctx, job_id)
    }
}
