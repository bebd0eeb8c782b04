use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub owner: Pubkey,
    pub operator: Pubkey,
    pub trigger: Pubkey,
    pub treasury: Pubkey,
    pub payment_mint: Pubkey,
}

#[event]
pub struct NewLottery {
    pub lottery_id: String,
    pub verbose_name: String,
}

#[event]
pub struct NewRewardRule {
    pub lottery_id: String,
    pub match_number: u8,
    pub reward_unit: u8,
    pub reward_value: u8,
}

#[event]
pub struct RoundOpen {
    pub lottery_id: String,
    pub round_id: u64,
    pub first_round_id: u64,
    pub total_amount: u64,
    pub open_time: i64,
    pub draw_time: i64,
}

#[event]
pub struct RoundClose {
    pub lottery_id: String,
    pub round_id: u64,
    pub total_tickets: u64,
    pub total_amount: u64,
    pub close_time: i64,
}

#[event]
pub struct RandomnessRequested {
    pub lottery_id: String,
    pub round_id: u64,
}

#[event]
pub struct RandomnessFulfilled {
    pub round_id: u64,
    pub numbers: Vec<u8>,
}

#[event]
pub struct RoundDraw {
    pub lottery_id: String,
    pub round_id: u64,
    pub winning_numbers: Vec<u8>,
    pub drawn_time: i64,
}

#[event]
pub struct TicketsSettled {
    pub round_id: u64,
    pub books_settled: u32,
    pub book_count: u32,
}

#[event]
pub struct TicketsAwarded {
    pub round_id: u64,
    pub books_awarded: u32,
    pub book_count: u32,
}

#[event]
pub struct RoundReward {
    pub lottery_id: String,
    pub round_id: u64,
    pub total_amount: u64,
    pub treasury_fee: u64,
    pub total_payout: u64,
    pub amount_inject_next_round: u64,
    pub reward_time: i64,
}

#[event]
pub struct TicketsPurchase {
    pub buyer: Pubkey,
    pub beneficiary: Pubkey,
    pub round_id: u64,
    pub ticket_ids: Vec<u64>,
    pub total_amount: u64,
    pub discount: u8,
    pub final_amount: u64,
}

#[event]
pub struct TicketsClaim {
    pub claimer: Pubkey,
    pub round_id: u64,
    pub ticket_ids: Vec<u64>,
    pub amount: u64,
}

#[event]
pub struct OwnershipTransferred {
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct RolesUpdated {
    pub operator: Pubkey,
    pub trigger: Pubkey,
}

#[event]
pub struct TreasuryUpdated {
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct NewTriggerJob {
    pub job_id: String,
    pub lottery_id: String,
    pub cron_spec: String,
    pub job_type: u8,
}

#[event]
pub struct TriggerJobRemoved {
    pub job_id: String,
}
