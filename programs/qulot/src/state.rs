use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    settlement::{compute_settlement, Settlement},
    utils::{checked_add_u64, compute_bulk_amount, count_matches, derive_lucky_numbers, BulkPrice},
};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    Open = 0,
    Closed = 1,
    Drawn = 2,
    Rewarded = 3,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomnessStatus {
    Requested = 0,
    Fulfilled = 1,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobType {
    Open,
    Close,
    Draw,
    Reward,
}

impl Default for JobType {
    fn default() -> Self {
        JobType::Open
    }
}

#[account]
#[derive(Default)]
pub struct Config {
    pub owner: Pubkey,
    pub operator: Pubkey,
    /// Signer used by the off-chain scheduler. `Pubkey::default()` disables it.
    pub trigger: Pubkey,
    pub treasury: Pubkey,
    pub payment_mint: Pubkey,
    /// Last issued round id. Round ids are global across lotteries.
    pub round_count: u64,
    /// Last issued ticket id.
    pub ticket_count: u64,
    pub bump: u8,
    pub lottery_ids: Vec<String>,
    pub reserved: [u8; 32],
}

impl Config {
    pub const SPACE: usize = 8
        + 32 * 5
        + 8 + 8
        + 1
        + 4 + MAX_LOTTERIES * (4 + MAX_ID_LEN)
        + 32;

    pub fn is_operator(&self, key: &Pubkey) -> bool {
        self.operator == *key
    }

    pub fn is_trigger_or_operator(&self, key: &Pubkey) -> bool {
        self.is_operator(key) || (self.trigger != Pubkey::default() && self.trigger == *key)
    }

    pub fn has_lottery(&self, lottery_id: &str) -> bool {
        self.lottery_ids.iter().any(|id| id == lottery_id)
    }

    pub fn register_lottery(&mut self, lottery_id: &str) -> Result<()> {
        require!(
            !lottery_id.is_empty() && lottery_id.len() <= MAX_ID_LEN,
            ErrorCode::InvalidLotteryId
        );
        require!(!self.has_lottery(lottery_id), ErrorCode::InvalidLotteryId);
        require!(self.lottery_ids.len() < MAX_LOTTERIES, ErrorCode::TooManyLotteries);

        self.lottery_ids.push(lottery_id.to_string());
        Ok(())
    }

    pub fn next_round_id(&self) -> Result<u64> {
        checked_add_u64(self.round_count, 1)
    }

    pub fn issue_round_id(&mut self, round_id: u64) -> Result<()> {
        require!(round_id == self.next_round_id()?, ErrorCode::InvalidRoundId);
        self.round_count = round_id;
        Ok(())
    }

    /// Reserves `count` consecutive ticket ids and returns the first one.
    pub fn issue_ticket_ids(&mut self, count: u64) -> Result<u64> {
        let first = checked_add_u64(self.ticket_count, 1)?;
        self.ticket_count = checked_add_u64(self.ticket_count, count)?;
        Ok(first)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardRule {
    pub match_number: u8,
    /// Only `REWARD_UNIT_PERCENT` is supported.
    pub reward_unit: u8,
    pub reward_value: u8,
}

impl RewardRule {
    pub fn percent(match_number: u8, reward_value: u8) -> Self {
        RewardRule {
            match_number,
            reward_unit: REWARD_UNIT_PERCENT,
            reward_value,
        }
    }
}

#[account]
#[derive(Default)]
pub struct Lottery {
    pub id: String,
    pub picture: String,
    pub verbose_name: String,
    pub number_of_items: u8,
    pub min_value_per_item: u8,
    pub max_value_per_item: u8,
    /// Weekdays the lottery runs on, 0 = Sunday.
    pub period_days: Vec<u8>,
    pub period_hour_of_days: u8,
    pub max_number_tickets_per_buy: u32,
    pub price_per_ticket: u64,
    pub treasury_fee_percent: u8,
    pub amount_inject_next_round_percent: u8,
    pub discount_percent: u8,
    /// A purchase must buy strictly more tickets than this to get the discount.
    pub discount_threshold: u32,
    /// Percent of the reward pool per match count. Index is the match count.
    pub reward_rules: [u8; MATCH_SLOTS],
    /// 0 until the first round is opened.
    pub current_round_id: u64,
    /// Carried into the next round's pot when it opens.
    pub amount_inject_next_round: u64,
    pub vault: Pubkey,
    pub bump: u8,
}

impl Lottery {
    pub const SPACE: usize = 8
        + 4 + MAX_ID_LEN
        + 4 + MAX_PICTURE_LEN
        + 4 + MAX_VERBOSE_NAME_LEN
        + 1 + 1 + 1
        + 4 + MAX_PERIOD_DAYS
        + 1
        + 4
        + 8
        + 1 + 1 + 1
        + 4
        + MATCH_SLOTS
        + 8 + 8
        + 32
        + 1;

    /// Upserts rules by match number. Either every rule applies or none does.
    pub fn upsert_reward_rules(&mut self, rules: &[RewardRule]) -> Result<()> {
        require!(!rules.is_empty(), ErrorCode::InvalidRules);

        let mut next = self.reward_rules;
        for rule in rules {
            require!(
                rule.match_number >= 1 && rule.match_number <= self.number_of_items,
                ErrorCode::InvalidRewardRule
            );
            require!(
                rule.reward_unit == REWARD_UNIT_PERCENT
                    && rule.reward_value as u64 <= PERCENT_DENOMINATOR,
                ErrorCode::InvalidRewardRule
            );
            next[rule.match_number as usize] = rule.reward_value;
        }

        let allocated: u64 = next.iter().map(|v| *v as u64).sum();
        require!(allocated <= PERCENT_DENOMINATOR, ErrorCode::InvalidRewardRule);

        self.reward_rules = next;
        Ok(())
    }

    pub fn active_reward_rules(&self) -> impl Iterator<Item = RewardRule> + '_ {
        self.reward_rules
            .iter()
            .enumerate()
            .filter(|(_, value)| **value > 0)
            .map(|(match_number, value)| RewardRule::percent(match_number as u8, *value))
    }

    pub fn bulk_price(&self, count: u32) -> Result<BulkPrice> {
        compute_bulk_amount(
            count,
            self.price_per_ticket,
            self.discount_percent,
            self.discount_threshold,
        )
    }

    pub fn accepts_numbers(&self, numbers: &[u8]) -> bool {
        numbers.len() == self.number_of_items as usize
            && numbers
                .iter()
                .all(|n| *n >= self.min_value_per_item && *n <= self.max_value_per_item)
    }

    pub fn check_winning_numbers(&self, numbers: &[u8]) -> Result<()> {
        require!(
            !numbers.is_empty() && self.accepts_numbers(numbers),
            ErrorCode::InvalidWinningNumbers
        );
        Ok(())
    }

    pub fn take_injection(&mut self) -> u64 {
        core::mem::take(&mut self.amount_inject_next_round)
    }
}

#[account]
#[derive(Default)]
pub struct Round {
    pub id: u64,
    pub lottery: Pubkey,
    /// Previous round of the same lottery, 0 for the first one.
    pub first_round_id: u64,
    pub status: u8,
    pub total_tickets: u64,
    pub total_amount: u64,
    pub winning_numbers: Vec<u8>,
    pub open_time: i64,
    pub draw_time: i64,
    pub close_time: i64,
    pub drawn_time: i64,
    pub reward_time: i64,

    /// Ticket books sold so far; also the next book index.
    pub book_count: u32,
    /// Settlement cursor over books, in index order.
    pub settled_books: u32,
    /// Award cursor over books, run once the round is rewarded.
    pub awarded_books: u32,
    /// Lottery reward rules frozen at draw time.
    pub reward_rules: [u8; MATCH_SLOTS],
    pub winners_per_match: [u32; MATCH_SLOTS],
    pub prize_per_winner: [u64; MATCH_SLOTS],
    pub treasury_fee: u64,
    pub total_payout: u64,
    pub amount_injected: u64,
    pub bump: u8,
}

impl Round {
    pub const SPACE: usize = 8
        + 8
        + 32
        + 8
        + 1
        + 8 + 8
        + 4 + MAX_NUMBER_OF_ITEMS
        + 8 * 5
        + 4 + 4 + 4
        + MATCH_SLOTS
        + 4 * MATCH_SLOTS
        + 8 * MATCH_SLOTS
        + 8 * 3
        + 1;

    pub fn is(&self, status: RoundStatus) -> bool {
        self.status == status as u8
    }

    /// Starts `round_id` as the lottery's current round. `previous` must be the
    /// lottery's current round, if it has one.
    pub fn open(
        &mut self,
        lottery: &mut Lottery,
        previous: Option<&Round>,
        round_id: u64,
        draw_time: i64,
        now: i64,
    ) -> Result<()> {
        require!(draw_time > 0, ErrorCode::InvalidRoundDrawTime);

        if lottery.current_round_id != 0 {
            let previous = previous.ok_or(ErrorCode::NotTimeToOpen)?;
            require!(
                previous.id == lottery.current_round_id && previous.is(RoundStatus::Rewarded),
                ErrorCode::NotTimeToOpen
            );
        }

        self.id = round_id;
        self.first_round_id = lottery.current_round_id;
        self.status = RoundStatus::Open as u8;
        self.total_amount = lottery.take_injection();
        self.open_time = now;
        self.draw_time = draw_time;

        lottery.current_round_id = round_id;
        Ok(())
    }

    pub fn close_sales(&mut self, now: i64) -> Result<()> {
        require!(self.is(RoundStatus::Open), ErrorCode::NotTimeToClose);

        self.status = RoundStatus::Closed as u8;
        self.close_time = now;
        Ok(())
    }

    pub fn draw(&mut self, lottery: &Lottery, delivered: Option<&[u8]>, now: i64) -> Result<()> {
        require!(self.is(RoundStatus::Closed), ErrorCode::NotTimeToDraw);

        let numbers = delivered.ok_or(ErrorCode::InvalidWinningNumbers)?;
        lottery.check_winning_numbers(numbers)?;

        self.winning_numbers = numbers.to_vec();
        self.reward_rules = lottery.reward_rules;
        self.status = RoundStatus::Drawn as u8;
        self.drawn_time = now;
        Ok(())
    }

    /// Books one purchase order against the round and returns its price.
    pub fn sell_tickets(
        &mut self,
        lottery: &Lottery,
        book_index: u32,
        number_sets: &[Vec<u8>],
    ) -> Result<BulkPrice> {
        require!(
            self.is(RoundStatus::Open) && lottery.current_round_id == self.id,
            ErrorCode::RoundIsClosed
        );
        require!(!number_sets.is_empty(), ErrorCode::TicketsEmpty);

        let count = u32::try_from(number_sets.len()).map_err(|_| ErrorCode::TicketsLimit)?;
        require!(count <= lottery.max_number_tickets_per_buy, ErrorCode::TicketsLimit);
        require!(
            number_sets.iter().all(|numbers| lottery.accepts_numbers(numbers)),
            ErrorCode::InvalidTicketNumbers
        );
        require!(book_index == self.book_count, ErrorCode::InvalidBookIndex);

        let price = lottery.bulk_price(count)?;

        self.total_amount = checked_add_u64(self.total_amount, price.final_amount)?;
        self.total_tickets = checked_add_u64(self.total_tickets, count as u64)?;
        self.book_count = self.book_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

        Ok(price)
    }

    pub fn reward_value(&self, match_count: u8) -> u8 {
        self.reward_rules
            .get(match_count as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Scores the next unsettled book against the winning numbers and the rules
    /// frozen at draw time.
    pub fn settle_book(&mut self, book: &mut TicketBook) -> Result<()> {
        require!(self.is(RoundStatus::Drawn), ErrorCode::NotTimeToReward);
        require!(
            book.round_id == self.id && book.index == self.settled_books,
            ErrorCode::InvalidTicketBook
        );

        for ticket in book.tickets.iter_mut() {
            let matched = count_matches(&ticket.numbers, &self.winning_numbers);
            if self.reward_value(matched) == 0 {
                continue;
            }

            ticket.win_status = true;
            ticket.win_reward_rule = matched;

            let winners = &mut self.winners_per_match[matched as usize];
            *winners = winners.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        }

        self.settled_books = self.settled_books.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn is_settled(&self) -> bool {
        self.settled_books == self.book_count
    }

    pub fn reward(&mut self, lottery: &mut Lottery, now: i64) -> Result<Settlement> {
        require!(self.is(RoundStatus::Drawn), ErrorCode::NotTimeToReward);
        require!(self.is_settled(), ErrorCode::TicketsNotSettled);

        let settlement = compute_settlement(
            self.total_amount,
            lottery.treasury_fee_percent,
            lottery.amount_inject_next_round_percent,
            &self.reward_rules,
            &self.winners_per_match,
        )?;

        self.prize_per_winner = settlement.prize_per_winner;
        self.treasury_fee = settlement.treasury_fee;
        self.total_payout = settlement.total_payout;
        self.amount_injected = settlement.amount_inject_next_round;
        self.status = RoundStatus::Rewarded as u8;
        self.reward_time = now;

        lottery.amount_inject_next_round = checked_add_u64(
            lottery.amount_inject_next_round,
            settlement.amount_inject_next_round,
        )?;

        Ok(settlement)
    }

    /// Writes the prize of every winning ticket in the next unawarded book.
    pub fn award_book(&mut self, book: &mut TicketBook) -> Result<()> {
        require!(self.is(RoundStatus::Rewarded), ErrorCode::RoundNotRewarded);
        require!(
            book.round_id == self.id && book.index == self.awarded_books,
            ErrorCode::InvalidTicketBook
        );

        for ticket in book.tickets.iter_mut() {
            ticket.win_amount = ticket.prize_in(self);
        }

        self.awarded_books = self.awarded_books.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn is_awarded(&self) -> bool {
        self.is(RoundStatus::Rewarded) && self.awarded_books == self.book_count
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub numbers: Vec<u8>,
    pub win_status: bool,
    /// Written by the award pass once the round is rewarded.
    pub win_amount: u64,
    pub win_reward_rule: u8,
    pub claim_status: bool,
}

impl Ticket {
    pub const SPACE: usize = 8 + 4 + MAX_NUMBER_OF_ITEMS + 1 + 8 + 1 + 1;

    /// Prize owed to this ticket once `round` is rewarded.
    pub fn prize_in(&self, round: &Round) -> u64 {
        if !self.win_status || !round.is(RoundStatus::Rewarded) {
            return 0;
        }
        round
            .prize_per_winner
            .get(self.win_reward_rule as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// Tickets of one purchase order.
#[account]
#[derive(Default)]
pub struct TicketBook {
    pub round_id: u64,
    pub lottery: Pubkey,
    pub owner: Pubkey,
    pub buyer: Pubkey,
    pub index: u32,
    pub first_ticket_id: u64,
    pub bump: u8,
    pub tickets: Vec<Ticket>,
}

impl TicketBook {
    pub const BASE_SPACE: usize = 8
        + 8
        + 32 * 3
        + 4
        + 8
        + 1
        + 4;

    pub fn space(ticket_count: usize) -> usize {
        Self::BASE_SPACE + ticket_count * Ticket::SPACE
    }

    pub fn issue_tickets(&mut self, first_ticket_id: u64, number_sets: Vec<Vec<u8>>) -> Result<()> {
        let mut tickets = Vec::with_capacity(number_sets.len());
        let mut id = first_ticket_id;
        for numbers in number_sets {
            tickets.push(Ticket {
                id,
                numbers,
                ..Default::default()
            });
            id = checked_add_u64(id, 1)?;
        }

        self.first_ticket_id = first_ticket_id;
        self.tickets = tickets;
        Ok(())
    }

    pub fn ticket_ids(&self) -> Vec<u64> {
        self.tickets.iter().map(|t| t.id).collect()
    }

    /// Marks the given tickets claimed and returns the amount owed to `claimer`.
    pub fn claim(&mut self, claimer: &Pubkey, ticket_ids: &[u64], round: &Round) -> Result<u64> {
        require!(!ticket_ids.is_empty(), ErrorCode::TicketsEmpty);
        require!(round.id == self.round_id, ErrorCode::InvalidTicketBook);
        require!(round.is(RoundStatus::Rewarded), ErrorCode::RoundNotRewarded);
        require!(round.is_awarded(), ErrorCode::TicketsNotAwarded);

        let mut amount = 0u64;
        for ticket_id in ticket_ids {
            let slot = ticket_id
                .checked_sub(self.first_ticket_id)
                .map(|s| s as usize)
                .filter(|s| *s < self.tickets.len())
                .ok_or(ErrorCode::InvalidTicketId)?;
            require_keys_eq!(self.owner, *claimer, ErrorCode::OnlyOwner);

            let ticket = &mut self.tickets[slot];
            require!(ticket.win_status, ErrorCode::TicketNotWin);
            require!(!ticket.claim_status, ErrorCode::OnlyClaimOnce);

            ticket.claim_status = true;
            amount = checked_add_u64(amount, ticket.win_amount)?;
        }

        Ok(amount)
    }
}

/// Oracle output for one round, written by the VRF callback.
#[account]
#[derive(Default)]
pub struct RoundRandomness {
    pub round_id: u64,
    pub lottery: Pubkey,
    pub status: u8,
    pub randomness: [u8; 32],
    pub numbers: Vec<u8>,
    pub requested_at: i64,
    pub fulfilled_at: i64,
    pub bump: u8,
}

impl RoundRandomness {
    pub const SPACE: usize = 8
        + 8
        + 32
        + 1
        + 32
        + 4 + MAX_RANDOM_NUMBERS
        + 8 + 8
        + 1;

    pub fn begin_request(&mut self, round: &Round, now: i64) -> Result<()> {
        require!(round.is(RoundStatus::Closed), ErrorCode::NotTimeToDraw);

        self.round_id = round.id;
        self.lottery = round.lottery;
        self.status = RandomnessStatus::Requested as u8;
        self.randomness = [0u8; 32];
        self.numbers.clear();
        self.requested_at = now;
        self.fulfilled_at = 0;
        Ok(())
    }

    pub fn fulfil(&mut self, randomness: [u8; 32], lottery: &Lottery, now: i64) -> Result<&[u8]> {
        require!(
            self.status == RandomnessStatus::Requested as u8 && self.requested_at != 0,
            ErrorCode::InvalidRandomness
        );

        self.randomness = randomness;
        self.numbers = derive_lucky_numbers(
            &randomness,
            lottery.number_of_items,
            lottery.min_value_per_item,
            lottery.max_value_per_item,
        );
        self.status = RandomnessStatus::Fulfilled as u8;
        self.fulfilled_at = now;
        Ok(&self.numbers)
    }

    /// Stores a result as-is. Validation happens when the round is drawn.
    pub fn set_result(&mut self, numbers: Vec<u8>, now: i64) -> Result<()> {
        require!(numbers.len() <= MAX_RANDOM_NUMBERS, ErrorCode::InvalidWinningNumbers);

        self.numbers = numbers;
        self.status = RandomnessStatus::Fulfilled as u8;
        self.fulfilled_at = now;
        Ok(())
    }

    pub fn delivered_numbers(&self) -> Option<&[u8]> {
        (self.status == RandomnessStatus::Fulfilled as u8).then_some(self.numbers.as_slice())
    }
}

#[account]
#[derive(Default)]
pub struct JobRegistry {
    pub job_ids: Vec<String>,
    pub bump: u8,
}

impl JobRegistry {
    pub const SPACE: usize = 8 + 4 + MAX_JOBS * (4 + MAX_ID_LEN) + 1;

    pub fn register(&mut self, job_id: &str) -> Result<()> {
        require!(
            !self.job_ids.iter().any(|id| id == job_id),
            ErrorCode::InvalidJobId
        );
        require!(self.job_ids.len() < MAX_JOBS, ErrorCode::TooManyJobs);

        self.job_ids.push(job_id.to_string());
        Ok(())
    }

    pub fn unregister(&mut self, job_id: &str) -> Result<()> {
        let position = self
            .job_ids
            .iter()
            .position(|id| id == job_id)
            .ok_or(ErrorCode::InvalidJobId)?;
        self.job_ids.remove(position);
        Ok(())
    }
}

#[account]
#[derive(Default)]
pub struct TriggerJob {
    pub job_id: String,
    pub lottery_id: String,
    pub cron_spec: String,
    pub job_type: JobType,
    pub created_at: i64,
    pub bump: u8,
}

impl TriggerJob {
    pub const SPACE: usize = 8
        + 4 + MAX_ID_LEN
        + 4 + MAX_ID_LEN
        + 4 + MAX_CRON_SPEC_LEN
        + 1
        + 8
        + 1;
}
