pub const PERCENT_DENOMINATOR: u64 = 100;

/// Reward values are percentages of the reward pool. No other unit is accepted.
pub const REWARD_UNIT_PERCENT: u8 = 0;

pub const SEED_CFG: &[u8] = b"cfg";
pub const SEED_LOTTERY: &[u8] = b"lottery";
pub const SEED_ROUND: &[u8] = b"round";
pub const SEED_TICKETS: &[u8] = b"tickets";
pub const SEED_RANDOM: &[u8] = b"random";
pub const SEED_JOBS: &[u8] = b"jobs";
pub const SEED_JOB: &[u8] = b"job";
pub const SEED_IDENTITY: &[u8] = b"identity";

/// Numbers per ticket. Match counts therefore range over 0..=MAX_NUMBER_OF_ITEMS.
pub const MAX_NUMBER_OF_ITEMS: usize = 6;
pub const MATCH_SLOTS: usize = MAX_NUMBER_OF_ITEMS + 1;

/// Upper bound for a lottery's `max_number_tickets_per_buy`; keeps one ticket book
/// well inside the CPI account allocation limit.
pub const MAX_TICKETS_PER_BUY: u32 = 100;

/// Ticket books processed by a single `settle_tickets` or `award_tickets` call.
pub const MAX_BOOKS_PER_SETTLE: usize = 8;

pub const MAX_LOTTERIES: usize = 16;
pub const MAX_JOBS: usize = 64;

/// Ids are used as PDA seeds, so they must fit in one seed.
pub const MAX_ID_LEN: usize = 32;
pub const MAX_PICTURE_LEN: usize = 200;
pub const MAX_VERBOSE_NAME_LEN: usize = 64;
pub const MAX_CRON_SPEC_LEN: usize = 64;
pub const MAX_PERIOD_DAYS: usize = 7;

/// Capacity of a delivered randomness result. Oracle output may be malformed, so it is
/// stored as delivered and validated at draw time.
pub const MAX_RANDOM_NUMBERS: usize = 12;
