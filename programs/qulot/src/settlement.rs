use anchor_lang::prelude::*;
use crate::{
    constants::MATCH_SLOTS,
    errors::ErrorCode,
    utils::{checked_add_u64, checked_sub_u64, percent_of},
};

/// Outcome of rewarding one round.
///
/// `total_amount == treasury_fee + total_payout + amount_inject_next_round` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub treasury_fee: u64,
    pub injection_base: u64,
    pub reward_pool: u64,
    pub prize_per_winner: [u64; MATCH_SLOTS],
    pub tier_payouts: [u64; MATCH_SLOTS],
    pub total_payout: u64,
    pub amount_inject_next_round: u64,
}

/// Splits a round's pot between treasury, winners and the next round.
///
/// Each tier with a non-zero rule gets `reward_pool * value / 100`, shared evenly by its
/// winners and floored. Tiers without winners, unallocated percentages and rounding
/// dust all roll into the next round.
pub fn compute_settlement(
    total_amount: u64,
    treasury_fee_percent: u8,
    amount_inject_next_round_percent: u8,
    reward_rules: &[u8; MATCH_SLOTS],
    winners_per_match: &[u32; MATCH_SLOTS],
) -> Result<Settlement> {
    let treasury_fee = percent_of(total_amount, treasury_fee_percent as u64)?;
    let injection_base = percent_of(total_amount, amount_inject_next_round_percent as u64)?;
    let reward_pool = checked_sub_u64(checked_sub_u64(total_amount, treasury_fee)?, injection_base)?;

    let mut prize_per_winner = [0u64; MATCH_SLOTS];
    let mut tier_payouts = [0u64; MATCH_SLOTS];
    let mut total_payout = 0u64;

    for (match_count, value) in reward_rules.iter().enumerate() {
        let winners = winners_per_match[match_count] as u64;
        if *value == 0 || winners == 0 {
            continue;
        }

        let allocation = percent_of(reward_pool, *value as u64)?;
        let prize = allocation / winners;
        let paid = prize.checked_mul(winners).ok_or(ErrorCode::MathOverflow)?;

        prize_per_winner[match_count] = prize;
        tier_payouts[match_count] = paid;
        total_payout = checked_add_u64(total_payout, paid)?;
    }

    let amount_inject_next_round =
        checked_sub_u64(checked_sub_u64(total_amount, treasury_fee)?, total_payout)?;

    Ok(Settlement {
        treasury_fee,
        injection_base,
        reward_pool,
        prize_per_winner,
        tier_payouts,
        total_payout,
        amount_inject_next_round,
    })
}
