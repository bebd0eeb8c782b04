use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Only operator")]
    OnlyOperator,
    #[msg("Only trigger or operator")]
    OnlyTriggerOrOperator,
    #[msg("Only the ticket owner can claim")]
    OnlyOwner,
    #[msg("Invalid address")]
    InvalidAddress,
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid lottery id")]
    InvalidLotteryId,
    #[msg("Too many lotteries registered")]
    TooManyLotteries,
    #[msg("Invalid lottery picture")]
    InvalidPicture,
    #[msg("Invalid lottery verbose name")]
    InvalidVerboseName,
    #[msg("Invalid number of items")]
    InvalidNumberOfItems,
    #[msg("Invalid min value per item")]
    InvalidMinValuePerItem,
    #[msg("Invalid max value per item")]
    InvalidMaxValuePerItem,
    #[msg("Invalid period days")]
    InvalidPeriodDays,
    #[msg("Invalid period hour of days")]
    InvalidPeriodHourOfDays,
    #[msg("Invalid max number of tickets per buy")]
    InvalidMaxNumberTicketsPerBuy,
    #[msg("Invalid price per ticket")]
    InvalidPricePerTicket,
    #[msg("Invalid treasury fee percent")]
    InvalidTreasuryFeePercent,
    #[msg("Invalid amount inject next round percent")]
    InvalidAmountInjectNextRoundPercent,
    #[msg("Invalid discount percent")]
    InvalidDiscountPercent,
    #[msg("Invalid rules")]
    InvalidRules,
    #[msg("Invalid reward rule")]
    InvalidRewardRule,

    #[msg("Invalid round id")]
    InvalidRoundId,
    #[msg("Invalid round draw time")]
    InvalidRoundDrawTime,
    #[msg("Not time to open lottery")]
    NotTimeToOpen,
    #[msg("Not time to close lottery")]
    NotTimeToClose,
    #[msg("Not time to draw lottery")]
    NotTimeToDraw,
    #[msg("Not time to reward lottery")]
    NotTimeToReward,
    #[msg("Invalid winning numbers")]
    InvalidWinningNumbers,
    #[msg("Ticket books of the round are not fully settled")]
    TicketsNotSettled,
    #[msg("Ticket books of the round are not fully awarded")]
    TicketsNotAwarded,
    #[msg("Invalid randomness account")]
    InvalidRandomness,

    #[msg("Round is closed")]
    RoundIsClosed,
    #[msg("Tickets empty")]
    TicketsEmpty,
    #[msg("Tickets limit exceeded")]
    TicketsLimit,
    #[msg("Invalid ticket numbers")]
    InvalidTicketNumbers,
    #[msg("Invalid ticket book index")]
    InvalidBookIndex,
    #[msg("Invalid ticket book account")]
    InvalidTicketBook,

    #[msg("Round is not rewarded")]
    RoundNotRewarded,
    #[msg("Invalid ticket id")]
    InvalidTicketId,
    #[msg("Ticket did not win")]
    TicketNotWin,
    #[msg("Ticket can only be claimed once")]
    OnlyClaimOnce,

    #[msg("Invalid vault account")]
    InvalidVault,
    #[msg("Invalid treasury account")]
    InvalidTreasury,
    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid job id")]
    InvalidJobId,
    #[msg("Invalid job cron spec")]
    InvalidCronSpec,
    #[msg("Invalid spec")]
    InvalidSpec,
    #[msg("Too many trigger jobs")]
    TooManyJobs,
}
