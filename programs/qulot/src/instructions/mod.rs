pub mod init_config;
pub mod update_roles;
pub mod set_treasury;
pub mod transfer_ownership;
pub mod add_lottery;
pub mod add_reward_rules;
pub mod open_round;
pub mod close_round;
pub mod request_randomness;
pub mod consume_randomness;
#[cfg(feature = "devnet")]
pub mod mock_set_random_result;
pub mod draw_round;
pub mod buy_tickets;
pub mod calculate_amount;
pub mod reward_rules;
pub mod settle_tickets;
pub mod reward_round;
pub mod award_tickets;
pub mod claim_tickets;
pub mod add_trigger_job;
pub mod remove_trigger_job;

pub use init_config::*;
pub use update_roles::*;
pub use set_treasury::*;
pub use transfer_ownership::*;
pub use add_lottery::*;
pub use add_reward_rules::*;
pub use open_round::*;
pub use close_round::*;
pub use request_randomness::*;
pub use consume_randomness::*;
#[cfg(feature = "devnet")]
pub use mock_set_random_result::*;
pub use draw_round::*;
pub use buy_tickets::*;
pub use calculate_amount::*;
pub use reward_rules::*;
pub use settle_tickets::*;
pub use reward_round::*;
pub use award_tickets::*;
pub use claim_tickets::*;
pub use add_trigger_job::*;
pub use remove_trigger_job::*;
