use anchor_lang::{AccountDeserialize, AccountSerialize, InstructionData};
use mollusk_svm::Mollusk;
use mollusk_svm::program::create_program_account_loader_v3;
use solana_account::Account;
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use qulot::{
    errors::ErrorCode,
    state::{Config, Lottery, RewardRule, Round, RoundStatus, TicketBook},
};

const PRICE: u64 = 1_000_000_000;
const TOKEN_ACCOUNT_LEN: usize = 165;
const SOL: u64 = 1_000_000_000;

fn program_id() -> Pubkey {
    Pubkey::new_from_array(qulot::ID.to_bytes())
}

fn token_program() -> Pubkey {
    Pubkey::new_from_array(anchor_spl::token::ID.to_bytes())
}

fn anchor_key(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

struct Pdas {
    config: (Pubkey, u8),
    lottery: (Pubkey, u8),
    round: (Pubkey, u8),
}

fn pdas(round_id: u64) -> Pdas {
    let program_id = program_id();
    Pdas {
        config: Pubkey::find_program_address(&[b"cfg"], &program_id),
        lottery: Pubkey::find_program_address(&[b"lottery", b"liteq"], &program_id),
        round: Pubkey::find_program_address(&[b"round", &round_id.to_le_bytes()], &program_id),
    }
}

fn book_pda(round_id: u64, index: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"tickets", &round_id.to_le_bytes(), &index.to_le_bytes()],
        &program_id(),
    )
}

fn mollusk_with_token() -> Mollusk {
    let mut mollusk = Mollusk::new(&program_id(), "qulot");
    mollusk_svm_programs_token::token::add_program(&mut mollusk);
    mollusk.sysvars.clock.unix_timestamp = 1_700_000_000;
    mollusk
}

fn signer_account() -> Account {
    Account::new(SOL, 0, &Pubkey::default())
}

fn state_account<T: AccountSerialize>(state: &T, space: usize) -> Account {
    let mut data = Vec::with_capacity(space);
    state.try_serialize(&mut data).expect("serialize state");
    data.resize(space, 0);

    let mut account = Account::new(SOL, 0, &program_id());
    account.data = data;
    account
}

fn read_state<T: AccountDeserialize>(account: &Account) -> T {
    T::try_deserialize(&mut account.data.as_slice()).expect("deserialize state")
}

/// SPL token account with the fields the program reads; everything else zeroed.
fn token_account(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Account {
    let mut data = vec![0u8; TOKEN_ACCOUNT_LEN];
    data[..32].copy_from_slice(&mint.to_bytes());
    data[32..64].copy_from_slice(&owner.to_bytes());
    data[64..72].copy_from_slice(&amount.to_le_bytes());
    // AccountState::Initialized
    data[108] = 1;

    let mut account = Account::new(SOL, 0, &token_program());
    account.data = data;
    account
}

fn token_amount(account: &Account) -> u64 {
    let mut amount = [0u8; 8];
    amount.copy_from_slice(&account.data[64..72]);
    u64::from_le_bytes(amount)
}

fn assert_custom_error(result: &mollusk_svm::result::InstructionResult, code: u32) {
    let rendered = format!("{:?}", result.program_result);
    assert!(
        rendered.contains(&format!("Custom({})", code)),
        "expected custom error {}, got {}",
        code,
        rendered
    );
}

fn config(operator: &Pubkey, treasury: &Pubkey, mint: &Pubkey, bump: u8) -> Config {
    Config {
        owner: anchor_key(operator),
        operator: anchor_key(operator),
        treasury: anchor_key(treasury),
        payment_mint: anchor_key(mint),
        round_count: 1,
        bump,
        lottery_ids: vec!["liteq".to_string()],
        ..Default::default()
    }
}

fn liteq(vault: &Pubkey, bump: u8) -> Lottery {
    let mut lottery = Lottery {
        id: "liteq".to_string(),
        picture: "https://qulot.io/liteq.png".to_string(),
        verbose_name: "Lite Q".to_string(),
        number_of_items: 3,
        min_value_per_item: 1,
        max_value_per_item: 66,
        period_days: vec![0, 1, 2, 3, 4, 5, 6],
        period_hour_of_days: 17,
        max_number_tickets_per_buy: 10,
        price_per_ticket: PRICE,
        treasury_fee_percent: 10,
        amount_inject_next_round_percent: 10,
        discount_percent: 10,
        discount_threshold: 1,
        current_round_id: 1,
        vault: anchor_key(vault),
        bump,
        ..Default::default()
    };
    lottery
        .upsert_reward_rules(&[RewardRule::percent(3, 70), RewardRule::percent(2, 30)])
        .expect("liteq rules");
    lottery
}

fn round(lottery_key: &Pubkey, lottery: &Lottery, status: RoundStatus, bump: u8) -> Round {
    Round {
        id: 1,
        lottery: anchor_key(lottery_key),
        status: status as u8,
        total_tickets: 3,
        total_amount: 2_700_000_000,
        winning_numbers: vec![3, 5, 20],
        book_count: 1,
        reward_rules: lottery.reward_rules,
        bump,
        ..Default::default()
    }
}

fn liteq_book(owner: &Pubkey, lottery_key: &Pubkey, index: u32, bump: u8) -> TicketBook {
    let mut book = TicketBook {
        round_id: 1,
        lottery: anchor_key(lottery_key),
        owner: anchor_key(owner),
        buyer: anchor_key(owner),
        index,
        bump,
        ..Default::default()
    };
    book.issue_tickets(1, vec![vec![3, 5, 20], vec![7, 19, 52], vec![10, 4, 9]])
        .expect("issue tickets");
    book
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn add_reward_rules_rejects_non_operator() {
    let operator = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();
    let pdas = pdas(1);
    let vault = Pubkey::new_unique();

    let mollusk = Mollusk::new(&program_id(), "qulot");
    let config = config(&operator, &Pubkey::new_unique(), &Pubkey::new_unique(), pdas.config.1);
    let lottery = liteq(&vault, pdas.lottery.1);

    let instruction = Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(stranger, true),
            AccountMeta::new_readonly(pdas.config.0, false),
            AccountMeta::new(pdas.lottery.0, false),
        ],
        data: qulot::instruction::AddRewardRules {
            lottery_id: "liteq".to_string(),
            rules: vec![RewardRule::percent(1, 0)],
        }
        .data(),
    };

    let accounts = vec![
        (stranger, signer_account()),
        (pdas.config.0, state_account(&config, Config::SPACE)),
        (pdas.lottery.0, state_account(&lottery, Lottery::SPACE)),
    ];

    let result = mollusk.process_instruction(&instruction, &accounts);
    assert_custom_error(&result, u32::from(ErrorCode::OnlyOperator));
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn close_round_is_gated_to_trigger_or_operator() {
    let operator = Pubkey::new_unique();
    let trigger = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();
    let pdas = pdas(1);
    let vault = Pubkey::new_unique();

    let mollusk = Mollusk::new(&program_id(), "qulot");
    let mut config = config(&operator, &Pubkey::new_unique(), &Pubkey::new_unique(), pdas.config.1);
    config.trigger = anchor_key(&trigger);
    let lottery = liteq(&vault, pdas.lottery.1);
    let open = round(&pdas.lottery.0, &lottery, RoundStatus::Open, pdas.round.1);

    let close_by = |caller: Pubkey| {
        let instruction = Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new_readonly(caller, true),
                AccountMeta::new_readonly(pdas.config.0, false),
                AccountMeta::new_readonly(pdas.lottery.0, false),
                AccountMeta::new(pdas.round.0, false),
            ],
            data: qulot::instruction::CloseRound { lottery_id: "liteq".to_string() }.data(),
        };
        let accounts = vec![
            (caller, signer_account()),
            (pdas.config.0, state_account(&config, Config::SPACE)),
            (pdas.lottery.0, state_account(&lottery, Lottery::SPACE)),
            (pdas.round.0, state_account(&open, Round::SPACE)),
        ];
        mollusk.process_instruction(&instruction, &accounts)
    };

    let rejected = close_by(stranger);
    assert_custom_error(&rejected, u32::from(ErrorCode::OnlyTriggerOrOperator));

    let closed = close_by(trigger);
    assert!(closed.program_result.is_ok(), "{:?}", closed.program_result);
    let updated: Round = read_state(closed.get_account(&pdas.round.0).expect("round account"));
    assert!(updated.is(RoundStatus::Closed));
    assert_eq!(updated.close_time, mollusk.sysvars.clock.unix_timestamp);
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn unknown_lottery_fails_account_loading() {
    let operator = Pubkey::new_unique();
    let pdas = pdas(1);
    let missing = Pubkey::find_program_address(&[b"lottery", b"megaq"], &program_id()).0;

    let mollusk = Mollusk::new(&program_id(), "qulot");
    let config = config(&operator, &Pubkey::new_unique(), &Pubkey::new_unique(), pdas.config.1);

    let instruction = Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(operator, true),
            AccountMeta::new_readonly(pdas.config.0, false),
            AccountMeta::new_readonly(missing, false),
            AccountMeta::new(pdas.round.0, false),
        ],
        data: qulot::instruction::CloseRound { lottery_id: "megaq".to_string() }.data(),
    };

    let accounts = vec![
        (operator, signer_account()),
        (pdas.config.0, state_account(&config, Config::SPACE)),
        (missing, Account::default()),
        (pdas.round.0, Account::default()),
    ];

    let result = mollusk.process_instruction(&instruction, &accounts);
    assert_custom_error(
        &result,
        anchor_lang::error::ErrorCode::AccountNotInitialized as u32,
    );
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn settle_tickets_walks_books_from_the_cursor() {
    let operator = Pubkey::new_unique();
    let (alice, bob) = (Pubkey::new_unique(), Pubkey::new_unique());
    let pdas = pdas(1);
    let vault = Pubkey::new_unique();
    let (first_key, first_bump) = book_pda(1, 0);
    let (second_key, second_bump) = book_pda(1, 1);

    let mollusk = Mollusk::new(&program_id(), "qulot");
    let config = config(&operator, &Pubkey::new_unique(), &Pubkey::new_unique(), pdas.config.1);
    let lottery = liteq(&vault, pdas.lottery.1);
    let mut drawn = round(&pdas.lottery.0, &lottery, RoundStatus::Drawn, pdas.round.1);
    drawn.book_count = 2;

    let first = liteq_book(&alice, &pdas.lottery.0, 0, first_bump);
    let mut second = TicketBook {
        round_id: 1,
        lottery: anchor_key(&pdas.lottery.0),
        owner: anchor_key(&bob),
        buyer: anchor_key(&bob),
        index: 1,
        bump: second_bump,
        ..Default::default()
    };
    second.issue_tickets(4, vec![vec![20, 3, 9]]).expect("issue tickets");

    let instruction = Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(operator, true),
            AccountMeta::new_readonly(pdas.config.0, false),
            AccountMeta::new_readonly(pdas.lottery.0, false),
            AccountMeta::new(pdas.round.0, false),
            AccountMeta::new(first_key, false),
            AccountMeta::new(second_key, false),
        ],
        data: qulot::instruction::SettleTickets { lottery_id: "liteq".to_string() }.data(),
    };

    let accounts = vec![
        (operator, signer_account()),
        (pdas.config.0, state_account(&config, Config::SPACE)),
        (pdas.lottery.0, state_account(&lottery, Lottery::SPACE)),
        (pdas.round.0, state_account(&drawn, Round::SPACE)),
        (first_key, state_account(&first, TicketBook::space(3))),
        (second_key, state_account(&second, TicketBook::space(1))),
    ];

    let result = mollusk.process_instruction(&instruction, &accounts);
    assert!(result.program_result.is_ok(), "{:?}", result.program_result);

    let round: Round = read_state(result.get_account(&pdas.round.0).expect("round account"));
    assert_eq!(round.settled_books, 2);
    assert!(round.is_settled());
    assert_eq!(round.winners_per_match[3], 1);
    assert_eq!(round.winners_per_match[2], 1);

    let first: TicketBook = read_state(result.get_account(&first_key).expect("first book"));
    assert!(first.tickets[0].win_status);
    assert_eq!(first.tickets[0].win_reward_rule, 3);
    assert!(!first.tickets[1].win_status);
    assert!(!first.tickets[2].win_status);

    let second: TicketBook = read_state(result.get_account(&second_key).expect("second book"));
    assert!(second.tickets[0].win_status);
    assert_eq!(second.tickets[0].win_reward_rule, 2);
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn reward_round_pays_the_treasury_fee_from_the_vault() {
    let operator = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let pdas = pdas(1);
    let vault = Pubkey::new_unique();
    let treasury = Pubkey::new_unique();

    let mollusk = mollusk_with_token();
    let config = config(&operator, &treasury, &mint, pdas.config.1);
    let lottery = liteq(&vault, pdas.lottery.1);
    let mut drawn = round(&pdas.lottery.0, &lottery, RoundStatus::Drawn, pdas.round.1);
    drawn.settled_books = 1;
    drawn.winners_per_match[3] = 1;

    let instruction = Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(operator, true),
            AccountMeta::new_readonly(pdas.config.0, false),
            AccountMeta::new(pdas.lottery.0, false),
            AccountMeta::new(pdas.round.0, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(treasury, false),
            AccountMeta::new_readonly(token_program(), false),
        ],
        data: qulot::instruction::RewardRound { lottery_id: "liteq".to_string() }.data(),
    };

    let accounts = vec![
        (operator, signer_account()),
        (pdas.config.0, state_account(&config, Config::SPACE)),
        (pdas.lottery.0, state_account(&lottery, Lottery::SPACE)),
        (pdas.round.0, state_account(&drawn, Round::SPACE)),
        (vault, token_account(&mint, &pdas.lottery.0, 2_700_000_000)),
        (treasury, token_account(&mint, &Pubkey::new_unique(), 0)),
        (token_program(), create_program_account_loader_v3(&token_program())),
    ];

    let result = mollusk.process_instruction(&instruction, &accounts);
    assert!(result.program_result.is_ok(), "{:?}", result.program_result);

    assert_eq!(token_amount(result.get_account(&treasury).expect("treasury")), 270_000_000);
    assert_eq!(token_amount(result.get_account(&vault).expect("vault")), 2_430_000_000);

    let round: Round = read_state(result.get_account(&pdas.round.0).expect("round account"));
    assert!(round.is(RoundStatus::Rewarded));
    assert_eq!(round.prize_per_winner[3], 1_512_000_000);
    assert_eq!(round.amount_injected, 918_000_000);

    let lottery: Lottery = read_state(result.get_account(&pdas.lottery.0).expect("lottery account"));
    assert_eq!(lottery.amount_inject_next_round, 918_000_000);
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn award_then_claim_pays_the_winner_from_the_vault() {
    let operator = Pubkey::new_unique();
    let alice = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let pdas = pdas(1);
    let vault = Pubkey::new_unique();
    let alice_tokens = Pubkey::new_unique();
    let (book_key, book_bump) = book_pda(1, 0);

    let mollusk = mollusk_with_token();
    let config = config(&operator, &Pubkey::new_unique(), &mint, pdas.config.1);
    let lottery = liteq(&vault, pdas.lottery.1);
    let mut rewarded = round(&pdas.lottery.0, &lottery, RoundStatus::Rewarded, pdas.round.1);
    rewarded.settled_books = 1;
    rewarded.winners_per_match[3] = 1;
    rewarded.prize_per_winner[3] = 1_512_000_000;

    let mut book = liteq_book(&alice, &pdas.lottery.0, 0, book_bump);
    book.tickets[0].win_status = true;
    book.tickets[0].win_reward_rule = 3;

    let award = Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(operator, true),
            AccountMeta::new_readonly(pdas.config.0, false),
            AccountMeta::new(pdas.round.0, false),
            AccountMeta::new(book_key, false),
        ],
        data: qulot::instruction::AwardTickets { round_id: 1 }.data(),
    };
    let claim = Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(alice, true),
            AccountMeta::new_readonly(pdas.config.0, false),
            AccountMeta::new_readonly(pdas.round.0, false),
            AccountMeta::new_readonly(pdas.lottery.0, false),
            AccountMeta::new(book_key, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(alice_tokens, false),
            AccountMeta::new_readonly(token_program(), false),
        ],
        data: qulot::instruction::ClaimTickets {
            round_id: 1,
            book_index: 0,
            ticket_ids: vec![1],
        }
        .data(),
    };

    let accounts = vec![
        (operator, signer_account()),
        (alice, signer_account()),
        (pdas.config.0, state_account(&config, Config::SPACE)),
        (pdas.lottery.0, state_account(&lottery, Lottery::SPACE)),
        (pdas.round.0, state_account(&rewarded, Round::SPACE)),
        (book_key, state_account(&book, TicketBook::space(3))),
        (vault, token_account(&mint, &pdas.lottery.0, 2_430_000_000)),
        (alice_tokens, token_account(&mint, &alice, 0)),
        (token_program(), create_program_account_loader_v3(&token_program())),
    ];

    let early = mollusk.process_instruction(&claim, &accounts);
    assert_custom_error(&early, u32::from(ErrorCode::TicketsNotAwarded));

    let result = mollusk.process_instruction_chain(&[award, claim], &accounts);
    assert!(result.program_result.is_ok(), "{:?}", result.program_result);

    assert_eq!(
        token_amount(result.get_account(&alice_tokens).expect("alice tokens")),
        1_512_000_000
    );
    assert_eq!(
        token_amount(result.get_account(&vault).expect("vault")),
        2_430_000_000 - 1_512_000_000
    );

    let book: TicketBook = read_state(result.get_account(&book_key).expect("ticket book"));
    assert_eq!(book.tickets[0].win_amount, 1_512_000_000);
    assert!(book.tickets[0].claim_status);
    assert_eq!(book.tickets[1].win_amount, 0);
    assert!(!book.tickets[1].claim_status);
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn bulk_quote_is_returned_as_return_data() {
    let pdas = pdas(1);
    let vault = Pubkey::new_unique();

    let mollusk = Mollusk::new(&program_id(), "qulot");
    let lottery = liteq(&vault, pdas.lottery.1);
    let open = round(&pdas.lottery.0, &lottery, RoundStatus::Open, pdas.round.1);

    let instruction = Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new_readonly(pdas.round.0, false),
            AccountMeta::new_readonly(pdas.lottery.0, false),
        ],
        data: qulot::instruction::CalculateAmountForBulkTickets { round_id: 1, count: 3 }.data(),
    };

    let accounts = vec![
        (pdas.round.0, state_account(&open, Round::SPACE)),
        (pdas.lottery.0, state_account(&lottery, Lottery::SPACE)),
    ];

    let result = mollusk.process_instruction(&instruction, &accounts);
    assert!(result.program_result.is_ok(), "{:?}", result.program_result);

    let quote: qulot::utils::BulkPrice =
        anchor_lang::AnchorDeserialize::deserialize(&mut result.return_data.as_slice())
            .expect("bulk price");
    assert_eq!(quote.total_amount, 3 * PRICE);
    assert_eq!(quote.discount, 10);
    assert_eq!(quote.final_amount, 2_700_000_000);
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn reward_rules_view_lists_active_tiers() {
    let pdas = pdas(1);
    let vault = Pubkey::new_unique();

    let mollusk = Mollusk::new(&program_id(), "qulot");
    let lottery = liteq(&vault, pdas.lottery.1);

    let instruction = Instruction {
        program_id: program_id(),
        accounts: vec![AccountMeta::new_readonly(pdas.lottery.0, false)],
        data: qulot::instruction::GetRewardRules { lottery_id: "liteq".to_string() }.data(),
    };
    let accounts = vec![(pdas.lottery.0, state_account(&lottery, Lottery::SPACE))];

    let result = mollusk.process_instruction(&instruction, &accounts);
    assert!(result.program_result.is_ok(), "{:?}", result.program_result);

    let rules: Vec<RewardRule> =
        anchor_lang::AnchorDeserialize::deserialize(&mut result.return_data.as_slice())
            .expect("reward rules");
    assert_eq!(rules, vec![RewardRule::percent(2, 30), RewardRule::percent(3, 70)]);

    let mismatched = Instruction {
        data: qulot::instruction::GetRewardRules { lottery_id: "megaq".to_string() }.data(),
        ..instruction
    };
    let result = mollusk.process_instruction(&mismatched, &accounts);
    assert_custom_error(&result, u32::from(ErrorCode::InvalidLotteryId));
}

#[test]
#[ignore = "requires the program built with cargo build-sbf and SBF_OUT_DIR set"]
fn init_config_records_roles_and_treasury() {
    let program_id = program_id();
    let payer = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let operator = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let treasury = Pubkey::new_unique();
    let (config_key, config_bump) = Pubkey::find_program_address(&[b"cfg"], &program_id);
    let (registry_key, _) = Pubkey::find_program_address(&[b"jobs"], &program_id);
    let (system_program, system_account) = mollusk_svm::program::keyed_account_for_system_program();

    let mollusk = mollusk_with_token();

    // Mint: COption authority, supply, decimals, is_initialized, COption freeze authority.
    let mut mint_data = vec![0u8; 82];
    mint_data[44] = 9;
    mint_data[45] = 1;
    let mut mint_account = Account::new(SOL, 0, &token_program());
    mint_account.data = mint_data;

    let instruction = Instruction {
        program_id,
        accounts: vec![
            AccountMeta::new(payer, true),
            AccountMeta::new_readonly(owner, true),
            AccountMeta::new(config_key, false),
            AccountMeta::new(registry_key, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(treasury, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: qulot::instruction::InitConfig {
            args: qulot::instructions::InitConfigArgs {
                operator: anchor_key(&operator),
                trigger: anchor_lang::prelude::Pubkey::default(),
            },
        }
        .data(),
    };

    let accounts = vec![
        (payer, Account::new(10 * SOL, 0, &Pubkey::default())),
        (owner, signer_account()),
        (config_key, Account::default()),
        (registry_key, Account::default()),
        (mint, mint_account),
        (treasury, token_account(&mint, &owner, 0)),
        (system_program, system_account),
    ];

    let result = mollusk.process_instruction(&instruction, &accounts);
    assert!(result.program_result.is_ok(), "{:?}", result.program_result);

    let config: Config = read_state(result.get_account(&config_key).expect("config account"));
    assert_eq!(config.owner, anchor_key(&owner));
    assert_eq!(config.operator, anchor_key(&operator));
    assert_eq!(config.trigger, anchor_lang::prelude::Pubkey::default());
    assert_eq!(config.treasury, anchor_key(&treasury));
    assert_eq!(config.payment_mint, anchor_key(&mint));
    assert_eq!(config.round_count, 0);
    assert_eq!(config.bump, config_bump);
    assert!(config.lottery_ids.is_empty());
}
