#[cfg(test)]
mod tests {
    use anchor_lang::solana_program::program_option::COption;
    use anchor_lang::solana_program::pubkey::Pubkey;
    use anchor_spl::token_2022::spl_token_2022::state::{Account, AccountState};

    use crate::instructions::batch_distribute::{destination_accepts, record_top_up};

    fn token_account(owner: Pubkey, mint: Pubkey, state: AccountState) -> Account {
        Account {
            mint,
            owner,
            amount: 0,
            delegate: COption::None,
            state,
            is_native: COption::None,
            delegated_amount: 0,
            close_authority: COption::None,
        }
    }

    #[test]
    fn fresh_record_is_funded_in_full() {
        assert_eq!(record_top_up(0, 1_002_240), 1_002_240);
    }

    #[test]
    fn lamports_parked_at_the_record_address_only_reduce_the_top_up() {
        // Anyone can send lamports to the predictable record PDA; that must
        // shrink the shortfall, not block the entry
        assert_eq!(record_top_up(1, 1_002_240), 1_002_239);
        assert_eq!(record_top_up(1_002_240, 1_002_240), 0);
        assert_eq!(record_top_up(5_000_000, 1_002_240), 0);
    }

    #[test]
    fn destination_owned_by_the_claimant_is_accepted() {
        let claimant = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let dest = token_account(claimant, mint, AccountState::Initialized);

        assert!(destination_accepts(&dest, &claimant, &mint));
    }

    #[test]
    fn destination_with_wrong_owner_or_mint_is_rejected() {
        let claimant = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let someone_else = token_account(Pubkey::new_unique(), mint, AccountState::Initialized);
        assert!(!destination_accepts(&someone_else, &claimant, &mint));

        let wrong_mint = token_account(claimant, Pubkey::new_unique(), AccountState::Initialized);
        assert!(!destination_accepts(&wrong_mint, &claimant, &mint));
    }

    #[test]
    fn frozen_or_uninitialized_destination_is_rejected() {
        let claimant = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        // A frozen account would fail the transfer CPI and abort the whole
        // batch; the filter has to catch it first
        let frozen = token_account(claimant, mint, AccountState::Frozen);
        assert!(!destination_accepts(&frozen, &claimant, &mint));

        let uninitialized = token_account(claimant, mint, AccountState::Uninitialized);
        assert!(!destination_accepts(&uninitialized, &claimant, &mint));
    }
}
