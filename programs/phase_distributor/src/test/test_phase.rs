#[cfg(test)]
mod tests {
    use crate::error::PhaseDistributorError;
    use crate::state::{ClaimRecord, Distributor, Phase};

    const NOW: i64 = 1_700_000_000;

    fn error_name(err: anchor_lang::error::Error) -> String {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_name.clone(),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    fn active_phase(expiry: i64) -> Phase {
        Phase {
            bump: 255,
            index: 0,
            merkle_root: [7; 32],
            per_claim_amount: 1_000_000,
            expiry,
            active: true,
            claimed_count: 0,
        }
    }

    #[test]
    fn creation_rules_reject_zero_amount() {
        let err = Phase::validate_terms(0, NOW + 100, NOW).unwrap_err();
        assert_eq!(error_name(err), PhaseDistributorError::ZeroAmount.name());
    }

    #[test]
    fn creation_rules_require_future_expiry() {
        // Strictly in the future: expiry == now is rejected
        let err = Phase::validate_terms(1, NOW, NOW).unwrap_err();
        assert_eq!(
            error_name(err),
            PhaseDistributorError::ExpiryNotInFuture.name()
        );

        let err = Phase::validate_terms(1, NOW - 1, NOW).unwrap_err();
        assert_eq!(
            error_name(err),
            PhaseDistributorError::ExpiryNotInFuture.name()
        );

        assert!(Phase::validate_terms(1, NOW + 1, NOW).is_ok());
    }

    #[test]
    fn creation_rules_reject_the_zero_root() {
        // A zero commitment is unprovable against, so it is refused at
        // creation and update alike
        let err = Phase::validate_root(&[0; 32]).unwrap_err();
        assert_eq!(
            error_name(err),
            PhaseDistributorError::InvalidMerkleRoot.name()
        );

        assert!(Phase::validate_root(&[7; 32]).is_ok());
    }

    #[test]
    fn registry_is_bounded_by_max_phases() {
        let mut distributor = Distributor::default();

        // Appending assigns consecutive indices up to the bound
        for expected in 0..crate::constants::MAX_PHASES {
            assert_eq!(distributor.next_phase_index().unwrap(), expected);
            distributor.phase_count += 1;
        }

        let err = distributor.next_phase_index().unwrap_err();
        assert_eq!(error_name(err), PhaseDistributorError::RegistryFull.name());
    }

    #[test]
    fn deactivated_phase_refuses_claims_before_expiry() {
        let mut phase = active_phase(NOW + 1_000);
        phase.active = false;

        let err = phase.check_claimable(NOW).unwrap_err();
        assert_eq!(
            error_name(err),
            PhaseDistributorError::PhaseNotActive.name()
        );
    }

    #[test]
    fn expired_phase_refuses_claims() {
        // Phase created with expiry = now + 100, clock advanced by 101
        let phase = active_phase(NOW + 100);
        let err = phase.check_claimable(NOW + 101).unwrap_err();
        assert_eq!(error_name(err), PhaseDistributorError::ClaimingEnded.name());
    }

    #[test]
    fn claims_are_accepted_up_to_the_expiry_instant() {
        let phase = active_phase(NOW + 100);
        assert!(phase.check_claimable(NOW + 100).is_ok());
        assert!(phase.check_claimable(NOW).is_ok());
    }

    #[test]
    fn inactive_wins_over_expired() {
        // A phase that is both deactivated and expired reports
        // PhaseNotActive, matching the single-claim check order
        let mut phase = active_phase(NOW - 10);
        phase.active = false;

        let err = phase.check_claimable(NOW).unwrap_err();
        assert_eq!(
            error_name(err),
            PhaseDistributorError::PhaseNotActive.name()
        );
    }

    #[test]
    fn remaining_time_clamps_at_zero() {
        let phase = active_phase(NOW + 250);
        assert_eq!(phase.remaining_time(NOW), 250);
        assert_eq!(phase.remaining_time(NOW + 250), 0);
        assert_eq!(phase.remaining_time(NOW + 10_000), 0);
    }

    #[test]
    fn counters_move_in_lock_step() {
        let mut distributor = Distributor::default();
        let mut phase = active_phase(NOW + 1_000);

        for expected in 1..=3u64 {
            phase.record_claim().unwrap();
            distributor.record_claim(1_000_000).unwrap();

            assert_eq!(phase.claimed_count, expected);
            assert_eq!(distributor.total_recipients, expected);
            assert_eq!(distributor.total_claimed, expected * 1_000_000);
        }
    }

    #[test]
    fn per_phase_amounts_sum_into_total_claimed() {
        let mut distributor = Distributor::default();

        // Two phases with different entitlements
        distributor.record_claim(1_000_000).unwrap();
        distributor.record_claim(1_000_000).unwrap();
        distributor.record_claim(250).unwrap();

        assert_eq!(distributor.total_claimed, 2_000_250);
        assert_eq!(distributor.total_recipients, 3);
    }

    #[test]
    fn counter_overflow_is_an_error_not_a_wrap() {
        let mut distributor = Distributor {
            total_claimed: u64::MAX - 1,
            ..Distributor::default()
        };

        let err = distributor.record_claim(2).unwrap_err();
        assert_eq!(
            error_name(err),
            PhaseDistributorError::ArithmeticOverflow.name()
        );

        let mut phase = active_phase(NOW + 1_000);
        phase.claimed_count = u64::MAX;
        let err = phase.record_claim().unwrap_err();
        assert_eq!(
            error_name(err),
            PhaseDistributorError::ArithmeticOverflow.name()
        );
    }

    #[test]
    fn claim_record_defaults_to_unclaimed() {
        let record = ClaimRecord::default();
        assert!(!record.claimed);
    }
}
