//! Claim racing refund: claimers and refunders hammer one swap while the
//! clock crosses expiry. Whoever is sequenced first wins; the other side
//! fails on the status guard.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use std::sync::Arc;
    use std::thread;
    use swap_ledger::{
        invariant_windows_disjoint, CallContext, NativeBank, SwapError, SwapLedgerApi,
        SwapStatus, U256,
    };

    #[test]
    fn test_claim_vs_refund_exactly_one_wins() {
        for round in 0..8u64 {
            let ledger = Arc::new(native_ledger(test_config()));
            let secret = known_secret();
            let swap_id = ledger
                .initiate(native_call(ALICE), swap_params(&secret, BOB, CAROL))
                .unwrap();
            let expiry = ledger.query_swap(&swap_id).unwrap().expiry;
            ledger.clock().set_height(expiry - 4 + round % 8);

            let mut handles = Vec::new();
            for _ in 0..4 {
                let l = Arc::clone(&ledger);
                handles.push(thread::spawn(move || {
                    l.claim(CallContext::new(RELAYER), swap_id, secret).is_ok()
                }));
                let l = Arc::clone(&ledger);
                handles.push(thread::spawn(move || {
                    l.refund(CallContext::new(RELAYER), swap_id).is_ok()
                }));
            }
            let ticker = Arc::clone(&ledger);
            handles.push(thread::spawn(move || {
                for _ in 0..8 {
                    ticker.clock().advance_blocks(1, BLOCK_TIME);
                    thread::yield_now();
                }
                false
            }));

            let wins = handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|won| *won)
                .count();
            assert!(wins <= 1, "round {round}: {wins} winners");

            // Every racer may have landed on the wrong side of expiry.
            if wins == 0 {
                assert_eq!(ledger.status(&swap_id), Some(SwapStatus::Open));
                ledger.clock().set_height(expiry);
                ledger.refund(CallContext::new(RELAYER), swap_id).unwrap();
            }
            assert!(matches!(
                ledger.refund(CallContext::new(RELAYER), swap_id),
                Err(SwapError::NotRefundable { .. })
            ));

            let bank = ledger.escrow().bank();
            let paid_out = bank.balance_of(&BOB) + bank.balance_of(&ALICE);
            assert_eq!(paid_out, starting_balance());
            assert_eq!(ledger.custody_balance(), U256::zero());
            let status = ledger.status(&swap_id).unwrap();
            assert!(status.is_terminal());
            if status == SwapStatus::Completed {
                assert_eq!(bank.balance_of(&BOB), U256::from(AMOUNT));
            } else {
                assert_eq!(bank.balance_of(&BOB), U256::zero());
            }
        }
    }

    #[test]
    fn test_windows_disjoint_across_boundary() {
        let ledger = native_ledger(test_config());
        let swap_id = ledger
            .initiate(native_call(ALICE), swap_params(&known_secret(), BOB, CAROL))
            .unwrap();
        let record = ledger.query_swap(&swap_id).unwrap();

        for height in record.open_point..record.expiry + 5 {
            ledger.clock().set_height(height);
            let claimable = ledger.claimable(&swap_id);
            let refundable = ledger.refundable(&swap_id);
            assert!(claimable != refundable, "height {height}");
            assert!(invariant_windows_disjoint(&record, height));
            assert_eq!(refundable, height >= record.expiry);
        }
    }

    #[test]
    fn test_refund_then_late_claim() {
        let ledger = native_ledger(test_config());
        let secret = known_secret();
        let swap_id = ledger
            .initiate(native_call(ALICE), swap_params(&secret, BOB, CAROL))
            .unwrap();

        ledger.clock().advance_blocks(TIMELOCK, BLOCK_TIME);
        ledger.refund(CallContext::new(ALICE), swap_id).unwrap();

        // Rewinding the clock must not reopen the claim path.
        ledger.clock().set_height(START_HEIGHT);
        assert_eq!(
            ledger.claim(CallContext::new(BOB), swap_id, secret),
            Err(SwapError::NotClaimable {
                status: SwapStatus::Expired,
                expired: false
            })
        );
        assert_eq!(ledger.escrow().bank().balance_of(&BOB), U256::zero());
    }
}
