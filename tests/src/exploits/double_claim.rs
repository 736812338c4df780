//! Double claim: submit the same valid claim more than once, sequentially
//! and from many threads at once.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use std::sync::Arc;
    use std::thread;
    use swap_ledger::{CallContext, NativeBank, SwapError, SwapLedgerApi, SwapStatus, U256};

    #[test]
    fn test_second_claim_rejected() {
        let ledger = native_ledger(test_config());
        let secret = known_secret();
        let swap_id = ledger
            .initiate(native_call(ALICE), swap_params(&secret, BOB, CAROL))
            .unwrap();

        ledger.claim(CallContext::new(BOB), swap_id, secret).unwrap();
        assert_eq!(
            ledger.claim(CallContext::new(BOB), swap_id, secret),
            Err(SwapError::NotClaimable {
                status: SwapStatus::Completed,
                expired: false
            })
        );
        assert_eq!(ledger.escrow().bank().balance_of(&BOB), U256::from(AMOUNT));
        assert_eq!(ledger.sink().len(), 2);
    }

    #[test]
    fn test_concurrent_claims_pay_once() {
        let ledger = Arc::new(native_ledger(test_config()));
        let secret = known_secret();
        let swap_id = ledger
            .initiate(native_call(ALICE), swap_params(&secret, BOB, CAROL))
            .unwrap();

        let handles: Vec<_> = (0..16u8)
            .map(|i| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    let caller = swap_ledger::Address::new([i; 20]);
                    ledger.claim(CallContext::new(caller), swap_id, secret)
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let wins = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1);
        for loss in results.iter().filter_map(|r| r.as_ref().err()) {
            assert!(matches!(
                loss,
                SwapError::NotClaimable {
                    status: SwapStatus::Completed,
                    ..
                }
            ));
        }
        assert_eq!(ledger.escrow().bank().balance_of(&BOB), U256::from(AMOUNT));
        assert_eq!(ledger.custody_balance(), U256::zero());
    }
}
