//! Secret reuse: once a claim reveals the preimage, anyone may replay it.
//! That is exactly what makes the counterpart leg claimable. The hash-lock
//! binds the declared timestamp, and near-miss guesses open nothing.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use swap_ledger::{
        calc_hash_lock, CallContext, InitiateParams, NativeBank, SwapError, SwapEvent,
        SwapLedgerApi, TokenLedger, U256,
    };

    fn revealed_secret(ledger: &TokenSwapLedger) -> [u8; 32] {
        match ledger.sink().last() {
            Some(SwapEvent::SwapClaimed(e)) => e.secret,
            other => panic!("expected SwapClaimed, got {other:?}"),
        }
    }

    #[test]
    fn test_revealed_secret_unlocks_counterpart_leg() {
        // Alice sells native coin for Bob's tokens.
        let native = native_ledger(test_config());
        let token = token_ledger(test_config());
        let secret = known_secret();

        let coin_leg = native
            .initiate(native_call(ALICE), swap_params(&secret, BOB, CAROL))
            .unwrap();
        token
            .escrow()
            .token()
            .mint(&BOB, U256::from(AMOUNT))
            .unwrap();
        approve_escrow(&token, BOB);
        let token_leg = token
            .initiate(CallContext::new(BOB), swap_params(&secret, ALICE, CAROL))
            .unwrap();

        // Alice claims Bob's tokens, publishing the secret.
        token.claim(CallContext::new(ALICE), token_leg, secret).unwrap();
        let leaked = revealed_secret(&token);

        // A relayer settles the coin leg for Bob using the public secret.
        native.claim(CallContext::new(RELAYER), coin_leg, leaked).unwrap();
        assert_eq!(native.escrow().bank().balance_of(&BOB), U256::from(AMOUNT));
        assert_eq!(
            token.escrow().token().balance_of(&ALICE),
            starting_balance() + U256::from(AMOUNT)
        );
    }

    #[test]
    fn test_near_miss_secret_rejected() {
        let ledger = native_ledger(test_config());
        let secret = known_secret();
        let first = ledger
            .initiate(native_call(ALICE), swap_params(&secret, BOB, CAROL))
            .unwrap();

        // Same preimage, different timestamp: a different commitment.
        let later = InitiateParams {
            hash_lock: calc_hash_lock(&secret, TIMESTAMP + 1),
            timestamp: TIMESTAMP + 1,
            ..swap_params(&secret, BOB, CAROL)
        };
        let second = ledger.initiate(native_call(ALICE), later).unwrap();
        assert_ne!(first, second);

        ledger.claim(CallContext::new(BOB), first, secret).unwrap();
        let mut guess = secret;
        guess[31] ^= 1;
        assert_eq!(
            ledger.claim(CallContext::new(MALLORY), second, guess),
            Err(SwapError::BadSecret)
        );
        ledger.claim(CallContext::new(BOB), second, secret).unwrap();
    }

    #[test]
    fn test_hash_lock_built_from_wrong_timestamp_is_unclaimable() {
        let ledger = native_ledger(test_config());
        let secret = known_secret();
        // The initiator hashed with one timestamp but declared another.
        let params = InitiateParams {
            hash_lock: calc_hash_lock(&secret, TIMESTAMP + 60),
            ..swap_params(&secret, BOB, CAROL)
        };
        let swap_id = ledger.initiate(native_call(ALICE), params).unwrap();

        assert_eq!(
            ledger.claim(CallContext::new(BOB), swap_id, secret),
            Err(SwapError::BadSecret)
        );
        ledger.clock().advance_blocks(TIMELOCK, BLOCK_TIME);
        ledger.refund(CallContext::new(ALICE), swap_id).unwrap();
        assert_eq!(ledger.escrow().bank().balance_of(&ALICE), starting_balance());
    }
}
