//! # Swap Ledger Service
//!
//! Application service implementing [`SwapLedgerApi`].
//!
//! ## Architecture
//!
//! - Owns the swap registry (records keyed by identifier plus creation order)
//! - Drives the [`Escrow`] port for custody
//! - Reads "now" from the [`ChainClock`] port per the configured policy
//! - Publishes every transition to the [`EventSink`] port
//!
//! Every mutating call holds the registry write guard from validation
//! through escrow movement to commit. Two racing calls on one identifier
//! are therefore sequenced: the loser observes the winner's status.

use crate::adapters::{NativeEscrow, TokenEscrow};
use crate::algorithms::{
    calc_hash_lock, compute_expiry, current_point, derive_swap_id, verify_secret,
};
use crate::config::LedgerConfig;
use crate::domain::{
    invariant_expiry_after_open, Address, CallContext, ConfigError, EscrowError, HashLock,
    InitiateParams, Secret, SwapError, SwapId, SwapRecord, SwapStatus, U256,
};
use crate::events::{SwapClaimed, SwapEvent, SwapInitiated, SwapRefunded};
use crate::ports::inbound::SwapLedgerApi;
use crate::ports::outbound::{ChainClock, Escrow, EventSink, NativeBank, TokenLedger};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Default)]
struct Registry {
    records: HashMap<SwapId, SwapRecord>,
    order: Vec<SwapId>,
}

/// Hash time-locked swap ledger.
pub struct SwapLedger<E: Escrow, C: ChainClock, S: EventSink> {
    config: LedgerConfig,
    escrow: E,
    clock: C,
    sink: S,
    registry: RwLock<Registry>,
}

impl<E: Escrow, C: ChainClock, S: EventSink> SwapLedger<E, C, S> {
    /// Create a ledger over the given collaborators.
    pub fn new(config: LedgerConfig, escrow: E, clock: C, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            id_scheme = ?config.id_scheme,
            expiry_policy = ?config.expiry_policy,
            min_timelock = config.min_timelock,
            max_timelock = config.max_timelock,
            asset = ?escrow.asset(),
            "swap ledger created"
        );
        Ok(Self {
            config,
            escrow,
            clock,
            sink,
            registry: RwLock::new(Registry::default()),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Escrow strategy.
    pub fn escrow(&self) -> &E {
        &self.escrow
    }

    /// Chain clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn now(&self) -> u64 {
        current_point(self.config.expiry_policy, &self.clock)
    }

    fn rejected(&self, op: &'static str, err: SwapError) -> SwapError {
        warn!(op, error = %err, "swap call rejected");
        err
    }
}

impl<B: NativeBank, C: ChainClock, S: EventSink> SwapLedger<NativeEscrow<B>, C, S> {
    /// Ledger escrowing the host's native coin under `config.escrow_address`.
    pub fn with_native_bank(
        config: LedgerConfig,
        bank: Arc<B>,
        clock: C,
        sink: S,
    ) -> Result<Self, ConfigError> {
        let escrow = NativeEscrow::new(bank, config.escrow_address);
        Self::new(config, escrow, clock, sink)
    }
}

impl<T: TokenLedger, C: ChainClock, S: EventSink> SwapLedger<TokenEscrow<T>, C, S> {
    /// Ledger escrowing the token at `token_address` under `config.escrow_address`.
    pub fn with_token_ledger(
        config: LedgerConfig,
        token: Arc<T>,
        token_address: Address,
        clock: C,
        sink: S,
    ) -> Result<Self, ConfigError> {
        let escrow = TokenEscrow::new(token, token_address, config.escrow_address);
        Self::new(config, escrow, clock, sink)
    }
}

impl<E: Escrow, C: ChainClock, S: EventSink> SwapLedgerApi for SwapLedger<E, C, S> {
    fn initiate(&self, ctx: CallContext, params: InitiateParams) -> Result<SwapId, SwapError> {
        let mut registry = self.registry.write();

        let swap_id = derive_swap_id(
            self.config.id_scheme,
            &params.hash_lock,
            &ctx.caller,
            &params.recipient,
            &params.counterpart_sender,
        );
        if registry.records.contains_key(&swap_id) {
            return Err(self.rejected("initiate", SwapError::AlreadyExists(swap_id)));
        }
        if params.amount_out.is_zero() {
            return Err(self.rejected("initiate", SwapError::InvalidAmount));
        }

        let open_point = self.now();
        let expiry = compute_expiry(
            open_point,
            params.timelock,
            self.config.min_timelock,
            self.config.max_timelock,
        )
        .map_err(|e| self.rejected("initiate", e))?;

        let escrow_account = self.escrow.account();
        if ctx.caller == escrow_account {
            return Err(self.rejected(
                "initiate",
                SwapError::EscrowIntakeFailed(EscrowError::SelfDeposit(escrow_account)),
            ));
        }
        self.escrow
            .intake(&ctx.caller, params.amount_out, ctx.value)
            .map_err(|e| self.rejected("initiate", e))?;

        let index = registry.order.len() as u64;
        let record = SwapRecord::open(swap_id, ctx.caller, &params, open_point, expiry, index);
        debug_assert!(invariant_expiry_after_open(&record));
        registry.records.insert(swap_id, record);
        registry.order.push(swap_id);

        info!(
            swap_id = %swap_id,
            sender = %ctx.caller,
            recipient = %params.recipient,
            amount_out = %params.amount_out,
            open_point,
            expiry,
            index,
            "swap initiated"
        );
        self.sink.emit(&SwapEvent::SwapInitiated(SwapInitiated {
            caller: ctx.caller,
            recipient: params.recipient,
            counterpart_recipient: params.counterpart_recipient,
            counterpart_sender: params.counterpart_sender,
            swap_id,
            hash_lock: params.hash_lock,
            timestamp: params.timestamp,
            open_point,
            timelock: params.timelock,
            expiry,
            index,
            amount_out: params.amount_out,
            amount_in: params.amount_in,
        }));

        Ok(swap_id)
    }

    fn claim(&self, ctx: CallContext, swap_id: SwapId, secret: Secret) -> Result<(), SwapError> {
        let mut registry = self.registry.write();
        let now = self.now();

        let record = registry
            .records
            .get_mut(&swap_id)
            .ok_or(SwapError::NotFound(swap_id))
            .map_err(|e| self.rejected("claim", e))?;
        record
            .ensure_claimable(now)
            .map_err(|e| self.rejected("claim", e))?;
        if !verify_secret(&secret, record.timestamp, &record.hash_lock) {
            return Err(self.rejected("claim", SwapError::BadSecret));
        }

        self.escrow
            .release(&record.recipient, record.amount_out)
            .map_err(|e| self.rejected("claim", SwapError::EscrowReleaseFailed(e)))?;
        record.complete(secret, now)?;

        info!(
            swap_id = %swap_id,
            caller = %ctx.caller,
            recipient = %record.recipient,
            amount_out = %record.amount_out,
            "swap claimed"
        );
        self.sink.emit(&SwapEvent::SwapClaimed(SwapClaimed {
            caller: ctx.caller,
            recipient: record.recipient,
            swap_id,
            hash_lock: record.hash_lock,
            secret,
        }));

        Ok(())
    }

    fn refund(&self, ctx: CallContext, swap_id: SwapId) -> Result<(), SwapError> {
        let mut registry = self.registry.write();
        let now = self.now();

        let record = registry
            .records
            .get_mut(&swap_id)
            .ok_or(SwapError::NotFound(swap_id))
            .map_err(|e| self.rejected("refund", e))?;
        record
            .ensure_refundable(now)
            .map_err(|e| self.rejected("refund", e))?;

        self.escrow
            .release(&record.sender, record.amount_out)
            .map_err(|e| self.rejected("refund", SwapError::EscrowReleaseFailed(e)))?;
        record.expire(now)?;

        info!(
            swap_id = %swap_id,
            caller = %ctx.caller,
            sender = %record.sender,
            amount_out = %record.amount_out,
            "swap refunded"
        );
        self.sink.emit(&SwapEvent::SwapRefunded(SwapRefunded {
            caller: ctx.caller,
            sender: record.sender,
            swap_id,
            hash_lock: record.hash_lock,
        }));

        Ok(())
    }

    fn exists(&self, swap_id: &SwapId) -> bool {
        self.registry.read().records.contains_key(swap_id)
    }

    fn claimable(&self, swap_id: &SwapId) -> bool {
        let now = self.now();
        self.registry
            .read()
            .records
            .get(swap_id)
            .is_some_and(|r| r.is_claimable(now))
    }

    fn refundable(&self, swap_id: &SwapId) -> bool {
        let now = self.now();
        self.registry
            .read()
            .records
            .get(swap_id)
            .is_some_and(|r| r.is_refundable(now))
    }

    fn status(&self, swap_id: &SwapId) -> Option<SwapStatus> {
        self.registry.read().records.get(swap_id).map(|r| r.status)
    }

    fn query_swap(&self, swap_id: &SwapId) -> Option<SwapRecord> {
        debug!(swap_id = %swap_id, "query swap");
        self.registry.read().records.get(swap_id).cloned()
    }

    fn swap_by_index(&self, index: u64) -> Option<SwapRecord> {
        let registry = self.registry.read();
        let swap_id = usize::try_from(index)
            .ok()
            .and_then(|i| registry.order.get(i))?;
        registry.records.get(swap_id).cloned()
    }

    fn swap_count(&self) -> u64 {
        self.registry.read().order.len() as u64
    }

    fn custody_balance(&self) -> U256 {
        self.escrow.custody()
    }

    fn calc_hash_lock(&self, secret: &Secret, timestamp: u64) -> HashLock {
        calc_hash_lock(secret, timestamp)
    }

    fn calc_swap_id(
        &self,
        hash_lock: &HashLock,
        sender: &Address,
        recipient: &Address,
        counterpart_sender: &Address,
    ) -> SwapId {
        let swap_id = derive_swap_id(
            self.config.id_scheme,
            hash_lock,
            sender,
            recipient,
            counterpart_sender,
        );
        debug!(swap_id = %swap_id, scheme = ?self.config.id_scheme, "derived swap id");
        swap_id
    }
}
