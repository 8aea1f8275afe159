//! Cooperative bitmask scheduler
//!
//! Eight slots share one status register. A slot is either a *state*
//! (a persistent on/off flag somebody else polls) or a *task* (a
//! one-shot flag with a callback, consumed on dispatch). Interrupt
//! contexts activate slots; the main loop drains them one callback at
//! a time.
//!
//! The status register is an [`AtomicU8`]; every bit update is a single
//! atomic read-modify-write, so interrupt contexts and the main loop
//! share it without a lock and no update is ever lost to a torn
//! read-modify-write.

use portable_atomic::{AtomicU8, Ordering};

/// Number of slots in the status register.
pub const SLOT_COUNT: usize = 8;

/// Opaque handle for a registered state or task.
///
/// Holds the slot's bit, which is fixed at registration and is the only
/// way to address the slot afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotId(u8);

impl SlotId {
    /// The slot's bit in the status register.
    pub fn mask(self) -> u8 {
        self.0
    }
}

/// Errors that can occur during slot registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// All eight slots are taken.
    CapacityExhausted,
}

/// What a slot does when its bit is found set during dispatch.
enum SlotKind<C> {
    /// Externally toggled flag; dispatch never clears it.
    State,
    /// One-shot callback; the bit is cleared before the callback runs.
    Task(fn(&mut C)),
}

impl<C> Clone for SlotKind<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for SlotKind<C> {}

/// Fixed-capacity cooperative scheduler.
///
/// `C` is the context handed to task callbacks; the firmware uses its
/// application struct, tests use whatever they want to observe.
///
/// Registration needs `&mut self` and happens once at startup.
/// Everything else takes `&self`: `activate`/`deactivate`/`is_active`
/// are single atomic operations safe from interrupt context, and
/// `dispatch_one` is only ever called from the main loop.
pub struct Scheduler<C> {
    slots: [Option<SlotKind<C>>; SLOT_COUNT],
    registered: u8,
    /// The shared status register: bit set = slot active.
    pending: AtomicU8,
    /// Free-running round-robin cursor, masked to the slot range.
    cursor: AtomicU8,
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
            registered: 0,
            pending: AtomicU8::new(0),
            cursor: AtomicU8::new(0),
        }
    }

    fn register(&mut self, kind: SlotKind<C>) -> Result<SlotId, RegisterError> {
        if usize::from(self.registered) >= SLOT_COUNT {
            return Err(RegisterError::CapacityExhausted);
        }
        let id = SlotId(1 << self.registered);
        self.slots[usize::from(self.registered)] = Some(kind);
        self.registered += 1;
        // Fresh slots start inactive.
        self.deactivate(id);
        Ok(id)
    }

    /// Register a persistent on/off flag.
    pub fn register_state(&mut self) -> Result<SlotId, RegisterError> {
        self.register(SlotKind::State)
    }

    /// Register a one-shot task with its callback.
    pub fn register_task(&mut self, callback: fn(&mut C)) -> Result<SlotId, RegisterError> {
        self.register(SlotKind::Task(callback))
    }

    /// Set the slot's bit. Safe from interrupt context.
    pub fn activate(&self, id: SlotId) {
        self.pending.fetch_or(id.mask(), Ordering::AcqRel);
    }

    /// Clear the slot's bit. Safe from interrupt context.
    pub fn deactivate(&self, id: SlotId) {
        self.pending.fetch_and(!id.mask(), Ordering::AcqRel);
    }

    /// Whether the slot's bit is currently set.
    pub fn is_active(&self, id: SlotId) -> bool {
        self.pending.load(Ordering::Acquire) & id.mask() != 0
    }

    /// Advance the round-robin cursor one slot and, if that slot is an
    /// active task, clear its bit and run its callback.
    ///
    /// At most one callback runs per call; callers drain pending work
    /// by invoking this in a tight loop. A full sweep is eight calls,
    /// and a slot re-activated faster than the sweep returns to it can
    /// starve the others - an accepted property of the fixed polling
    /// ratio, not a bug.
    pub fn dispatch_one(&self, ctx: &mut C) {
        let step = self.cursor.fetch_add(1, Ordering::AcqRel).wrapping_add(1) & 0x07;
        let mask = 1u8 << step;

        if let Some(SlotKind::Task(callback)) = self.slots[usize::from(step)] {
            // Clear before running so a re-activation from inside the
            // callback (or an interrupt during it) is not lost.
            let was_set = self.pending.fetch_and(!mask, Ordering::AcqRel) & mask != 0;
            if was_set {
                callback(ctx);
            }
        }
    }
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Counters {
        calls: [u32; SLOT_COUNT],
    }

    impl Counters {
        fn new() -> Self {
            Self {
                calls: [0; SLOT_COUNT],
            }
        }
    }

    fn count_0(c: &mut Counters) {
        c.calls[0] += 1;
    }
    fn count_2(c: &mut Counters) {
        c.calls[2] += 1;
    }
    fn count_5(c: &mut Counters) {
        c.calls[5] += 1;
    }

    #[test]
    fn test_registration_returns_distinct_bits() {
        let mut sched: Scheduler<Counters> = Scheduler::new();
        let mut seen = 0u8;
        for _ in 0..SLOT_COUNT {
            let id = sched.register_state().unwrap();
            assert_eq!(seen & id.mask(), 0, "bit handed out twice");
            seen |= id.mask();
        }
        assert_eq!(seen, 0xFF);
    }

    #[test]
    fn test_ninth_registration_fails() {
        let mut sched: Scheduler<Counters> = Scheduler::new();
        for _ in 0..SLOT_COUNT {
            sched.register_state().unwrap();
        }
        assert_eq!(
            sched.register_state(),
            Err(RegisterError::CapacityExhausted)
        );
        assert_eq!(
            sched.register_task(count_0),
            Err(RegisterError::CapacityExhausted)
        );
    }

    #[test]
    fn test_activate_deactivate_roundtrip() {
        let mut sched: Scheduler<Counters> = Scheduler::new();
        let a = sched.register_state().unwrap();
        let b = sched.register_state().unwrap();

        assert!(!sched.is_active(a));
        sched.activate(a);
        assert!(sched.is_active(a));
        assert!(!sched.is_active(b));

        // Idempotent set.
        sched.activate(a);
        assert!(sched.is_active(a));

        sched.deactivate(a);
        assert!(!sched.is_active(a));
        // Idempotent clear.
        sched.deactivate(a);
        assert!(!sched.is_active(a));
    }

    #[test]
    fn test_dispatch_runs_each_pending_task_once() {
        let mut sched: Scheduler<Counters> = Scheduler::new();
        // Slots 0/1 are states, 2 and 5 the tasks under test.
        let _s0 = sched.register_state().unwrap();
        let _s1 = sched.register_state().unwrap();
        let t2 = sched.register_task(count_2).unwrap();
        let _s3 = sched.register_state().unwrap();
        let _s4 = sched.register_state().unwrap();
        let t5 = sched.register_task(count_5).unwrap();

        sched.activate(t2);
        sched.activate(t5);

        let mut ctx = Counters::new();
        for _ in 0..SLOT_COUNT {
            sched.dispatch_one(&mut ctx);
        }

        assert_eq!(ctx.calls[2], 1);
        assert_eq!(ctx.calls[5], 1);
        assert!(!sched.is_active(t2));
        assert!(!sched.is_active(t5));
    }

    #[test]
    fn test_dispatch_never_clears_states() {
        let mut sched: Scheduler<Counters> = Scheduler::new();
        let state = sched.register_state().unwrap();
        sched.activate(state);

        let mut ctx = Counters::new();
        for _ in 0..(SLOT_COUNT * 3) {
            sched.dispatch_one(&mut ctx);
        }
        assert!(sched.is_active(state));
    }

    #[test]
    fn test_dispatch_runs_at_most_one_callback_per_call() {
        let mut sched: Scheduler<Counters> = Scheduler::new();
        let t0 = sched.register_task(count_0).unwrap();
        let _s1 = sched.register_state().unwrap();
        let t2 = sched.register_task(count_2).unwrap();
        sched.activate(t0);
        sched.activate(t2);

        let mut ctx = Counters::new();
        sched.dispatch_one(&mut ctx);
        let after_one: u32 = ctx.calls.iter().sum();
        assert!(after_one <= 1);
    }

    proptest! {
        /// For any interleaving of set/clear calls, `is_active` reflects
        /// exactly the net effect per slot.
        #[test]
        fn prop_register_reflects_net_effect(ops in proptest::collection::vec((0usize..8, any::<bool>()), 0..64)) {
            let mut sched: Scheduler<Counters> = Scheduler::new();
            let ids: [SlotId; SLOT_COUNT] =
                core::array::from_fn(|_| sched.register_state().unwrap());

            let mut model = [false; SLOT_COUNT];
            for (slot, set) in ops {
                if set {
                    sched.activate(ids[slot]);
                } else {
                    sched.deactivate(ids[slot]);
                }
                model[slot] = set;
            }

            for slot in 0..SLOT_COUNT {
                prop_assert_eq!(sched.is_active(ids[slot]), model[slot]);
            }
        }
    }
}
