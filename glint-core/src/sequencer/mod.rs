//! Animation and text sequencer
//!
//! Owns the playback session: which sprites of the local frame pool are
//! cycling, how fast, and when a scrolling message interrupts them.
//! Two slow-timer ticks drive it from interrupt context; the heavier
//! work (copying sprites, rendering glyph columns) is deferred to task
//! callbacks the main loop dispatches through the scheduler.

pub mod marquee;

pub use marquee::MAX_MESSAGE_LEN;

use marquee::Marquee;

use crate::catalog::{Catalog, Frame, EMPTY_FRAME};
use crate::display::MatrixDriver;
use crate::scheduler::{Scheduler, SlotId};
use crate::traits::{RandomSource, RowSink};

/// Sprite slots in the local frame pool; one extra scratch slot holds
/// the text render target.
pub const POOL_SIZE: usize = 8;
const TEXT_SLOT: usize = POOL_SIZE;

/// Scroll speed while a message is displayed (wait ticks per column).
const TEXT_SCROLL_SPEED: u8 = 2;

/// The die value that triggers a message interruption.
const MESSAGE_HIT: u16 = 1;

/// Sequencer playback mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Fresh after construction; leaves on [`Sequencer::start`].
    Idle,
    /// Cycling the sprites of the current sequence.
    Animating,
    /// Scrolling message columns in from the right.
    TextRendering,
    /// Message done; shifting empty columns until the matrix clears.
    TextOutro,
}

/// Errors from playback configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Bounds out of range or inverted; the session is left unchanged.
    InvalidBounds,
}

/// Scheduler slots the sequencer activates from its tick handlers.
///
/// The embedder registers the three task callbacks (they need the
/// embedder's context type) and hands the resulting ids in.
#[derive(Debug, Clone, Copy)]
pub struct SequencerSlots {
    pub next_sprite: SlotId,
    pub next_sequence: SlotId,
    pub text_render: SlotId,
}

/// Pre-text session snapshot so animation resumes unchanged.
#[derive(Debug, Clone, Copy, Default)]
struct SavedSession {
    start: u8,
    end: u8,
    speed: u8,
}

/// The animation/text sequencer.
pub struct Sequencer<R: RandomSource> {
    catalog: Catalog,
    rng: R,
    slots: SequencerSlots,
    /// Sprite frames of the current sequence plus the text scratch.
    pool: [Frame; POOL_SIZE + 1],
    mode: Mode,
    /// Current sequence bounds within the pool.
    start: u8,
    end: u8,
    /// Wait ticks between sprite advances.
    speed: u8,
    /// Pool index of the sprite being shown.
    pos: u8,
    sprite_wait: u8,
    /// Update ticks the current sequence runs before a new one.
    seq_length: u8,
    seq_wait: u8,
    saved: SavedSession,
    marquee: Marquee,
}

impl<R: RandomSource> Sequencer<R> {
    pub fn new(catalog: Catalog, rng: R, slots: SequencerSlots) -> Self {
        Self {
            catalog,
            rng,
            slots,
            pool: [EMPTY_FRAME; POOL_SIZE + 1],
            mode: Mode::Idle,
            start: 0,
            end: 0,
            speed: u8::MAX,
            pos: 0,
            sprite_wait: 0,
            seq_length: 0,
            seq_wait: 0,
            saved: SavedSession::default(),
            marquee: Marquee::new(),
        }
    }

    /// Leave `Idle`: pick a random sequence and put its first frame on
    /// the display.
    pub fn start<O: RowSink>(&mut self, driver: &mut MatrixDriver<O>) {
        self.load_next_sequence();
        self.load_next_sprite(driver);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current sequence bounds and speed, mostly for inspection.
    pub fn session(&self) -> (u8, u8, u8) {
        (self.start, self.end, self.speed)
    }

    /// Sprite-advance tick, called from the slow timer.
    ///
    /// Counts down the speed wait; on expiry advances the playback
    /// position (wrapping within the bounds) and requests the matching
    /// task. Interrupt-context cheap: a couple of compares and one
    /// atomic bit set.
    pub fn sprite_tick<C>(&mut self, sched: &Scheduler<C>) {
        if self.sprite_wait != 0 {
            self.sprite_wait -= 1;
            return;
        }
        match self.mode {
            Mode::Animating => {
                if self.pos < self.start {
                    // Position left outside the bounds (a text session
                    // just ended): snap back to the start.
                    self.pos = self.start;
                } else {
                    self.pos += 1;
                    if self.pos > self.end {
                        self.pos = self.start;
                    }
                }
                sched.activate(self.slots.next_sprite);
            }
            Mode::TextRendering | Mode::TextOutro => {
                sched.activate(self.slots.text_render);
            }
            Mode::Idle => {}
        }
        self.sprite_wait = self.speed;
    }

    /// Sequence-change tick, called from the second slow timer.
    ///
    /// While animating, counts toward the sequence's display length and
    /// then requests a new sequence. Always requests a render pass; the
    /// render task itself rolls the message die when no text is active.
    pub fn update_tick<C>(&mut self, sched: &Scheduler<C>) {
        if self.mode == Mode::Animating {
            self.seq_wait += 1;
            if self.seq_wait > self.seq_length {
                self.seq_wait = 0;
                sched.activate(self.slots.next_sequence);
            }
        }
        sched.activate(self.slots.text_render);
    }

    /// Task: pick a random sequence from the catalog and stage its
    /// sprite frames in the pool.
    pub fn load_next_sequence(&mut self) {
        if self.catalog.sequences.is_empty() {
            return;
        }
        let index = self.rng.next(self.catalog.sequences.len() as u16);
        let sequence = self.catalog.sequences[usize::from(index)];
        if sequence.sprites.is_empty() {
            return;
        }

        for (slot, &sprite) in sequence.sprites.iter().take(POOL_SIZE).enumerate() {
            self.pool[slot] = self
                .catalog
                .sprites
                .get(usize::from(sprite))
                .copied()
                .unwrap_or(EMPTY_FRAME);
        }
        let len = sequence.sprites.len().min(POOL_SIZE) as u8;
        let _ = self.set_sequence(0, len - 1, sequence.display_speed);
        self.seq_length = sequence.display_length;
    }

    /// Task: hand the frame at the current position to the driver.
    pub fn load_next_sprite<O: RowSink>(&mut self, driver: &mut MatrixDriver<O>) {
        driver.load_frame(&self.pool[usize::from(self.pos)]);
        driver.advance_buffer();
    }

    /// Task: one render pass. While text is active this scrolls one
    /// column; otherwise it rolls the message die and possibly starts a
    /// message.
    pub fn text_render<O: RowSink>(&mut self, driver: &mut MatrixDriver<O>) {
        match self.mode {
            Mode::TextRendering => {
                let done = self
                    .marquee
                    .step_text(&mut self.pool[TEXT_SLOT], &self.catalog.font);
                if done {
                    self.mode = Mode::TextOutro;
                }
                self.show_scratch(driver);
            }
            Mode::TextOutro => {
                let done = self.marquee.step_outro(&mut self.pool[TEXT_SLOT]);
                self.show_scratch(driver);
                if done {
                    self.end_message();
                }
            }
            Mode::Animating => {
                if self.rng.next(self.catalog.message_probability) == MESSAGE_HIT {
                    self.begin_random_message();
                }
            }
            Mode::Idle => {}
        }
    }

    /// Set the playback session to the given pool bounds and speed.
    ///
    /// Out-of-range or inverted bounds are rejected and nothing
    /// changes. On success the sequencer is (back) in `Animating`.
    pub fn set_sequence(&mut self, start: u8, end: u8, speed: u8) -> Result<(), SequenceError> {
        if usize::from(start) >= POOL_SIZE || usize::from(end) >= POOL_SIZE || start > end {
            return Err(SequenceError::InvalidBounds);
        }
        self.start = start;
        self.end = end;
        self.pos = start;
        self.speed = speed;
        self.mode = Mode::Animating;
        Ok(())
    }

    /// Interrupt the animation with a message. A zero-length message is
    /// a no-op; the animation continues untouched.
    pub fn begin_message(&mut self, message: &str) {
        if !self.marquee.start(message, &self.catalog.font) {
            return;
        }
        self.saved = SavedSession {
            start: self.start,
            end: self.end,
            speed: self.speed,
        };
        self.speed = TEXT_SCROLL_SPEED;
        self.pool[TEXT_SLOT] = EMPTY_FRAME;
        self.mode = Mode::TextRendering;
    }

    fn begin_random_message(&mut self) {
        if self.catalog.messages.is_empty() {
            return;
        }
        let index = self.rng.next(self.catalog.messages.len() as u16);
        let message = self.catalog.messages[usize::from(index)];
        self.begin_message(message);
    }

    fn end_message(&mut self) {
        let saved = self.saved;
        // Saved bounds came from a valid session; this cannot fail.
        let _ = self.set_sequence(saved.start, saved.end, saved.speed);
    }

    fn show_scratch<O: RowSink>(&mut self, driver: &mut MatrixDriver<O>) {
        driver.load_frame(&self.pool[TEXT_SLOT]);
        driver.advance_buffer();
    }
}
