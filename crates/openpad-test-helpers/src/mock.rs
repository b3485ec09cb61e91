//! Mock collaborators for driving a [`Gamepad`](openpad_pipeline::Gamepad)
//! in tests.
//!
//! Each mock is a cheap handle around shared state: clone it before moving
//! it into the gamepad and keep the clone to steer or inspect it.

use openpad_options::{MemoryBackend, OptionsBackend, StorageError, StorageResult};
use openpad_pipeline::{Clock, InputDevice};
use openpad_state::{Button, Capabilities, GamepadState};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(ms: u32) -> Self {
        let clock = Self::new();
        clock.set(ms);
        clock
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    /// Moves the clock forward, wrapping like a hardware counter.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

#[derive(Debug, Default)]
struct Script {
    queued: VecDeque<GamepadState>,
    held: GamepadState,
    reads: usize,
    setup_calls: usize,
}

/// Input device that replays queued states, then keeps returning the held
/// state.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDevice {
    script: Rc<RefCell<Script>>,
    capabilities: Capabilities,
}

impl ScriptedDevice {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            script: Rc::default(),
            capabilities,
        }
    }

    /// All-digital board.
    pub fn digital() -> Self {
        Self::new(Capabilities::digital())
    }

    /// Holds exactly `buttons` (sticks centered) until changed.
    pub fn hold(&self, buttons: &[Button]) {
        self.hold_state(GamepadState::with_buttons(buttons));
    }

    pub fn hold_state(&self, state: GamepadState) {
        self.script.borrow_mut().held = state;
    }

    /// Releases everything.
    pub fn release_all(&self) {
        self.hold_state(GamepadState::default());
    }

    /// Queues a state returned by exactly one read, ahead of the held state.
    pub fn push(&self, state: GamepadState) {
        self.script.borrow_mut().queued.push_back(state);
    }

    pub fn reads(&self) -> usize {
        self.script.borrow().reads
    }

    pub fn setup_calls(&self) -> usize {
        self.script.borrow().setup_calls
    }
}

impl InputDevice for ScriptedDevice {
    fn setup(&mut self) {
        let mut script = self.script.borrow_mut();
        script.setup_calls = script.setup_calls.saturating_add(1);
    }

    fn read_raw_state(&mut self) -> GamepadState {
        let mut script = self.script.borrow_mut();
        script.reads = script.reads.saturating_add(1);
        let held = script.held;
        script.queued.pop_front().unwrap_or(held)
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

#[derive(Debug, Default)]
struct Faults {
    reads: bool,
    writes: bool,
    flushes: bool,
}

/// Shared [`MemoryBackend`] whose operations can be made to fail.
#[derive(Debug, Clone, Default)]
pub struct FailingBackend {
    memory: Rc<RefCell<MemoryBackend>>,
    faults: Rc<RefCell<Faults>>,
}

impl FailingBackend {
    /// Erased medium with no faults.
    pub fn healthy() -> Self {
        Self::default()
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            memory: Rc::new(RefCell::new(MemoryBackend::from_bytes(bytes))),
            faults: Rc::default(),
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.faults.borrow_mut().reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.faults.borrow_mut().writes = fail;
    }

    pub fn fail_flushes(&self, fail: bool) {
        self.faults.borrow_mut().flushes = fail;
    }

    /// Current medium contents.
    pub fn bytes(&self) -> Vec<u8> {
        self.memory.borrow().bytes().to_vec()
    }

    /// Number of successful single writes so far.
    pub fn write_count(&self) -> usize {
        self.memory.borrow().writes().len()
    }

    pub fn flush_count(&self) -> usize {
        self.memory.borrow().flush_count()
    }

    pub fn clear_log(&self) {
        self.memory.borrow_mut().clear_log();
    }
}

impl OptionsBackend for FailingBackend {
    fn read(&mut self, offset: usize, buf: &mut [u8]) -> StorageResult<()> {
        if self.faults.borrow().reads {
            return Err(StorageError::ReadFailed(offset));
        }
        self.memory.borrow_mut().read(offset, buf)
    }

    fn write(&mut self, offset: usize, bytes: &[u8]) -> StorageResult<()> {
        if self.faults.borrow().writes {
            return Err(StorageError::WriteFailed(offset));
        }
        self.memory.borrow_mut().write(offset, bytes)
    }

    fn flush(&mut self) -> StorageResult<()> {
        if self.faults.borrow().flushes {
            return Err(StorageError::FlushFailed("injected".to_string()));
        }
        self.memory.borrow_mut().flush()
    }
}
