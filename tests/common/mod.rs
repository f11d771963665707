#![allow(dead_code)]

//! A recording fake of the OS display-configuration facility.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use displayrot::{DISP_CHANGE_SUCCESSFUL, DeviceEntry, DisplayApi, ModeRecord, WindowHandle};

/// In-memory `DisplayApi` for tests: scripted devices and modes, a commit
/// log, and a configurable commit result code.
pub struct FakeApi {
    devices: HashMap<u32, DeviceEntry>,
    modes: RefCell<HashMap<String, ModeRecord>>,
    windows: HashMap<isize, String>,
    commit_result: Cell<i32>,
    mode_fetches: Cell<usize>,
    committed: RefCell<Vec<(String, ModeRecord)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            devices: HashMap::new(),
            modes: RefCell::new(HashMap::new()),
            windows: HashMap::new(),
            commit_result: Cell::new(DISP_CHANGE_SUCCESSFUL),
            mode_fetches: Cell::new(0),
            committed: RefCell::new(Vec::new()),
        }
    }

    /// Adds a device at the next free enumeration slot.
    pub fn with_device(self, name: &str, state_flags: u32, mode: Option<ModeRecord>) -> Self {
        let ordinal = self.devices.keys().max().map_or(0, |max| max + 1);
        self.with_device_at(ordinal, name, state_flags, mode)
    }

    /// Adds a device at a specific enumeration slot.
    pub fn with_device_at(
        mut self,
        ordinal: u32,
        name: &str,
        state_flags: u32,
        mode: Option<ModeRecord>,
    ) -> Self {
        self.devices.insert(
            ordinal,
            DeviceEntry {
                name: name.to_string(),
                state_flags,
            },
        );
        if let Some(mode) = mode {
            self.modes.borrow_mut().insert(name.to_string(), mode);
        }
        self
    }

    /// Maps a window handle to a device name.
    pub fn with_window(mut self, handle: isize, device_name: &str) -> Self {
        self.windows.insert(handle, device_name.to_string());
        self
    }

    /// Scripts every subsequent commit to return `code`.
    pub fn rejecting_commits(self, code: i32) -> Self {
        self.commit_result.set(code);
        self
    }

    /// Number of commit calls seen so far.
    pub fn commit_count(&self) -> usize {
        self.committed.borrow().len()
    }

    /// The record submitted by the most recent commit.
    pub fn last_committed(&self) -> Option<(String, ModeRecord)> {
        self.committed.borrow().last().cloned()
    }

    /// Number of current-mode fetches seen so far.
    pub fn mode_fetch_count(&self) -> usize {
        self.mode_fetches.get()
    }

    /// The mode the fake currently holds for `name`.
    pub fn stored_mode(&self, name: &str) -> Option<ModeRecord> {
        self.modes.borrow().get(name).cloned()
    }
}

impl DisplayApi for FakeApi {
    fn device_at(&self, ordinal: u32) -> Option<DeviceEntry> {
        self.devices.get(&ordinal).cloned()
    }

    fn current_mode(&self, device_name: &str) -> Option<ModeRecord> {
        self.mode_fetches.set(self.mode_fetches.get() + 1);
        self.modes.borrow().get(device_name).cloned()
    }

    fn commit_mode(&self, device_name: &str, mode: &ModeRecord) -> i32 {
        self.committed
            .borrow_mut()
            .push((device_name.to_string(), mode.clone()));

        let result = self.commit_result.get();
        if result == DISP_CHANGE_SUCCESSFUL {
            // An accepted commit becomes the device's live mode.
            self.modes
                .borrow_mut()
                .insert(device_name.to_string(), mode.clone());
        }
        result
    }

    fn device_name_for_window(&self, window: WindowHandle) -> Option<String> {
        self.windows.get(&window.0).cloned()
    }
}
