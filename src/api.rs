//! The boundary to the OS display-configuration facility.
//!
//! The native calls are consumed through the [`DisplayApi`] trait so the rest
//! of the crate never touches them directly; tests substitute a recording
//! fake, and [`crate::Win32Api`] is the real thing on Windows.

use crate::{ModeRecord, WindowHandle};

/// One slot of the display-device enumeration: the OS-assigned device name
/// plus the raw state flags for that slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    /// OS-assigned device name, e.g. `\\.\DISPLAY1`. Unique and stable while
    /// the device stays attached.
    pub name: String,
    /// Raw `DISPLAY_DEVICE` state flags; zero means the slot holds no usable
    /// device.
    pub state_flags: u32,
}

impl DeviceEntry {
    /// Whether the state flags indicate an active device (non-none).
    pub fn is_active(&self) -> bool {
        self.state_flags != 0
    }
}

/// The `DISP_CHANGE` code reported for an accepted mode change.
pub const DISP_CHANGE_SUCCESSFUL: i32 = 0;

/// Renders a raw `DISP_CHANGE` result code for diagnostics.
pub fn disp_change_name(code: i32) -> &'static str {
    match code {
        0 => "successful",
        1 => "restart required",
        -1 => "failed",
        -2 => "bad mode",
        -3 => "not updated",
        -4 => "bad flags",
        -5 => "bad param",
        -6 => "bad dualview",
        _ => "unrecognized",
    }
}

/// The native display-configuration surface, injected into the accessor and
/// engine.
///
/// Every method is a single blocking OS call. `Option` mirrors the native
/// found/not-found reporting; interpreting an absence as an error is the
/// caller's job.
pub trait DisplayApi {
    /// Enumerates the display device at `ordinal` (0-based, OS-defined
    /// order), or `None` when the slot reports no entry.
    fn device_at(&self, ordinal: u32) -> Option<DeviceEntry>;

    /// Fetches the currently active graphics mode for `device_name`, or
    /// `None` when the name is unknown to the OS or the query fails.
    fn current_mode(&self, device_name: &str) -> Option<ModeRecord>;

    /// Submits `mode` for `device_name`, requesting that the change be
    /// persisted, with no target window and no extra parameter block.
    /// Returns the raw `DISP_CHANGE` result code.
    fn commit_mode(&self, device_name: &str, mode: &ModeRecord) -> i32;

    /// Resolves the monitor the given window overlaps most (nearest monitor
    /// when none intersects) to its device name.
    fn device_name_for_window(&self, window: WindowHandle) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_state_flags_mean_inactive() {
        let entry = DeviceEntry {
            name: r"\\.\DISPLAY2".to_string(),
            state_flags: 0,
        };
        assert!(!entry.is_active());
    }

    #[test]
    fn disp_change_codes_have_names() {
        assert_eq!(disp_change_name(DISP_CHANGE_SUCCESSFUL), "successful");
        assert_eq!(disp_change_name(-2), "bad mode");
        assert_eq!(disp_change_name(42), "unrecognized");
    }
}
