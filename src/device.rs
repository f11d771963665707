//! Mode Accessor: resolves devices and fetches their active graphics mode.

use thiserror::Error;

use crate::{DeviceEntry, DisplayApi, ModeRecord, WindowHandle};

/// Upper bound for the sequential device probe. The OS does not report the
/// device count up front, so enumeration walks ordinals until this ceiling.
pub const MAX_DEVICE_PROBES: u32 = 64;

/// Error type for the device module
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("No active display device at ordinal {0}")]
    OrdinalOutOfRange(u32),
    #[error("Display device `{0}` is unknown or reported no current mode")]
    ModeUnavailable(String),
    #[error("Window handle has no associated monitor")]
    MonitorLookup,
}

type Result<T> = std::result::Result<T, DeviceError>;

/// Iterates the names of all currently active display devices, in
/// enumeration order. Lazy and restartable; slots whose state flags are none
/// are skipped.
pub fn active_device_names<A: DisplayApi>(api: &A) -> impl Iterator<Item = String> + '_ {
    (0..MAX_DEVICE_PROBES).filter_map(move |ordinal| {
        api.device_at(ordinal)
            .filter(DeviceEntry::is_active)
            .map(|entry| entry.name)
    })
}

/// Returns the name of the `ordinal`-th active display device (0-based,
/// enumeration order).
pub fn resolve_device_name<A: DisplayApi>(api: &A, ordinal: u32) -> Result<String> {
    active_device_names(api)
        .nth(ordinal as usize)
        .ok_or(DeviceError::OrdinalOutOfRange(ordinal))
}

/// Fetches the currently active graphics mode for `device_name`, straight
/// from the OS. No caching: the OS state can change out-of-band, so every
/// decision starts from a fresh record.
pub fn current_mode<A: DisplayApi>(api: &A, device_name: &str) -> Result<ModeRecord> {
    let mode = api
        .current_mode(device_name)
        .ok_or_else(|| DeviceError::ModeUnavailable(device_name.to_string()))?;
    log::debug!("Current mode for {device_name}: {mode}");
    Ok(mode)
}

/// Returns the device name of the monitor the given window overlaps most,
/// falling back to the nearest monitor when none intersects.
pub fn device_name_for_window<A: DisplayApi>(api: &A, window: WindowHandle) -> Result<String> {
    if window.is_null() {
        return Err(DeviceError::MonitorLookup);
    }
    api.device_name_for_window(window)
        .ok_or(DeviceError::MonitorLookup)
}
