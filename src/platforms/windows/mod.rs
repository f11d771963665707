//! Win32 implementation of [`DisplayApi`] over the classic display-settings
//! API (`EnumDisplayDevicesW` / `EnumDisplaySettingsW` /
//! `ChangeDisplaySettingsExW`).

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    CDS_UPDATEREGISTRY, ChangeDisplaySettingsExW, DEVMODEW, DISPLAY_DEVICEW, ENUM_CURRENT_SETTINGS,
    EnumDisplayDevicesW, EnumDisplaySettingsW, GetMonitorInfoW, MONITOR_DEFAULTTONEAREST,
    MONITORINFO, MONITORINFOEXW, MonitorFromWindow,
};
use windows::core::PCWSTR;

use crate::{DeviceEntry, DisplayApi, ModeRecord, WindowHandle};

/// The real OS collaborator. Stateless; every method is one blocking Win32
/// call.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Api;

/// Decodes a fixed-size UTF-16 buffer up to its nul terminator.
fn wide_to_string(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

/// Encodes a nul-terminated UTF-16 string for a `PCWSTR` argument. The
/// returned buffer must outlive the call it is passed to.
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

impl DisplayApi for Win32Api {
    fn device_at(&self, ordinal: u32) -> Option<DeviceEntry> {
        let mut device = DISPLAY_DEVICEW {
            cb: std::mem::size_of::<DISPLAY_DEVICEW>() as u32,
            ..Default::default()
        };

        let found =
            unsafe { EnumDisplayDevicesW(PCWSTR::null(), ordinal, &mut device, 0) }.as_bool();
        if !found {
            return None;
        }

        Some(DeviceEntry {
            name: wide_to_string(&device.DeviceName),
            state_flags: device.StateFlags.0,
        })
    }

    fn current_mode(&self, device_name: &str) -> Option<ModeRecord> {
        let name = to_wide(device_name);
        let mut devmode = DEVMODEW {
            dmSize: std::mem::size_of::<DEVMODEW>() as u16,
            ..Default::default()
        };

        let found = unsafe {
            EnumDisplaySettingsW(PCWSTR(name.as_ptr()), ENUM_CURRENT_SETTINGS, &mut devmode)
        }
        .as_bool();

        found.then(|| ModeRecord::from_devmode(devmode))
    }

    fn commit_mode(&self, device_name: &str, mode: &ModeRecord) -> i32 {
        let name = to_wide(device_name);
        let devmode = mode.to_devmode();

        // Persist the change (registry), no target window, no extra
        // parameter block.
        let result = unsafe {
            ChangeDisplaySettingsExW(
                PCWSTR(name.as_ptr()),
                Some(std::ptr::from_ref(&devmode)),
                None,
                CDS_UPDATEREGISTRY,
                None,
            )
        };
        result.0
    }

    fn device_name_for_window(&self, window: WindowHandle) -> Option<String> {
        if window.is_null() {
            return None;
        }
        let hwnd = HWND(window.0 as *mut core::ffi::c_void);

        let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
        if monitor.is_invalid() {
            return None;
        }

        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

        let found = unsafe {
            GetMonitorInfoW(monitor, &mut info.monitorInfo as *mut MONITORINFO)
        }
        .as_bool();

        found.then(|| wide_to_string(&info.szDevice))
    }
}
