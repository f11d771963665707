//! A library to query and change the rotation of Windows display devices.
//!
//! The rotation logic works on a display's active graphics-mode record: the
//! orientation code is rewritten and, when the transition crosses the
//! portrait/landscape boundary, width and height are swapped before the
//! record is committed back through the display-configuration API.
//!
//! All OS calls go through the [`DisplayApi`] trait; [`Win32Api`] is the
//! real implementation on Windows, and tests inject a fake.

mod api;
pub mod device;
pub mod engine;
mod mode;
mod platforms;
mod types;

pub use api::{DISP_CHANGE_SUCCESSFUL, DeviceEntry, DisplayApi, disp_change_name};
pub use device::{
    DeviceError, MAX_DEVICE_PROBES, active_device_names, current_mode, device_name_for_window,
    resolve_device_name,
};
pub use engine::{
    RotationError, Transition, apply_orientation, apply_orientation_at, current_orientation,
    current_orientation_at, plan_transition,
};
pub use mode::ModeRecord;
pub use types::{Orientation, ParseOrientationError, WindowHandle};

#[cfg(windows)]
pub use platforms::windows::Win32Api;
