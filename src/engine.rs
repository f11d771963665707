//! Orientation Transition Engine: computes and commits the mode record that
//! realizes a requested display orientation.

use thiserror::Error;

use crate::{
    DISP_CHANGE_SUCCESSFUL, DisplayApi, ModeRecord, Orientation, device, device::DeviceError,
    disp_change_name,
};

/// Error type for the engine module
#[derive(Error, Debug)]
pub enum RotationError {
    #[error("Error querying the display device")]
    Device(#[from] DeviceError),
    #[error("The display driver rejected the mode change; returned code: {0}")]
    ApplyFailed(i32),
    #[error("Native orientation code {0} is outside the expected 0..=3 range")]
    InvalidOrientationCode(u32),
}

impl RotationError {
    /// The raw `DISP_CHANGE` code of a rejected commit, for callers that
    /// need more detail than success/failure.
    pub fn disp_change_code(&self) -> Option<i32> {
        match self {
            RotationError::ApplyFailed(code) => Some(*code),
            _ => None,
        }
    }
}

type Result<T> = std::result::Result<T, RotationError>;

/// Outcome of planning a transition against the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The device already has the target orientation; nothing to commit.
    Unchanged,
    /// The corrected record to hand to the OS.
    Commit(ModeRecord),
}

/// Computes the mode record that realizes `target` starting from `current`.
///
/// The width/height decision is derived purely from the aspect-class
/// transition: {Default, Rotate180} keep the original aspect, {Rotate90,
/// Rotate270} the rotated one. Crossing the boundary always swaps width and
/// height; staying within a class never does. The actual width/height values
/// are deliberately not consulted.
pub fn plan_transition(current: &ModeRecord, target: Orientation) -> Result<Transition> {
    let code = current.orientation_code();
    let from =
        Orientation::from_code(code).ok_or(RotationError::InvalidOrientationCode(code))?;

    if from == target {
        return Ok(Transition::Unchanged);
    }

    let mut next = current.clone();
    next.set_orientation_code(target.code());
    if from.is_rotated_aspect() != target.is_rotated_aspect() {
        next.swap_dimensions();
    }
    Ok(Transition::Commit(next))
}

/// Returns the current orientation of the named display device.
pub fn current_orientation<A: DisplayApi>(api: &A, device_name: &str) -> Result<Orientation> {
    let mode = device::current_mode(api, device_name)?;
    let code = mode.orientation_code();
    Orientation::from_code(code).ok_or(RotationError::InvalidOrientationCode(code))
}

/// Returns the current orientation of the `ordinal`-th active display device.
pub fn current_orientation_at<A: DisplayApi>(api: &A, ordinal: u32) -> Result<Orientation> {
    let name = device::resolve_device_name(api, ordinal)?;
    current_orientation(api, &name)
}

/// Rotates the named display device to `target`.
///
/// Fetches the live mode, computes the corrected record and submits it with
/// persistence requested. A target equal to the current orientation succeeds
/// without any OS commit call. The fetch-mutate-commit sequence holds no
/// lock; concurrent writers to the same device can lose updates and must
/// serialize externally.
pub fn apply_orientation<A: DisplayApi>(
    api: &A,
    device_name: &str,
    target: Orientation,
) -> Result<()> {
    let current = device::current_mode(api, device_name)?;

    let next = match plan_transition(&current, target)? {
        Transition::Unchanged => {
            log::debug!("{device_name} already at {target}, skipping commit");
            return Ok(());
        }
        Transition::Commit(next) => next,
    };

    log::debug!("Committing mode for {device_name}: {next}");
    let code = api.commit_mode(device_name, &next);
    if code == DISP_CHANGE_SUCCESSFUL {
        log::info!("Rotated {device_name} to {target}");
        Ok(())
    } else {
        log::error!(
            "Mode change for {device_name} rejected: {} (code {code})",
            disp_change_name(code)
        );
        Err(RotationError::ApplyFailed(code))
    }
}

/// Rotates the `ordinal`-th active display device to `target`. Ordinal
/// resolution happens first; when it fails, no mode state is touched.
pub fn apply_orientation_at<A: DisplayApi>(
    api: &A,
    ordinal: u32,
    target: Orientation,
) -> Result<()> {
    let name = device::resolve_device_name(api, ordinal)?;
    apply_orientation(api, &name, target)
}
