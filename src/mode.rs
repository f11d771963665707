use core::fmt;

#[cfg(windows)]
use windows::Win32::Graphics::Gdi::{
    DEVMODE_DISPLAY_ORIENTATION, DEVMODEW, DM_DISPLAYORIENTATION, DM_PELSHEIGHT, DM_PELSWIDTH,
};

/// The active graphics-mode record of a display device.
///
/// Only three fields are interpreted here: the native orientation code, the
/// width and the height. Everything else the OS put into the record
/// (frequency, color depth, position, ...) rides along opaquely and is handed
/// back verbatim on commit.
#[derive(Clone)]
pub struct ModeRecord {
    orientation_code: u32,
    width: u32,
    height: u32,
    #[cfg(windows)]
    native: DEVMODEW,
}

impl ModeRecord {
    /// Creates a mode record from its interpreted fields.
    ///
    /// On Windows the opaque remainder is zeroed; records fetched from the
    /// OS go through `from_devmode` instead and keep the full native record.
    pub fn new(orientation_code: u32, width: u32, height: u32) -> Self {
        Self {
            orientation_code,
            width,
            height,
            #[cfg(windows)]
            native: DEVMODEW::default(),
        }
    }

    /// The native `dmDisplayOrientation` code (0..=3 on a healthy system).
    pub fn orientation_code(&self) -> u32 {
        self.orientation_code
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_orientation_code(&mut self, code: u32) {
        self.orientation_code = code;
    }

    /// Exchanges width and height, for transitions that cross the
    /// portrait/landscape boundary.
    pub fn swap_dimensions(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
    }
}

#[cfg(windows)]
impl ModeRecord {
    /// Wraps a `DEVMODEW` fetched from the OS, keeping the full native
    /// record for pass-through on commit.
    pub fn from_devmode(native: DEVMODEW) -> Self {
        let orientation_code =
            unsafe { native.Anonymous1.Anonymous2.dmDisplayOrientation.0 };
        Self {
            orientation_code,
            width: native.dmPelsWidth,
            height: native.dmPelsHeight,
            native,
        }
    }

    /// Produces the native record to submit: the stored `DEVMODEW` with the
    /// interpreted fields written back and their field flags set.
    pub fn to_devmode(&self) -> DEVMODEW {
        let mut devmode = self.native;
        unsafe {
            devmode.Anonymous1.Anonymous2.dmDisplayOrientation =
                DEVMODE_DISPLAY_ORIENTATION(self.orientation_code);
        }
        devmode.dmPelsWidth = self.width;
        devmode.dmPelsHeight = self.height;
        devmode.dmFields |= DM_DISPLAYORIENTATION | DM_PELSWIDTH | DM_PELSHEIGHT;
        devmode
    }
}

impl fmt::Debug for ModeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeRecord")
            .field("orientation_code", &self.orientation_code)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ModeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} @ orientation code {}",
            self.width, self.height, self.orientation_code
        )
    }
}

impl PartialEq for ModeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.orientation_code == other.orientation_code
            && self.width == other.width
            && self.height == other.height
    }
}

impl Eq for ModeRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_dimensions() {
        let mut mode = ModeRecord::new(0, 1920, 1080);
        mode.swap_dimensions();
        assert_eq!(mode.width(), 1080);
        assert_eq!(mode.height(), 1920);
        mode.swap_dimensions();
        assert_eq!(mode.width(), 1920);
        assert_eq!(mode.height(), 1080);
    }
}
