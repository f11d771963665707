use core::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Display orientation (rotation), matching the native `dmDisplayOrientation`
/// codes 0 through 3 one-to-one.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// 0 degrees.
    #[default]
    Default = 0,
    /// 90 degrees.
    Rotate90 = 1,
    /// 180 degrees.
    Rotate180 = 2,
    /// 270 degrees.
    Rotate270 = 3,
}

impl Orientation {
    /// Convert from a native `dmDisplayOrientation` code.
    ///
    /// Returns `None` for codes outside 0..=3; the OS never emits others for
    /// this field, so callers treat that as a broken contract rather than
    /// falling back to a default.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Orientation::Default),
            1 => Some(Orientation::Rotate90),
            2 => Some(Orientation::Rotate180),
            3 => Some(Orientation::Rotate270),
            _ => None,
        }
    }

    /// Convert to the native `dmDisplayOrientation` code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Rotation angle in degrees.
    pub fn degrees(self) -> u32 {
        self.code() * 90
    }

    /// Whether this orientation presents the rotated aspect (90 or 270
    /// degrees). Orientations in the same aspect class share width/height;
    /// a transition across classes swaps them.
    pub fn is_rotated_aspect(self) -> bool {
        matches!(self, Orientation::Rotate90 | Orientation::Rotate270)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Default => write!(f, "default"),
            Orientation::Rotate90 => write!(f, "90"),
            Orientation::Rotate180 => write!(f, "180"),
            Orientation::Rotate270 => write!(f, "270"),
        }
    }
}

/// Errors that occur while parsing an orientation from a string
#[derive(Error, Debug)]
pub enum ParseOrientationError {
    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" | "0" => Ok(Orientation::Default),
            "90" | "rotate90" => Ok(Orientation::Rotate90),
            "180" | "rotate180" => Ok(Orientation::Rotate180),
            "270" | "rotate270" => Ok(Orientation::Rotate270),
            _ => Err(ParseOrientationError::UnknownOrientation(s.to_string())),
        }
    }
}

/// A native window handle, used to look up the monitor a window overlaps.
///
/// Carries the raw `HWND` value so the type stays usable on every platform
/// and in tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    /// A handle with no associated native surface.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_codes_map_one_to_one() {
        for code in 0..=3 {
            let orientation = Orientation::from_code(code).unwrap();
            assert_eq!(orientation.code(), code);
        }
        assert_eq!(Orientation::from_code(4), None);
        assert_eq!(Orientation::from_code(u32::MAX), None);
    }

    #[test]
    fn aspect_classes() {
        assert!(!Orientation::Default.is_rotated_aspect());
        assert!(!Orientation::Rotate180.is_rotated_aspect());
        assert!(Orientation::Rotate90.is_rotated_aspect());
        assert!(Orientation::Rotate270.is_rotated_aspect());
    }

    #[test]
    fn parses_degrees_and_names() {
        assert_eq!(
            "default".parse::<Orientation>().unwrap(),
            Orientation::Default
        );
        assert_eq!("90".parse::<Orientation>().unwrap(), Orientation::Rotate90);
        assert_eq!(
            "Rotate180".parse::<Orientation>().unwrap(),
            Orientation::Rotate180
        );
        assert_eq!(
            "270".parse::<Orientation>().unwrap(),
            Orientation::Rotate270
        );
        assert!("45".parse::<Orientation>().is_err());
    }
}
