//! Entity availability, both the overall verdict and per-platform detail.

use std::ffi::CStr;

use clang_sys::{CXCursor, CXPlatformAvailability, CXVersion};

use crate::string;

/// Whether an entity may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityKind {
    /// Usable without restriction.
    Available,
    /// Usable, but deprecated.
    Deprecated,
    /// Not usable.
    NotAvailable,
    /// Usable, but not accessible from the current translation unit.
    NotAccessible,
}

impl AvailabilityKind {
    pub(crate) fn from_raw(raw: clang_sys::CXAvailabilityKind) -> Self {
        match raw {
            clang_sys::CXAvailability_Available => Self::Available,
            clang_sys::CXAvailability_Deprecated => Self::Deprecated,
            clang_sys::CXAvailability_NotAvailable => Self::NotAvailable,
            clang_sys::CXAvailability_NotAccessible => Self::NotAccessible,
            other => panic!("unsupported CXAvailabilityKind: {other}"),
        }
    }
}

/// A three-part version number from an availability attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// The major component.
    pub major: u32,
    /// The minor component, zero when unwritten.
    pub minor: u32,
    /// The subminor component, zero when unwritten.
    pub subminor: u32,
}

impl Version {
    /// Converts a native version, `None` when no version was written.
    pub(crate) fn from_raw(raw: CXVersion) -> Option<Self> {
        if raw.Major < 0 {
            return None;
        }
        let part = |value: i32| u32::try_from(value).unwrap_or(0);
        Some(Self {
            major: part(raw.Major),
            minor: part(raw.Minor),
            subminor: part(raw.Subminor),
        })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.subminor)
    }
}

/// Availability of an entity on one named platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformAvailability {
    /// The platform name, e.g. `ios` or `macos`.
    pub platform: String,
    /// The version the entity appeared in.
    pub introduced: Option<Version>,
    /// The version the entity was deprecated in.
    pub deprecated: Option<Version>,
    /// The version the entity was removed in.
    pub obsoleted: Option<Version>,
    /// Whether the entity is unavailable on this platform outright.
    pub unavailable: bool,
    /// A message to show alongside deprecation or unavailability warnings.
    pub message: Option<String>,
}

/// The full availability story for an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    /// Whether the entity is deprecated on all platforms.
    pub always_deprecated: bool,
    /// The message attached to an unconditional deprecation.
    pub deprecation_message: Option<String>,
    /// Whether the entity is unavailable on all platforms.
    pub always_unavailable: bool,
    /// The message attached to an unconditional unavailability.
    pub unavailability_message: Option<String>,
    /// Per-platform availability attributes.
    pub platforms: Vec<PlatformAvailability>,
}

/// An entity rarely carries attributes for more than a couple of platforms;
/// a fixed buffer of this size avoids a sizing round-trip.
const PLATFORM_BUFFER: usize = 10;

// The CXStrings inside each CXPlatformAvailability belong to the entry and
// are released together by clang_disposeCXPlatformAvailability, so they must
// be copied without an individual dispose.
fn borrowed_string(raw: clang_sys::CXString) -> Option<String> {
    let ptr = unsafe { clang_sys::clang_getCString(raw) };
    if ptr.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    if text.is_empty() { None } else { Some(text) }
}

pub(crate) fn for_cursor(raw: CXCursor) -> Availability {
    let mut always_deprecated = 0;
    let mut deprecation_message = clang_sys::CXString {
        data: std::ptr::null(),
        private_flags: 0,
    };
    let mut always_unavailable = 0;
    let mut unavailability_message = clang_sys::CXString {
        data: std::ptr::null(),
        private_flags: 0,
    };
    let mut buffer: [CXPlatformAvailability; PLATFORM_BUFFER] = unsafe { std::mem::zeroed() };
    let reported = unsafe {
        clang_sys::clang_getCursorPlatformAvailability(
            raw,
            &mut always_deprecated,
            &mut deprecation_message,
            &mut always_unavailable,
            &mut unavailability_message,
            buffer.as_mut_ptr(),
            PLATFORM_BUFFER as i32,
        )
    };
    let filled = usize::try_from(reported).unwrap_or(0).min(PLATFORM_BUFFER);
    let platforms = buffer[..filled]
        .iter_mut()
        .map(|entry| {
            let platform = PlatformAvailability {
                platform: borrowed_string(entry.Platform).unwrap_or_default(),
                introduced: Version::from_raw(entry.Introduced),
                deprecated: Version::from_raw(entry.Deprecated),
                obsoleted: Version::from_raw(entry.Obsoleted),
                unavailable: entry.Unavailable != 0,
                message: borrowed_string(entry.Message),
            };
            unsafe { clang_sys::clang_disposeCXPlatformAvailability(entry) };
            platform
        })
        .collect();
    Availability {
        always_deprecated: always_deprecated != 0,
        deprecation_message: string::to_string_opt(deprecation_message)
            .filter(|message| !message.is_empty()),
        always_unavailable: always_unavailable != 0,
        unavailability_message: string::to_string_opt(unavailability_message)
            .filter(|message| !message.is_empty()),
        platforms,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(clang_sys::CXAvailability_Available, AvailabilityKind::Available)]
    #[case(clang_sys::CXAvailability_Deprecated, AvailabilityKind::Deprecated)]
    #[case(clang_sys::CXAvailability_NotAvailable, AvailabilityKind::NotAvailable)]
    #[case(clang_sys::CXAvailability_NotAccessible, AvailabilityKind::NotAccessible)]
    fn availability_kind_maps_every_tag(
        #[case] raw: clang_sys::CXAvailabilityKind,
        #[case] expected: AvailabilityKind,
    ) {
        assert_eq!(AvailabilityKind::from_raw(raw), expected);
    }

    #[test]
    fn absent_versions_become_none() {
        let raw = CXVersion {
            Major: -1,
            Minor: -1,
            Subminor: -1,
        };
        assert_eq!(Version::from_raw(raw), None);
    }

    #[test]
    fn unwritten_components_default_to_zero() {
        let raw = CXVersion {
            Major: 10,
            Minor: -1,
            Subminor: -1,
        };
        let version = Version::from_raw(raw);
        assert_eq!(
            version,
            Some(Version {
                major: 10,
                minor: 0,
                subminor: 0,
            })
        );
        assert_eq!(version.map(|v| v.to_string()), Some("10.0.0".into()));
    }
}
