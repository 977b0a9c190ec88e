//! Keyboard event value object and flag bits

use std::ops::BitOr;

/// Flag bits carried by a synthetic keyboard event.
///
/// The values mirror the Win32 KEYEVENTF_* constants so the Windows
/// adapter can pass them through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEventFlags(u32);

impl KeyEventFlags {
    /// No flags set: a plain key-down event.
    pub const NONE: Self = Self(0);

    /// The key uses the extended scan-code range (right-side modifiers,
    /// navigation cluster). Not set by any key in the defined set.
    pub const EXTENDED_KEY: Self = Self(0x0001);

    /// Marks a release; absence means press.
    pub const KEY_UP: Self = Self(0x0002);

    /// Inject a Unicode code unit, bypassing virtual-key and scan-code
    /// translation entirely.
    pub const UNICODE: Self = Self(0x0004);

    /// The scan code field is authoritative instead of the virtual key.
    /// Not set by this crate, which always supplies a virtual key.
    pub const SCAN_CODE: Self = Self(0x0008);

    /// The raw flag bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for KeyEventFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One synthetic keyboard event.
///
/// Constructed immediately before submission and discarded after; it
/// owns no resources and has no identity beyond the single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Target virtual-key code
    pub virtual_key: u16,
    /// Hardware scan code, resolved before submission
    pub scan_code: u16,
    /// Flag bits (press/release, extended, unicode, scan-code)
    pub flags: KeyEventFlags,
}

impl KeyboardEvent {
    /// Whether this event releases the key rather than pressing it
    pub const fn is_release(&self) -> bool {
        self.flags.contains(KeyEventFlags::KEY_UP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits_mirror_the_win32_constants() {
        assert_eq!(KeyEventFlags::NONE.bits(), 0);
        assert_eq!(KeyEventFlags::EXTENDED_KEY.bits(), 0x0001);
        assert_eq!(KeyEventFlags::KEY_UP.bits(), 0x0002);
        assert_eq!(KeyEventFlags::UNICODE.bits(), 0x0004);
        assert_eq!(KeyEventFlags::SCAN_CODE.bits(), 0x0008);
    }

    #[test]
    fn flags_combine_with_bitor() {
        let flags = KeyEventFlags::KEY_UP | KeyEventFlags::EXTENDED_KEY;
        assert_eq!(flags.bits(), 0x0003);
        assert!(flags.contains(KeyEventFlags::KEY_UP));
        assert!(flags.contains(KeyEventFlags::EXTENDED_KEY));
        assert!(!flags.contains(KeyEventFlags::UNICODE));
    }

    #[test]
    fn default_flags_are_a_press() {
        let flags = KeyEventFlags::default();
        assert_eq!(flags, KeyEventFlags::NONE);
        assert!(!flags.contains(KeyEventFlags::KEY_UP));
    }

    #[test]
    fn is_release_reads_the_key_up_bit() {
        let press = KeyboardEvent {
            virtual_key: 0x57,
            scan_code: 0x11,
            flags: KeyEventFlags::NONE,
        };
        let release = KeyboardEvent {
            flags: KeyEventFlags::KEY_UP,
            ..press
        };
        assert!(!press.is_release());
        assert!(release.is_release());
    }
}
