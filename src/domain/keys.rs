//! Virtual key definitions
//!
//! Ref: https://docs.microsoft.com/en-us/windows/win32/inputdev/virtual-key-codes

use std::fmt;
use std::str::FromStr;

use crate::domain::error::KeyParseError;

/// A logical keyboard key with a fixed Win32 virtual-key code.
///
/// Closed enumeration; none of the defined keys require the
/// extended-key bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    Backspace,
    Tab,
    /// The Alt modifier (VK_MENU).
    Alt,
    Space,
    A,
    D,
    S,
    W,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    F5,
    F6,
    F7,
}

impl VirtualKey {
    /// Every key this tool can synthesize
    pub const ALL: &'static [VirtualKey] = &[
        VirtualKey::Backspace,
        VirtualKey::Tab,
        VirtualKey::Alt,
        VirtualKey::Space,
        VirtualKey::A,
        VirtualKey::D,
        VirtualKey::S,
        VirtualKey::W,
        VirtualKey::Numpad1,
        VirtualKey::Numpad2,
        VirtualKey::Numpad3,
        VirtualKey::Numpad4,
        VirtualKey::Numpad5,
        VirtualKey::Numpad6,
        VirtualKey::Numpad7,
        VirtualKey::Numpad8,
        VirtualKey::Numpad9,
        VirtualKey::F5,
        VirtualKey::F6,
        VirtualKey::F7,
    ];

    /// The Win32 virtual-key code
    pub const fn code(self) -> u16 {
        match self {
            VirtualKey::Backspace => 0x08,
            VirtualKey::Tab => 0x09,
            VirtualKey::Alt => 0x12,
            VirtualKey::Space => 0x20,
            VirtualKey::A => 0x41,
            VirtualKey::D => 0x44,
            VirtualKey::S => 0x53,
            VirtualKey::W => 0x57,
            VirtualKey::Numpad1 => 0x61,
            VirtualKey::Numpad2 => 0x62,
            VirtualKey::Numpad3 => 0x63,
            VirtualKey::Numpad4 => 0x64,
            VirtualKey::Numpad5 => 0x65,
            VirtualKey::Numpad6 => 0x66,
            VirtualKey::Numpad7 => 0x67,
            VirtualKey::Numpad8 => 0x68,
            VirtualKey::Numpad9 => 0x69,
            VirtualKey::F5 => 0x74,
            VirtualKey::F6 => 0x75,
            VirtualKey::F7 => 0x76,
        }
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VirtualKey::Backspace => "backspace",
            VirtualKey::Tab => "tab",
            VirtualKey::Alt => "alt",
            VirtualKey::Space => "space",
            VirtualKey::A => "a",
            VirtualKey::D => "d",
            VirtualKey::S => "s",
            VirtualKey::W => "w",
            VirtualKey::Numpad1 => "numpad1",
            VirtualKey::Numpad2 => "numpad2",
            VirtualKey::Numpad3 => "numpad3",
            VirtualKey::Numpad4 => "numpad4",
            VirtualKey::Numpad5 => "numpad5",
            VirtualKey::Numpad6 => "numpad6",
            VirtualKey::Numpad7 => "numpad7",
            VirtualKey::Numpad8 => "numpad8",
            VirtualKey::Numpad9 => "numpad9",
            VirtualKey::F5 => "f5",
            VirtualKey::F6 => "f6",
            VirtualKey::F7 => "f7",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for VirtualKey {
    type Err = KeyParseError;

    /// Parse a key name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "backspace" => Ok(VirtualKey::Backspace),
            "tab" => Ok(VirtualKey::Tab),
            "alt" => Ok(VirtualKey::Alt),
            "space" => Ok(VirtualKey::Space),
            "a" => Ok(VirtualKey::A),
            "d" => Ok(VirtualKey::D),
            "s" => Ok(VirtualKey::S),
            "w" => Ok(VirtualKey::W),
            "numpad1" => Ok(VirtualKey::Numpad1),
            "numpad2" => Ok(VirtualKey::Numpad2),
            "numpad3" => Ok(VirtualKey::Numpad3),
            "numpad4" => Ok(VirtualKey::Numpad4),
            "numpad5" => Ok(VirtualKey::Numpad5),
            "numpad6" => Ok(VirtualKey::Numpad6),
            "numpad7" => Ok(VirtualKey::Numpad7),
            "numpad8" => Ok(VirtualKey::Numpad8),
            "numpad9" => Ok(VirtualKey::Numpad9),
            "f5" => Ok(VirtualKey::F5),
            "f6" => Ok(VirtualKey::F6),
            "f7" => Ok(VirtualKey::F7),
            _ => Err(KeyParseError {
                input: s.to_string(),
            }),
        }
    }
}
