//! Windows SendInput sink adapter

use std::mem;

use windows_sys::Win32::Foundation::GetLastError;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    MapVirtualKeyW, SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, MAPVK_VK_TO_VSC,
};

use crate::application::ports::{InjectionError, ScanCodeResolver, SyntheticInputSink};
use crate::domain::KeyboardEvent;

/// Sink submitting events through the Win32 `SendInput` entry point.
///
/// Also backs the scan-code resolver port via `MapVirtualKeyW`.
pub struct SendInputSink;

impl SendInputSink {
    /// Create a new SendInput sink
    pub fn new() -> Self {
        Self
    }
}

impl Default for SendInputSink {
    fn default() -> Self {
        Self::new()
    }
}

fn to_input_record(event: &KeyboardEvent) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: event.virtual_key,
                wScan: event.scan_code,
                dwFlags: event.flags.bits(),
                // The OS fills the timestamp in; the extra-info slot is unused.
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

impl SyntheticInputSink for SendInputSink {
    fn submit(&self, events: &[KeyboardEvent]) -> Result<usize, InjectionError> {
        let records: Vec<INPUT> = events.iter().map(to_input_record).collect();

        // SAFETY: `records` stays alive for the duration of the call and
        // cbSize matches the INPUT record layout.
        let queued = unsafe {
            SendInput(
                records.len() as u32,
                records.as_ptr(),
                mem::size_of::<INPUT>() as i32,
            )
        } as usize;

        if queued < events.len() {
            // SAFETY: reads the calling thread's last-error slot.
            let code = unsafe { GetLastError() };
            return Err(InjectionError::Failed {
                submitted: events.len(),
                accepted: queued,
                code,
            });
        }

        Ok(queued)
    }
}

impl ScanCodeResolver for SendInputSink {
    fn resolve(&self, virtual_key: u16) -> u16 {
        // SAFETY: pure translation call, no pointer arguments.
        unsafe { MapVirtualKeyW(u32::from(virtual_key), MAPVK_VK_TO_VSC) as u16 }
    }
}
