//! Scan-code resolution port interface

/// Port for translating virtual-key codes to hardware scan codes.
///
/// Some receiving applications inspect the scan code field even when
/// only the virtual-key path is logically used, so every non-unicode
/// event resolves its scan code before submission.
pub trait ScanCodeResolver: Send + Sync {
    /// Translate a virtual-key code to the corresponding scan code.
    fn resolve(&self, virtual_key: u16) -> u16;
}

/// Blanket implementation for boxed resolver types
impl ScanCodeResolver for Box<dyn ScanCodeResolver> {
    fn resolve(&self, virtual_key: u16) -> u16 {
        self.as_ref().resolve(virtual_key)
    }
}
