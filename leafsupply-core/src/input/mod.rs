//! Panel inputs: keypad scan, release debounce and encoder rotation

pub mod button;
pub mod release;
pub mod rotation;
pub mod scanner;

pub use button::{
    button_label, padded_label, write_label, Button, UnknownButton, LABEL_WIDTH, UNKNOWN_LABEL,
};
pub use release::{ReleaseDebounce, ReleaseState, ReleaseStatus, ReleaseTimeout};
pub use rotation::{apply_rotation, RotationOutcome};
pub use scanner::{scan_keys, ScanReport};
