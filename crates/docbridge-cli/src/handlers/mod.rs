//! Command handlers that delegate to `AppCore`.
//!
//! Handlers are thin: build the core request from CLI input, call `AppCore`,
//! format the result for the terminal. They hold no resolution logic.

pub mod paths;
pub mod resolve;
pub mod roots;

use docbridge_core::{RootDirectory, RootOrigin};

/// Print roots as a numbered list, or a hint when there are none.
pub(crate) fn print_roots(roots: &[RootDirectory]) {
    if roots.is_empty() {
        println!("No roots configured.");
        println!("Use 'docbridge roots add <PATH>' or 'docbridge roots discover'.");
        return;
    }

    for (i, root) in roots.iter().enumerate() {
        println!("{:>3}. {}", i + 1, root_label(root));
    }
}

/// Display form of a root; roots found by discovery this run are tagged.
fn root_label(root: &RootDirectory) -> String {
    match root.origin() {
        RootOrigin::Configured => root.to_string(),
        RootOrigin::Discovered => format!("{root} (discovered)"),
    }
}
