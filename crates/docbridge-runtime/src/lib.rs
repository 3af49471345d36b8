#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod discovery;
mod launcher;
mod store;

pub use discovery::{
    DriveLetterDiscoverer, HomeMirrorDiscoverer, VolumeDiscoverer, platform_discoverer,
};
pub use launcher::NativeLauncher;
pub use store::JsonRootsStore;

#[cfg(test)]
use tempfile as _;
