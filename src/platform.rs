//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Add-tech shortcut display
/// - macOS: "Cmd+T"
/// - Linux/Windows: "Ctrl+T"
#[cfg(target_os = "macos")]
pub const ADD_TECH_SHORTCUT: &str = "Cmd+T";

#[cfg(not(target_os = "macos"))]
pub const ADD_TECH_SHORTCUT: &str = "Ctrl+T";

/// Remove-tech shortcut display
#[cfg(target_os = "macos")]
pub const REMOVE_TECH_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const REMOVE_TECH_SHORTCUT: &str = "Ctrl+R";
