use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything that can go wrong while turning a configuration into a snapshot.
///
/// Every variant names the entry that caused it, so a single error is enough
/// for the user to find the offending line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Group #{0} has an empty name")]
    EmptyGroupName(usize),
    #[error("Group `{0}` is declared more than once")]
    DuplicateGroup(String),
    #[error("Group name `{0}` is not a valid key symbol, the switch-to-group binding cannot be generated")]
    InvalidGroupKey(String),
    #[error("Multiple actions bound to {chord}: {first} and {second}")]
    DuplicateBinding {
        chord: String,
        first: String,
        second: String,
    },
    #[error("Key `{key}` of binding {entry} is not a valid key symbol")]
    InvalidKey { entry: String, key: String },
    #[error("Invalid key binding {entry}: {reason}")]
    InvalidBinding { entry: String, reason: String },
    #[error("Modifier `{modifier}` of binding {entry} is not valid")]
    InvalidModifier { entry: String, modifier: String },
    #[error("Mouse button `{button}` of binding {entry} is not valid")]
    InvalidButton { entry: String, button: String },
    #[error("Multiple mouse actions bound to {0}")]
    DuplicateMouseBinding(String),
    #[error("Floating rule {0} is declared more than once")]
    DuplicateFloatRule(String),
    #[error("Match rule without any criteria would match every window")]
    EmptyMatch,
    #[error("Invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("At least one layout must be configured")]
    NoLayouts,
    #[error("Layout #{index} ({name}): {reason}")]
    InvalidLayout {
        index: usize,
        name: &'static str,
        reason: String,
    },
    #[error("Widget #{index} ({name}) on screen {screen}: {reason}")]
    InvalidWidget {
        screen: usize,
        index: usize,
        name: &'static str,
        reason: String,
    },
    #[error("Bar on screen {screen}: {reason}")]
    InvalidBar { screen: usize, reason: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Startup script `{0}` exited with {1}")]
    ScriptFailed(String, std::process::ExitStatus),
}
