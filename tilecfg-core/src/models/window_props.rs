use serde::{Deserialize, Serialize};

/// The window metadata match rules are evaluated against.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProps {
    /// Instance half of `WM_CLASS` in X11
    pub res_name: Option<String>,
    /// Class half of `WM_CLASS` in X11
    pub res_class: Option<String>,
    /// `_NET_WM_NAME`, falling back to `WM_NAME`
    pub name: Option<String>,
    /// `WM_WINDOW_ROLE`
    pub role: Option<String>,
}

impl WindowProps {
    #[must_use]
    pub fn with_class(class: &str) -> Self {
        Self {
            res_name: Some(class.to_lowercase()),
            res_class: Some(class.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Self {
            name: Some(name.to_owned()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_role(role: &str) -> Self {
        Self {
            role: Some(role.to_owned()),
            ..Self::default()
        }
    }
}
