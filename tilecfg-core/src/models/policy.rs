use serde::{Deserialize, Serialize};

/// What happens when an application asks for its window to be activated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusOnActivation {
    /// Always focus the window
    Focus,
    /// Focus it if it is on the current group, otherwise mark it urgent
    #[default]
    Smart,
    Urgent,
    Never,
}

/// Independent scalar settings read directly by the runtime.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyFlags {
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    /// Honour fullscreen requests from applications
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Let applications minimize themselves
    pub auto_minimize: bool,
    /// `None` keeps the generated group bindings instead of a dynamic binder
    pub dgroups_key_binder: Option<String>,
    /// Name reported through `_NET_WM_NAME` on the supporting window
    pub wmname: String,
}

impl Default for PolicyFlags {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            dgroups_key_binder: None,
            // We are lying here. Nobody really reads this string except Java
            // UI toolkits, and the usual advice when a Java app does not lay
            // out correctly is to set it to a WM on Java's hardcoded list of
            // non-reparenting WMs. So we claim to be one by default.
            //
            // LG3D maximizes the irony: it is a 3D non-reparenting WM written
            // in Java that happens to be on that list.
            wmname: "LG3D".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_report_lg3d_and_focus_smartly() {
        let flags = PolicyFlags::default();
        assert_eq!(flags.wmname, "LG3D");
        assert_eq!(flags.focus_on_window_activation, FocusOnActivation::Smart);
        assert!(flags.follow_mouse_focus && flags.auto_fullscreen);
        assert!(!flags.bring_front_click && !flags.cursor_warp);
        assert!(flags.dgroups_key_binder.is_none());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let flags: PolicyFlags = serde_json::from_str(r#"{"wmname":"qtile"}"#).unwrap();
        assert_eq!(flags.wmname, "qtile");
        assert!(flags.auto_minimize);
        assert!(serde_json::from_str::<PolicyFlags>(r#"{"wm_name":"qtile"}"#).is_err());
    }
}
