use super::{Config, Keybind};
use crate::BaseCommand;
use std::path::PathBuf;
use tilecfg_core::models::{
    Bar, ClockOptions, Group, GroupBoxOptions, HighlightMethod, KeyboardLayoutOptions,
    LayoutConfig, LayoutTheme, Match, MatchField, MaxOptions, Palette, PolicyFlags, PromptOptions,
    Screen, StackOptions, SystrayOptions, Widget, WidgetDefaults, WindowNameOptions,
};

const AUTOSTART: &str = "~/.config/tilecfg/autostart.sh";
const TERMINAL: &str = "xterm";

fn palette() -> Palette {
    Palette::new()
        .with("bg", "#252932")
        .with("active", "#ebcb8b")
        .with("inactive", "#c0c5ce")
        .with("highlight", "#3b3f47")
        .with("focus", "#1ec4d9")
        .with("fg1", "#bf616a")
        .with("fg2", "#a3be8c")
}

/// The style shared by the themed layouts of the default configuration.
#[must_use]
pub fn layout_theme(colors: &Palette) -> LayoutTheme {
    LayoutTheme {
        border_focus: colors.get("focus").map(str::to_owned),
        ..LayoutTheme::default()
    }
}

fn rule(field: MatchField, pattern: &str) -> Match {
    Match::new(field, pattern).expect("hardcoded pattern is a valid regex; qed")
}

fn groups() -> Vec<Group> {
    let browser = Match::wm_class("Firefox")
        .and_then(|rule| rule.and_role("browser"))
        .expect("hardcoded pattern is a valid regex; qed");
    vec![
        Group::new("1", "1 \u{f120}")
            .with_matches(vec![rule(MatchField::WmClass, "XTerm")])
            .with_spawn(TERMINAL),
        Group::new("2", "2 DEV").with_matches(vec![rule(MatchField::WmClass, "code")]),
        Group::new("3", "3 WEB")
            .with_matches(vec![browser, rule(MatchField::WmClass, "transmission-qt")]),
        Group::new("4", "4 DOC").with_matches(vec![rule(MatchField::WmClass, "Xreader")]),
        Group::new("5", "5 VID").with_matches(vec![rule(MatchField::WmClass, "vlc")]),
    ]
}

fn float_rules() -> Vec<Match> {
    vec![
        rule(MatchField::WmClass, "confirm"),
        rule(MatchField::WmClass, "dialog"),
        rule(MatchField::WmClass, "download"),
        rule(MatchField::WmClass, "error"),
        rule(MatchField::WmClass, "file_progress"),
        rule(MatchField::WmClass, "notification"),
        rule(MatchField::WmClass, "splash"),
        rule(MatchField::WmClass, "toolbar"),
        rule(MatchField::WmClass, "confirmreset"), // gitk
        rule(MatchField::WmClass, "makebranch"),   // gitk
        rule(MatchField::WmClass, "maketag"),      // gitk
        rule(MatchField::Title, "branchdialog"),   // gitk
        rule(MatchField::Title, "pinentry"),       // GPG key password entry
        rule(MatchField::WmClass, "ssh-askpass"),  // ssh-askpass
    ]
}

fn screens(colors: &Palette) -> Vec<Screen> {
    let widgets = vec![
        Widget::GroupBox(GroupBoxOptions {
            active: colors.get_or("active", "#ffffff"),
            inactive: colors.get_or("inactive", "#404040"),
            highlight_color: colors.get_or("highlight", "#282828"),
            highlight_method: HighlightMethod::Line,
            borderwidth: 2,
            this_current_screen_border: colors.get_or("active", "#215578"),
            ..GroupBoxOptions::default()
        }),
        Widget::Prompt(PromptOptions::default()),
        Widget::WindowName(WindowNameOptions::default()),
        Widget::Systray(SystrayOptions::default()),
        Widget::KeyboardLayout(KeyboardLayoutOptions {
            configured_keyboards: vec!["us".to_owned(), "bg".to_owned()],
            foreground: colors.get_or("fg1", "#ffffff"),
            ..KeyboardLayoutOptions::default()
        }),
        Widget::Clock(ClockOptions {
            format: "%d-%m-%Y %a %I:%M %p".to_owned(),
            foreground: colors.get_or("fg2", "#ffffff"),
            ..ClockOptions::default()
        }),
    ];
    vec![Screen {
        top: None,
        bottom: Some(Bar {
            size: 32,
            background: colors.get("bg").map(str::to_owned),
            widgets,
        }),
    }]
}

impl Default for Config {
    fn default() -> Self {
        let colors = palette();
        let theme = layout_theme(&colors);

        let keybind = vec![
            // Mod + j/k => switch between windows in the current stack pane
            Keybind::new(BaseCommand::FocusWindowUp, &["modkey"], "j"),
            Keybind::new(BaseCommand::FocusWindowDown, &["modkey"], "k"),
            // Mod + space => focus the other pane(s) of the stack
            Keybind::new(BaseCommand::FocusNextStack, &["modkey"], "space"),
            // Mod + Enter => start a terminal
            Keybind::new(BaseCommand::Execute, &["modkey"], "Return").with_value(TERMINAL),
            // Mod + Tab => toggle between the layouts
            Keybind::new(BaseCommand::NextLayout, &["modkey"], "Tab"),
            // Mod + w => close the focused window
            Keybind::new(BaseCommand::CloseWindow, &["modkey"], "w"),
            // Mod + Ctrl + r => restart, reloading this configuration
            Keybind::new(BaseCommand::SoftReload, &["modkey", "Control"], "r"),
            // Mod + Ctrl + q => shut down
            Keybind::new(BaseCommand::Quit, &["modkey", "Control"], "q"),
            // Mod + r => run a command through the bar prompt
            Keybind::new(BaseCommand::SpawnPrompt, &["modkey"], "r"),
        ];

        // Max keeps its own defaults, only the stack takes the theme.
        let layouts = vec![
            LayoutConfig::Max(MaxOptions::default()),
            LayoutConfig::Stack(StackOptions {
                num_stacks: 2,
                ..StackOptions::from(&theme)
            }),
        ];

        let widget_defaults = WidgetDefaults {
            font: "font-awesome".to_owned(),
            fontsize: 16,
            padding: 4,
        };

        Self {
            modkey: "Mod4".to_owned(),
            log_level: "warn".to_owned(),
            autostart: Some(PathBuf::from(AUTOSTART)),
            flags: PolicyFlags::default(),
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            groups: groups(),
            layouts,
            screens: screens(&colors),
            float_rules: float_rules(),
            colors,
            mousebind: vec![],
            keybind,
        }
    }
}
