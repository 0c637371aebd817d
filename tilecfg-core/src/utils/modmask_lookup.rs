use bitflags::bitflags;
use serde::{de::Visitor, Deserialize, Serialize};

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}
bitflags! {
    /// Represents the state of the mouse buttons
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Button: u8 {
        /// Used as the zero value
        const Zero = 0;
        /// Main button (left click for right-handed)
        const Button1 = 1;
        /// Middle button (pressing the scroll wheel)
        const Button2 = 1 << 1;
        /// Secondary button (right click for right-handed)
        const Button3 = 1 << 2;
        /// Scroll wheel up
        const Button4 = 1 << 3;
        /// Scroll wheel down
        const Button5 = 1 << 4;
    }
}

/// Canonical names, in the order they are printed in a chord.
const MOD_NAMES: [(ModMask, &str); 6] = [
    (ModMask::Super, "Mod4"),
    (ModMask::Control, "Control"),
    (ModMask::Alt, "Mod1"),
    (ModMask::Shift, "Shift"),
    (ModMask::Mod3, "Mod3"),
    (ModMask::Mod5, "Mod5"),
];

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = ModMask::Zero;
    for s in keys {
        mask |= into_mod(s);
    }
    // clean the mask
    mask.remove(ModMask::NumLock);
    mask.intersection(
        ModMask::Shift
            | ModMask::Control
            | ModMask::Alt
            | ModMask::Mod3
            | ModMask::Super
            | ModMask::Mod5,
    )
}

/// Names that are not modifiers map to `ModMask::Zero`.
#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" | "Ctrl" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        // accepted, but `into_modmask` strips it: the lock state never takes part in a chord
        "Mod2" | "NumLock" => ModMask::NumLock,
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}

#[must_use]
pub fn is_modifier(key: &str) -> bool {
    key == "None" || into_mod(key) != ModMask::Zero
}

const BUTTON_NAMES: [(Button, &str); 5] = [
    (Button::Button1, "Button1"),
    (Button::Button2, "Button2"),
    (Button::Button3, "Button3"),
    (Button::Button4, "Button4"),
    (Button::Button5, "Button5"),
];

#[must_use]
pub fn into_button(button: &str) -> Option<Button> {
    BUTTON_NAMES
        .iter()
        .find(|(_, name)| *name == button)
        .map(|(button, _)| *button)
}

impl ModMask {
    /// Names of the set modifiers, in canonical order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        MOD_NAMES
            .iter()
            .filter(|(mask, _)| self.contains(*mask))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl std::fmt::Display for ModMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", names.join("+"))
        }
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = BUTTON_NAMES
            .iter()
            .find(|(button, _)| button == self)
            .map_or("None", |(_, name)| *name);
        write!(f, "{name}")
    }
}

// serde impls (derive is not working with the bitflags macro)

impl Serialize for ModMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.names())
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let names: Vec<String> = Deserialize::deserialize(deserializer)?;
        if let Some(unknown) = names.iter().find(|name| !is_modifier(name)) {
            return Err(serde::de::Error::custom(format!(
                "unknown modifier `{unknown}`"
            )));
        }
        Ok(into_modmask(&names))
    }
}

impl Serialize for Button {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Button {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ButtonVisitor;

        impl<'de> Visitor<'de> for ButtonVisitor {
            type Value = Button;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a mouse button name such as `Button1`")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                into_button(v).ok_or_else(|| E::custom(format!("unknown mouse button `{v}`")))
            }
        }

        deserializer.deserialize_str(ButtonVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numlock_and_unknown_names_are_dropped_from_the_mask() {
        let mask = into_modmask(&[
            "Mod4".to_owned(),
            "Mod2".to_owned(),
            "Hyper".to_owned(),
            "Shift".to_owned(),
        ]);
        assert_eq!(mask, ModMask::Super | ModMask::Shift);
    }

    #[test]
    fn aliases_map_to_the_same_modifier() {
        assert_eq!(into_mod("Super"), into_mod("Mod4"));
        assert_eq!(into_mod("Alt"), into_mod("Mod1"));
        assert_eq!(into_mod("Ctrl"), into_mod("Control"));
        assert!(is_modifier("None"));
        assert!(!is_modifier("Hyper"));
    }

    #[test]
    fn numlock_is_accepted_and_ignored_everywhere() {
        assert!(is_modifier("Mod2"));
        assert!(is_modifier("NumLock"));
        assert_eq!(
            into_modmask(&["Mod2".to_owned(), "Mod4".to_owned()]),
            ModMask::Super
        );
        let parsed: ModMask = serde_json::from_str(r#"["Mod2","Mod4"]"#).unwrap();
        assert_eq!(parsed, ModMask::Super);
    }

    #[test]
    fn chords_print_in_canonical_order() {
        let mask = ModMask::Shift | ModMask::Super | ModMask::Control;
        assert_eq!(mask.to_string(), "Mod4+Control+Shift");
        assert_eq!(ModMask::Zero.to_string(), "None");
    }

    #[test]
    fn modmask_serializes_as_names() {
        let mask = ModMask::Super | ModMask::Control;
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, r#"["Mod4","Control"]"#);
        let back: ModMask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
        assert!(serde_json::from_str::<ModMask>(r#"["Hyper"]"#).is_err());
    }
}
