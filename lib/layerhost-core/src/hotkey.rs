use serde::de::Visitor;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::Display;

/// A pressed key with modifier state, as delivered by the embedding shell.
/// Key names are lowercase ("escape", "enter", "e").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl KeyPress {
    pub fn of(key: &str) -> Self {
        Self {
            key: key.trim().to_ascii_lowercase(),
            ..Default::default()
        }
    }
}

/// A hotkey pattern like "ctrl+shift+e" or a bare "escape".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyCombo {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl KeyCombo {
    /// Case and order insensitive; the last non-modifier token wins as the key.
    pub fn parse(s: &str) -> Self {
        let mut combo = KeyCombo::default();
        for part in s.split('+') {
            let part_lower = part.trim().to_ascii_lowercase();
            match part_lower.as_str() {
                "ctrl" => combo.ctrl = true,
                "shift" => combo.shift = true,
                "alt" => combo.alt = true,
                "super" | "win" | "cmd" => combo.super_key = true,
                "" => {}
                _ => combo.key = part_lower,
            }
        }
        combo
    }

    pub fn matches(&self, press: &KeyPress) -> bool {
        self.key == press.key
            && self.ctrl == press.ctrl
            && self.shift == press.shift
            && self.alt == press.alt
            && self.super_key == press.super_key
    }

    /// The press that would trigger this combo. Used by the demos to
    /// synthesize input.
    pub fn to_press(&self) -> KeyPress {
        KeyPress {
            key: self.key.clone(),
            ctrl: self.ctrl,
            shift: self.shift,
            alt: self.alt,
            super_key: self.super_key,
        }
    }
}

impl Serialize for KeyCombo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for KeyCombo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ComboVisitor;
        impl<'de> Visitor<'de> for ComboVisitor {
            type Value = KeyCombo;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hotkey string like 'ctrl+shift+e'")
            }
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(KeyCombo::parse(v))
            }
        }
        deserializer.deserialize_str(ComboVisitor)
    }
}

impl Display for KeyCombo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();

        // Modifiers first (in standard order)
        if self.ctrl {
            parts.push("ctrl");
        }
        if self.shift {
            parts.push("shift");
        }
        if self.alt {
            parts.push("alt");
        }
        if self.super_key {
            parts.push("super");
        }
        if !self.key.is_empty() {
            parts.push(&self.key);
        }
        write!(f, "{}", parts.join("+"))
    }
}

impl Into<KeyCombo> for &str {
    fn into(self) -> KeyCombo {
        KeyCombo::parse(self)
    }
}

/// Table of combo to handler registrations. Registrations are explicit;
/// nothing is inferred from handler names or context shape.
pub struct HotkeyMap<Ctx> {
    entries: Vec<(KeyCombo, Box<dyn FnMut(&mut Ctx)>)>,
}

impl<Ctx> HotkeyMap<Ctx> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `handler` for a combo given as text, e.g. "escape".
    pub fn add<F>(&mut self, combo: &str, handler: F)
    where
        F: FnMut(&mut Ctx) + 'static,
    {
        self.add_combo(KeyCombo::parse(combo), handler);
    }

    pub fn add_combo<F>(&mut self, combo: KeyCombo, handler: F)
    where
        F: FnMut(&mut Ctx) + 'static,
    {
        self.entries.push((combo, Box::new(handler)));
    }

    /// Run the first handler whose combo matches. Returns whether one ran.
    pub fn handle(&mut self, ctx: &mut Ctx, press: &KeyPress) -> bool {
        for (combo, handler) in self.entries.iter_mut() {
            if combo.matches(press) {
                handler(ctx);
                return true;
            }
        }
        false
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Ctx> Default for HotkeyMap<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Parse Tests ===

    #[test]
    fn test_parse_bare_key() {
        let combo = KeyCombo::parse("escape");
        assert_eq!(combo.key, "escape");
        assert!(!combo.ctrl && !combo.shift && !combo.alt && !combo.super_key);
    }

    #[test]
    fn test_parse_with_modifiers() {
        let combo = KeyCombo::parse("ctrl+shift+e");
        assert_eq!(combo.key, "e");
        assert!(combo.ctrl);
        assert!(combo.shift);
        assert!(!combo.alt);
    }

    #[test]
    fn test_parse_is_case_and_whitespace_tolerant() {
        let combo = KeyCombo::parse(" Ctrl + E ");
        assert_eq!(combo.key, "e");
        assert!(combo.ctrl);
    }

    #[test]
    fn test_parse_super_aliases() {
        assert!(KeyCombo::parse("super+k").super_key);
        assert!(KeyCombo::parse("win+k").super_key);
        assert!(KeyCombo::parse("cmd+k").super_key);
    }

    #[test]
    fn test_display_round_trips() {
        let combo = KeyCombo::parse("shift+ctrl+e");
        assert_eq!(combo.to_string(), "ctrl+shift+e");
        assert_eq!(KeyCombo::parse(&combo.to_string()), combo);
    }

    // === Match Tests ===

    #[test]
    fn test_matches_requires_exact_modifiers() {
        let combo = KeyCombo::parse("ctrl+e");
        let plain = KeyPress::of("e");
        let mut ctrl = KeyPress::of("e");
        ctrl.ctrl = true;

        assert!(!combo.matches(&plain));
        assert!(combo.matches(&ctrl));
    }

    #[test]
    fn test_press_from_combo_matches_it() {
        let combo = KeyCombo::parse("alt+enter");
        assert!(combo.matches(&combo.to_press()));
    }

    // === Map Tests ===

    #[test]
    fn test_map_dispatches_to_matching_handler() {
        let mut map: HotkeyMap<u32> = HotkeyMap::new();
        map.add("escape", |count| *count += 1);
        map.add("ctrl+k", |count| *count += 10);

        let mut count = 0;
        assert!(map.handle(&mut count, &KeyPress::of("escape")));
        assert!(!map.handle(&mut count, &KeyPress::of("x")));
        assert!(map.handle(&mut count, &KeyCombo::parse("ctrl+k").to_press()));
        assert_eq!(count, 11);
    }

    // === Serde Tests ===

    #[test]
    fn test_yaml_round_trip() {
        let combo = KeyCombo::parse("ctrl+shift+p");
        let yaml = serde_yaml::to_string(&combo).unwrap();
        assert_eq!(yaml.trim(), "ctrl+shift+p");

        let back: KeyCombo = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, combo);
    }
}
