//! Key Model & Notation Mini-Language
//!
//! A [`KeyBinding`] is a `(key, modifier-set)` pair compared by value and used
//! as a map key. The textual notation maps to bindings bidirectionally:
//!
//! - single characters: letters are case-sensitive (`G` means `g` + Shift);
//!   a fixed table maps shifted symbols (`$`, `%`, `{`, `}`, ...) to their
//!   base key plus Shift
//! - bracket notation `<mod[-mod...]-key>` with modifiers `C` (Control),
//!   `S` (Shift), and `A`/`M` (Alt)
//! - named keys: `Space`, `CR`/`Enter`/`Return`, `Esc`/`Escape`, `Tab`,
//!   `BS`/`Backspace`, `Del`/`Delete`, arrows, `Home`/`End`/`PageUp`/
//!   `PageDown`/`Insert`, `F1`-`F12`
//!
//! Unparsable notation yields `None`, never an error.
//!
//! # Example
//!
//! ```rust
//! use tabgrid_core::{Key, KeyBinding, Modifiers, parse_notation, to_notation};
//!
//! let ctrl_r = parse_notation("<C-r>").unwrap();
//! assert_eq!(ctrl_r, KeyBinding::new(Key::Char('r'), Modifiers::CTRL));
//!
//! let dollar = parse_notation("$").unwrap();
//! assert_eq!(dollar, KeyBinding::new(Key::Char('4'), Modifiers::SHIFT));
//!
//! assert_eq!(parse_notation(&to_notation(&ctrl_r)), Some(ctrl_r));
//! ```

bitflags::bitflags! {
    /// Keyboard modifier flags, combinable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b001;
        /// Control key.
        const CTRL  = 0b010;
        /// Alt (Meta) key.
        const ALT   = 0b100;
    }
}

/// A physical key, platform-agnostic.
///
/// `Char` carries the *base* (unshifted) character: hosts normalize `G` to
/// `Char('g')` + [`Modifiers::SHIFT`] and `$` to `Char('4')` + Shift the same
/// way the notation parser does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key (base character, see type docs).
    Char(char),
    /// Enter / Return.
    Enter,
    /// Escape.
    Esc,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Insert.
    Insert,
    /// Function key `F1`-`F12` (1-based).
    F(u8),
}

/// A key press with its modifier set; the unit of key-map lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// The key.
    pub key: Key,
    /// Held modifiers.
    pub mods: Modifiers,
}

impl KeyBinding {
    /// Create a binding.
    pub fn new(key: Key, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// A plain character key with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch), Modifiers::empty())
    }

    /// The text this binding produces when typed, if any.
    ///
    /// Applies the Shift modifier to letters and to the shifted-symbol table;
    /// `Space` maps to `' '`. Ctrl/Alt combinations and named keys produce
    /// nothing.
    pub fn to_char(&self) -> Option<char> {
        if self.mods.intersects(Modifiers::CTRL | Modifiers::ALT) {
            return None;
        }
        let Key::Char(base) = self.key else {
            return None;
        };
        if !self.mods.contains(Modifiers::SHIFT) {
            return Some(base);
        }
        if base.is_ascii_lowercase() {
            return Some(base.to_ascii_uppercase());
        }
        shifted_symbol_for_base(base)
    }
}

/// US-layout shifted symbols and their base keys.
const SHIFTED_SYMBOLS: &[(char, char)] = &[
    ('!', '1'),
    ('@', '2'),
    ('#', '3'),
    ('$', '4'),
    ('%', '5'),
    ('^', '6'),
    ('&', '7'),
    ('*', '8'),
    ('(', '9'),
    (')', '0'),
    ('_', '-'),
    ('+', '='),
    ('{', '['),
    ('}', ']'),
    ('|', '\\'),
    (':', ';'),
    ('"', '\''),
    ('<', ','),
    ('>', '.'),
    ('?', '/'),
    ('~', '`'),
];

fn base_for_shifted_symbol(symbol: char) -> Option<char> {
    SHIFTED_SYMBOLS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, b)| *b)
}

fn shifted_symbol_for_base(base: char) -> Option<char> {
    SHIFTED_SYMBOLS
        .iter()
        .find(|(_, b)| *b == base)
        .map(|(s, _)| *s)
}

fn named_key(name: &str) -> Option<Key> {
    let key = match name.to_ascii_lowercase().as_str() {
        "space" => Key::Char(' '),
        "cr" | "enter" | "return" => Key::Enter,
        "esc" | "escape" => Key::Esc,
        "tab" => Key::Tab,
        "bs" | "backspace" => Key::Backspace,
        "del" | "delete" => Key::Delete,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "insert" => Key::Insert,
        _ => {
            let rest = name.strip_prefix(['f', 'F'])?;
            let n: u8 = rest.parse().ok()?;
            if (1..=12).contains(&n) {
                Key::F(n)
            } else {
                return None;
            }
        }
    };
    Some(key)
}

fn named_key_notation(key: Key) -> Option<&'static str> {
    let name = match key {
        Key::Char(' ') => "Space",
        Key::Enter => "CR",
        Key::Esc => "Esc",
        Key::Tab => "Tab",
        Key::Backspace => "BS",
        Key::Delete => "Del",
        Key::Up => "Up",
        Key::Down => "Down",
        Key::Left => "Left",
        Key::Right => "Right",
        Key::Home => "Home",
        Key::End => "End",
        Key::PageUp => "PageUp",
        Key::PageDown => "PageDown",
        Key::Insert => "Insert",
        _ => return None,
    };
    Some(name)
}

/// Parse a single visible character into a binding: uppercase letters and
/// shifted symbols imply Shift over their base key.
fn parse_single_char(ch: char) -> KeyBinding {
    if ch.is_ascii_uppercase() {
        return KeyBinding::new(Key::Char(ch.to_ascii_lowercase()), Modifiers::SHIFT);
    }
    if let Some(base) = base_for_shifted_symbol(ch) {
        return KeyBinding::new(Key::Char(base), Modifiers::SHIFT);
    }
    KeyBinding::char(ch)
}

/// Parse key notation into a binding. Returns `None` for anything unparsable.
pub fn parse_notation(notation: &str) -> Option<KeyBinding> {
    let notation = notation.trim();
    if notation.is_empty() {
        return None;
    }

    // Single visible character (bare `<` and `>` are the shifted , and . keys).
    let mut chars = notation.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(parse_single_char(ch));
    }

    // Bracket form: <key>, <mod-key>, <mod-mod-key>.
    let inner = notation.strip_prefix('<')?.strip_suffix('>')?;
    if inner.is_empty() {
        return None;
    }

    let parts: Vec<&str> = inner.split('-').collect();
    let (mod_parts, key_part) = parts.split_at(parts.len() - 1);
    let key_part = key_part[0];

    let mut mods = Modifiers::empty();
    for part in mod_parts {
        match part.to_ascii_lowercase().as_str() {
            "c" => mods |= Modifiers::CTRL,
            "s" => mods |= Modifiers::SHIFT,
            "a" | "m" => mods |= Modifiers::ALT,
            _ => return None,
        }
    }

    if let Some(key) = named_key(key_part) {
        return Some(KeyBinding::new(key, mods));
    }

    let mut chars = key_part.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        let base = parse_single_char(ch);
        return Some(KeyBinding::new(base.key, base.mods | mods));
    }

    None
}

/// Render a binding back to notation. Inverse of [`parse_notation`] for every
/// representable binding: `parse_notation(&to_notation(b)) == Some(b)`.
pub fn to_notation(binding: &KeyBinding) -> String {
    // Shift-only character bindings render as the shifted character itself.
    if binding.mods == Modifiers::SHIFT
        && let Key::Char(base) = binding.key
    {
        if base.is_ascii_lowercase() {
            return base.to_ascii_uppercase().to_string();
        }
        if let Some(symbol) = shifted_symbol_for_base(base) {
            return symbol.to_string();
        }
    }
    if binding.mods.is_empty()
        && let Key::Char(ch) = binding.key
        && ch != ' '
    {
        return ch.to_string();
    }

    let mut out = String::from("<");
    if binding.mods.contains(Modifiers::CTRL) {
        out.push_str("C-");
    }
    if binding.mods.contains(Modifiers::SHIFT) {
        out.push_str("S-");
    }
    if binding.mods.contains(Modifiers::ALT) {
        out.push_str("A-");
    }
    match binding.key {
        Key::Char(ch) if named_key_notation(binding.key).is_none() => out.push(ch),
        Key::F(n) => out.push_str(&format!("F{}", n)),
        key => out.push_str(named_key_notation(key).unwrap_or("?")),
    }
    out.push('>');
    out
}
