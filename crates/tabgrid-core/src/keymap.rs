//! Key-Binding Tables & Remap Files
//!
//! Per-mode maps from [`KeyBinding`] to action name, with last-write-wins
//! override semantics, plus the line-oriented remap-file parser.
//!
//! # Remap grammar
//!
//! ```text
//! " full-line comment
//! nmap <C-s> save          " inline comment
//! map  x     clear_cell    " bare map: Normal and Visual
//! imap <CR>  switch_to_normal
//! vmap Y     y             " key-to-key: resolves through the default table
//! ```
//!
//! Unrecognized top-level commands are silently skipped. A malformed map type
//! or unparsable key notation on a recognized `map` line is recorded as a
//! structured diagnostic without aborting the rest of the file.

use crate::editor::Mode;
use crate::key::{KeyBinding, parse_notation};
use std::collections::HashMap;

/// Per-mode key-binding tables. Later binds for an identical `(mode, key)`
/// pair overwrite earlier ones.
#[derive(Debug, Clone, Default)]
pub struct KeyBindingConfig {
    maps: HashMap<Mode, HashMap<KeyBinding, String>>,
}

impl KeyBindingConfig {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default tables for all four modes.
    pub fn defaults() -> Self {
        let mut cfg = Self::new();

        let normal: &[(&str, &str)] = &[
            ("h", "move_left"),
            ("j", "move_down"),
            ("k", "move_up"),
            ("l", "move_right"),
            ("<Left>", "move_left"),
            ("<Down>", "move_down"),
            ("<Up>", "move_up"),
            ("<Right>", "move_right"),
            ("<C-h>", "move_left_fast"),
            ("<C-j>", "move_down_fast"),
            ("<C-k>", "move_up_fast"),
            ("<C-l>", "move_right_fast"),
            ("<PageUp>", "move_up_fast"),
            ("<PageDown>", "move_down_fast"),
            ("0", "move_row_start"),
            ("<Home>", "move_row_start"),
            ("$", "move_row_end"),
            ("<End>", "move_row_end"),
            ("g", "move_top"),
            ("G", "move_bottom"),
            ("i", "switch_to_insert"),
            ("a", "switch_to_insert_after"),
            ("v", "switch_to_visual"),
            ("V", "switch_to_visual_line"),
            ("<C-v>", "switch_to_visual_block"),
            (":", "start_ex_command"),
            ("/", "start_search"),
            ("n", "search_next"),
            ("N", "search_prev"),
            ("x", "clear_cell"),
            ("<Del>", "clear_cell"),
            ("y", "yank_selection"),
            ("d", "delete_row"),
            ("D", "delete_column"),
            ("p", "paste_after"),
            ("P", "paste_before"),
            ("u", "undo"),
            ("<C-r>", "redo"),
            ("o", "insert_row_below"),
            ("O", "insert_row_above"),
            ("[", "insert_column_left"),
            ("]", "insert_column_right"),
            ("s", "sort_asc"),
            ("S", "sort_desc"),
            ("=", "align_columns"),
            ("z", "scroll_center"),
            ("<Tab>", "next_tab"),
            ("<S-Tab>", "prev_tab"),
        ];

        let visual: &[(&str, &str)] = &[
            ("h", "move_left"),
            ("j", "move_down"),
            ("k", "move_up"),
            ("l", "move_right"),
            ("<Left>", "move_left"),
            ("<Down>", "move_down"),
            ("<Up>", "move_up"),
            ("<Right>", "move_right"),
            ("0", "move_row_start"),
            ("$", "move_row_end"),
            ("g", "move_top"),
            ("G", "move_bottom"),
            ("v", "switch_to_visual"),
            ("V", "switch_to_visual_line"),
            ("<C-v>", "switch_to_visual_block"),
            ("y", "yank_selection"),
            ("d", "delete_selection"),
            ("x", "delete_selection"),
            ("<Del>", "delete_selection"),
            ("p", "paste_after"),
            ("<Esc>", "switch_to_normal"),
        ];

        let insert: &[(&str, &str)] = &[
            ("<Esc>", "switch_to_normal"),
            ("<CR>", "switch_to_normal"),
        ];

        let command: &[(&str, &str)] = &[
            ("<Esc>", "switch_to_normal"),
            ("<CR>", "commit_command"),
        ];

        for (notation, action) in normal {
            cfg.bind_notation(Mode::Normal, notation, action);
        }
        for (notation, action) in visual {
            cfg.bind_notation(Mode::Visual, notation, action);
        }
        for (notation, action) in insert {
            cfg.bind_notation(Mode::Insert, notation, action);
        }
        for (notation, action) in command {
            cfg.bind_notation(Mode::Command, notation, action);
        }
        cfg
    }

    /// Bind `binding` to `action` in `mode`, overwriting any earlier binding.
    pub fn bind(&mut self, mode: Mode, binding: KeyBinding, action: impl Into<String>) {
        self.maps
            .entry(mode)
            .or_default()
            .insert(binding, action.into());
    }

    fn bind_notation(&mut self, mode: Mode, notation: &str, action: &str) {
        if let Some(binding) = parse_notation(notation) {
            self.bind(mode, binding, action);
        } else {
            debug_assert!(false, "bad built-in binding notation: {notation}");
        }
    }

    /// The action bound to `binding` in `mode`, if any.
    pub fn resolve(&self, mode: Mode, binding: &KeyBinding) -> Option<&str> {
        self.maps
            .get(&mode)
            .and_then(|m| m.get(binding))
            .map(String::as_str)
    }

    /// Number of bindings registered for `mode`.
    pub fn binding_count(&self, mode: Mode) -> usize {
        self.maps.get(&mode).map_or(0, HashMap::len)
    }

    /// Parse a remap file and apply its bindings over this configuration.
    ///
    /// Key-to-key remaps resolve through the built-in default table of the
    /// target mode (not through earlier remaps). Returns the non-fatal
    /// diagnostics collected while parsing; the rest of the file is always
    /// processed.
    pub fn apply_remap(&mut self, text: &str) -> Vec<RemapDiagnostic> {
        let defaults = Self::defaults();
        let (entries, diagnostics) = parse_remap(text, &defaults);
        for (mode, binding, action) in entries {
            self.bind(mode, binding, action);
        }
        diagnostics
    }
}

/// A non-fatal remap-file parse problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapDiagnostic {
    /// 1-based line number.
    pub line: usize,
    /// The raw line text.
    pub text: String,
    /// What went wrong.
    pub message: String,
}

/// Parse a remap file into `(mode, binding, action)` entries plus diagnostics.
///
/// `defaults` is the table used to resolve key-to-key remaps: if the action
/// token parses as key notation *and* that key has a default binding in the
/// target mode, the default's action name is substituted; otherwise the token
/// is taken verbatim as an action name.
pub fn parse_remap(
    text: &str,
    defaults: &KeyBindingConfig,
) -> (Vec<(Mode, KeyBinding, String)>, Vec<RemapDiagnostic>) {
    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line);
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };

        let modes = match map_modes(command) {
            MapCommand::NotAMap => continue, // unrecognized commands are skipped
            MapCommand::Malformed => {
                diagnostics.push(RemapDiagnostic {
                    line: line_no,
                    text: raw_line.to_string(),
                    message: format!("unknown map type '{command}'"),
                });
                continue;
            }
            MapCommand::Map(modes) => modes,
        };

        let (Some(key_tok), Some(action_tok)) = (tokens.next(), tokens.next()) else {
            diagnostics.push(RemapDiagnostic {
                line: line_no,
                text: raw_line.to_string(),
                message: "expected '<key> <action>' after map command".to_string(),
            });
            continue;
        };

        let Some(binding) = parse_notation(key_tok) else {
            diagnostics.push(RemapDiagnostic {
                line: line_no,
                text: raw_line.to_string(),
                message: format!("unparsable key notation '{key_tok}'"),
            });
            continue;
        };

        for mode in modes {
            let action = resolve_action_token(action_tok, mode, defaults);
            entries.push((mode, binding, action));
        }
    }

    (entries, diagnostics)
}

enum MapCommand {
    NotAMap,
    Malformed,
    Map(Vec<Mode>),
}

fn map_modes(command: &str) -> MapCommand {
    let Some(prefix) = command.strip_suffix("map") else {
        return MapCommand::NotAMap;
    };
    match prefix {
        // Bare `map` applies to Normal and Visual.
        "" => MapCommand::Map(vec![Mode::Normal, Mode::Visual]),
        "n" => MapCommand::Map(vec![Mode::Normal]),
        "i" => MapCommand::Map(vec![Mode::Insert]),
        "v" => MapCommand::Map(vec![Mode::Visual]),
        _ => MapCommand::Malformed,
    }
}

fn resolve_action_token(token: &str, mode: Mode, defaults: &KeyBindingConfig) -> String {
    if let Some(binding) = parse_notation(token)
        && let Some(action) = defaults.resolve(mode, &binding)
    {
        return action.to_string();
    }
    token.to_string()
}

/// Cut the line at a `"` that starts a token (at line start or after
/// whitespace). The grammar has no quoted strings, so any token-initial quote
/// begins a comment.
fn strip_comment(line: &str) -> &str {
    let mut prev_is_space = true;
    for (i, ch) in line.char_indices() {
        if ch == '"' && prev_is_space {
            return &line[..i];
        }
        prev_is_space = ch.is_whitespace();
    }
    line
}
