use tabgrid_core::{
    Key, KeyBinding, KeyBindingConfig, Mode, Modifiers, parse_notation, parse_remap, to_notation,
};

#[test]
fn notation_round_trip_for_representative_bindings() {
    let cases = [
        KeyBinding::char('h'),                                   // plain letter
        KeyBinding::new(Key::Char('v'), Modifiers::CTRL),        // ctrl+letter
        KeyBinding::new(Key::Char('4'), Modifiers::SHIFT),       // shifted digit ($)
        KeyBinding::new(Key::Esc, Modifiers::empty()),           // named special key
        KeyBinding::new(Key::PageDown, Modifiers::empty()),
        KeyBinding::new(Key::Tab, Modifiers::SHIFT),
        KeyBinding::new(Key::F(7), Modifiers::CTRL | Modifiers::ALT),
    ];
    for binding in cases {
        let notation = to_notation(&binding);
        assert_eq!(
            parse_notation(&notation),
            Some(binding),
            "round trip failed via {notation:?}"
        );
    }
}

#[test]
fn notation_aliases_agree() {
    for (a, b) in [
        ("<CR>", "<Enter>"),
        ("<Enter>", "<Return>"),
        ("<Esc>", "<Escape>"),
        ("<BS>", "<Backspace>"),
        ("<Del>", "<Delete>"),
        ("<C-x>", "<c-x>"),
        ("<A-x>", "<M-x>"),
    ] {
        assert_eq!(parse_notation(a), parse_notation(b), "{a} vs {b}");
        assert!(parse_notation(a).is_some());
    }
}

#[test]
fn later_identical_mapping_overrides_earlier() {
    let mut cfg = KeyBindingConfig::defaults();
    let diags = cfg.apply_remap("nmap <F2> sort_asc\nnmap <F2> sort_desc\n");
    assert!(diags.is_empty());
    let f2 = KeyBinding::new(Key::F(2), Modifiers::empty());
    assert_eq!(cfg.resolve(Mode::Normal, &f2), Some("sort_desc"));
}

#[test]
fn unrecognized_lines_never_produce_diagnostics() {
    let mut cfg = KeyBindingConfig::defaults();
    let diags = cfg.apply_remap(
        "set expandtab\n\
         syntax enable\n\
         \" pure comment\n\
         \n\
         colorscheme grid\n",
    );
    assert!(diags.is_empty());
}

#[test]
fn malformed_key_notation_is_one_diagnostic_and_no_binding() {
    let mut cfg = KeyBindingConfig::defaults();
    let normal_before = cfg.binding_count(Mode::Normal);
    let diags = cfg.apply_remap("nmap <C-X-9> move_left\n");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].line, 1);
    assert_eq!(diags[0].text, "nmap <C-X-9> move_left");
    assert_eq!(cfg.binding_count(Mode::Normal), normal_before);
}

#[test]
fn diagnostics_carry_line_numbers_across_file() {
    let mut cfg = KeyBindingConfig::defaults();
    let diags = cfg.apply_remap(
        "nmap h move_left\n\
         zmap h move_left\n\
         nmap q\n\
         nmap <Nope> undo\n",
    );
    let lines: Vec<usize> = diags.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![2, 3, 4]);
    // The valid first line still registered.
    assert_eq!(
        cfg.resolve(Mode::Normal, &KeyBinding::char('h')),
        Some("move_left")
    );
}

#[test]
fn key_to_key_remap_resolves_target_mode_default() {
    let defaults = KeyBindingConfig::defaults();
    // In Visual mode 'd' is delete_selection; in Normal it is delete_row. A
    // bare map resolves per target mode.
    let (entries, diags) = parse_remap("map <Space> d\n", &defaults);
    assert!(diags.is_empty());
    assert_eq!(entries.len(), 2);
    let space = KeyBinding::new(Key::Char(' '), Modifiers::empty());
    assert!(entries.contains(&(Mode::Normal, space, "delete_row".to_string())));
    assert!(entries.contains(&(Mode::Visual, space, "delete_selection".to_string())));
}

#[test]
fn action_token_without_default_binding_is_verbatim() {
    let defaults = KeyBindingConfig::defaults();
    // 'Q' parses as key notation but has no default Normal binding, so the
    // token is taken verbatim as an action name.
    let (entries, diags) = parse_remap("nmap e Q\n", &defaults);
    assert!(diags.is_empty());
    assert_eq!(entries, vec![(Mode::Normal, KeyBinding::char('e'), "Q".to_string())]);
}

#[test]
fn inline_comment_only_at_token_start() {
    let mut cfg = KeyBindingConfig::defaults();
    let diags = cfg.apply_remap("nmap e undo \" rest is comment\n");
    assert!(diags.is_empty());
    assert_eq!(
        cfg.resolve(Mode::Normal, &KeyBinding::char('e')),
        Some("undo")
    );
}
