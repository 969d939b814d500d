use super::*;

fn edges(tree: &FlowTree) -> Vec<(String, String)> {
    tree.edges()
}

fn pair(a: &str, b: &str) -> (String, String) {
    (a.to_string(), b.to_string())
}

// ─── measure ──────────────────────────────────────────────────────────────────

#[test]
fn test_measure_spaces() {
    assert_eq!(measure("    Node", None), (4, "Node"));
    assert_eq!(measure("Node", None), (0, "Node"));
}

#[test]
fn test_measure_keeps_trailing_whitespace() {
    assert_eq!(measure("  Node  ", None), (2, "Node  "));
    assert_eq!(measure("Node\r", None), (0, "Node\r"));
}

#[test]
fn test_measure_tab_counts_one_by_default() {
    assert_eq!(measure("\tNode", None), (1, "Node"));
    assert_eq!(measure(" \t Node", None), (3, "Node"));
}

#[test]
fn test_measure_tab_stops() {
    assert_eq!(measure("\tNode", Some(4)), (4, "Node"));
    assert_eq!(measure("  \tNode", Some(4)), (4, "Node"));
    assert_eq!(measure("\t\t Node", Some(4)), (9, "Node"));
}

#[test]
fn test_measure_blank_line() {
    assert_eq!(measure("   ", None), (3, ""));
    assert_eq!(measure("", None), (0, ""));
}

// ─── lines ────────────────────────────────────────────────────────────────────

#[test]
fn test_lines_skip_blank_by_default() {
    let cfg = IndentConfig::default();
    let got: Vec<(usize, usize, &str)> = lines("A\n\n  B\n   \n", &cfg)
        .map(|l| (l.line_no, l.depth, l.label))
        .collect();
    assert_eq!(got, vec![(0, 0, "A"), (2, 2, "B")]);
}

#[test]
fn test_lines_keep_blank() {
    let cfg = IndentConfig::default().with_blank_lines(BlankLines::Keep);
    let got: Vec<(usize, &str)> = lines("A\n\n", &cfg).map(|l| (l.depth, l.label)).collect();
    assert_eq!(got, vec![(0, "A"), (0, ""), (0, "")]);
}

// ─── parse ────────────────────────────────────────────────────────────────────

#[test]
fn test_parse_empty_input() {
    let tree = parse_indented("");
    assert!(tree.is_empty());
    assert_eq!(tree.edge_count(), 0);
}

#[test]
fn test_parse_single_line() {
    let tree = parse_indented("Only");
    assert_eq!(tree.labels(), vec!["Only"]);
    assert_eq!(tree.edge_count(), 0);
}

#[test]
fn test_parse_nested_tree() {
    let tree = parse_indented("Root\n  Child1\n  Child2\n    Grandchild\n");
    assert_eq!(tree.labels(), vec!["Root", "Child1", "Child2", "Grandchild"]);
    assert_eq!(
        edges(&tree),
        vec![
            pair("Root", "Child1"),
            pair("Root", "Child2"),
            pair("Child2", "Grandchild"),
        ]
    );
}

#[test]
fn test_parse_dedent_then_reindent() {
    let tree = parse_indented("A\n  B\n    C\n  D\n");
    assert_eq!(
        edges(&tree),
        vec![pair("A", "B"), pair("B", "C"), pair("A", "D")]
    );
}

#[test]
fn test_parse_jump_back_several_levels() {
    let tree = parse_indented("A\n B\n  C\n   D\nE\n F");
    assert_eq!(
        edges(&tree),
        vec![pair("A", "B"), pair("B", "C"), pair("C", "D"), pair("E", "F")]
    );
    assert_eq!(tree.roots(), vec!["A", "E"]);
}

#[test]
fn test_parse_uneven_indentation_uses_nearest_shallower_line() {
    // C dedents to depth 3, between A (0) and B (4): its parent is A.
    let tree = parse_indented("A\n    B\n   C\n");
    assert_eq!(edges(&tree), vec![pair("A", "B"), pair("A", "C")]);
}

#[test]
fn test_parse_indented_first_line_is_root() {
    let tree = parse_indented("    Deep\n  Shallow\nTop");
    assert_eq!(tree.roots(), vec!["Deep", "Shallow", "Top"]);
    assert_eq!(tree.edge_count(), 0);
}

#[test]
fn test_parse_blank_lines_do_not_break_nesting() {
    let tree = parse_indented("A\n\n  B\n  \n    C\n");
    assert_eq!(edges(&tree), vec![pair("A", "B"), pair("B", "C")]);
}

#[test]
fn test_parse_keep_blank_lines_reproduces_empty_label_node() {
    let parser = IndentParser::new(IndentConfig::default().with_blank_lines(BlankLines::Keep));
    let tree = parser.parse("A\n  B\n");
    // Trailing newline yields a final empty line at depth 0: a root "".
    assert_eq!(tree.labels(), vec!["A", "B", ""]);
    assert_eq!(edges(&tree), vec![pair("A", "B")]);
    assert_eq!(tree.roots(), vec!["A", ""]);
}

#[test]
fn test_parse_duplicate_labels_share_a_node() {
    let tree = parse_indented("A\n  X\nB\n  X\n");
    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.parents("X"), vec!["A", "B"]);
}

#[test]
fn test_parse_tabs_with_tab_width() {
    let parser = IndentParser::new(IndentConfig::default().with_tab_width(Some(4)));
    // Tab (→4) and four spaces are siblings once tabs are expanded.
    let tree = parser.parse("A\n\tB\n    C\n");
    assert_eq!(edges(&tree), vec![pair("A", "B"), pair("A", "C")]);
}

#[test]
fn test_parse_tabs_raw_count() {
    // Raw counting: the tab is depth 1, four spaces are depth 4 → C nests under B.
    let tree = parse_indented("A\n\tB\n    C\n");
    assert_eq!(edges(&tree), vec![pair("A", "B"), pair("B", "C")]);
}

#[test]
fn test_measure_zero_tab_width_counts_raw() {
    assert_eq!(measure("\tNode", Some(0)), (1, "Node"));
    assert_eq!(measure(" \t Node", Some(0)), (3, "Node"));
}

#[test]
fn test_parse_zero_tab_width() {
    let parser = IndentParser::new(IndentConfig::default().with_tab_width(Some(0)));
    assert_eq!(parser.config.tab_width, None);
    let tree = parser.parse("A\n\tB\n");
    assert_eq!(edges(&tree), vec![pair("A", "B")]);
}
