use ductus_core::{ContextId, FixedFontSize, Kerner, Sequence};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn fixtures_root() -> PathBuf {
    workspace_root().join("fixtures").join("text")
}

fn fixture_lines(name: &str) -> Vec<String> {
    let path = fixtures_root().join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn kern_all(lines: &[String]) -> Kerner {
    let mut kerner = Kerner::new().unwrap();
    for (idx, line) in lines.iter().enumerate() {
        kerner.kern(ContextId(idx as u32), line, &FixedFontSize(16.0));
    }
    kerner
}

fn assert_sequence_invariants(seq: &Sequence) {
    let positions: Vec<usize> = seq.nodes.iter().map(|n| n.position).collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "positions not increasing for {:?}: {positions:?}",
        seq.original
    );

    let kernable = seq.kernable_nodes().count();
    assert_eq!(
        seq.pairs.len(),
        kernable.saturating_sub(1),
        "pair count mismatch for {:?}",
        seq.original
    );
    for pair in &seq.pairs {
        assert!(!seq.nodes[pair.left].is_tag());
        assert!(!seq.nodes[pair.right].is_tag());
        assert!(pair.left < pair.right);
        assert_eq!(seq.nodes[pair.left].kerning, pair.kerning);
        assert!(pair.kerning >= 0.0);
    }
}

#[test]
fn fixtures_keep_sequence_invariants() {
    for name in ["headings.html", "edge_cases.html"] {
        let lines = fixture_lines(name);
        assert!(!lines.is_empty(), "no lines in fixture {name}");
        let kerner = kern_all(&lines);
        assert_eq!(kerner.sequences().count(), lines.len());
        for seq in kerner.sequences() {
            assert_sequence_invariants(seq);
        }
    }
}

#[test]
fn well_formed_fixtures_round_trip_to_decoded_text() {
    let lines = fixture_lines("headings.html");
    let kerner = kern_all(&lines);
    for (seq, line) in kerner.sequences().zip(&lines) {
        assert_eq!(seq.plain_text(), htmlize::unescape(line.as_str()));
    }
}

#[test]
fn fixtures_render_identically_on_repeat() {
    let lines = fixture_lines("headings.html");
    let first = kern_all(&lines);
    let second = kern_all(&lines);
    for idx in 0..lines.len() {
        let ctx = ContextId(idx as u32);
        assert_eq!(first.render(ctx), second.render(ctx));
    }
}

#[test]
fn edge_case_fixture_details() {
    let lines = fixture_lines("edge_cases.html");
    let kerner = kern_all(&lines);

    let br = kerner.sequence(ContextId(0)).unwrap();
    assert_eq!(br.nodes.len(), 1);
    assert!(br.pairs.is_empty());

    let self_closing = kerner.sequence(ContextId(1)).unwrap();
    assert!(self_closing.nodes.iter().all(|n| n.is_tag()));

    let comparison = kerner.sequence(ContextId(4)).unwrap();
    assert!(comparison.nodes.iter().all(|n| !n.is_tag()));
    assert_eq!(comparison.plain_text(), "1 < 2 > 0");

    let unterminated = kerner.sequence(ContextId(5)).unwrap();
    assert_eq!(unterminated.plain_text(), "AT&T &copy 2024");

    let quoted = kerner.sequence(ContextId(6)).unwrap();
    assert_eq!(
        quoted.plain_text(),
        "<p class=\"x\" data-k=\"1\">\u{201c}Type\u{201d}</p>"
    );
    let html = kerner.render(ContextId(6)).unwrap();
    assert!(html.starts_with("<p class=\"x\" data-k=\"1\"><span class=\"kern-2\""));
}
