use super::*;
use crate::error::AlignError;

#[test]
fn blosum62_known_entries() {
    let m = SubstitutionMatrix::blosum62();
    assert_eq!(m.score(b'A', b'A').unwrap(), 4);
    assert_eq!(m.score(b'W', b'W').unwrap(), 11);
    assert_eq!(m.score(b'C', b'C').unwrap(), 9);
    assert_eq!(m.score(b'D', b'E').unwrap(), 2);
    assert_eq!(m.score(b'W', b'A').unwrap(), -3);
}

#[test]
fn blosum62_is_symmetric() {
    let m = SubstitutionMatrix::blosum62();
    for &a in m.alphabet() {
        for &b in m.alphabet() {
            assert_eq!(m.score(a, b).unwrap(), m.score(b, a).unwrap());
        }
    }
}

#[test]
fn blosum62_gap_scores_like_stop() {
    let m = SubstitutionMatrix::blosum62();
    assert_eq!(m.score(b'A', GAP).unwrap(), -4);
    assert_eq!(m.score(GAP, b'W').unwrap(), -4);
    assert_eq!(m.score(GAP, GAP).unwrap(), 1);
    assert_eq!(m.score(GAP, b'*').unwrap(), 1);
}

#[test]
fn lookup_is_case_insensitive() {
    let m = SubstitutionMatrix::blosum62();
    assert_eq!(m.score(b'a', b'r').unwrap(), m.score(b'A', b'R').unwrap());
    assert!(m.contains(b'k'));
}

#[test]
fn unknown_symbol_is_an_error() {
    let m = SubstitutionMatrix::blosum62();
    assert!(!m.contains(b'J'));
    match m.score(b'A', b'J') {
        Err(AlignError::UnknownSymbol { a: b'A', b: b'J' }) => {}
        other => panic!("expected unknown symbol error, got {other:?}"),
    }
}

#[test]
fn simple_scheme() {
    let m = SubstitutionMatrix::simple(b"ACGT", 2, -1, -2);
    assert_eq!(m.alphabet(), b"ACGT-");
    assert_eq!(m.score(b'A', b'A').unwrap(), 2);
    assert_eq!(m.score(b'A', b'c').unwrap(), -1);
    assert_eq!(m.score(b'G', GAP).unwrap(), -2);
    assert_eq!(m.score(GAP, GAP).unwrap(), 0);
    assert!(m.score(b'N', b'A').is_err());
}

#[test]
fn simple_scheme_dedups_symbols() {
    let m = SubstitutionMatrix::simple(b"aAcC-", 1, 0, -1);
    assert_eq!(m.alphabet(), b"AC-");
}

#[test]
fn triple_score_averages_pairs() {
    let m = SubstitutionMatrix::simple(b"AB", 2, -1, -2);
    assert!((triple_score(&m, [b'A', b'A', b'A']).unwrap() - 2.0).abs() < 1e-12);
    // (-1) + (-1) + 2
    assert!((triple_score(&m, [b'B', b'A', b'A']).unwrap() - 0.0).abs() < 1e-12);
    // (-2) + (-2) + 0
    assert!((triple_score(&m, [b'B', GAP, GAP]).unwrap() + 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn triple_score_is_permutation_invariant() {
    let m = SubstitutionMatrix::blosum62();
    let cols = [[b'W', b'A', GAP], [b'C', b'C', b'Y'], [GAP, GAP, b'K']];
    for [a, b, c] in cols {
        let base = triple_score(&m, [a, b, c]).unwrap();
        for perm in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            assert_eq!(triple_score(&m, perm).unwrap(), base);
        }
    }
}

#[test]
fn triple_score_propagates_unknown_symbol() {
    let m = SubstitutionMatrix::simple(b"ACGT", 2, -1, -2);
    assert!(matches!(
        triple_score(&m, [b'A', b'X', GAP]),
        Err(AlignError::UnknownSymbol { .. })
    ));
}

// ─── text format ────────────────────────────────────────────

const SMALL: &str = "\
# toy matrix
   A  C  *
A  3 -1 -5
C -1  4 -5
* -5 -5  1
";

#[test]
fn parse_small_matrix_adds_gap() {
    let m: SubstitutionMatrix = SMALL.parse().unwrap();
    assert_eq!(m.alphabet(), b"AC*-");
    assert_eq!(m.score(b'A', b'C').unwrap(), -1);
    assert_eq!(m.score(b'C', GAP).unwrap(), -5);
    assert_eq!(m.score(GAP, GAP).unwrap(), 1);
}

#[test]
fn parse_keeps_explicit_gap_column() {
    let text = "  A  -\nA 2 -3\n- -3 0\n";
    let m: SubstitutionMatrix = text.parse().unwrap();
    assert_eq!(m.alphabet(), b"A-");
    assert_eq!(m.score(b'A', GAP).unwrap(), -3);
    assert_eq!(m.score(GAP, GAP).unwrap(), 0);
}

#[test]
fn parse_rows_in_any_order() {
    let text = "  A  C  -\nC -1 4 -2\n- -2 -2 0\nA 3 -1 -2\n";
    let m: SubstitutionMatrix = text.parse().unwrap();
    assert_eq!(m.score(b'A', b'A').unwrap(), 3);
    assert_eq!(m.score(b'C', b'C').unwrap(), 4);
}

#[test]
fn parse_rejects_ragged_row() {
    let text = "  A  C  *\nA 3 -1\n";
    match text.parse::<SubstitutionMatrix>() {
        Err(AlignError::ScoreTableFormat { line: 2, .. }) => {}
        other => panic!("expected format error on line 2, got {other:?}"),
    }
}

#[test]
fn parse_rejects_missing_row() {
    let text = "  A  C  *\nA 3 -1 -5\n* -5 -5 1\n";
    assert!(matches!(
        text.parse::<SubstitutionMatrix>(),
        Err(AlignError::ScoreTableFormat { .. })
    ));
}

#[test]
fn parse_rejects_asymmetric_table() {
    let text = "  A  C  *\nA 3 -1 -5\nC 0 4 -5\n* -5 -5 1\n";
    match text.parse::<SubstitutionMatrix>() {
        Err(AlignError::AsymmetricScoreTable { a: b'A', b: b'C' }) => {}
        other => panic!("expected asymmetry error, got {other:?}"),
    }
}

#[test]
fn parse_rejects_table_without_gap_or_stop() {
    let text = "  A  C\nA 3 -1\nC -1 4\n";
    assert!(matches!(
        text.parse::<SubstitutionMatrix>(),
        Err(AlignError::ScoreTableFormat { .. })
    ));
}

#[test]
fn parse_rejects_bad_score() {
    let text = "  A  *\nA x -5\n* -5 1\n";
    assert!(matches!(
        text.parse::<SubstitutionMatrix>(),
        Err(AlignError::ScoreTableFormat { line: 2, .. })
    ));
}
