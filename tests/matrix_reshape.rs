use wigplot::WigplotError;
use wigplot::bench::{HeaderRule, build_matrices, parse_blocks};

#[test]
fn token_count_not_divisible_is_invalid_element_count() {
    let text = "wigner_6j:\n2 10 1e-16 2e-16 3e-16\n4 20 1e-16 2e-16\n";
    let blocks = parse_blocks(text, &["wigner_6j", "gsl_6j"], HeaderRule::default()).unwrap();
    let err = build_matrices(&blocks, 5).unwrap_err();
    match err {
        WigplotError::InvalidElementCount {
            label,
            count,
            columns,
        } => {
            assert_eq!(label, "wigner_6j");
            assert_eq!(count, 9);
            assert_eq!(columns, 5);
        }
        other => panic!("expected InvalidElementCount, got {other}"),
    }
}

#[test]
fn rows_may_wrap_across_lines() {
    let text = "gsl_6j:\n2 10 1e-16\n2e-16 3e-16 4 20\n1e-15 2e-15 3e-15\n";
    let blocks = parse_blocks(text, &["gsl_6j"], HeaderRule::default()).unwrap();
    let matrices = build_matrices(&blocks, 5).unwrap();
    let m = &matrices["gsl_6j"];
    assert_eq!(m.rows(), 2);
    assert_eq!(m.column(0), vec![2.0, 4.0]);
    assert_eq!(m.column(4), vec![3e-16, 3e-15]);
}

#[test]
fn same_text_same_matrices() {
    let text = "wigner_6j:\n2 1 0.5 0.25 0.125\n";
    let labels = ["wigner_6j", "gsl_6j"];
    let a = build_matrices(&parse_blocks(text, &labels, HeaderRule::default()).unwrap(), 5).unwrap();
    let b = build_matrices(&parse_blocks(text, &labels, HeaderRule::default()).unwrap(), 5).unwrap();
    assert_eq!(a, b);
    assert!(a["gsl_6j"].is_empty());
}

#[test]
fn column_header_row_is_a_numeric_parse_error() {
    let text = "wigner_9j:\ni count max_diff max_rel_diff std_diff std_rel_diff\n1 10 0 0 0 0\n";
    let blocks = parse_blocks(text, &["wigner_9j"], HeaderRule::default()).unwrap();
    let err = build_matrices(&blocks, 6).unwrap_err();
    assert!(matches!(err, WigplotError::NumericParse { ref token, .. } if token == "i"));
}
