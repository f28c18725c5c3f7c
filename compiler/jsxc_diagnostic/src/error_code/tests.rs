use super::*;

#[test]
fn display_matches_variant_name() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.to_string(), format!("{code:?}"));
    }
}

#[test]
fn descriptions_are_distinct() {
    let all = ErrorCode::ALL;
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.description(), b.description());
        }
    }
}

#[test]
fn parses_case_insensitively() {
    assert_eq!("E1002".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
    assert_eq!("e1004".parse::<ErrorCode>(), Ok(ErrorCode::E1004));
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
}
