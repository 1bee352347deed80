use std::cell::Cell;

use pretty_assertions::assert_eq;

use super::*;
use crate::{ds, when, PatternOps, Wildcard, PATTERN, SOME};

#[test]
fn first_matching_arm_wins() {
    let result = match_on(5)
        .arm(Wildcard.lt(10).to("small"))
        .arm(Wildcard.to("anything"))
        .finish();
    assert_eq!(result, Ok("small"));
}

#[test]
fn later_arms_are_not_evaluated_once_resolved() {
    let calls = Cell::new(0);
    let counted = |_: &i32| {
        calls.set(calls.get() + 1);
        true
    };

    let dispatch = match_on(1)
        .arm(when(1).to('a'))
        .arm(when(counted).to('b'))
        .arm(when(counted).to('c'));
    assert!(dispatch.is_resolved());
    assert_eq!(dispatch.arms_tried(), 1);
    assert_eq!(dispatch.finish(), Ok('a'));
    assert_eq!(calls.get(), 0);
}

#[test]
fn exhaustion_reports_type_and_arms_tried() {
    let err = match_on(9_i32)
        .arm(when(0).to(()))
        .arm(when(1).to(()))
        .finish()
        .unwrap_err();
    assert_eq!(err.scrutinee(), "i32");
    assert_eq!(err.arms_tried(), 2);
}

#[test]
fn a_match_without_arms_is_exhausted() {
    let dispatch: Match<u8, ()> = match_on(0);
    assert!(!dispatch.is_resolved());
    assert_eq!(dispatch.finish().map_err(|err| err.arms_tried()), Err(0));
}

#[test]
fn scrutinee_moves_into_the_firing_handler() {
    let owned = String::from("moved");
    let result = match_on(owned)
        .arm(when(|s: &String| s.is_empty()).to(0))
        .arm(Wildcard.bind(|s: String| s.len()))
        .finish();
    assert_eq!(result, Ok(5));
}

#[test]
fn macro_matches_a_single_scrutinee() {
    let describe = |n: i32| {
        match_!(n;
            Wildcard.lt(0).to("negative"),
            (PATTERN | 0).to("zero"),
            Wildcard.to("other"),
        )
    };
    assert_eq!(describe(-2), Ok("negative"));
    assert_eq!(describe(0), Ok("zero"));
    assert_eq!(describe(2), Ok("other"));
}

#[test]
fn macro_packs_several_scrutinees_into_a_tuple() {
    let result = match_!(1, "two", Some(3.0);
        ds!(1, "one", Wildcard).to(String::from("one")),
        ds!(1, "two", SOME).bind(|(a, b, c): (i32, &str, f64)| format!("{a}{b}{c}")),
    );
    assert_eq!(result, Ok("1two3".to_string()));
}
