use std::any::Any;

use pretty_assertions::assert_eq;

use super::*;

#[derive(Clone, Debug, PartialEq)]
enum Number {
    Int(i32),
    Float(f64),
    Text(String),
}

crate::alternatives!(Number { Int(i32), Float(f64), Text(String) });

#[test]
fn as_tests_the_current_alternative() {
    let n = Number::Float(2.75);
    assert!(Pattern::<Number>::matches(&as_::<f64>(), &n));
    assert!(!Pattern::<Number>::matches(&as_::<i32>(), &n));
    assert!(!Pattern::<Number>::matches(&as_::<String>(), &n));
}

#[test]
fn as_moves_the_payload_out_of_an_owned_value() {
    let n = Number::Text("moved".to_string());
    assert_eq!(as_::<String>().unwrap(n), "moved");
}

#[test]
fn as_borrows_the_payload_out_of_a_reference() {
    let n = Number::Int(7);
    let payload: &i32 = as_::<i32>().unwrap(&n);
    assert_eq!(*payload, 7);
    assert!(Pattern::<&Number>::matches(&as_::<i32>(), &&n));
}

#[test]
#[should_panic(expected = "cannot unwrap")]
fn as_unwrap_without_its_condition_is_a_contract_violation() {
    let _: f64 = as_::<f64>().unwrap(Number::Int(1));
}

#[test]
fn as_tests_runtime_type_of_dyn_any() {
    let boxed: Box<dyn Any> = Box::new(2.5_f32);
    assert!(Pattern::<Box<dyn Any>>::matches(&as_::<f32>(), &boxed));
    assert!(!Pattern::<Box<dyn Any>>::matches(&as_::<f64>(), &boxed));
    assert_eq!(as_::<f32>().unwrap(boxed), 2.5);

    let text = String::from("any");
    let borrowed: &dyn Any = &text;
    assert!(Pattern::<&dyn Any>::matches(&as_::<String>(), &borrowed));
    assert_eq!(as_::<String>().unwrap(borrowed), "any");
}

#[test]
fn as_works_on_send_and_sync_any() {
    let boxed: Box<dyn Any + Send> = Box::new(5_u8);
    assert!(Pattern::<Box<dyn Any + Send>>::matches(&as_::<u8>(), &boxed));
    assert_eq!(as_::<u8>().unwrap(boxed), 5);

    let shared: &(dyn Any + Send + Sync) = &'c';
    assert!(Pattern::<&(dyn Any + Send + Sync)>::matches(&as_::<char>(), &shared));
    assert_eq!(as_::<char>().unwrap(shared), &'c');
}

#[test]
fn as_debug_names_the_alternative() {
    assert_eq!(format!("{:?}", as_::<i32>()), "as_::<i32>");
}

#[test]
fn some_tests_presence_and_unwraps_the_item() {
    assert!(SOME.matches(&Some(5)));
    assert!(!SOME.matches(&None::<i32>));
    assert_eq!(SOME.unwrap(Some(5)), 5);

    let held = Some("borrowed".to_string());
    let item: &String = SOME.unwrap(&held);
    assert_eq!(item, "borrowed");
}

#[test]
fn none_tests_absence_and_unwraps_to_unit() {
    assert!(NONE.matches(&None::<i32>));
    assert!(!NONE.matches(&Some(1)));
    NONE.unwrap(None::<i32>);
    assert!(NONE.matches(&&None::<String>));
}

#[test]
#[should_panic(expected = "`SOME` cannot unwrap")]
fn some_unwrap_of_absent_value_is_a_contract_violation() {
    let _: i32 = SOME.unwrap(None);
}

#[test]
#[should_panic(expected = "`NONE` cannot unwrap")]
fn none_unwrap_of_present_value_is_a_contract_violation() {
    NONE.unwrap(Some(1));
}

#[test]
fn singletons_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Copy>(_: T) {}
    assert_send_sync(SOME);
    assert_send_sync(NONE);
    assert_send_sync(as_::<String>());
    assert_send_sync(as_::<std::rc::Rc<i32>>());
}
