use super::*;
use crate::error::InvalidInput;
use proptest::prelude::*;

#[test]
fn test_single_element() {
    assert_eq!(get_min_max(&[5]), Ok((5, 5)));
}

#[test]
fn test_two_elements() {
    assert_eq!(get_min_max(&[7, 3]), Ok((3, 7)));
    assert_eq!(get_min_max(&[3, 7]), Ok((3, 7)));
}

#[test]
fn test_empty_sequence() {
    let empty: [i32; 0] = [];
    assert_eq!(get_min_max(&empty), Err(InvalidInput::EmptySequence));
}

#[test]
fn test_mixed_signs() {
    assert_eq!(get_min_max(&[3, 7, 1, 9, 4, -2, 6]), Ok((-2, 9)));
    assert_eq!(get_min_max(&[999, -1000, 500, 1000]), Ok((-1000, 1000)));
}

#[test]
fn test_all_negative() {
    assert_eq!(get_min_max(&[-5, -9, -3, -11, -1]), Ok((-11, -1)));
}

#[test]
fn test_duplicates() {
    assert_eq!(get_min_max(&[10, 10, 10, 10]), Ok((10, 10)));
    assert_eq!(get_min_max(&[8, 1, 8, 2, 8, 3, 8, 4]), Ok((1, 8)));
    assert_eq!(get_min_max(&[0, 0, 0, 1]), Ok((0, 1)));
}

#[test]
fn test_descending_run() {
    let values: Vec<i32> = (1..=20).rev().collect();
    assert_eq!(get_min_max(&values), Ok((1, 20)));
}

#[test]
fn test_floats() {
    assert_eq!(get_min_max(&[100.5, 2.25, 300.0, 40.0, 5.0]), Ok((2.25, 300.0)));
}

proptest! {
    #[test]
    fn test_bounds_hold_for_every_element(values in prop::collection::vec(any::<i64>(), 1..200)) {
        let (min, max) = get_min_max(&values).unwrap();

        prop_assert!(values.contains(&min));
        prop_assert!(values.contains(&max));
        for v in &values {
            prop_assert!(min <= *v && *v <= max);
        }
    }

    #[test]
    fn test_matches_iterator_extrema(values in prop::collection::vec(-1_000i32..1_000, 1..64)) {
        let expected = (
            *values.iter().min().unwrap(),
            *values.iter().max().unwrap(),
        );
        prop_assert_eq!(get_min_max(&values).unwrap(), expected);
    }
}
