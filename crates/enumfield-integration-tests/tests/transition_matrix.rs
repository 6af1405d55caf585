//! # Transition Matrix
//!
//! Exhaustive NxN checks of `is_valid_transition` and `validate_transition`
//! for a constrained and an unconstrained enumeration.

use std::sync::OnceLock;

use enumfield_core::{validate_transition, EnumDefinition, EnumError};

const UNBORN: i64 = 0;
const ALIVE: i64 = 1;
const DEAD: i64 = 2;
const REANIMATED: i64 = 3;
const VOID: i64 = 4;

const ALL: [i64; 5] = [UNBORN, ALIVE, DEAD, REANIMATED, VOID];

fn person_status() -> &'static EnumDefinition {
    static DEF: OnceLock<EnumDefinition> = OnceLock::new();
    DEF.get_or_init(|| {
        EnumDefinition::builder("PersonStatus")
            .member("UNBORN", UNBORN)
            .member("ALIVE", ALIVE)
            .member("DEAD", DEAD)
            .member("REANIMATED", REANIMATED)
            .member("VOID", VOID)
            .transition(UNBORN, [VOID])
            .transition(ALIVE, [UNBORN])
            .transition(DEAD, [UNBORN, ALIVE])
            .transition(REANIMATED, [DEAD])
            .build()
            .expect("PersonStatus declaration is valid")
    })
}

fn person_status_default() -> &'static EnumDefinition {
    static DEF: OnceLock<EnumDefinition> = OnceLock::new();
    DEF.get_or_init(|| {
        EnumDefinition::builder("PersonStatusDefault")
            .member("UNBORN", UNBORN)
            .member("ALIVE", ALIVE)
            .member("DEAD", DEAD)
            .member("REANIMATED", REANIMATED)
            .member("VOID", VOID)
            .default_value(UNBORN)
            .build()
            .expect("PersonStatusDefault declaration is valid")
    })
}

#[test]
fn person_status_matrix_exhaustive() {
    let def = person_status();
    let expected_valid = [
        (VOID, UNBORN),
        (UNBORN, ALIVE),
        (UNBORN, DEAD),
        (ALIVE, DEAD),
        (DEAD, REANIMATED),
    ];

    for from in ALL {
        for to in ALL {
            let expected = from == to || expected_valid.contains(&(from, to));
            assert_eq!(
                def.is_valid_transition(from, to),
                expected,
                "PersonStatus {} -> {}",
                def.get_name(from).unwrap_or("?"),
                def.get_name(to).unwrap_or("?"),
            );
            assert_eq!(
                validate_transition(def, Some(from), Some(to)).is_ok(),
                expected
            );
        }
    }
}

#[test]
fn unconstrained_matrix_is_full() {
    let def = person_status_default();
    assert!(!def.has_transitions());
    for from in ALL {
        for to in ALL {
            assert!(def.is_valid_transition(from, to));
            assert!(validate_transition(def, Some(from), Some(to)).is_ok());
        }
    }
}

#[test]
fn documented_scenario() {
    let def = person_status();
    assert!(def.is_valid_transition(ALIVE, DEAD));
    assert!(!def.is_valid_transition(ALIVE, UNBORN));
    assert!(!def.is_valid_transition(DEAD, VOID));
}

#[test]
fn errors_carry_names() {
    let def = person_status();
    match validate_transition(def, Some(DEAD), Some(VOID)) {
        Err(EnumError::InvalidTransition {
            enum_name,
            from,
            to,
        }) => {
            assert_eq!(enum_name, "PersonStatus");
            assert_eq!(from, "DEAD");
            assert_eq!(to, "VOID");
        }
        other => panic!("expected InvalidTransition, got {other:?}"),
    }
}

#[test]
fn out_of_range_destination_is_invalid_choice() {
    for def in [person_status(), person_status_default()] {
        for from in ALL {
            let err = validate_transition(def, Some(from), Some(99)).unwrap_err();
            assert!(matches!(
                err,
                EnumError::InvalidChoice { ref value, ref enum_name }
                    if value == "99" && enum_name == def.name()
            ));
        }
    }
}

#[test]
fn absent_destination_never_raises() {
    for def in [person_status(), person_status_default()] {
        for from in ALL.iter().copied().map(Some).chain([None, Some(99)]) {
            assert!(validate_transition(def, from, None::<i64>).is_ok());
        }
    }
}

#[test]
fn definitions_are_shared_across_threads() {
    let handles: Vec<_> = ALL
        .into_iter()
        .map(|from| {
            std::thread::spawn(move || {
                let def = person_status();
                ALL.iter()
                    .filter(|&&to| def.is_valid_transition(from, to))
                    .count()
            })
        })
        .collect();
    let reachable: usize = handles
        .into_iter()
        .map(|h| h.join().expect("worker thread"))
        .sum();
    // 5 self-transitions + 5 listed pairs.
    assert_eq!(reachable, 10);
}
