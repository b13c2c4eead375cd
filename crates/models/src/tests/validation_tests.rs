use proptest::prelude::*;

use crate::ciudad::{validate_numero_habitantes, validate_pais, Pais, HABITANTES_INVALIDO, PAIS_INVALIDO};
use crate::errors::ModelError;
use crate::supermercado::{validate_nombre, NOMBRE_INVALIDO};

#[test]
fn accepts_each_allowed_country() {
    for pais in Pais::ALL {
        assert_eq!(validate_pais(pais.as_str()).unwrap(), pais);
    }
}

#[test]
fn rejects_other_country_with_message() {
    match validate_pais("Colombia") {
        Err(ModelError::Validation(msg)) => assert_eq!(msg, PAIS_INVALIDO),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn country_match_is_exact() {
    assert!(validate_pais("argentina").is_err());
    assert!(validate_pais(" Ecuador").is_err());
    assert!(validate_pais("").is_err());
}

#[test]
fn population_must_not_be_negative() {
    assert!(validate_numero_habitantes(0).is_ok());
    assert!(validate_numero_habitantes(2_800_000).is_ok());
    match validate_numero_habitantes(-5) {
        Err(ModelError::Validation(msg)) => assert_eq!(msg, HABITANTES_INVALIDO),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn nombre_boundary_is_exclusive() {
    assert!(validate_nombre("D1").is_err());
    assert!(validate_nombre("abcdefghij").is_err());
    assert!(validate_nombre("abcdefghijk").is_ok());
}

#[test]
fn nombre_counts_characters_not_bytes() {
    // 10 characters, 12 bytes
    assert!(validate_nombre("ñandúabcde").is_err());
    assert!(validate_nombre("ñandúabcdef").is_ok());
}

#[test]
fn nombre_error_message() {
    match validate_nombre("Éxito") {
        Err(ModelError::Validation(msg)) => assert_eq!(msg, NOMBRE_INVALIDO),
        other => panic!("unexpected result: {:?}", other),
    }
}

proptest! {
    #[test]
    fn any_country_outside_whitelist_is_rejected(pais in "\\PC{0,24}") {
        prop_assume!(!Pais::ALL.iter().any(|p| p.as_str() == pais));
        prop_assert!(validate_pais(&pais).is_err());
    }

    #[test]
    fn short_names_are_rejected(nombre in "\\PC{0,10}") {
        prop_assert!(validate_nombre(&nombre).is_err());
    }

    #[test]
    fn long_names_are_accepted(nombre in "\\PC{11,64}") {
        prop_assert!(validate_nombre(&nombre).is_ok());
    }
}
