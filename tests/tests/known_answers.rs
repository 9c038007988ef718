//! Known-answer vectors run through the full pipeline
//!
//! The vectors live in `src/vectors/pipeline.json` and cover the NIST
//! SP 800-38A modes, GOST R 34.13-2015, RFC 9058 MGM, the EAX paper, RFC 7253
//! OCB and the native stream ciphers.

use cipherkit_symmetric::{default_registry, Engine};
use cipherkit_tests::vectors::load_suite;

#[test]
fn test_pipeline_vectors() {
    let suite = load_suite("pipeline").expect("vector file should load");
    assert_eq!(suite.suite, "pipeline");
    assert!(suite.vectors.len() >= 20);

    let engine = Engine::default();
    let failures: Vec<String> = suite
        .vectors
        .iter()
        .filter_map(|vector| vector.check(&engine).err())
        .collect();
    assert!(failures.is_empty(), "failed vectors:\n{}", failures.join("\n"));
}

#[test]
fn test_vector_names_resolve() {
    let registry = default_registry();
    let suite = load_suite("pipeline").unwrap();
    for vector in &suite.vectors {
        let selection = vector.selection(&registry).unwrap();
        assert_eq!(
            registry.multiple_name(selection.multiple).unwrap(),
            vector.multiple,
            "{}",
            vector.name
        );
    }
}

#[test]
fn test_every_cipher_has_a_vector() {
    let registry = default_registry();
    let suite = load_suite("pipeline").unwrap();
    for multiple in registry.multiples() {
        let name = registry.multiple_name(multiple).unwrap();
        assert!(
            suite.vectors.iter().any(|v| v.multiple == name),
            "no vector for {}",
            name
        );
    }
}

#[test]
fn test_corrupted_vector_is_reported() {
    let mut suite = load_suite("pipeline").unwrap();
    let vector = &mut suite.vectors[0];
    let first = vector.ciphertext.remove(0);
    vector.ciphertext.insert(0, if first == '0' { '1' } else { '0' });
    let err = vector.check(&Engine::default()).unwrap_err();
    assert!(err.contains(&vector.name));
}

#[test]
fn test_unknown_name_is_reported() {
    let mut suite = load_suite("pipeline").unwrap();
    let vector = &mut suite.vectors[0];
    vector.mode = Some("XTS".into());
    assert_eq!(
        vector.selection(&default_registry()).unwrap_err(),
        "unknown mode `XTS`"
    );
}
