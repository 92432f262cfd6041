// Unit tests for name similarity.
//
// Normalized Levenshtein over lowercased characters: identity, symmetry,
// case folding, and the known distance for a short/long name pair.

use brandgraph::similarity::{levenshtein, similarity};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn identical_names_score_one() {
    for name in ["", "a", "Acme", "Nestlé Waters", "3M"] {
        assert_eq!(similarity(name, name), 1.0, "similarity({name:?}, itself)");
    }
}

#[test]
fn similarity_is_symmetric() {
    let pairs = [
        ("acme", "acme corp"),
        ("Bosch", "Siemens"),
        ("", "abc"),
        ("Müller", "Mueller"),
    ];
    for (a, b) in pairs {
        assert_eq!(similarity(a, b), similarity(b, a), "{a:?} vs {b:?}");
    }
}

#[test]
fn case_is_ignored() {
    assert_eq!(similarity("ACME", "acme"), 1.0);
    assert_eq!(similarity("Acme Corp", "acme corp"), 1.0);
}

#[test]
fn suffix_insertion_distance() {
    // "acme" -> "acme corp" is five inserts over a longest length of nine
    assert_eq!(levenshtein(&chars("acme"), &chars("acme corp")), 5);
    let score = similarity("acme", "acme corp");
    assert!((score - 4.0 / 9.0).abs() < 1e-9, "got {score}");
}

#[test]
fn empty_against_non_empty_scores_zero() {
    assert_eq!(similarity("", "abc"), 0.0);
}

#[test]
fn completely_different_names_score_zero() {
    assert_eq!(similarity("abc", "xyz"), 0.0);
}

#[test]
fn multibyte_characters_count_once() {
    // one substitution over six characters
    assert_eq!(levenshtein(&chars("nestlé"), &chars("nestle")), 1);
    let score = similarity("Nestlé", "Nestle");
    assert!((score - 5.0 / 6.0).abs() < 1e-9, "got {score}");
}

#[test]
fn score_stays_in_unit_range() {
    let names = ["", "a", "ab", "Acme", "Acme Corp", "Zeta Industries"];
    for a in names {
        for b in names {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "similarity({a:?}, {b:?}) = {s}");
        }
    }
}

// ============================================================
// Cross-check against strsim over generated names
// ============================================================

/// Deterministic pseudo-random names drawn from a small alphabet, so that
/// pairs share characters often enough to exercise substitutions.
fn generated_names(count: usize) -> Vec<String> {
    const ALPHABET: &[char] = &['a', 'B', 'c', 'A', 'b', 'é', 'É', ' ', '3', 'ö'];
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|_| {
            let len = next() % 9;
            (0..len).map(|_| ALPHABET[next() % ALPHABET.len()]).collect::<String>()
        })
        .collect()
}

#[test]
fn levenshtein_agrees_with_strsim() {
    let names = generated_names(120);
    for a in &names {
        for b in &names {
            assert_eq!(
                levenshtein(&chars(a), &chars(b)),
                strsim::levenshtein(a, b),
                "{a:?} vs {b:?}"
            );
        }
    }
}

#[test]
fn similarity_agrees_with_strsim_normalized() {
    let names = generated_names(120);
    for a in &names {
        for b in &names {
            let expected = strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase());
            let got = similarity(a, b);
            assert!((got - expected).abs() < 1e-12, "{a:?} vs {b:?}: {got} != {expected}");
        }
    }
}
