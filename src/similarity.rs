// Normalized edit-distance similarity between manufacturer names.
//
// The score is:
//
//   (L - levenshtein(a, b)) / L     where L = max(len(a), len(b))
//
// Lengths are measured in characters after lowercasing both inputs, so the
// comparison is case-insensitive. Two empty strings are identical (1.0).

/// Compute the case-insensitive similarity of two strings.
///
/// Returns a score from 0.0 (nothing in common) to 1.0 (identical ignoring
/// case). Symmetric and total over all inputs, including empty strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    let distance = levenshtein(&a, &b);
    (longest - distance) as f64 / longest as f64
}

/// Classic Levenshtein distance (unit cost insert / delete / substitute).
///
/// Uses a single rolling row sized to the shorter input, so memory is
/// O(min(len(a), len(b))).
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    // row[j] = distance between long[..i] and short[..j]
    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, lc) in long.iter().enumerate() {
        // diagonal holds row[j - 1] from the previous iteration of i
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[short.len()]
}
