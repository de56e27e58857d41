//! Sequence combinators — concatenation and additive overlay.

/// Concatenate sample sequences back-to-back in time (melodic phrase).
pub fn sequence(parts: &[&[f64]]) -> Vec<f64> {
    let total_len: usize = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total_len);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Sum two sequences elementwise, zero-padding the shorter (chord).
///
/// The result length equals the longer input. Summed peaks may leave
/// [-1, 1]; the PCM encoder clamps, so no renormalization happens here.
pub fn overlay(a: &[f64], b: &[f64]) -> Vec<f64> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let va = a.get(i).copied().unwrap_or(0.0);
        let vb = b.get(i).copied().unwrap_or(0.0);
        out.push(va + vb);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_places_parts_in_order() {
        let a = vec![1.0, 2.0];
        let b = vec![3.0, 4.0, 5.0];
        assert_eq!(
            sequence(&[&a, &b]),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn sequence_of_nothing_is_empty() {
        assert!(sequence(&[]).is_empty());
    }

    #[test]
    fn overlay_pads_shorter_with_zero() {
        let a = vec![1.0, 1.0, 1.0];
        let b = vec![1.0];
        assert_eq!(overlay(&a, &b), vec![2.0, 1.0, 1.0]);
        // Symmetric: shorter first argument pads the same way.
        assert_eq!(overlay(&b, &a), vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn overlay_does_not_renormalize() {
        let a = vec![0.8, 0.8];
        let b = vec![0.8, -0.8];
        let out = overlay(&a, &b);
        assert!((out[0] - 1.6).abs() < 1e-12, "sum should exceed 1.0, got {}", out[0]);
        assert!(out[1].abs() < 1e-12);
    }

    #[test]
    fn overlay_with_empty_is_identity() {
        let a = vec![0.25, -0.5];
        assert_eq!(overlay(&a, &[]), a);
        assert_eq!(overlay(&[], &a), a);
    }
}
