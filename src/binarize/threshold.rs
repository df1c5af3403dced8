//! Global threshold selection by between-class variance maximization.

/// Score of splitting `hist` into `≤ t` and `> t` classes:
/// `w_lo * w_hi * (mean_lo - mean_hi)²` with pixel counts as weights.
/// Returns 0 when either class is empty.
pub fn between_class_variance(hist: &[u64; 256], t: u8) -> f64 {
    let (mut w_lo, mut s_lo, mut w_hi, mut s_hi) = (0u64, 0f64, 0u64, 0f64);
    for (i, &count) in hist.iter().enumerate() {
        if i <= t as usize {
            w_lo += count;
            s_lo += i as f64 * count as f64;
        } else {
            w_hi += count;
            s_hi += i as f64 * count as f64;
        }
    }
    if w_lo == 0 || w_hi == 0 {
        return 0.0;
    }
    let diff = s_lo / w_lo as f64 - s_hi / w_hi as f64;
    w_lo as f64 * w_hi as f64 * diff * diff
}

/// Threshold maximizing the between-class variance of `hist`.
///
/// Single pass with running sums; ties keep the lowest threshold. Falls back
/// to `fallback` when no split scores above zero (e.g. a flat image).
pub fn select_threshold(hist: &[u64; 256], fallback: u8) -> u8 {
    let total: u64 = hist.iter().sum();
    let sum_total: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_lo = 0u64;
    let mut sum_lo = 0f64;
    let mut best_score = 0f64;
    let mut best = fallback;

    for (t, &count) in hist.iter().enumerate() {
        weight_lo += count;
        if weight_lo == 0 {
            continue;
        }
        let weight_hi = total - weight_lo;
        if weight_hi == 0 {
            break;
        }
        sum_lo += t as f64 * count as f64;

        let mean_lo = sum_lo / weight_lo as f64;
        let mean_hi = (sum_total - sum_lo) / weight_hi as f64;
        let diff = mean_lo - mean_hi;
        let score = weight_lo as f64 * weight_hi as f64 * diff * diff;
        if score > best_score {
            best_score = score;
            best = t as u8;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_histogram_falls_back() {
        let mut hist = [0u64; 256];
        hist[77] = 400;
        assert_eq!(select_threshold(&hist, 128), 128);
        assert_eq!(select_threshold(&[0u64; 256], 42), 42);
    }

    #[test]
    fn bimodal_histogram_splits_between_modes() {
        let mut hist = [0u64; 256];
        hist[40] = 300;
        hist[200] = 100;
        let t = select_threshold(&hist, 128);
        // Every split in [40, 199] separates the modes equally; the first wins.
        assert_eq!(t, 40);
    }

    #[test]
    fn selection_matches_brute_force_maximizer() {
        let mut hist = [0u64; 256];
        for (i, slot) in hist.iter_mut().enumerate() {
            // Two uneven bumps over a nonzero floor so every split differs.
            let a = 900i64 - 12 * (i as i64 - 60).pow(2);
            let b = 500i64 - 4 * (i as i64 - 180).pow(2);
            *slot = (1 + a.max(0) + b.max(0)) as u64;
        }
        let mut best_t = 0u8;
        let mut best = 0f64;
        for t in 0..=255u8 {
            let score = between_class_variance(&hist, t);
            if score > best {
                best = score;
                best_t = t;
            }
        }
        assert!(best > 0.0);
        assert_eq!(select_threshold(&hist, 0), best_t);
    }
}
