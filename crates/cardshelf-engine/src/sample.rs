//! Price-weighted random sampling for the featured rotation.

use cardshelf_core::Item;
use rand::Rng;

/// Default featured weight: `market_price + 1`.
///
/// The `+1` keeps every weight strictly positive so zero-price items remain
/// selectable; without it a whole sub-population could never be drawn.
#[must_use]
pub fn featured_weight(item: &Item) -> f64 {
    item.market_price + 1.0
}

/// Draws up to `count` distinct items, biased by `weight_fn`, without
/// replacement.
///
/// Returns `min(count, items.len())` items. If the weights sum to a
/// non-positive (or non-finite) value the draw falls back to uniform
/// sampling rather than failing; with [`featured_weight`] that guard
/// should never trigger, but a caller-supplied weight function may be
/// degenerate. Each call is an independent draw; pass a seeded `Rng` when
/// reproducibility matters (tests), `rand::rng()` otherwise.
#[must_use]
pub fn sample_featured<R, W>(items: &[Item], count: usize, weight_fn: W, rng: &mut R) -> Vec<Item>
where
    R: Rng + ?Sized,
    W: Fn(&Item) -> f64,
{
    let draw = count.min(items.len());
    if draw == 0 {
        return Vec::new();
    }

    // Clamp degenerate weights so partial sums stay meaningful.
    let mut weights: Vec<f64> = items
        .iter()
        .map(|item| {
            let w = weight_fn(item);
            if w.is_finite() && w > 0.0 {
                w
            } else {
                0.0
            }
        })
        .collect();
    let mut remaining: Vec<usize> = (0..items.len()).collect();
    let mut total: f64 = weights.iter().sum();

    let mut picked = Vec::with_capacity(draw);
    while picked.len() < draw {
        if !(total.is_finite() && total > 0.0) {
            // Uniform fallback over whatever is still un-drawn.
            while picked.len() < draw {
                let slot = rng.random_range(0..remaining.len());
                picked.push(items[remaining.swap_remove(slot)].clone());
            }
            break;
        }

        let mut target = rng.random_range(0.0..total);
        let mut slot = remaining.len() - 1;
        for (i, &index) in remaining.iter().enumerate() {
            target -= weights[index];
            if target < 0.0 {
                slot = i;
                break;
            }
        }

        let index = remaining.swap_remove(slot);
        total -= weights[index];
        weights[index] = 0.0;
        picked.push(items[index].clone());
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn make_item(name: &str, market_price: f64) -> Item {
        Item {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: "Pokemon".to_string(),
            collection_set: String::new(),
            condition: String::new(),
            image_ref: None,
            quantity: 1,
            list_price: 0.0,
            market_price,
            external_link: None,
        }
    }

    #[test]
    fn empty_collection_yields_empty_draw() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = sample_featured(&[], 3, featured_weight, &mut rng);
        assert!(out.is_empty());
    }

    #[test]
    fn draw_is_capped_by_availability() {
        let items = vec![make_item("A", 1.0), make_item("B", 2.0)];
        let mut rng = StdRng::seed_from_u64(2);
        let out = sample_featured(&items, 3, featured_weight, &mut rng);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn draw_has_no_duplicates() {
        let items: Vec<Item> = (0..10)
            .map(|i| make_item(&format!("card-{i}"), f64::from(i)))
            .collect();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let out = sample_featured(&items, 6, featured_weight, &mut rng);
            let mut ids: Vec<Uuid> = out.iter().map(|i| i.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 6);
        }
    }

    #[test]
    fn featured_weight_offsets_zero_prices() {
        let item = make_item("Bulk", 0.0);
        assert!((featured_weight(&item) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_price_population_draws_uniformly() {
        // All weights are 1.0, so each of the 5 items should be picked in
        // roughly 3/5 of draws of size 3. Statistical check over many
        // seeded draws, not a single one.
        let items: Vec<Item> = (0..5).map(|i| make_item(&format!("zero-{i}"), 0.0)).collect();
        let mut rng = StdRng::seed_from_u64(4);
        let draws = 2_000;
        let mut counts: HashMap<Uuid, usize> = HashMap::new();
        for _ in 0..draws {
            for item in sample_featured(&items, 3, featured_weight, &mut rng) {
                *counts.entry(item.id).or_default() += 1;
            }
        }
        let expected = draws * 3 / 5; // 1200
        for item in &items {
            let seen = counts.get(&item.id).copied().unwrap_or(0);
            assert!(
                seen.abs_diff(expected) < 150,
                "item {} drawn {seen} times, expected ~{expected}",
                item.name
            );
        }
    }

    #[test]
    fn higher_priced_items_dominate_the_draw() {
        let items = vec![make_item("bulk", 0.0), make_item("chase", 99.0)];
        let mut rng = StdRng::seed_from_u64(5);
        let draws = 2_000;
        let mut chase_hits = 0;
        for _ in 0..draws {
            let out = sample_featured(&items, 1, featured_weight, &mut rng);
            if out[0].name == "chase" {
                chase_hits += 1;
            }
        }
        // weight 100 vs 1, expect ~99% chase.
        assert!(chase_hits > draws * 9 / 10, "chase drawn {chase_hits}/{draws}");
    }

    #[test]
    fn degenerate_weight_fn_falls_back_to_uniform() {
        let items: Vec<Item> = (0..4).map(|i| make_item(&format!("c{i}"), f64::from(i))).collect();
        let mut rng = StdRng::seed_from_u64(6);
        let out = sample_featured(&items, 3, |_| 0.0, &mut rng);
        assert_eq!(out.len(), 3);
        let mut ids: Vec<Uuid> = out.iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn non_finite_weights_do_not_panic() {
        let items = vec![make_item("a", 1.0), make_item("b", 2.0)];
        let mut rng = StdRng::seed_from_u64(7);
        let out = sample_featured(&items, 2, |_| f64::NAN, &mut rng);
        assert_eq!(out.len(), 2);
    }
}
