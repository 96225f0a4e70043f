use rand::Rng;

/// Draws up to `count` distinct winners from `pool`.
///
/// Each pick is uniform over the candidates still in the pool and removes the
/// picked candidate, so nobody can win twice. A pool no larger than `count`
/// means everyone wins; an empty pool gives no winners.
pub fn select_winners<T, R: Rng + ?Sized>(mut pool: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    let mut winners = Vec::with_capacity(count.min(pool.len()));

    while winners.len() < count && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        winners.push(pool.swap_remove(index));
    }

    winners
}
