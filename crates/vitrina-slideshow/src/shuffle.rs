use vitrina_core::ImageRef;

/// A uniform permutation of the session's image set with a wrapping
/// cursor.
///
/// Shuffled once per mount (Fisher–Yates); the cursor is always a valid
/// index whenever the order is non-empty, and no image is current before
/// shuffling completed — construction shuffles eagerly.
#[derive(Clone, Debug)]
pub struct ShuffledOrder {
    order: Vec<ImageRef>,
    index: usize,
}

impl ShuffledOrder {
    pub fn new(images: Vec<ImageRef>, rng: &mut fastrand::Rng) -> Self {
        let mut order = images;
        for i in (1..order.len()).rev() {
            let j = rng.usize(..=i);
            order.swap(i, j);
        }
        Self { order, index: 0 }
    }

    /// Replace the order with a fresh shuffle of a new image set.
    ///
    /// The cursor clamps back to 0; an in-progress position never
    /// survives a reshuffle.
    pub fn reshuffle(&mut self, images: Vec<ImageRef>, rng: &mut fastrand::Rng) {
        *self = Self::new(images, rng);
    }

    /// Advance the cursor by one, wrapping modulo length. Returns the
    /// new index, or `None` for an empty order.
    pub fn advance(&mut self) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.order.len();
        Some(self.index)
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageRef> {
        self.order.get(self.index)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ImageRef] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn images(n: usize) -> Vec<ImageRef> {
        (0..n).map(|i| ImageRef::new(format!("img_{i}.jpg"))).collect()
    }

    fn multiset(refs: &[ImageRef]) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for r in refs {
            *counts.entry(r.as_str()).or_insert(0) += 1;
        }
        counts
    }

    #[rstest]
    #[case::single(1)]
    #[case::small(5)]
    #[case::larger(64)]
    fn shuffle_is_a_permutation(#[case] n: usize) {
        for seed in 0..20 {
            let mut rng = fastrand::Rng::with_seed(seed);
            let input = images(n);
            let expected = multiset(&input);

            let order = ShuffledOrder::new(input.clone(), &mut rng);
            assert_eq!(order.len(), n);
            assert_eq!(multiset(order.as_slice()), expected);
        }
    }

    #[rstest]
    fn duplicates_preserve_multiplicity() {
        let mut rng = fastrand::Rng::with_seed(7);
        let input: Vec<ImageRef> = ["a.jpg", "a.jpg", "b.jpg"]
            .into_iter()
            .map(ImageRef::new)
            .collect();
        let expected = multiset(&input);

        let order = ShuffledOrder::new(input.clone(), &mut rng);
        assert_eq!(multiset(order.as_slice()), expected);
    }

    #[rstest]
    #[case::wraps_once(3, 4, 1)]
    #[case::exact_cycle(3, 3, 0)]
    #[case::many(5, 23, 3)]
    fn n_advances_land_on_n_mod_len(
        #[case] len: usize,
        #[case] advances: usize,
        #[case] expected: usize,
    ) {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut order = ShuffledOrder::new(images(len), &mut rng);

        for _ in 0..advances {
            order.advance();
        }
        assert_eq!(order.index(), expected);
    }

    #[rstest]
    fn empty_order_never_advances_or_yields() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut order = ShuffledOrder::new(vec![], &mut rng);

        assert!(order.is_empty());
        assert_eq!(order.advance(), None);
        assert!(order.current().is_none());
    }

    #[rstest]
    fn reshuffle_clamps_cursor_to_zero() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut order = ShuffledOrder::new(images(6), &mut rng);
        for _ in 0..4 {
            order.advance();
        }
        assert_eq!(order.index(), 4);

        order.reshuffle(images(3), &mut rng);
        assert_eq!(order.index(), 0);
        assert_eq!(order.len(), 3);
        assert!(order.current().is_some());
    }

    #[rstest]
    fn cursor_always_valid_while_nonempty() {
        let mut rng = fastrand::Rng::with_seed(9);
        let mut order = ShuffledOrder::new(images(4), &mut rng);
        for _ in 0..50 {
            order.advance();
            assert!(order.index() < order.len());
            assert!(order.current().is_some());
        }
    }
}
