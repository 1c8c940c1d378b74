use rand::Rng;
use rand_distr::{Geometric, StandardGeometric};

/// Geometric distribution counting failures before the first success.
/// `p = 1/2` is common enough (and much cheaper) to get its own variant.
#[derive(Debug, Copy, Clone)]
enum Jump {
    OneHalf(StandardGeometric),
    General(Geometric),
}

impl Jump {
    /// Requires `0 < p < 1`; returns `None` otherwise
    fn with_prob(p: f64) -> Option<Self> {
        if p == 0.5 {
            Some(Self::OneHalf(StandardGeometric))
        } else {
            Geometric::new(p).ok().map(Self::General)
        }
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> u64 {
        match self {
            Self::OneHalf(distr) => rng.sample(distr),
            Self::General(distr) => rng.sample(distr),
        }
    }
}

#[derive(Debug, Copy, Clone)]
enum Mode {
    /// No index is selected
    Empty,
    /// Every index is selected
    All,
    /// Jumps go from one selected index to the next
    Sparse(Jump),
    /// Jumps go from one *unselected* index to the next; used for `p > 1/2`
    Dense(Jump),
}

/// Selects every index of `0..len` independently with probability `prob` by drawing the
/// distances between consecutive selections from a geometric distribution.
/// This takes time linear in the number of selected (or unselected, if `prob > 1/2`) indices.
#[derive(Debug, Copy, Clone)]
pub struct GeometricSampler {
    mode: Mode,
    len: u64,
}

impl GeometricSampler {
    /// Creates a sampler over `0..len`.
    /// Probabilities below `0` select nothing, probabilities above `1` select everything.
    pub fn new(prob: f64, len: u64) -> Self {
        let mode = if prob.is_nan() || prob <= 0.0 {
            Mode::Empty
        } else if prob >= 1.0 {
            Mode::All
        } else if prob <= 0.5 {
            Jump::with_prob(prob).map_or(Mode::Empty, Mode::Sparse)
        } else {
            Jump::with_prob(1.0 - prob).map_or(Mode::All, Mode::Dense)
        };

        Self { mode, len }
    }

    /// Returns the selected indices in ascending order
    pub fn sample_iter<R: Rng>(self, rng: &mut R) -> GeometricSamples<'_, R> {
        let mut samples = GeometricSamples {
            sampler: self,
            rng,
            cur: 0,
            unselected: u64::MAX,
        };

        if let Mode::Dense(jump) = self.mode {
            samples.unselected = jump.sample(samples.rng);
        }
        samples
    }
}

/// Iterator over the indices selected by a [`GeometricSampler`]
#[derive(Debug)]
pub struct GeometricSamples<'a, R> {
    sampler: GeometricSampler,
    rng: &'a mut R,
    /// Smallest index not decided yet
    cur: u64,
    /// Next index that is not selected (only used in dense mode)
    unselected: u64,
}

impl<R: Rng> Iterator for GeometricSamples<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.sampler.len;

        loop {
            if self.cur >= len {
                return None;
            }

            match self.sampler.mode {
                Mode::Empty => {
                    self.cur = len;
                }
                Mode::All => {
                    self.cur += 1;
                    return Some(self.cur - 1);
                }
                Mode::Sparse(jump) => {
                    let selected = self.cur.saturating_add(jump.sample(self.rng));
                    if selected >= len {
                        self.cur = len;
                        return None;
                    }
                    self.cur = selected + 1;
                    return Some(selected);
                }
                Mode::Dense(jump) => {
                    if self.cur < self.unselected {
                        self.cur += 1;
                        return Some(self.cur - 1);
                    }

                    // skip the unselected index and draw the next one
                    self.cur += 1;
                    self.unselected = self.cur.saturating_add(jump.sample(self.rng));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn edge_cases() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for len in [0, 3, 10] {
            assert_eq!(
                GeometricSampler::new(1.0, len).sample_iter(rng).collect_vec(),
                (0..len).collect_vec()
            );
            assert_eq!(GeometricSampler::new(0.0, len).sample_iter(rng).count(), 0);
            assert_eq!(GeometricSampler::new(f64::NAN, len).sample_iter(rng).count(), 0);
        }
    }

    #[test]
    fn strictly_increasing() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        for prob in [0.1, 0.5, 0.9] {
            let samples = GeometricSampler::new(prob, 1000).sample_iter(rng).collect_vec();
            assert!(samples.windows(2).all(|w| w[0] < w[1]));
            assert!(samples.iter().all(|&x| x < 1000));
        }
    }

    #[test]
    fn occurences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for (prob, range) in [(0.25, 150..350), (0.75, 650..850)] {
            let len = 100u64;
            let mut occurences = vec![0; len as usize];
            for _ in 0..1000 {
                for x in GeometricSampler::new(prob, len).sample_iter(rng) {
                    occurences[x as usize] += 1;
                }
            }

            assert!(occurences.into_iter().all(|x| range.contains(&x)));
        }
    }
}
