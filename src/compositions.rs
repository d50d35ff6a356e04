use crate::Chips;
use crate::K3_VERTICES;

/// Compositions lazily walks every way to write `n` as an ordered sum
/// of `v` non-negative parts, in lexicographic ascending order.
///
/// only the upcoming tuple is held in memory. successive tuples are
/// produced odometer-style: find the rightmost non-final part that still
/// has chips to its right, bump it by one, and sweep the remainder
/// into the final part.
///
/// the sequence length C(n + v - 1, v - 1) grows quickly with `v`. when it
/// does not fit in a usize the iterator only promises an unbounded size hint.
///
/// ```
/// use chipfire::Compositions;
/// let all = Compositions::from((2, 2)).collect::<Vec<_>>();
/// assert_eq!(all, vec![vec![0, 2], vec![1, 1], vec![2, 0]]);
/// ```
#[derive(Debug, Clone)]
pub struct Compositions {
    n: Chips,
    v: usize,
    next: Option<Vec<Chips>>,
    remaining: Option<u128>,
}

/// every composition of `n` into `v` parts
pub fn enumerate(n: Chips, v: usize) -> Compositions {
    Compositions::from((n, v))
}

impl From<(Chips, usize)> for Compositions {
    fn from((n, v): (Chips, usize)) -> Self {
        assert!(n >= 0, "cannot distribute a negative number of chips: {}", n);
        assert!(v >= 1, "cannot distribute chips across zero vertices");
        let mut first = vec![0; v];
        first[v - 1] = n;
        Self {
            n,
            v,
            next: Some(first),
            remaining: Self::binomial(n as u128 + v as u128 - 1, v as u128 - 1),
        }
    }
}

impl Compositions {
    /// the default arity: one part per vertex of K3
    pub fn k3(n: Chips) -> Self {
        Self::from((n, K3_VERTICES))
    }
    pub fn chips(&self) -> Chips {
        self.n
    }
    pub fn parts(&self) -> usize {
        self.v
    }
    /// total sequence length, C(n + v - 1, v - 1), independent of progress.
    /// None when it exceeds usize.
    pub fn combinations(&self) -> Option<usize> {
        Self::binomial(self.n as u128 + self.v as u128 - 1, self.v as u128 - 1)
            .and_then(|n| usize::try_from(n).ok())
    }

    /// None on overflow. acc * (n - i) is always divisible by i + 1.
    fn binomial(n: u128, k: u128) -> Option<u128> {
        let k = k.min(n - k);
        (0..k).try_fold(1u128, |acc, i| acc.checked_mul(n - i).map(|x| x / (i + 1)))
    }

    fn successor(current: &[Chips]) -> Option<Vec<Chips>> {
        let last = current.len() - 1;
        let mut tail = 0;
        for i in (0..last).rev() {
            tail += current[i + 1];
            if tail > 0 {
                let mut next = current.to_vec();
                next[i] += 1;
                next[i + 1..].fill(0);
                next[last] = tail - 1;
                return Some(next);
            }
        }
        None
    }
}

impl Iterator for Compositions {
    type Item = Vec<Chips>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = Self::successor(&current);
        self.remaining = self.remaining.map(|n| n - 1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for Compositions {}
