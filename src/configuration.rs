use crate::Arbitrary;
use crate::Chips;
use crate::K3_DEGREE;
use crate::K3_VERTICES;
use crate::Vertex;
use std::collections::BTreeMap;

/// A state of the chip-firing game on K3: how many chips sit on A, B, C.
///
/// Construction never validates. Candidate successors produced while
/// firing may hold negative counts; those are filtered out by
/// [`Configuration::fire`] rather than rejected up front.
///
/// Equality, hashing and ordering are by value, coordinate-wise in
/// vertex order, so Configurations are usable as map keys and sort
/// lexicographically by (A, B, C).
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Configuration([Chips; K3_VERTICES]);

impl Configuration {
    pub fn from_values(a: Chips, b: Chips, c: Chips) -> Self {
        Self([a, b, c])
    }
    pub fn from_tuple((a, b, c): (Chips, Chips, Chips)) -> Self {
        Self::from_values(a, b, c)
    }

    pub fn total(&self) -> Chips {
        self.0.iter().sum()
    }
    pub fn as_tuple(&self) -> (Chips, Chips, Chips) {
        (self.0[0], self.0[1], self.0[2])
    }
    pub fn copy(&self) -> Self {
        Self(self.0)
    }
    pub fn chips(&self, vertex: Vertex) -> Chips {
        self.0[vertex.index()]
    }

    /// no vertex holds a negative count
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|&n| n >= 0)
    }

    /// the candidate successor after firing `vertex`, legal or not.
    /// the fired vertex pays its degree, each neighbor gains one chip.
    pub fn fired(&self, vertex: Vertex) -> Self {
        let mut next = self.0;
        next[vertex.index()] -= K3_DEGREE;
        for neighbor in vertex.neighbors() {
            next[neighbor.index()] += 1;
        }
        Self(next)
    }

    /// successors by fired vertex. a vertex is absent when firing it
    /// would leave any coordinate negative.
    pub fn fire(&self) -> BTreeMap<Vertex, Configuration> {
        Vertex::ALL
            .into_iter()
            .map(|v| (v, self.fired(v)))
            .filter(|(_, next)| next.is_valid())
            .collect()
    }
}

impl From<(Chips, Chips, Chips)> for Configuration {
    fn from(tuple: (Chips, Chips, Chips)) -> Self {
        Self::from_tuple(tuple)
    }
}
impl From<[Chips; K3_VERTICES]> for Configuration {
    fn from(chips: [Chips; K3_VERTICES]) -> Self {
        Self(chips)
    }
}
impl From<Configuration> for (Chips, Chips, Chips) {
    fn from(config: Configuration) -> Self {
        config.as_tuple()
    }
}

/// composition tuples from the enumerator. arity must be K3_VERTICES.
impl From<Vec<Chips>> for Configuration {
    fn from(chips: Vec<Chips>) -> Self {
        match chips.as_slice() {
            &[a, b, c] => Self::from_values(a, b, c),
            other => panic!("expected {} chip counts, got {}", K3_VERTICES, other.len()),
        }
    }
}

/// "a,b,c" or "(a, b, c)"
impl TryFrom<&str> for Configuration {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let chips = inner
            .split(',')
            .map(str::trim)
            .map(|n| {
                n.parse::<Chips>()
                    .map_err(|e| anyhow::anyhow!("invalid chip count {:?}: {}", n, e))
            })
            .collect::<anyhow::Result<Vec<Chips>>>()?;
        match chips.as_slice() {
            &[a, b, c] => Ok(Self::from_values(a, b, c)),
            _ => Err(anyhow::anyhow!(
                "expected {} chip counts in {:?}, got {}",
                K3_VERTICES,
                s,
                chips.len()
            )),
        }
    }
}

/// uniform over all valid Configurations of a uniformly drawn total,
/// by placing two bars among n + 2 slots (stars and bars).
impl Arbitrary for Configuration {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(0..=crate::ARBITRARY_CHIP_LIMIT);
        let i = rng.random_range(0..n + 2);
        let j = rng.random_range(0..n + 1);
        let (lo, hi) = if j >= i { (i, j + 1) } else { (j, i) };
        Self::from_values(lo, hi - lo - 1, n + 1 - hi)
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_agree() {
        let x = Configuration::from_values(1, 2, 3);
        assert_eq!(x, Configuration::from_tuple((1, 2, 3)));
        assert_eq!(x, Configuration::from((1, 2, 3)));
        assert_eq!(x, Configuration::from([1, 2, 3]));
        assert_eq!(x, Configuration::from(vec![1, 2, 3]));
        assert_eq!(x.as_tuple(), (1, 2, 3));
        assert_eq!(x.total(), 6);
    }

    #[test]
    fn construction_does_not_validate() {
        let x = Configuration::from_values(3, -2, 1);
        assert_eq!(x.as_tuple(), (3, -2, 1));
        assert_eq!(x.total(), 2);
        assert!(!x.is_valid());
    }

    #[test]
    fn copy_is_by_value() {
        let x = Configuration::from_values(4, 0, 7);
        let mut y = x.copy();
        assert_eq!(y.as_tuple(), x.as_tuple());
        y = y.fired(Vertex::A);
        assert_eq!(x.as_tuple(), (4, 0, 7));
        assert_eq!(y.as_tuple(), (2, 1, 8));
    }

    #[test]
    fn firing_arithmetic() {
        let x = Configuration::from_values(5, 6, 7);
        assert_eq!(x.fired(Vertex::A).as_tuple(), (3, 7, 8));
        assert_eq!(x.fired(Vertex::B).as_tuple(), (6, 4, 8));
        assert_eq!(x.fired(Vertex::C).as_tuple(), (6, 7, 5));
        let fired = x.fire();
        assert_eq!(fired.len(), 3);
        assert_eq!(fired[&Vertex::A], Configuration::from_values(3, 7, 8));
        assert_eq!(fired[&Vertex::B], Configuration::from_values(6, 4, 8));
        assert_eq!(fired[&Vertex::C], Configuration::from_values(6, 7, 5));
    }

    #[test]
    fn empty_configuration_cannot_fire() {
        let x = Configuration::from_values(0, 0, 0);
        assert!(x.fire().is_empty());
    }

    #[test]
    fn only_rich_vertices_fire() {
        let x = Configuration::from_values(2, 0, 0);
        let fired = x.fire();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired.get(&Vertex::A), Some(&Configuration::from_values(0, 1, 1)));
        assert_eq!(fired.get(&Vertex::B), None);
        assert_eq!(fired.get(&Vertex::C), None);
        let x = Configuration::from_values(1, 1, 1);
        assert!(x.fire().is_empty());
    }

    #[test]
    fn every_coordinate_is_checked() {
        // B is already negative, so even firing A is rejected
        let x = Configuration::from_values(5, -3, 0);
        assert!(!x.fire().contains_key(&Vertex::A));
    }

    #[test]
    fn firing_conserves_chips() {
        for _ in 0..256 {
            let x = Configuration::random();
            assert!(x.is_valid());
            for (_, next) in x.fire() {
                assert_eq!(next.total(), x.total());
                assert!(next.is_valid());
            }
        }
    }

    #[test]
    fn arbitrary_is_bounded() {
        for _ in 0..256 {
            let x = Configuration::random();
            assert!(x.is_valid());
            assert!(x.total() <= crate::ARBITRARY_CHIP_LIMIT);
        }
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut xs = vec![
            Configuration::from_values(1, 0, 1),
            Configuration::from_values(0, 2, 0),
            Configuration::from_values(0, 0, 2),
            Configuration::from_values(1, 1, 0),
        ];
        xs.sort();
        assert_eq!(
            xs.iter().map(Configuration::as_tuple).collect::<Vec<_>>(),
            vec![(0, 0, 2), (0, 2, 0), (1, 0, 1), (1, 1, 0)]
        );
    }

    #[test]
    fn parse_and_display() {
        let x = Configuration::try_from("(1, 2, 3)").unwrap();
        assert_eq!(x, Configuration::from_values(1, 2, 3));
        assert_eq!(Configuration::try_from("4,0,-1").unwrap().as_tuple(), (4, 0, -1));
        assert!(Configuration::try_from("1,2").is_err());
        assert!(Configuration::try_from("1,x,3").is_err());
        assert_eq!(format!("{}", x), "(1, 2, 3)");
        assert_eq!(format!("{:?}", x), "Configuration(1, 2, 3)");
    }

    #[test]
    fn serializes_as_array() {
        let x = Configuration::from_values(0, 1, 1);
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, "[0,1,1]");
        assert_eq!(serde_json::from_str::<Configuration>(&json).unwrap(), x);
    }

    #[test]
    #[should_panic]
    fn wrong_arity() {
        let _ = Configuration::from(vec![1, 2]);
    }
}
