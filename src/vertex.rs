/// A labeled vertex of K3.
///
/// Ordering follows the labels, so successor maps keyed by Vertex
/// always iterate A, B, C.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Vertex {
    A = 0,
    B = 1,
    C = 2,
}

impl Vertex {
    pub const ALL: [Self; crate::K3_VERTICES] = [Vertex::A, Vertex::B, Vertex::C];

    pub fn index(&self) -> usize {
        *self as usize
    }
    /// every other vertex, since K3 is complete
    pub fn neighbors(&self) -> impl Iterator<Item = Vertex> + '_ {
        Self::ALL.into_iter().filter(move |v| v != self)
    }
}

impl From<usize> for Vertex {
    fn from(n: usize) -> Vertex {
        match n {
            0 => Vertex::A,
            1 => Vertex::B,
            2 => Vertex::C,
            _ => panic!("invalid vertex index {}", n),
        }
    }
}
impl From<Vertex> for usize {
    fn from(v: Vertex) -> usize {
        v.index()
    }
}

impl TryFrom<char> for Vertex {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Vertex::A),
            'B' => Ok(Vertex::B),
            'C' => Ok(Vertex::C),
            _ => Err(anyhow::anyhow!("invalid vertex label '{}'", c)),
        }
    }
}
impl TryFrom<&str> for Vertex {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Vertex::try_from(c),
            _ => Err(anyhow::anyhow!("invalid vertex label {:?}", s)),
        }
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Vertex::A => "A",
                Vertex::B => "B",
                Vertex::C => "C",
            }
        )
    }
}
