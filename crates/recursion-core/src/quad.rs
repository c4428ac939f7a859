//! Split squares.
//!
//! A square is either a leaf (filled `1` or empty `0`) or split into four
//! quadrants, each of which is again a square. Adding two squares fills every
//! region that is filled in either input.

use crate::error::{QuadError, QuadResult};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// A square: a filled/empty leaf or four quadrants.
///
/// Quadrants are positional (conventionally top-left, top-right,
/// bottom-left, bottom-right). Nothing requires two squares to be split to
/// the same depth.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Quad {
    Leaf(bool),
    Node(Box<[Quad; 4]>),
}

impl Quad {
    pub fn leaf(filled: bool) -> Self {
        Quad::Leaf(filled)
    }

    pub fn node(quadrants: [Quad; 4]) -> Self {
        Quad::Node(Box::new(quadrants))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Quad::Leaf(_))
    }

    /// Levels of splitting; a leaf has depth 0
    pub fn depth(&self) -> usize {
        match self {
            Quad::Leaf(_) => 0,
            Quad::Node(quadrants) => 1 + quadrants.iter().map(Quad::depth).max().unwrap_or(0),
        }
    }

    /// Split one level: a leaf becomes four copies of itself, a node is
    /// returned unchanged.
    pub fn split(&self) -> Self {
        match self {
            Quad::Leaf(filled) => Quad::node(std::array::from_fn(|_| Quad::Leaf(*filled))),
            Quad::Node(_) => self.clone(),
        }
    }

    /// Logical OR of two squares, see [`add`]
    pub fn add(&self, other: &Quad) -> Quad {
        add(self, other)
    }

    /// Read a square written as nested lists, e.g. `[0, [1, 1, 1, 0], 0, 1]`
    pub fn parse(text: &str) -> QuadResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Quad::try_from(&value)
    }
}

/// Add two squares.
///
/// Two leaves combine by logical OR. When only one side is split, the leaf
/// on the other side acts as four copies of itself. Two split squares add
/// quadrant by quadrant. The result keeps every split present in either
/// input; four equal leaves are not merged back into one.
pub fn add(a: &Quad, b: &Quad) -> Quad {
    match (a, b) {
        (Quad::Leaf(x), Quad::Leaf(y)) => Quad::Leaf(*x || *y),
        (Quad::Node(xs), Quad::Node(ys)) => {
            Quad::node(std::array::from_fn(|i| add(&xs[i], &ys[i])))
        }
        (Quad::Leaf(_), Quad::Node(_)) => add(&a.split(), b),
        (Quad::Node(_), Quad::Leaf(_)) => add(a, &b.split()),
    }
}

impl BitOr for &Quad {
    type Output = Quad;

    fn bitor(self, rhs: &Quad) -> Quad {
        add(self, rhs)
    }
}

impl BitOr for Quad {
    type Output = Quad;

    fn bitor(self, rhs: Quad) -> Quad {
        add(&self, &rhs)
    }
}

impl TryFrom<&Value> for Quad {
    type Error = QuadError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => match n.as_u64() {
                Some(0) => Ok(Quad::Leaf(false)),
                Some(1) => Ok(Quad::Leaf(true)),
                _ => Err(QuadError::InvalidShape(format!(
                    "leaf must be 0 or 1, got {}",
                    n
                ))),
            },
            Value::Array(items) if items.len() == 4 => {
                let mut quadrants = Vec::with_capacity(4);
                for item in items {
                    quadrants.push(Quad::try_from(item)?);
                }
                let quadrants: [Quad; 4] = quadrants
                    .try_into()
                    .map_err(|_| QuadError::InvalidShape("expected four quadrants".into()))?;
                Ok(Quad::node(quadrants))
            }
            Value::Array(items) => Err(QuadError::InvalidShape(format!(
                "split square needs 4 quadrants, got {}",
                items.len()
            ))),
            other => Err(QuadError::InvalidShape(format!(
                "expected 0, 1 or a list of four squares, got {}",
                other
            ))),
        }
    }
}

impl FromStr for Quad {
    type Err = QuadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quad::Leaf(filled) => write!(f, "{}", u8::from(*filled)),
            Quad::Node(quadrants) => {
                write!(f, "[")?;
                for (i, quadrant) in quadrants.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", quadrant)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Serialize for Quad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quad::Leaf(filled) => serializer.serialize_u8(u8::from(*filled)),
            Quad::Node(quadrants) => {
                let mut seq = serializer.serialize_seq(Some(4))?;
                for quadrant in quadrants.iter() {
                    seq.serialize_element(quadrant)?;
                }
                seq.end()
            }
        }
    }
}

struct QuadVisitor;

impl<'de> Visitor<'de> for QuadVisitor {
    type Value = Quad;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("0, 1 or a list of four squares")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Quad, E> {
        match v {
            0 => Ok(Quad::Leaf(false)),
            1 => Ok(Quad::Leaf(true)),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Quad, E> {
        match v {
            0 => Ok(Quad::Leaf(false)),
            1 => Ok(Quad::Leaf(true)),
            _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Quad, A::Error> {
        let mut quadrants = Vec::with_capacity(4);
        while let Some(quadrant) = seq.next_element::<Quad>()? {
            if quadrants.len() == 4 {
                return Err(de::Error::invalid_length(5, &self));
            }
            quadrants.push(quadrant);
        }
        let found = quadrants.len();
        let quadrants: [Quad; 4] = quadrants
            .try_into()
            .map_err(|_| de::Error::invalid_length(found, &self))?;
        Ok(Quad::node(quadrants))
    }
}

impl<'de> Deserialize<'de> for Quad {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(QuadVisitor)
    }
}
