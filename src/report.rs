use std::fmt;

/// Direction of a single rotation primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Left,
    Right,
}

impl RotationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationDirection::Left => "Left",
            RotationDirection::Right => "Right",
        }
    }
}

/// Shape of the imbalance an ancestor was found in after an insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Imbalance {
    /// Left-heavy, new key went into the left child's left side.
    LeftLeft,
    /// Right-heavy, new key went into the right child's right side.
    RightRight,
    /// Left-heavy, new key went into the left child's right side.
    LeftRight,
    /// Right-heavy, new key went into the right child's left side.
    RightLeft,
}

impl Imbalance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Imbalance::LeftLeft => "left-left",
            Imbalance::RightRight => "right-right",
            Imbalance::LeftRight => "left-right",
            Imbalance::RightLeft => "right-left",
        }
    }
}

/// One rotation applied while rebalancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation<K> {
    pub direction: RotationDirection,
    /// Key of the node the rotation was centered on.
    pub pivot: K,
    /// Imbalance case this rotation belongs to. Both halves of a double
    /// rotation carry the same case.
    pub case: Imbalance,
}

impl<K> Rotation<K> {
    pub fn new(direction: RotationDirection, pivot: K, case: Imbalance) -> Self {
        Self {
            direction,
            pivot,
            case,
        }
    }
}

impl<K: fmt::Display> fmt::Display for Rotation<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Rotation on Node: {}", self.direction.as_str(), self.pivot)
    }
}

/// Outcome of [`AvlTree::insert`](crate::AvlTree::insert).
///
/// Rotations are listed in the order they were applied, deepest first. An
/// empty list means no rebalancing was needed. Inserting a key that is
/// already present also yields an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertReport<K> {
    key: K,
    rotations: Vec<Rotation<K>>,
}

impl<K> InsertReport<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            rotations: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, rotation: Rotation<K>) {
        self.rotations.push(rotation);
    }

    /// Key passed to the insertion.
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn rotations(&self) -> &[Rotation<K>] {
        &self.rotations
    }

    /// `true` when the insertion needed no rotation.
    pub fn is_balanced(&self) -> bool {
        self.rotations.is_empty()
    }

    pub fn into_rotations(self) -> Vec<Rotation<K>> {
        self.rotations
    }
}

impl<K: fmt::Display> fmt::Display for InsertReport<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Insert {}: ", self.key)?;
        if self.rotations.is_empty() {
            return write!(f, "No rotation.");
        }
        for (i, rotation) in self.rotations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", rotation)?;
        }
        Ok(())
    }
}
