use std::f64::consts::PI;
use std::fmt;

/// Evaluation-space coordinate, both components in `[-1, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Coord {
    /// Build a coordinate from its two components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    fn component(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Which component of a pair an operator reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// First component.
    X,
    /// Second component.
    Y,
}

/// Single-input function applied to the component selected by an [`Axis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryKind {
    /// `v`
    Identity,
    /// `cos(pi * v)`
    CosPi,
    /// `sin(pi * v)`
    SinPi,
    /// `tanh(v)`
    Tanh,
}

impl UnaryKind {
    #[inline]
    fn apply(self, v: f64) -> f64 {
        match self {
            UnaryKind::Identity => v,
            UnaryKind::CosPi => (PI * v).cos(),
            UnaryKind::SinPi => (PI * v).sin(),
            UnaryKind::Tanh => v.tanh(),
        }
    }
}

/// Two-input function over both components of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    /// `a * b`
    Product,
    /// `(a + b) / 2`
    Average,
}

impl BinaryKind {
    #[inline]
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryKind::Product => a * b,
            BinaryKind::Average => (a + b) / 2.0,
        }
    }
}

/// One entry of the operator table the builder draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Unary function of one component.
    Unary(UnaryKind, Axis),
    /// Binary function of both components.
    Binary(BinaryKind),
}

impl Operator {
    /// Every operator, each equally likely to be picked by the builder.
    pub const ALL: [Operator; 10] = [
        Operator::Binary(BinaryKind::Product),
        Operator::Binary(BinaryKind::Average),
        Operator::Unary(UnaryKind::CosPi, Axis::X),
        Operator::Unary(UnaryKind::CosPi, Axis::Y),
        Operator::Unary(UnaryKind::SinPi, Axis::X),
        Operator::Unary(UnaryKind::SinPi, Axis::Y),
        Operator::Unary(UnaryKind::Identity, Axis::X),
        Operator::Unary(UnaryKind::Identity, Axis::Y),
        Operator::Unary(UnaryKind::Tanh, Axis::X),
        Operator::Unary(UnaryKind::Tanh, Axis::Y),
    ];

    /// Evaluate the operator on a concrete pair.
    #[inline]
    pub fn apply(self, pair: Coord) -> f64 {
        match self {
            Operator::Unary(kind, axis) => kind.apply(pair.component(axis)),
            Operator::Binary(kind) => kind.apply(pair.x, pair.y),
        }
    }
}

/// Expression tree node.
///
/// Children are owned through `Box`; a tree never shares nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Reads one component of the pixel coordinate.
    Coordinate(Axis),
    /// Function of a single child.
    Unary {
        /// Function to apply.
        kind: UnaryKind,
        /// Input expression.
        child: Box<Expr>,
    },
    /// Function of two children.
    Binary {
        /// Function to apply.
        kind: BinaryKind,
        /// First input.
        left: Box<Expr>,
        /// Second input.
        right: Box<Expr>,
    },
}

impl Expr {
    /// `op` applied directly to the pixel coordinate.
    pub fn leaf(op: Operator) -> Self {
        match op {
            Operator::Unary(kind, axis) => Expr::Unary {
                kind,
                child: Box::new(Expr::Coordinate(axis)),
            },
            Operator::Binary(kind) => Expr::Binary {
                kind,
                left: Box::new(Expr::Coordinate(Axis::X)),
                right: Box::new(Expr::Coordinate(Axis::Y)),
            },
        }
    }

    /// `op` applied to the pair `(left(c), right(c))`.
    ///
    /// A unary operator only reads the component its axis selects, so the other
    /// sub-expression is dropped here; it can never influence the result.
    pub fn compose(op: Operator, left: Expr, right: Expr) -> Self {
        match op {
            Operator::Unary(kind, axis) => Expr::Unary {
                kind,
                child: Box::new(match axis {
                    Axis::X => left,
                    Axis::Y => right,
                }),
            },
            Operator::Binary(kind) => Expr::Binary {
                kind,
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    /// Evaluate at `c`. Total: every operator is defined on all of `[-1, 1]^2`.
    pub fn eval(&self, c: Coord) -> f64 {
        match self {
            Expr::Coordinate(axis) => c.component(*axis),
            Expr::Unary { kind, child } => kind.apply(child.eval(c)),
            Expr::Binary { kind, left, right } => kind.apply(left.eval(c), right.eval(c)),
        }
    }

    /// Operator count on the longest root-to-leaf path. Coordinates count as zero.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Coordinate(_) => 0,
            Expr::Unary { child, .. } => 1 + child.depth(),
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Operator count on the shortest root-to-leaf path.
    pub fn min_depth(&self) -> usize {
        match self {
            Expr::Coordinate(_) => 0,
            Expr::Unary { child, .. } => 1 + child.min_depth(),
            Expr::Binary { left, right, .. } => 1 + left.min_depth().min(right.min_depth()),
        }
    }

    /// Total number of nodes, coordinates included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Coordinate(_) => 1,
            Expr::Unary { child, .. } => 1 + child.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Coordinate(Axis::X) => f.write_str("x"),
            Expr::Coordinate(Axis::Y) => f.write_str("y"),
            Expr::Unary { kind, child } => match kind {
                UnaryKind::Identity => write!(f, "{child}"),
                UnaryKind::CosPi => write!(f, "cos(pi*{child})"),
                UnaryKind::SinPi => write!(f, "sin(pi*{child})"),
                UnaryKind::Tanh => write!(f, "tanh({child})"),
            },
            Expr::Binary { kind, left, right } => match kind {
                BinaryKind::Product => write!(f, "({left} * {right})"),
                BinaryKind::Average => write!(f, "avg({left}, {right})"),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/node.rs"]
mod tests;
