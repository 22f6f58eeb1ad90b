use super::*;
use crate::expression::node::{Axis, BinaryKind, Expr, Operator, UnaryKind};

fn x_tree() -> ExprTree {
    ExprTree::from_expr(Expr::leaf(Operator::Unary(UnaryKind::Identity, Axis::X)))
}

fn y_tree() -> ExprTree {
    ExprTree::from_expr(Expr::leaf(Operator::Unary(UnaryKind::Identity, Axis::Y)))
}

#[test]
fn rejects_empty_dimensions() {
    assert!(matches!(
        PixelGrid::new(0, 4),
        Err(ArtError::InvalidDimensions {
            width: 0,
            height: 4
        })
    ));
    assert!(evaluate_grid(&x_tree(), 4, 0).is_err());
}

#[test]
fn grid_is_row_major() {
    let xs = evaluate_grid(&x_tree(), 4, 2).unwrap();
    assert_eq!(xs, vec![-1.0, -0.5, 0.0, 0.5, -1.0, -0.5, 0.0, 0.5]);

    let ys = evaluate_grid(&y_tree(), 4, 2).unwrap();
    assert_eq!(ys, vec![-1.0, -1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn coords_match_coord_lookup() {
    let grid = PixelGrid::new(5, 3).unwrap();
    let listed: Vec<_> = grid.coords().collect();
    assert_eq!(listed.len(), grid.len());
    assert_eq!(listed[5 + 2], grid.coord(2, 1));
    assert!(!grid.is_empty());
}

#[test]
fn evaluation_matches_direct_calls() {
    let tree = ExprTree::from_expr(Expr::leaf(Operator::Binary(BinaryKind::Product)));
    let grid = PixelGrid::new(7, 5).unwrap();
    let values = grid.evaluate(&tree);
    for j in 0..5 {
        for i in 0..7 {
            let c = grid.coord(i, j);
            assert_eq!(values[(j * 7 + i) as usize], c.x * c.y);
        }
    }
}
