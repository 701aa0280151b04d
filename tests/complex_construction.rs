//! Integration tests for root-cell construction.
//!
//! Covers both modes:
//! - hypercube mode: corner graph, centroid insertion, adjacency template
//! - symmetric mode: the staircase simplex
//!
//! plus configuration validation, bounds rescaling and constraint handling.

use approx::assert_relative_eq;
use shgo_complex::prelude::*;
use std::collections::BTreeSet;
use std::rc::Rc;

// =============================================================================
// HELPERS
// =============================================================================

fn config<const D: usize>(symmetry: bool) -> ComplexConfig<D> {
    ComplexConfigBuilder::<D>::default()
        .symmetry(symmetry)
        .build()
        .unwrap()
}

fn sum_objective<const D: usize>() -> BoxedScalarFunction<D> {
    Box::new(|x: &[f64; D]| x.iter().sum::<f64>())
}

/// Current edges as coordinate pairs, smaller point first.
fn edge_points<const D: usize>(complex: &Complex<D>) -> BTreeSet<(Point<D>, Point<D>)> {
    complex
        .edges()
        .into_iter()
        .map(|edge| {
            let (a, b) = edge.endpoints();
            let pa = *complex.cache().vertex(a).unwrap().point();
            let pb = *complex.cache().vertex(b).unwrap().point();
            if pa <= pb { (pa, pb) } else { (pb, pa) }
        })
        .collect()
}

fn pair(a: [f64; 2], b: [f64; 2]) -> (Point<2>, Point<2>) {
    let (pa, pb) = (Point::new(a), Point::new(b));
    if pa <= pb { (pa, pb) } else { (pb, pa) }
}

// =============================================================================
// HYPERCUBE MODE
// =============================================================================

#[test]
fn test_2d_root_has_exact_edge_set() {
    let complex = Complex::new(config::<2>(false), sum_objective(), Vec::new()).unwrap();

    assert_eq!(complex.total_vertices(), 5);
    let expected: BTreeSet<_> = [
        // Square sides
        pair([0.0, 0.0], [1.0, 0.0]),
        pair([0.0, 0.0], [0.0, 1.0]),
        pair([1.0, 0.0], [1.0, 1.0]),
        pair([0.0, 1.0], [1.0, 1.0]),
        // Centroid spokes
        pair([0.5, 0.5], [0.0, 0.0]),
        pair([0.5, 0.5], [1.0, 0.0]),
        pair([0.5, 0.5], [0.0, 1.0]),
        pair([0.5, 0.5], [1.0, 1.0]),
    ]
    .into_iter()
    .collect();

    let actual = edge_points(&complex);
    assert_eq!(actual.len(), 8);
    assert_eq!(actual, expected);
    assert!(!actual.contains(&pair([0.0, 0.0], [1.0, 1.0])), "diagonal removed");
    assert!(!actual.contains(&pair([1.0, 0.0], [0.0, 1.0])), "no anti-diagonal");
}

#[test]
fn test_3d_root_counts() {
    let complex = Complex::new(config::<3>(false), sum_objective(), Vec::new()).unwrap();

    assert_eq!(complex.total_vertices(), 9);
    assert_eq!(complex.initial_cell().number_of_vertices(), 9);

    // Comparable corner pairs of {0,1}^3 (19) minus the diagonal, plus 8 spokes.
    assert_eq!(complex.edges().len(), 18 + 8);

    let template = complex.adjacency_template();
    assert_eq!(template.len(), 9);
    assert_eq!(template.corner_count(), 8);
    assert_eq!(template.centroid_position(), Some(8));
    assert_eq!(template.neighbors(8).len(), 8);
    assert_eq!(template.edge_count(), complex.edges().len());
}

#[test]
fn test_root_rank_for_sum_objective() {
    // Only the origin beats every neighbor.
    let mut complex = Complex::new(config::<3>(false), sum_objective(), Vec::new()).unwrap();
    assert_eq!(complex.root_homology_rank(), 1);
    assert_eq!(complex.homology_group_rank(0, 0).unwrap(), 1);
    assert_eq!(complex.homology_group_differential(0, 0).unwrap(), 1);
}

#[test]
fn test_incidence_matrix_matches_template() {
    let complex = Complex::new(config::<2>(false), sum_objective(), Vec::new()).unwrap();
    let matrix = complex.incidence_matrix();
    let template = complex.adjacency_template();

    assert_eq!(matrix.len(), 5);
    for (i, row) in matrix.iter().enumerate() {
        assert_eq!(row.len(), 5);
        for (j, &entry) in row.iter().enumerate() {
            assert_eq!(entry == 1, template.neighbors(i).contains(&j));
        }
    }
}

// =============================================================================
// SYMMETRIC MODE
// =============================================================================

#[test]
fn test_2d_symmetric_root() {
    let complex = Complex::new(config::<2>(true), sum_objective(), Vec::new()).unwrap();
    assert!(complex.is_symmetric());

    let root = complex.initial_cell().as_simplex().unwrap();
    assert_eq!(root.number_of_vertices(), 3);

    let vertices: Vec<_> = root
        .vertices()
        .iter()
        .map(|&key| complex.cache().vertex(key).unwrap())
        .collect();
    let orders: Vec<f64> = vertices.iter().map(|v| v.order()).collect();
    assert_eq!(orders, vec![0.0, 1.0, 2.0]);
    assert_eq!(vertices[1].point(), &Point::new([1.0, 0.0]));

    // Staircase simplex is a triangle.
    assert_eq!(complex.edges().len(), 3);
    assert_eq!(complex.adjacency_template().len(), 3);
    assert_eq!(complex.adjacency_template().centroid_position(), None);
}

#[test]
fn test_4d_symmetric_root_is_complete_graph() {
    let complex = Complex::new(config::<4>(true), sum_objective(), Vec::new()).unwrap();
    assert_eq!(complex.total_vertices(), 5);
    assert_eq!(complex.edges().len(), 10);
    assert_eq!(
        complex.initial_cell().as_simplex().unwrap().generation_cycle(),
        1
    );
}

// =============================================================================
// CONFIGURATION & EVALUATION
// =============================================================================

#[test]
fn test_configuration_errors() {
    let err = Complex::new(ComplexConfig::<0>::default(), sum_objective(), Vec::new()).unwrap_err();
    assert_eq!(err, ComplexConstructionError::InvalidDimension { dimension: 0 });

    let err = Complex::new(config::<1>(true), sum_objective(), Vec::new()).unwrap_err();
    assert_eq!(
        err,
        ComplexConstructionError::SymmetryRequiresDimension { dimension: 1 }
    );

    // 1D hypercube mode is fine: origin, supremum, centroid.
    let complex = Complex::new(config::<1>(false), sum_objective(), Vec::new()).unwrap();
    assert_eq!(complex.total_vertices(), 3);
    assert_eq!(complex.edges().len(), 2);
}

#[test]
fn test_bounds_rescale_objective_input() {
    let bounds = Bounds::new([(-1.0, 1.0), (10.0, 20.0)]).unwrap();
    let config = ComplexConfigBuilder::<2>::default()
        .bounds(bounds)
        .build()
        .unwrap();

    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let objective: BoxedScalarFunction<2> = Box::new(move |x: &[f64; 2]| {
        log.borrow_mut().push(*x);
        x[0] * x[1]
    });
    let complex = Complex::new(config, objective, Vec::new()).unwrap();

    let centroid = complex
        .cache()
        .key_of(&Point::new([0.5, 0.5]))
        .and_then(|key| complex.cache().get(key))
        .unwrap();
    assert_relative_eq!(centroid.domain_point().coords()[0], 0.0);
    assert_relative_eq!(centroid.domain_point().coords()[1], 15.0);
    assert_relative_eq!(centroid.value(), 0.0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 5);
    assert!(seen.iter().all(|x| (-1.0..=1.0).contains(&x[0])));
    assert!(seen.iter().all(|x| (10.0..=20.0).contains(&x[1])));
}

#[test]
fn test_infeasible_vertices_are_stored_but_not_counted() {
    let objective: BoxedScalarFunction<2> = Box::new(|x: &[f64; 2]| x[0] - x[1]);
    let below_diagonal: BoxedScalarFunction<2> = Box::new(|x: &[f64; 2]| x[0] - x[1]);
    let complex =
        Complex::new(ComplexConfig::default(), objective, vec![below_diagonal]).unwrap();

    // (0, 1) is the only corner strictly above the diagonal.
    assert_eq!(complex.total_vertices(), 5);
    assert_eq!(complex.total_evaluations(), 4);

    let infeasible = complex
        .cache()
        .key_of(&Point::new([0.0, 1.0]))
        .and_then(|key| complex.cache().get(key))
        .unwrap();
    assert!(!infeasible.is_feasible());
    assert!(infeasible.value().is_infinite());
}

#[test]
fn test_root_evaluation_error_aborts_construction() {
    let objective: BoxedScalarFunction<2> =
        Box::new(Fallible(|x: &[f64; 2]| -> Result<f64, EvaluationError> {
            if x[0] > 0.9 && x[1] > 0.9 {
                Err(EvaluationError::failed(x, "singular at the supremum"))
            } else {
                Ok(x[0])
            }
        }));
    let err = Complex::new(ComplexConfig::default(), objective, Vec::new()).unwrap_err();
    assert!(matches!(err, ComplexConstructionError::Evaluation(_)));
    assert!(err.to_string().contains("singular at the supremum"));
}
