use approx::assert_relative_eq;
use num_complex::Complex64;
use strided_map::{
    binary, binary_ndarray, masked_unary, nullary, quaternary, quinary, ternary, unary, unary_by,
    unary_ndarray, Indexable, IndexableMut, InterleavedComplex, SparseVec,
};

#[test]
fn test_unary_abs_contiguous() {
    let x = vec![-1.0, -2.0, -3.0, -4.0, -5.0];
    let mut y = vec![0.0; 5];

    unary(&x, &mut y, [5], [1, 1], f64::abs);

    assert_eq!(y, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_unary_strided_input_partial_output() {
    let x = vec![-1.0, -2.0, -3.0, -4.0, -5.0];
    let mut y = vec![0.0; 5];

    // Only the first three outputs are written, from x[0], x[2], x[4].
    unary(&x, &mut y, [3], [2, 1], f64::abs);

    assert_eq!(y, vec![1.0, 3.0, 5.0, 0.0, 0.0]);
}

#[test]
fn test_ternary_add() {
    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = x.clone();
    let z = x.clone();
    let mut w = vec![0.0; 5];

    ternary(&x, &y, &z, &mut w, [5], [1, 1, 1, 1], |a, b, c| a + b + c);

    assert_eq!(w, vec![3.0, 6.0, 9.0, 12.0, 15.0]);
}

#[test]
fn test_zero_and_negative_shape_are_noops() {
    let x = vec![-1.0, -2.0, -3.0];
    let mut y = vec![0.0; 3];

    unary(&x, &mut y, [0], [1, 1], f64::abs);
    assert_eq!(y, vec![0.0, 0.0, 0.0]);

    unary(&x, &mut y, [-1], [1, 1], f64::abs);
    assert_eq!(y, vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_ndarray_negative_stride_visits_reverse_order() {
    let x = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let mut y = vec![0.0; 5];
    let mut visited = Vec::new();

    // Stride -1 from offset L-1 walks L-1, L-2, ..., 0.
    unary_ndarray(&x, &mut y, [5], [-1, 1], [4, 0], |v| {
        visited.push(v);
        v
    });

    assert_eq!(visited, vec![50.0, 40.0, 30.0, 20.0, 10.0]);
    assert_eq!(y, vec![50.0, 40.0, 30.0, 20.0, 10.0]);
}

#[test]
fn test_ndarray_skip_sampling_from_interior() {
    let x: Vec<f64> = (1..=10).map(f64::from).collect();
    let mut y = vec![0.0; 4];

    // Every third element starting at physical index 1.
    unary_ndarray(&x, &mut y, [3], [3, 1], [1, 0], |v| v);

    assert_eq!(y, vec![2.0, 5.0, 8.0, 0.0]);
}

#[test]
fn test_binary_writing_backward() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![10.0, 10.0, 10.0];
    let mut y = vec![0.0; 3];

    binary_ndarray(&a, &b, &mut y, [3], [1, 1, -1], [0, 0, 2], |p, q| p * q);

    assert_eq!(y, vec![30.0, 20.0, 10.0]);
}

#[test]
fn test_nullary_fill_and_quaternary_quinary() {
    let mut y = vec![0.0; 3];
    nullary(&mut y, [3], [1], || 2.5);
    assert_eq!(y, vec![2.5; 3]);

    let x = vec![1.0, 2.0, 3.0];
    let mut w = vec![0.0; 3];
    quaternary(&x, &x, &x, &x, &mut w, [3], [1, 1, 1, 1, 1], |a, b, c, d| {
        a + b + c + d
    });
    assert_eq!(w, vec![4.0, 8.0, 12.0]);

    let mut v = vec![0.0; 3];
    quinary(
        &x,
        &x,
        &x,
        &x,
        &x,
        &mut v,
        [3],
        [1, 1, 1, 1, 1, 1],
        |a, b, c, d, e| a + b + c + d + e,
    );
    assert_eq!(v, vec![5.0, 10.0, 15.0]);
}

#[test]
fn test_stateful_operation_sees_logical_order() {
    let x = vec![5.0, 6.0, 7.0, 8.0];
    let mut y = vec![0.0; 4];
    let mut count = 0.0;

    unary(&x, &mut y, [4], [-1, 1], |v| {
        count += 1.0;
        v + count
    });

    // Input is walked backward but invocations happen in logical order,
    // so the running count pairs with x reversed.
    assert_eq!(y, vec![9.0, 9.0, 9.0, 9.0]);
}

#[test]
fn test_complex_accessor_traversal() {
    let x = InterleavedComplex::from_complex(&[
        Complex64::new(1.0, 2.0),
        Complex64::new(3.0, 4.0),
        Complex64::new(5.0, 6.0),
    ]);
    let mut y = InterleavedComplex::<f64>::zeros(3);

    unary(&x, &mut y, [3], [1, 1], |z: Complex64| z * 2.0);

    assert_eq!(
        y.to_complex_vec(),
        vec![
            Complex64::new(2.0, 4.0),
            Complex64::new(6.0, 8.0),
            Complex64::new(10.0, 12.0),
        ]
    );
}

#[test]
fn test_complex_to_real_projection() {
    let x = InterleavedComplex::from_interleaved(vec![1.0, -1.0, 2.0, -2.0, 3.0, -3.0]).unwrap();
    let mut y = vec![0.0; 3];

    unary(&x, &mut y, [3], [1, 1], |z: Complex64| z.re);

    assert_eq!(y, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_complex_norm_relative() {
    let x = InterleavedComplex::from_interleaved(vec![3.0, 4.0, 8.0, 6.0]).unwrap();
    let mut y = vec![0.0; 2];

    unary(&x, &mut y, [2], [1, 1], |z: Complex64| z.norm());

    assert_relative_eq!(y[0], 5.0, epsilon = 1e-12);
    assert_relative_eq!(y[1], 10.0, epsilon = 1e-12);
}

#[test]
fn test_masked_unary_skips_masked_outputs() {
    let x = vec![-1.0, -2.0, -3.0, -4.0, -5.0];
    let m = vec![0u8, 0, 1, 0, 0];
    let mut y = vec![0.0; 5];

    masked_unary(&x, &m, &mut y, [5], [1, 1, 1], f64::abs);

    assert_eq!(y, vec![1.0, 2.0, 0.0, 4.0, 5.0]);
}

#[test]
fn test_masked_unary_with_accessor_input() {
    let x = InterleavedComplex::from_interleaved(vec![-1.0, -2.0, -3.0, -4.0, -5.0, -6.0]).unwrap();
    let m = vec![0u8, 1, 0];
    let mut y = vec![0.0; 3];

    masked_unary(&x, &m, &mut y, [3], [1, 1, 1], |z: Complex64| z.re);

    assert_eq!(y, vec![-1.0, 0.0, -5.0]);
}

#[test]
fn test_unary_by_over_sparse_holes() {
    // Holes read as NaN and the broker drops them; only the set element
    // reaches the operation.
    let x = SparseVec::from_pairs(5, f64::NAN, &[(2, -3.0)]);
    let mut y = vec![0.0; 5];

    unary_by(&x, &mut y, [5], [1, 1], f64::abs, |v| {
        if v.is_nan() {
            None
        } else {
            Some(v * 2.0)
        }
    });

    assert_eq!(y, vec![0.0, 0.0, 6.0, 0.0, 0.0]);
}

#[test]
fn test_sparse_output_drops_out_of_range_writes() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let mut y = SparseVec::new(2, 0.0);

    // Writes at physical indices 2 and 3 land past the sparse length.
    unary(&x, &mut y, [4], [1, 1], |v| v * 10.0);

    assert_eq!(y.to_vec(), vec![10.0, 20.0]);
    assert_eq!(y.count_set(), 2);
}

#[test]
fn test_zero_stride_broadcast_input() {
    let scalar = vec![100.0];
    let x = vec![1.0, 2.0, 3.0];
    let mut y = vec![0.0; 3];

    binary(&x, &scalar, &mut y, [3], [1, 0, 1], |a, b| a + b);

    assert_eq!(y, vec![101.0, 102.0, 103.0]);
}

#[test]
fn test_operation_panic_leaves_prefix_written() {
    let x = vec![1.0, 2.0, -1.0, 4.0];
    let y = std::sync::Mutex::new(vec![0.0; 4]);

    let result = std::panic::catch_unwind(|| {
        let mut guard = y.lock().unwrap();
        unary(&x, &mut *guard, [4], [1, 1], |v| {
            assert!(v > 0.0, "negative element");
            v * 2.0
        });
    });

    assert!(result.is_err());
    // Elements before the panicking index were written in order.
    let written = y.into_inner().unwrap_or_else(|e| e.into_inner());
    assert_eq!(written, vec![2.0, 4.0, 0.0, 0.0]);
}

#[test]
fn test_indexable_object_safety() {
    // Kernels accept unsized trait objects as buffers.
    let x: Vec<f64> = vec![1.0, 4.0, 9.0];
    let dyn_x: &dyn Indexable<Elem = f64> = &x;
    let mut y = vec![0.0; 3];
    let dyn_y: &mut dyn IndexableMut<Elem = f64> = &mut y;

    unary(dyn_x, dyn_y, [3], [1, 1], f64::sqrt);

    assert_eq!(y, vec![1.0, 2.0, 3.0]);
}
