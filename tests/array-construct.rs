use defmac::defmac;
use numarray::{arr1, array, DType, ErrorKind, NumArray, Scalar, INF, NAN, NEG_INF};

#[test]
fn test_infer_int() {
    let a = array![-1, 2, 5];
    assert_eq!(a.dtype(), DType::Int64);
    assert!(a.dtype().is_integer());
    assert_eq!(a.to_typed_vec::<i64>(), Some(vec![-1, 2, 5]));
}

#[test]
fn test_infer_mixed_promotes() {
    let a = array![0, 0.1, 2];
    assert_eq!(a.dtype(), DType::Float64);
    assert_eq!(a.to_typed_vec::<f64>(), Some(vec![0., 0.1, 2.]));
    assert_eq!(a.get(0), Some(Scalar::Float(0.)));
}

#[test]
fn test_infer_sentinels_are_float() {
    defmac!(float_dtype a => assert_eq!(a.dtype(), DType::Float64));
    float_dtype!(array![NAN, 1, 2]);
    float_dtype!(array![INF, 5]);
    float_dtype!(array![NEG_INF, 1]);
}

#[test]
fn test_infer_object_keeps_values() {
    let a = array![NAN, "abc"];
    assert_eq!(a.dtype(), DType::Object);
    let values = a.to_vec();
    assert!(values[0].is_nan());
    assert_eq!(values[1], Scalar::Text("abc".to_owned()));

    let b = array![1, "x", 2.5];
    assert_eq!(b.to_vec(), vec![Scalar::Int(1), Scalar::from("x"), Scalar::Float(2.5)]);
    assert!(matches!(b.get(0), Some(Scalar::Int(1))));
}

#[test]
fn test_empty() {
    let a = array![];
    assert!(a.is_empty());
    assert_eq!(a.dtype(), DType::Float64);
    assert_eq!(a.shape(), [0]);
}

#[test]
fn test_explicit_dtype() {
    let a = array![-1, 2, 5; DType::Float32].unwrap();
    assert_eq!(a.dtype(), DType::Float32);
    assert_eq!(a.to_typed_vec::<f32>(), Some(vec![-1., 2., 5.]));

    let b = array![1.9, -1.9; DType::Int32].unwrap();
    assert_eq!(b.to_typed_vec::<i32>(), Some(vec![1, -1]));

    let c = array!["7", " 8"; DType::Int64].unwrap();
    assert_eq!(c.to_typed_vec::<i64>(), Some(vec![7, 8]));

    let d = array![1, 2; DType::Object].unwrap();
    assert_eq!(d.dtype(), DType::Object);
}

#[test]
fn test_explicit_int_rejects_nan() {
    let err = array![NAN, 1, 2; DType::Int32].unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.index(), Some(0));
}

#[test]
fn test_explicit_int_rejects_inf() {
    let err = array![INF, 3; DType::Int32].unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    let err = array![1, NEG_INF; DType::Int64].unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    assert_eq!(err.index(), Some(1));
}

#[test]
fn test_explicit_int_range() {
    let err = NumArray::with_dtype(vec![Scalar::from(i64::MAX)], DType::Int32).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    let err = array!["abc"; DType::Float32].unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_from_typed() {
    let a = arr1(&[1i32, 2, 3]);
    assert_eq!(a.dtype(), DType::Int32);
    let b = NumArray::from(vec![0.5f64]);
    assert_eq!(b.dtype(), DType::Float64);
    assert_eq!(b.ndim(), 1);
}
