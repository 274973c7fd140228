use numarray::{
    arr1, array, DType, NumArray, INF, LINE_WIDTH, NAN, NEG_INF, PRINT_EDGE_ITEMS, PRINT_THRESHOLD,
};

#[test]
fn creation_walkthrough() {
    let arr = array![-1, 2, 5; DType::Float32].unwrap();
    assert_eq!(arr.repr(), "array([-1.,  2.,  5.], dtype=float32)");

    let arr1 = array![0, 0.1, 2];
    assert_eq!(arr1.repr(), "array([0. , 0.1, 2. ])");
}

#[test]
fn copying_walkthrough() {
    let a = array![0, 1];
    let c = a.alias();
    assert_eq!(format!("Array a: {}", a.repr()), "Array a: array([0, 1])");
    c.set(0, 5).unwrap();
    assert_eq!(format!("Array a: {}", a.repr()), "Array a: array([5, 1])");
}

#[test]
fn special_values_walkthrough() {
    assert_eq!(array![NAN, 1, 2].repr(), "array([nan,  1.,  2.])");
    assert_eq!(array![NAN, "abc"].repr(), "array([nan, 'abc'], dtype=object)");
    assert_eq!(array![INF, 5].repr(), "array([inf,  5.])");
    assert_eq!(array![NEG_INF, 1].repr(), "array([-inf,   1.])");
}

#[test]
fn object_text_quoting() {
    assert_eq!(array![1, "it's"].repr(), r#"array([1, "it's"], dtype=object)"#);
    assert_eq!(array![1, "it's"].to_string(), r#"[1 "it's"]"#);
}

#[test]
fn dtype_suffix() {
    assert_eq!(arr1(&[0i32, 1]).repr(), "array([0, 1], dtype=int32)");
    assert_eq!(array![1, 2].repr(), "array([1, 2])");
    assert_eq!(array![].repr(), "array([], dtype=float64)");
    assert_eq!(array![; DType::Int32].unwrap().repr(), "array([], dtype=int32)");
}

#[test]
fn ints_right_aligned() {
    assert_eq!(array![5, 10, -100].repr(), "array([   5,   10, -100])");
}

#[test]
fn float32_digits() {
    let a = array![0.1, 1.5; DType::Float32].unwrap();
    assert_eq!(a.repr(), "array([0.1, 1.5], dtype=float32)");
}

#[test]
fn scientific() {
    assert_eq!(array![1e-5, 1.5e-5].repr(), "array([1.0e-05, 1.5e-05])");
    assert_eq!(array![1e8, 1].repr(), "array([1.e+08, 1.e+00])");
}

#[test]
fn display() {
    assert_eq!(array![0, 0.1, 2].to_string(), "[0.  0.1 2. ]");
    assert_eq!(array![NAN, "abc"].to_string(), "[nan 'abc']");
    assert_eq!(array![1, 2, 3].to_string(), "[1 2 3]");
    assert_eq!(array![].to_string(), "[]");
}

#[test]
fn debug_has_storage_info() {
    let a = array![1, 2];
    let _b = a.alias();
    assert_eq!(format!("{:?}", a), "array([1, 2]) shape=[2], dtype=int64, handles=2");
}

#[test]
fn wraps_long_lines() {
    let a: NumArray = NumArray::from_vec((0..40i64).collect());
    let s = a.repr();
    let lines: Vec<&str> = s.lines().collect();
    assert!(lines.len() > 1);
    assert!(lines[0].starts_with("array([ 0,  1,"));
    for line in &lines[1..] {
        assert!(line.starts_with("       "));
    }
    assert!(lines.iter().all(|line| line.len() <= LINE_WIDTH));
    assert!(s.ends_with("39])"));
}

#[test]
fn wraps_dtype_suffix() {
    let a = NumArray::from_vec((0..22i32).map(|i| i * 1000).collect::<Vec<_>>());
    let s = a.repr();
    assert!(s.lines().all(|line| line.len() <= LINE_WIDTH));
    assert!(s.ends_with("dtype=int32)"));
}

#[test]
fn summarizes_large_arrays() {
    let n = PRINT_THRESHOLD + 1;
    let a = NumArray::from_vec((0..n as i64).collect());
    let s = a.repr();
    assert_eq!(s, "array([   0,    1,    2, ...,  998,  999, 1000])");
    assert_eq!(s.matches(", ").count(), 2 * PRINT_EDGE_ITEMS);

    let b = NumArray::from_vec((0..PRINT_THRESHOLD as i64).collect());
    assert!(!b.repr().contains("..."));
}
