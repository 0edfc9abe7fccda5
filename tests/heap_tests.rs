use cursorkit::{
    make_heap, make_heap_by, pop_heap, push_heap, sort_heap, Cursor, SliceCursor,
};
use rand::prelude::*;

fn is_max_heap<T: Ord>(v: &[T]) -> bool {
    (1..v.len()).all(|i| v[(i - 1) / 2] >= v[i])
}

#[test]
fn make_then_sort_heap() {
    let mut v = [4, 1, 3, 2, 16, 9, 10, 14, 8, 7];
    {
        let (begin, end) = SliceCursor::range(&mut v);
        make_heap(&begin, &end);
    }
    assert!(is_max_heap(&v));
    assert_eq!(v[0], 16);
    {
        let (begin, end) = SliceCursor::range(&mut v);
        sort_heap(&begin, &end);
    }
    assert_eq!(v, [1, 2, 3, 4, 7, 8, 9, 10, 14, 16]);
}

#[test]
fn push_heap_restores_invariant() {
    let mut v = vec![9, 5, 4, 1, 1, 3];
    assert!(is_max_heap(&v));
    v.push(6);
    {
        let (begin, end) = SliceCursor::range(&mut v);
        push_heap(&begin, &end);
    }
    assert!(is_max_heap(&v));
    assert_eq!(v.len(), 7);
    let mut sorted = v.clone();
    sorted.sort();
    assert_eq!(sorted, [1, 1, 3, 4, 5, 6, 9]);
}

#[test]
fn pop_heap_moves_root_to_back() {
    let mut v = vec![10, 7, 9, 1, 2, 8];
    assert!(is_max_heap(&v));
    {
        let (begin, end) = SliceCursor::range(&mut v);
        pop_heap(&begin, &end);
    }
    assert_eq!(*v.last().unwrap(), 10);
    assert!(is_max_heap(&v[..5]));
}

#[test]
fn heap_ops_on_tiny_ranges() {
    let mut empty: Vec<i32> = vec![];
    {
        let (begin, end) = SliceCursor::range(&mut empty);
        make_heap(&begin, &end);
        pop_heap(&begin, &end);
        push_heap(&begin, &end);
        sort_heap(&begin, &end);
    }
    assert!(empty.is_empty());

    let mut single = vec![5];
    {
        let (begin, end) = SliceCursor::range(&mut single);
        make_heap(&begin, &end);
        pop_heap(&begin, &end);
        sort_heap(&begin, &end);
    }
    assert_eq!(single, [5]);
}

#[test]
fn make_heap_by_min_heap() {
    let mut v = [4, 1, 3, 2, 16, 9, 10];
    {
        let (begin, end) = SliceCursor::range(&mut v);
        make_heap_by(&begin, &end, |a, b| b < a);
    }
    assert_eq!(v[0], 1);
    assert!((1..v.len()).all(|i| v[(i - 1) / 2] <= v[i]));
}

#[test]
fn incremental_heap_matches_full_rebuild() {
    let mut rng = StdRng::seed_from_u64(2024);
    let items: Vec<i32> = (0..200).map(|_| rng.gen_range(-50..50)).collect();

    // Grow the heap one push at a time.
    let mut grown: Vec<i32> = Vec::new();
    for &x in &items {
        grown.push(x);
        let (begin, end) = SliceCursor::range(&mut grown);
        push_heap(&begin, &end);
    }
    assert!(is_max_heap(&grown));

    // Drain it with pop_heap; that is heapsort by hand.
    for n in (2..=grown.len()).rev() {
        let (begin, _) = SliceCursor::range(&mut grown);
        let mut end = begin.clone();
        end.advance_by(n);
        pop_heap(&begin, &end);
    }
    let mut expected = items.clone();
    expected.sort();
    assert_eq!(grown, expected);
}

#[test]
fn heap_over_mid_sequence_range() {
    // The range need not start at the front of the backing sequence.
    let mut v = vec![100, 200, 4, 1, 3, 2, 16, 9, 300];
    {
        let (begin, _) = SliceCursor::range(&mut v);
        let mut from = begin.clone();
        from.advance_by(2);
        let mut to = begin;
        to.advance_by(8);
        make_heap(&from, &to);
        sort_heap(&from, &to);
    }
    assert_eq!(v, [100, 200, 1, 2, 3, 4, 9, 16, 300]);
}

#[test]
fn heapsort_matches_std_on_random_input() {
    let mut rng = StdRng::seed_from_u64(31337);
    for size in [2, 3, 10, 63, 64, 65, 500] {
        let mut v: Vec<u32> = (0..size).map(|_| rng.gen()).collect();
        let mut expected = v.clone();
        expected.sort();
        {
            let (begin, end) = SliceCursor::range(&mut v);
            make_heap(&begin, &end);
            sort_heap(&begin, &end);
        }
        assert_eq!(v, expected, "size {size}");
    }
}
