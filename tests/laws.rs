//! Black-box tests against only the public API: the laws and boundary
//! cases a mergeable addressable min-priority queue must satisfy.

use heapix::{diagnostics, FibonacciHeap, HeapError};

fn drain<K: Ord + Copy, V>(heap: &mut FibonacciHeap<K, V>) -> Vec<K> {
    let mut out = Vec::new();
    while let Some((k, _)) = heap.extract_min() {
        out.push(k);
    }
    out
}

#[test]
fn empty_heap_boundary_cases() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert!(heap.minimum().is_none());
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn single_element_round_trip() {
    let mut heap: FibonacciHeap<i32, &str> = FibonacciHeap::new();
    heap.insert(42, "answer").unwrap();
    assert_eq!(heap.extract_min(), Some((42, "answer")));
    assert!(heap.is_empty());
}

#[test]
fn sort_law_holds_for_arbitrary_insertion_order() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    for k in [3, 1, 2, 0] {
        heap.insert(k, ()).unwrap();
    }
    assert_eq!(drain(&mut heap), vec![0, 1, 2, 3]);
}

#[test]
fn sort_law_holds_across_a_consolidating_extraction() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    for k in (1..=20).rev() {
        heap.insert(k, ()).unwrap();
    }
    assert_eq!(heap.len(), 20);
    // No consolidation has run yet: every insert is a pure root-list splice.
    assert_eq!(diagnostics::statistics(&heap).root_nodes, 20);

    assert_eq!(heap.extract_min(), Some((1, ())));
    let root_bound = (19f64.ln() / 1.618_033_988_749_895f64.ln()).floor() as usize + 1;
    assert!(diagnostics::statistics(&heap).root_nodes <= root_bound);

    let mut rest = vec![1];
    rest.extend(drain(&mut heap));
    assert_eq!(rest, (1..=20).collect::<Vec<_>>());
}

#[test]
fn scenario_build_and_drain_six_keys() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    for k in [10, 5, 15, 3, 8, 12] {
        heap.insert(k, ()).unwrap();
    }
    assert_eq!(drain(&mut heap), vec![3, 5, 8, 10, 12, 15]);
}

#[test]
fn decrease_key_law() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    heap.insert(10, ()).unwrap();
    heap.insert(5, ()).unwrap();
    let fifteen = heap.insert(15, ()).unwrap();

    heap.decrease_key(fifteen, 2).unwrap();
    assert_eq!(heap.key_of(heap.minimum().unwrap()), Some(2));
    assert_eq!(drain(&mut heap), vec![2, 5, 10]);
}

#[test]
fn decrease_key_to_same_value_is_a_legal_no_op() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let h = heap.insert(7, ()).unwrap();
    assert_eq!(heap.decrease_key(h, 7), Ok(()));
    assert_eq!(heap.key_of(h), Some(7));
}

#[test]
fn decrease_key_above_current_fails() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let h = heap.insert(7, ()).unwrap();
    assert_eq!(heap.decrease_key(h, 8), Err(HeapError::InvalidKey));
}

#[test]
fn decrease_key_on_current_minimum_reevaluates_minimum() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let min = heap.insert(5, ()).unwrap();
    heap.insert(10, ()).unwrap();
    heap.decrease_key(min, 1).unwrap();
    assert_eq!(heap.key_of(heap.minimum().unwrap()), Some(1));
}

#[test]
fn merge_law() {
    let mut a: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    a.insert(10, ()).unwrap();
    a.insert(5, ()).unwrap();

    let mut b: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    b.insert(15, ()).unwrap();
    b.insert(3, ()).unwrap();

    a.merge(&mut b);
    assert_eq!(a.len(), 4);
    assert!(b.is_empty());
    assert_eq!(drain(&mut a), vec![3, 5, 10, 15]);
}

#[test]
fn merge_empty_into_non_empty_is_a_no_op_on_contents() {
    let mut a: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    a.insert(1, ()).unwrap();
    a.insert(2, ()).unwrap();

    let mut empty: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    a.merge(&mut empty);

    assert_eq!(a.len(), 2);
    assert_eq!(drain(&mut a), vec![1, 2]);
}

#[test]
fn merge_non_empty_into_empty_transfers_everything() {
    let mut empty: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let mut source: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    source.insert(9, ()).unwrap();
    source.insert(4, ()).unwrap();

    empty.merge(&mut source);

    assert!(source.is_empty());
    assert_eq!(empty.len(), 2);
    assert_eq!(drain(&mut empty), vec![4, 9]);
}

#[test]
fn handles_from_either_heap_stay_valid_after_merge() {
    let mut a: FibonacciHeap<i32, &str> = FibonacciHeap::new();
    let a_handle = a.insert(100, "from a").unwrap();

    let mut b: FibonacciHeap<i32, &str> = FibonacciHeap::new();
    let b_handle = b.insert(50, "from b").unwrap();

    a.merge(&mut b);

    assert_eq!(a.key_of(a_handle), Some(100));
    assert_eq!(a.key_of(b_handle), Some(50));
    a.decrease_key(a_handle, 1).unwrap();
    assert_eq!(a.key_of(a.minimum().unwrap()), Some(1));
}

#[test]
fn delete_reduces_size_and_matches_skip_semantics() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let mut handles = Vec::new();
    for k in [5, 3, 7, 2, 8] {
        handles.push(heap.insert(k, ()).unwrap());
    }

    heap.delete(handles[2]).unwrap(); // key 7
    assert_eq!(heap.len(), 4);
    assert_eq!(drain(&mut heap), vec![2, 3, 5, 8]);
}

#[test]
fn delete_of_current_minimum_equals_extract_min() {
    let mut heap: FibonacciHeap<i32, &str> = FibonacciHeap::new();
    let min = heap.insert(1, "min").unwrap();
    heap.insert(5, "other").unwrap();

    heap.delete(min).unwrap();
    assert_eq!(drain(&mut heap), vec![5]);
}

#[test]
fn stale_handle_operations_are_reported_not_panics() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let h = heap.insert(1, ()).unwrap();
    heap.extract_min().unwrap();

    assert_eq!(heap.decrease_key(h, 0), Err(HeapError::NodeNotFound));
    assert_eq!(heap.delete(h), Err(HeapError::NodeNotFound));
    assert_eq!(heap.key_of(h), None);
    assert_eq!(heap.payload_of(h), None);
}

#[test]
fn size_law_tracks_insert_extract_and_delete_history() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let mut handles = Vec::new();
    for k in 0..10 {
        handles.push(heap.insert(k, ()).unwrap());
    }
    assert_eq!(heap.len(), 10);

    heap.extract_min().unwrap();
    assert_eq!(heap.len(), 9);

    heap.delete(handles[5]).unwrap();
    assert_eq!(heap.len(), 8);
}

#[test]
fn validator_finds_no_violation_across_a_mixed_sequence() {
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let mut handles = Vec::new();
    for k in (0..30).rev() {
        handles.push(heap.insert(k, ()).unwrap());
        diagnostics::validate(&heap).expect("valid after insert");
    }
    for h in &handles[10..15] {
        heap.decrease_key(*h, -1).unwrap();
        diagnostics::validate(&heap).expect("valid after decrease_key");
    }
    for _ in 0..10 {
        heap.extract_min();
        diagnostics::validate(&heap).expect("valid after extract_min");
    }
    heap.delete(handles[20]).unwrap();
    diagnostics::validate(&heap).expect("valid after delete");
}

#[test]
fn duplicate_keys_all_extract_in_one_sweep() {
    let mut heap: FibonacciHeap<i32, usize> = FibonacciHeap::new();
    for i in 0..5 {
        heap.insert(7, i).unwrap();
    }
    let mut seen = Vec::new();
    while let Some((k, v)) = heap.extract_min() {
        assert_eq!(k, 7);
        seen.push(v);
    }
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}
