//! Merging two heaps, then inspecting the forest's shape before and after
//! the consolidation extract-min triggers.

use heapix::{diagnostics, FibonacciHeap};

fn heap_union() {
    println!("=== Heap union ===");
    let mut heap1: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    let mut heap2: FibonacciHeap<i32, ()> = FibonacciHeap::new();

    for v in [10, 5, 15] {
        heap1.insert(v, ()).unwrap();
    }
    for v in [3, 8, 12] {
        heap2.insert(v, ()).unwrap();
    }

    println!(
        "heap1 minimum: {:?}, heap2 minimum: {:?}",
        heap1.key_of(heap1.minimum().unwrap()),
        heap2.key_of(heap2.minimum().unwrap()),
    );

    heap1.merge(&mut heap2);
    println!(
        "after merge: size {}, minimum {:?}",
        heap1.len(),
        heap1.key_of(heap1.minimum().unwrap())
    );
    assert!(heap2.is_empty());

    print!("extracting:");
    while let Some((k, _)) = heap1.extract_min() {
        print!(" {k}");
    }
    println!();
}

fn heap_statistics() {
    println!("\n=== Heap statistics ===");
    let mut heap: FibonacciHeap<i32, ()> = FibonacciHeap::new();
    for v in (1..=20).rev() {
        heap.insert(v, ()).unwrap();
    }

    let before = diagnostics::statistics(&heap);
    println!("before any extraction: {before:?}");
    diagnostics::validate(&heap).expect("freshly inserted forest is all singleton roots");

    for _ in 0..5 {
        let (k, _) = heap.extract_min().unwrap();
        println!("extracted {k}");
    }

    let after = diagnostics::statistics(&heap);
    println!("after 5 extractions (consolidation ran): {after:?}");
    diagnostics::validate(&heap).expect("heap stays structurally valid across extract_min");

    print!("{}", diagnostics::format_structure(&heap));
}

fn main() {
    heap_union();
    heap_statistics();
}
