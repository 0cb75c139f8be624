//! Two uses of decrease-key against the same heap shape: a Dijkstra-style
//! edge relaxation, and a dynamic task-priority adjustment. Each keeps the
//! handle returned by `insert` around so it can retarget that exact node
//! later; a Fibonacci heap has no increase-key, so the lowered-then-raised
//! task is left as a comment rather than performed (would need delete +
//! re-insert).

use heapix::FibonacciHeap;

fn dijkstra_relaxation() {
    println!("=== Dijkstra-style edge relaxation ===");
    let mut heap: FibonacciHeap<i32, usize> = FibonacciHeap::new();

    let distances = [0, 1000, 1000, 1000, 1000];
    let handles: Vec<_> = distances
        .iter()
        .enumerate()
        .map(|(vertex, &distance)| heap.insert(distance, vertex).unwrap())
        .collect();

    println!("Relaxing edges into vertices 1, 2, 3:");
    heap.decrease_key(handles[1], 10).unwrap();
    heap.decrease_key(handles[2], 5).unwrap();
    heap.decrease_key(handles[3], 15).unwrap();

    println!("Visiting vertices in order of shortest distance:");
    while let Some((distance, vertex)) = heap.extract_min() {
        println!("visit vertex {vertex} (distance {distance})");
    }
}

fn dynamic_task_priorities() {
    println!("\n=== Dynamic task priority adjustment ===");
    let mut heap: FibonacciHeap<i32, &str> = FibonacciHeap::new();

    let tasks = [
        (5, "Email processing"),
        (3, "Database backup"),
        (7, "User request"),
        (2, "System update"),
        (8, "Log cleanup"),
    ];
    let handles: Vec<_> = tasks
        .iter()
        .map(|&(priority, name)| heap.insert(priority, name).unwrap())
        .collect();

    println!("An urgent email arrived, raising its priority to 1:");
    heap.decrease_key(handles[0], 1).unwrap();

    // "System update" becoming less urgent would be an increase-key, which
    // this heap doesn't support directly; a caller emulates it with
    // `heap.delete(handles[3])` followed by a fresh `heap.insert(6, ...)`.

    println!("Executing tasks in priority order:");
    while let Some((priority, name)) = heap.extract_min() {
        println!("{name} (priority {priority})");
    }
}

fn main() {
    dijkstra_relaxation();
    dynamic_task_priorities();
}
