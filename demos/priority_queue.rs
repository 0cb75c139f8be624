//! Basic priority queue usage: insert a handful of tasks, drain them in
//! priority order.

use heapix::FibonacciHeap;

fn main() {
    let mut heap: FibonacciHeap<i32, &str> = FibonacciHeap::new();

    heap.insert(3, "Low priority task").unwrap();
    heap.insert(1, "High priority task").unwrap();
    heap.insert(2, "Medium priority task").unwrap();
    heap.insert(0, "Critical task").unwrap();

    println!("Processing tasks by priority:");
    while let Some((priority, task)) = heap.extract_min() {
        println!("Priority {priority}: {task}");
    }
}
