//! Basic usage of the `sparse_array` crate:
//!
//! * Creating an array.
//! * Pushing and popping values.
//! * Reading and writing by index.
//! * Sparse writes that leave holes behind.

use sparse_array::SparseArray;

fn main() {
    let mut array = SparseArray::<String>::new(2);

    // Stack discipline: values pile up from index 0.
    array.push("Alice".to_string());
    array.push("Bob".to_string());

    // The array was full, so this push grew it by one grow step (2 slots).
    array.push("Charlie".to_string());

    println!(
        "Array holds {} values in {} slots (grow step {})",
        array.len(),
        array.capacity(),
        array.grow_step()
    );

    // The same slots are addressable by index.
    if let Some(name) = array.get(1) {
        println!("Index 1 holds: {name}");
    }

    // Writing far beyond the length grows the array and leaves holes behind.
    array.set(10, "Zoe".to_string());

    println!(
        "After a sparse write the length is {} and index 5 reads {:?}",
        array.len(),
        array.get(5)
    );

    // Popping walks back down through the holes.
    while !array.is_empty() {
        match array.pop() {
            Some(name) => println!("Popped: {name}"),
            None => println!("Popped a hole"),
        }
    }
}
