//! Demonstrates the release hook: the callback through which a `SparseArray`
//! relinquishes ownership of values on overwrite, purge and teardown - and which
//! is never invoked when `pop()` transfers ownership back to the caller.

use std::cell::Cell;
use std::rc::Rc;

use sparse_array::SparseArray;

fn main() {
    let released = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&released);

    let mut array = SparseArray::new_with(4, move |value: String| {
        counter.set(counter.get() + 1);
        println!("Released: {value}");
    });

    array.push("one".to_string());
    array.push("two".to_string());
    array.push("three".to_string());

    // Overwriting a live slot releases the old value first.
    array.set(0, "ONE".to_string());
    println!("After overwrite: {} released", released.get());

    // Popping transfers ownership to the caller; the hook stays silent.
    let popped = array.pop();
    println!("Popped {popped:?}: still {} released", released.get());

    // Purging releases everything that is still live.
    array.purge();
    println!("After purge: {} released", released.get());

    // Teardown would release remaining values the same way; there are none left.
    drop(array);
    println!("After teardown: {} released", released.get());
}
