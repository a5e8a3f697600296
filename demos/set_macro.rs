use sparsesets::{sparse_set, SparseSet};

fn main() {
    let mut set: SparseSet<u32> = sparse_set![64; 4, 32, 16, 24, 63];
    assert!(set.contains(32));
    assert!(set.contains(63));

    set.insert(25).expect("25 is below the capacity");

    println!("Set contents:");
    for x in set.iter() {
        println!("{x}");
    }
}
