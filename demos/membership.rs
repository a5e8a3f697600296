use sparsesets::SparseSet;

fn main() -> Result<(), sparsesets::Error> {
    let mut set: SparseSet = SparseSet::new(5);

    // Perform some mutations, inserting and removing elements.
    set.insert(2)?;
    set.insert(3)?;
    set.insert(4)?;
    set.remove(3)?;

    println!("{set}");

    println!("In the set:");
    for e in &set {
        println!(" {e}");
    }

    // No guarantee is provided on the order in which absent elements are returned.
    println!("Not in the set:");
    for e in set.iter_absent() {
        println!(" {e}: {}", set.contains(e));
    }

    if let Err(err) = set.insert(5) {
        println!("{err}");
    }
    Ok(())
}
