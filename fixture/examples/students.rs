use fixture::{FixtureResult, Record};

fn main() -> FixtureResult<()> {
    let mut students = init_example_data();

    println!("Students:");
    for student in &students {
        println!("  {}", student);
    }

    students[1].set_rank(1);
    students[0].set_rank(2);
    println!("Swapped ranks:\n  {}\n  {}", students[0], students[1]);

    let bytes = students[2].to_bytes()?;
    println!(
        "Snapshot of {} is {} bytes, restored as:\n  {}",
        students[2].name(),
        bytes.len(),
        Record::from_bytes(&bytes)?
    );

    Ok(())
}

fn init_example_data() -> Vec<Record> {
    vec![
        Record::new(1, "John", 18, 0, 1),
        Record::new(2, "Bill", 40, 0, 2),
        Record::new(3, "Coraline", 16, 1, 3),
    ]
}
