use stack::{BoundedStack, Error};

fn main() -> Result<(), Error> {
    let mut stack = BoundedStack::new()?;

    stack.push("Hello")?;
    stack.push("World")?;
    stack.push("OpenAI")?;

    while let Ok(value) = stack.pop() {
        println!("popped: {value}");
    }
    match stack.pop() {
        Err(error) => eprintln!("pop on empty stack: {error}"),
        Ok(_) => unreachable!(),
    }

    // Push past the initial capacity to show growth.
    for i in 0..BoundedStack::INITIAL_CAPACITY * 2 {
        stack.push(format!("String {i}"))?;
    }
    println!(
        "{} values held, capacity grew to {}",
        stack.len(),
        stack.capacity()
    );

    while let Ok(value) = stack.pop() {
        println!("popped: {value}");
    }

    Ok(())
}
