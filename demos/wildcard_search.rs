use cadastro::core::*;

fn main() {
    // Reconstruct a CPF with two unknown digits
    println!("=== Wildcard Search ===\n");

    let pattern = "11144477*3*";
    match resolve(pattern) {
        Ok(found) => {
            println!("  {pattern} => {} valid completion(s):", found.len());
            for cpf in &found {
                println!("    {cpf}  ({})", cpf.as_digits());
            }
        }
        Err(e) => println!("  {pattern} => error: {e}"),
    }

    // Unknown check digits: at most one completion exists
    let pattern = "111.444.777-**";
    let found = resolve(pattern).unwrap();
    println!("\n  {pattern} => {:?}", found.iter().map(|c| c.to_string()).collect::<Vec<_>>());

    // With many wildcards the search space is 10^k; consume lazily
    // instead of materializing the full result set.
    println!("\n=== Lazy Consumption ===\n");

    let pattern = "111.4**.***-**";
    let candidates = Candidates::new(pattern).unwrap();
    println!(
        "  {pattern} has {} wildcards (10^{} candidates); first 5 hits:",
        candidates.wildcard_count(),
        candidates.wildcard_count()
    );
    for cpf in candidates.take(5) {
        println!("    {cpf}");
    }

    // Malformed patterns are a usage error, not an empty result
    match resolve("111*") {
        Ok(_) => unreachable!(),
        Err(e) => println!("\n  resolve(\"111*\") => error: {e}"),
    }
}
