use cadastro::core::*;

fn main() {
    // Checksum validation over mixed input styles
    println!("=== CPF Validation ===\n");

    let cpfs = [
        "111.444.777-35",
        "11144477735",
        "111.444.777-36", // wrong check digit
        "111.111.111-11", // repeated digits, never assigned
        "111.444.777",    // too short
    ];

    for cpf in &cpfs {
        let verdict = if validate(cpf, IdKind::Cpf) { "valid" } else { "INVALID" };
        println!("  {cpf} => {verdict}");
    }

    println!("\n=== CNPJ Validation ===\n");

    let cnpjs = [
        "11.444.777/0001-61",
        "11444777000161",
        "11.444.777/0001-60", // wrong check digit
        "00.000.000/0000-00", // repeated digits
    ];

    for cnpj in &cnpjs {
        let verdict = if validate(cnpj, IdKind::Cnpj) { "valid" } else { "INVALID" };
        println!("  {cnpj} => {verdict}");
    }

    // Typed identifiers round-trip between masked and bare forms
    println!("\n=== Typed Identifiers ===\n");

    let cpf = Cpf::parse("11144477735").unwrap();
    println!("  parsed CPF: {cpf} (digits: {})", cpf.as_digits());

    let cnpj = Cnpj::parse("11444777000161").unwrap();
    println!("  parsed CNPJ: {cnpj} (digits: {})", cnpj.as_digits());

    match Cpf::parse("123") {
        Ok(_) => unreachable!(),
        Err(e) => println!("  Cpf::parse(\"123\") => {e}"),
    }
}
