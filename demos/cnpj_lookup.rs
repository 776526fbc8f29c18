use std::time::Duration;

use cadastro::core::Cnpj;
use cadastro::lookup::*;

#[tokio::main]
async fn main() {
    let cnpjs = [
        "11.444.777/0001-61",
        "00.000.000/0001-91", // Banco do Brasil
    ];

    // BrasilAPI tolerates a few requests per minute from anonymous
    // clients; the limiter keeps us under that.
    let mut limiter = FixedWindowLimiter::per_minute(3);

    for raw in &cnpjs {
        let cnpj = match Cnpj::parse(raw) {
            Ok(c) => c,
            Err(e) => {
                println!("{raw} => {e}");
                continue;
            }
        };

        while let Err(wait) = limiter.try_acquire() {
            println!("rate limit reached, waiting {}s...", wait.as_secs());
            tokio::time::sleep(wait + Duration::from_secs(1)).await;
        }

        match lookup_cnpj(&cnpj).await {
            Ok(record) => {
                println!("{cnpj}:");
                println!("  legal name: {}", record.razao_social.as_deref().unwrap_or("—"));
                println!("  trade name: {}", record.nome_fantasia.as_deref().unwrap_or("—"));
                println!(
                    "  status:     {}",
                    record.descricao_situacao_cadastral.as_deref().unwrap_or("—")
                );
                println!(
                    "  location:   {} / {}",
                    record.municipio.as_deref().unwrap_or("—"),
                    record.uf.as_deref().unwrap_or("—")
                );
            }
            Err(e) => println!("{cnpj} => {e}"),
        }
    }
}
