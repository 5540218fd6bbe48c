//! `letras demo`: sample conversions, one table per output mode.

use letras_core::{ConversionResult, NumberFormatter};
use rust_decimal::Decimal;

/// Everyday values plus a few that stress every scale.
const SAMPLES: &[u64] = &[
    0, 1, 16, 21, 22, 23, 26, 31, 84, 100, 101, 123, 456, 789, 1000, 1016, 1234, 5678, 9999,
    10000, 12345, 50000, 100000, 250000, 500000, 1000000, 2500000, 10000000, 999999999,
    123456789, 987654321, 111111111, 222222222, 516726, 821031, 999000999, 100100100, 505050505,
];

/// Values whose words end in UNO.
const UNO_CASES: &[u64] = &[1, 21, 31, 101, 121, 1001];

/// (amount in cents, currency, cents unit)
const MONEY_CASES: &[(i64, &str, &str)] = &[
    (1050, "SOLES", "CÉNTIMOS"),
    (12345, "DÓLARES", "CENTAVOS"),
    (100000, "EUROS", "CÉNTIMOS"),
    (250075, "PESOS", "CENTAVOS"),
    (1000099, "LEMPIRAS", "CENTAVOS"),
];

/// Prints the three demo tables. The apocope column always uses a
/// formatter with apocope on, whatever `formatter` was configured with.
pub fn print(formatter: &NumberFormatter) -> ConversionResult<()> {
    println!("== Palabras");
    for &n in SAMPLES {
        println!("{:>13}  {}", n, formatter.to_words(Decimal::from(n), 0)?);
    }

    let plain = formatter.clone().with_apocope(false);
    let apocope = formatter.clone().with_apocope(true);

    println!();
    println!("== Apócope (sin / con / factura)");
    for &n in UNO_CASES {
        let value = Decimal::from(n);
        println!(
            "{:>13}  {} / {} / {}",
            n,
            plain.to_words(value, 2)?,
            apocope.to_words(value, 2)?,
            plain.to_invoice(value, 2, "SOLES")?
        );
    }

    println!();
    println!("== Moneda");
    for &(cents, currency, unit) in MONEY_CASES {
        let value = Decimal::new(cents, 2);
        println!(
            "{:>13}  {}",
            format!("{value} {currency}"),
            formatter.to_money(value, 2, currency, unit)?
        );
    }

    Ok(())
}
