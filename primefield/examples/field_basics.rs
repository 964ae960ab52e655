//! Example: prime field arithmetic
//!
//! Walks through the basic operations in a toy field and in the secp256k1
//! base field. Run with `RUST_LOG=debug` to see rejected operations logged.

use primefield::{FieldElement, FieldResult, PrimeField, Secp256k1};

fn main() -> FieldResult<()> {
    env_logger::init();

    println!("\n📌 F_97:");
    let f97 = PrimeField::new(97u32)?;
    let a = f97.element(95u32)?;
    let b = f97.element(45u32)?;
    let c = f97.element(31u32)?;
    println!("  a = {}, b = {}, c = {}", a, b, c);
    println!("  a + b     = {}", a.add(&b)?);
    println!("  a - b     = {}", a.sub(&b)?);
    println!("  a * b * c = {}", a.mul(&b)?.mul(&c)?);
    println!("  a^-1      = {}", a.inverse()?);
    println!("  a^96      = {}  (Fermat)", a.pow(96)?);

    println!("\n📌 Rejections:");
    if let Err(e) = FieldElement::from_u64(13, 13) {
        println!("  FieldElement(13, 13): {}", e);
    }
    let other = FieldElement::from_u64(5, 13)?;
    if let Err(e) = a.add(&other) {
        println!("  {} + {}: {}", a, other, e);
    }
    if let Err(e) = f97.zero().pow(-1) {
        println!("  0^-1: {}", e);
    }

    println!("\n📌 secp256k1 base field:");
    let fk = PrimeField::of::<Secp256k1>()?;
    let x = fk.element(2u32)?;
    let inv = x.inverse()?;
    println!("  p      = {}", fk.prime());
    println!("  2^-1   = {}", inv.value());
    println!("  2*2^-1 = {}", x.mul(&inv)?.value());

    Ok(())
}
