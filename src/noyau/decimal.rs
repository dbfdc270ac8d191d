// src/noyau/decimal.rs
//
// Décimal exact (pourcentage)
// ---------------------------
// La saisie est un littéral décimal fini : sa valeur est un rationnel p / 10^k.
// Diviser par 100 reste un décimal fini, donc on peut l’écrire exactement,
// sans le bruit de 12.3 / 100 = 0.12300000000000001 en flottant.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::erreur::ErreurMoteur;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Valeur exacte d’un littéral de saisie ("-12.50", "0.", "7").
pub fn parse_decimal(s: &str) -> Result<BigRational, ErreurMoteur> {
    let invalide = || ErreurMoteur::NombreInvalide(s.to_string());

    let (neg, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };

    let (ent, frac) = corps.split_once('.').unwrap_or((corps, ""));
    if ent.is_empty() || !ent.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalide());
    }
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalide());
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    let r = BigRational::new(n, pow10(frac.len()));

    Ok(if neg { -r } else { r })
}

/// Écriture décimale exacte de `r`, si son dénominateur n’a que des facteurs 2 et 5.
/// Entier => pas de point.
pub fn format_decimal(r: &BigRational) -> Option<String> {
    let neg = r.is_negative();
    let abs = r.abs();

    // nombre de décimales : max des puissances de 2 et de 5 du dénominateur
    let mut d = abs.denom().clone();
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);
    let (mut p2, mut p5) = (0usize, 0usize);
    while (&d % &deux).is_zero() {
        d /= &deux;
        p2 += 1;
    }
    while (&d % &cinq).is_zero() {
        d /= &cinq;
        p5 += 1;
    }
    if !d.is_one() {
        return None;
    }

    let k = p2.max(p5);
    let scaled = (abs.numer() * pow10(k)) / abs.denom();

    let mut txt = scaled.to_str_radix(10);
    if k > 0 {
        while txt.len() <= k {
            txt.insert(0, '0');
        }
        txt.insert(txt.len() - k, '.');
    }

    if neg && !abs.is_zero() {
        txt.insert(0, '-');
    }
    Some(txt)
}

/// `saisie / 100`, exact.
pub fn pourcentage(saisie: &str) -> Result<String, ErreurMoteur> {
    let r = parse_decimal(saisie)? / BigRational::from_integer(BigInt::from(100));
    // p/10^k / 100 = p/10^(k+2) : toujours un décimal fini
    format_decimal(&r).ok_or_else(|| ErreurMoteur::NombreInvalide(saisie.to_string()))
}
