// src/noyau/trig.rs
//
// sin/cos/tan en DEGRÉS
// ---------------------
// - conversion degrés -> radians avant évaluation
// - bruit flottant nettoyé (snap_zero) : sin(180°) = 0, cos(90°) = 0
// - tan indéfinie quand cos (nettoyé) vaut 0 : 90°, 270°, -90°…

use super::erreur::ErreurMoteur;
use super::format::snap_zero;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

impl TrigFn {
    pub fn nom(self) -> &'static str {
        match self {
            TrigFn::Sin => "sin",
            TrigFn::Cos => "cos",
            TrigFn::Tan => "tan",
        }
    }
}

/// Évalue `f(degres)`. Le résultat est déjà nettoyé du bruit flottant.
pub fn evaluer_degres(f: TrigFn, degres: f64) -> Result<f64, ErreurMoteur> {
    let rad = degres.to_radians();

    let v = match f {
        TrigFn::Sin => rad.sin(),
        TrigFn::Cos => rad.cos(),
        TrigFn::Tan => {
            if snap_zero(rad.cos()) == 0.0 {
                return Err(ErreurMoteur::TangenteIndefinie);
            }
            rad.tan()
        }
    };

    if !v.is_finite() {
        return Err(ErreurMoteur::Depassement);
    }
    Ok(snap_zero(v))
}
