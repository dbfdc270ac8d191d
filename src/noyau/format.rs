// src/noyau/format.rs
//
// Affichage des nombres du moteur
// -------------------------------
// - entier exact  => pas de partie fractionnaire ("2", pas "2.0")
// - -0            => "0"
// - sinon         => plus courte écriture décimale qui relit la même valeur
// - jamais de notation exponentielle (la saisie doit rester un littéral décimal)

/// En dessous de ce seuil, un résultat trig est considéré comme un zéro exact.
pub const SEUIL_ZERO: f64 = 1e-10;

/// Formate une valeur finie pour l’affichage (et pour la saisie).
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        // couvre aussi -0.0
        return "0".to_string();
    }
    if v.fract() == 0.0 {
        return format!("{v:.0}");
    }
    // Display de f64 : plus courte représentation, sans exposant.
    format!("{v}")
}

/// Bruit flottant : |v| < SEUIL_ZERO => 0 exact (ex: sin(180°) = 1.2e-16).
pub fn snap_zero(v: f64) -> f64 {
    if v.abs() < SEUIL_ZERO {
        0.0
    } else {
        v
    }
}
