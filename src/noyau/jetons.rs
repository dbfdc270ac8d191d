// src/noyau/jetons.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurJeton;
use super::trig::TrigFn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché (bouton + indicateur).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// `a op b` en flottant. Le cas b == 0 pour ÷ est traité par le moteur.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    Chiffre(u8), // 0..=9
    Point,

    Operateur(Operateur),
    Egal,

    Effacer, // C
    Retour,  // ⌫
    Signe,   // ±

    Pourcentage,
    Racine,
    Carre,
    Inverse,
    Pi,
    Trig(TrigFn),
}

impl Jeton {
    /// Libellé du bouton sur le pavé.
    pub fn label(self) -> &'static str {
        match self {
            Jeton::Chiffre(d) => {
                const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
                CHIFFRES[usize::from(d.min(9))]
            }
            Jeton::Point => ".",
            Jeton::Operateur(op) => op.symbole(),
            Jeton::Egal => "=",
            Jeton::Effacer => "C",
            Jeton::Retour => "⌫",
            Jeton::Signe => "±",
            Jeton::Pourcentage => "%",
            Jeton::Racine => "√",
            Jeton::Carre => "x²",
            Jeton::Inverse => "1/x",
            Jeton::Pi => "π",
            Jeton::Trig(f) => f.nom(),
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lit un libellé de bouton ou un alias clavier.
/// Supporte:
/// - chiffres 0..9, "." (et "," clavier FR)
/// - + - − * × / ÷ =
/// - C / c / AC, ⌫ / DEL / Backspace, ±, %
/// - √ / sqrt, x² / sqr, 1/x / inv, π / pi
/// - sin, cos, tan (insensible à la casse)
impl FromStr for Jeton {
    type Err = ErreurJeton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();

        if t.len() == 1 {
            if let Some(d) = t.chars().next().and_then(|c| c.to_digit(10)) {
                return Ok(Jeton::Chiffre(d as u8));
            }
        }

        let j = match t {
            "." | "," => Jeton::Point,

            "+" => Jeton::Operateur(Operateur::Plus),
            "-" | "−" => Jeton::Operateur(Operateur::Moins),
            "*" | "×" | "x" => Jeton::Operateur(Operateur::Fois),
            "/" | "÷" => Jeton::Operateur(Operateur::Divise),
            "=" => Jeton::Egal,

            "±" | "+/-" => Jeton::Signe,
            "%" => Jeton::Pourcentage,
            "√" => Jeton::Racine,
            "x²" => Jeton::Carre,
            "1/x" => Jeton::Inverse,
            "π" => Jeton::Pi,
            "⌫" => Jeton::Retour,

            _ => match t.to_lowercase().as_str() {
                "c" | "ac" | "clear" => Jeton::Effacer,
                "del" | "backspace" => Jeton::Retour,
                "sqrt" => Jeton::Racine,
                "sqr" => Jeton::Carre,
                "inv" => Jeton::Inverse,
                "pi" => Jeton::Pi,
                "sin" => Jeton::Trig(TrigFn::Sin),
                "cos" => Jeton::Trig(TrigFn::Cos),
                "tan" => Jeton::Trig(TrigFn::Tan),
                _ => return Err(ErreurJeton::Inconnu(s.to_string())),
            },
        };

        Ok(j)
    }
}

/// Format utilitaire (logs / tests) : suite de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.label())
        .collect::<Vec<_>>()
        .join(" ")
}
