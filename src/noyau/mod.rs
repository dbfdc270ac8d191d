//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - jetons.rs   : touches du pavé (chiffres, opérateurs, fonctions, édition)
//! - moteur.rs   : machine à états saisie / opérateur / affichage
//! - format.rs   : affichage des nombres (entiers repliés, bruit → 0)
//! - trig.rs     : sin/cos/tan en degrés
//! - decimal.rs  : pourcentage exact sur le littéral décimal
//! - erreur.rs   : erreurs de domaine

pub mod decimal;
pub mod erreur;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use jetons::{Jeton, Operateur};
pub use moteur::Moteur;
pub use trig::TrigFn;
