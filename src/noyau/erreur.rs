// src/noyau/erreur.rs
//
// Erreurs de domaine du moteur.
// Aucune ne sort du moteur : elles deviennent l’affichage "Error" + remise à zéro
// du calcul en attente (voir moteur.rs).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurMoteur {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("racine carrée d’un nombre négatif")]
    RacineNegative,

    #[error("inverse de zéro")]
    InverseDeZero,

    #[error("tangente indéfinie (cos = 0)")]
    TangenteIndefinie,

    /// Résultat non fini (inf / NaN).
    #[error("dépassement de capacité")]
    Depassement,

    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),
}

/// Symbole inconnu reçu par `Jeton::from_str`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurJeton {
    #[error("jeton inconnu: '{0}'")]
    Inconnu(String),
}
