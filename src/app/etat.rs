//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur du panneau et offrir les actions "boutons".
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Moteur::appliquer`.
//! - Un panneau = un moteur, créé à l’ouverture, jeté à la fermeture.

use crate::noyau::{Jeton, Moteur};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- UX ---
    // Dernière touche appliquée (rappel au-dessus de l’affichage).
    pub derniere: Option<Jeton>,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Une touche du pavé ou du clavier.
    pub fn appuyer(&mut self, jeton: Jeton) {
        self.moteur.appliquer(jeton);
        self.derniere = Some(jeton);
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    pub fn indicateur(&self) -> &str {
        self.moteur.indicateur()
    }

    pub fn en_erreur(&self) -> bool {
        self.moteur.en_erreur()
    }
}
