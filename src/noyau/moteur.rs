//! Noyau — moteur de la calculatrice (machine à états)
//!
//! jeton -> mise à jour de l’état -> texte à afficher
//!
//! Contrats :
//! - `point_vu` ⇔ la saisie contient un '.'
//! - pas d’opérateur en attente ⇔ aucun calcul binaire en cours
//! - la saisie est vide ou un littéral décimal valide (jamais d’exposant, jamais "-" seul)
//! - toute erreur de domaine affiche "Error" et remet à zéro le calcul en cours

use tracing::{debug, warn};

use super::decimal::pourcentage;
use super::erreur::ErreurMoteur;
use super::format::format_nombre;
use super::jetons::{Jeton, Operateur};
use super::trig::{evaluer_degres, TrigFn};

/// Texte affiché pour toute erreur de domaine.
pub const TEXTE_ERREUR: &str = "Error";

/// Valeur écrite par la touche π (11 décimales).
pub const PI_AFFICHE: &str = "3.14159265359";

#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    // --- état de calcul ---
    saisie: String,
    point_vu: bool,
    operande: f64,
    operateur: Option<Operateur>,
    nouvelle_saisie: bool,
    // un second opérande a été saisi depuis le dernier opérateur
    operande_saisi: bool,

    // --- sorties ---
    affichage: String,
    indicateur: String,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            saisie: "0".to_string(),
            point_vu: false,
            operande: 0.0,
            operateur: None,
            nouvelle_saisie: false,
            operande_saisi: false,
            affichage: "0".to_string(),
            indicateur: String::new(),
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    /// Texte principal (nombre courant ou "Error").
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Indicateur secondaire : "<opérande> <op>" tant qu’un opérateur attend.
    pub fn indicateur(&self) -> &str {
        &self.indicateur
    }

    // Lecture seule de l’état interne (tests).
    #[cfg(test)]
    pub fn saisie(&self) -> &str {
        &self.saisie
    }

    #[cfg(test)]
    pub fn point_vu(&self) -> bool {
        self.point_vu
    }

    #[cfg(test)]
    pub fn operande(&self) -> f64 {
        self.operande
    }

    #[cfg(test)]
    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    #[cfg(test)]
    pub fn nouvelle_saisie(&self) -> bool {
        self.nouvelle_saisie
    }

    pub fn en_erreur(&self) -> bool {
        self.affichage == TEXTE_ERREUR
    }

    /* ------------------------ Point d’entrée ------------------------ */

    /// Applique un jeton et retourne le texte à afficher.
    pub fn appliquer(&mut self, jeton: Jeton) -> &str {
        let res = match jeton {
            Jeton::Chiffre(d) => {
                self.saisir_chiffre(d);
                Ok(())
            }
            Jeton::Point => {
                self.saisir_point();
                Ok(())
            }
            Jeton::Operateur(op) => self.choisir_operateur(op),
            Jeton::Egal => self.calculer(),
            Jeton::Effacer => {
                self.effacer();
                Ok(())
            }
            Jeton::Retour => {
                self.retour();
                Ok(())
            }
            Jeton::Signe => {
                self.changer_signe();
                Ok(())
            }
            Jeton::Pourcentage => self.appliquer_pourcentage(),
            Jeton::Racine => self.unaire(|v| {
                if v < 0.0 {
                    Err(ErreurMoteur::RacineNegative)
                } else {
                    Ok(v.sqrt())
                }
            }),
            Jeton::Carre => self.unaire(|v| Ok(v * v)),
            Jeton::Inverse => self.unaire(|v| {
                if v == 0.0 {
                    Err(ErreurMoteur::InverseDeZero)
                } else {
                    Ok(1.0 / v)
                }
            }),
            Jeton::Pi => {
                self.remplacer_saisie(PI_AFFICHE.to_string());
                self.nouvelle_saisie = true;
                Ok(())
            }
            Jeton::Trig(f) => self.trig(f),
        };

        if let Err(e) = res {
            warn!(jeton = %jeton, erreur = %e, "erreur de domaine");
            self.poser_erreur();
        }

        debug!(
            jeton = %jeton,
            saisie = %self.saisie,
            affichage = %self.affichage,
            indicateur = %self.indicateur,
            "jeton appliqué"
        );

        &self.affichage
    }

    /// Variante texte (libellé de bouton / touche clavier).
    /// Symbole inconnu => ignoré, l’affichage reste inchangé.
    #[cfg(test)]
    pub fn appliquer_symbole(&mut self, symbole: &str) -> &str {
        match symbole.parse::<Jeton>() {
            Ok(j) => self.appliquer(j),
            Err(e) => {
                warn!(erreur = %e, "symbole ignoré");
                &self.affichage
            }
        }
    }

    /* ------------------------ Saisie ------------------------ */

    fn debut_saisie(&mut self) {
        if self.nouvelle_saisie {
            self.saisie.clear();
            self.point_vu = false;
            self.nouvelle_saisie = false;
        }
        self.operande_saisi = true;
    }

    fn saisir_chiffre(&mut self, d: u8) {
        self.debut_saisie();

        let c = char::from(b'0' + d.min(9));
        // "0" et "-0" : le chiffre remplace le zéro de tête ("-0" + 5 => "-5")
        if self.saisie == "0" || self.saisie == "-0" {
            if c == '0' {
                self.affichage = self.saisie.clone();
                return;
            }
            self.saisie.pop();
        }
        self.saisie.push(c);
        self.affichage = self.saisie.clone();
    }

    fn saisir_point(&mut self) {
        self.debut_saisie();

        if !self.point_vu {
            if self.saisie.is_empty() {
                self.saisie.push_str("0.");
            } else {
                self.saisie.push('.');
            }
            self.point_vu = true;
        }
        self.affichage = self.saisie.clone();
    }

    /* ------------------------ Opérateurs binaires ------------------------ */

    fn choisir_operateur(&mut self, op: Operateur) -> Result<(), ErreurMoteur> {
        if self.saisie.is_empty() {
            return Ok(());
        }

        // Un second opérande a été saisi depuis le dernier opérateur : on résout d’abord.
        // Sinon on remplace simplement l’opérateur.
        if self.operateur.is_some() && self.operande_saisi {
            self.calculer()?;
        }

        self.operande = self.valeur_courante()?;
        self.operateur = Some(op);
        // Même mise en forme que l’affichage : "12 +", jamais "12.0 +".
        self.indicateur = format!("{} {}", format_nombre(self.operande), op.symbole());
        self.nouvelle_saisie = true;
        self.operande_saisi = false;
        Ok(())
    }

    fn calculer(&mut self) -> Result<(), ErreurMoteur> {
        let Some(op) = self.operateur else {
            return Ok(());
        };
        if self.saisie.is_empty() {
            return Ok(());
        }

        let b = self.valeur_courante()?;
        if op == Operateur::Divise && b == 0.0 {
            return Err(ErreurMoteur::DivisionParZero);
        }
        let r = fini(op.appliquer(self.operande, b))?;

        self.remplacer_saisie(format_nombre(r));
        self.operateur = None;
        self.indicateur.clear();
        self.nouvelle_saisie = true;
        self.operande_saisi = false;
        Ok(())
    }

    /* ------------------------ Édition ------------------------ */

    fn effacer(&mut self) {
        *self = Self::default();
    }

    fn retour(&mut self) {
        // Après une erreur : on repart de "0", affiché comme saisi.
        if self.saisie.is_empty() {
            self.remplacer_saisie("0".to_string());
            return;
        }

        self.operande_saisi = true;
        if self.saisie.pop() == Some('.') {
            self.point_vu = false;
        }
        if self.saisie.is_empty() || self.saisie == "-" {
            self.saisie = "0".to_string();
        }
        self.affichage = self.saisie.clone();
    }

    fn changer_signe(&mut self) {
        if self.saisie.is_empty() || self.saisie == "0" {
            return;
        }

        let s = match self.saisie.strip_prefix('-') {
            Some(reste) => reste.to_string(),
            None => format!("-{}", self.saisie),
        };
        self.remplacer_saisie(s);
    }

    /* ------------------------ Fonctions unaires ------------------------ */

    fn appliquer_pourcentage(&mut self) -> Result<(), ErreurMoteur> {
        if self.saisie.is_empty() {
            return Ok(());
        }
        let s = pourcentage(&self.saisie)?;
        self.remplacer_saisie(s);
        self.nouvelle_saisie = true;
        Ok(())
    }

    fn unaire(
        &mut self,
        f: impl FnOnce(f64) -> Result<f64, ErreurMoteur>,
    ) -> Result<(), ErreurMoteur> {
        if self.saisie.is_empty() {
            return Ok(());
        }
        let r = fini(f(self.valeur_courante()?)?)?;
        self.remplacer_saisie(format_nombre(r));
        self.nouvelle_saisie = true;
        Ok(())
    }

    fn trig(&mut self, f: TrigFn) -> Result<(), ErreurMoteur> {
        self.unaire(|deg| evaluer_degres(f, deg))
    }

    /* ------------------------ Outils ------------------------ */

    fn valeur_courante(&self) -> Result<f64, ErreurMoteur> {
        self.saisie
            .parse::<f64>()
            .map_err(|_| ErreurMoteur::NombreInvalide(self.saisie.clone()))
            .and_then(fini)
    }

    /// Nouvelle saisie complète (résultat, π, ±…) : `point_vu` suit le texte.
    /// Compte comme un opérande saisi.
    fn remplacer_saisie(&mut self, s: String) {
        self.point_vu = s.contains('.');
        self.operande_saisi = true;
        self.affichage = s.clone();
        self.saisie = s;
    }

    /// "Error" + calcul en cours abandonné ; le prochain chiffre repart de zéro.
    fn poser_erreur(&mut self) {
        self.saisie.clear();
        self.point_vu = false;
        self.operateur = None;
        self.indicateur.clear();
        self.nouvelle_saisie = false;
        self.operande_saisi = false;
        self.affichage = TEXTE_ERREUR.to_string();
    }
}

fn fini(v: f64) -> Result<f64, ErreurMoteur> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurMoteur::Depassement)
    }
}
