//! Tests scientifiques (campagne) : scénarios de bout en bout sur le moteur.
//!
//! Chaque test rejoue une suite de touches comme sur le pavé, puis vérifie
//! l’affichage et, quand c’est utile, l’état interne.
//!
//! Notes :
//! - Les nombres flottants non entiers gardent leur écriture la plus courte
//!   (0.1 + 0.2 = 0.30000000000000004), seuls les entiers exacts sont "repliés".
//! - Le bruit trig (|x| < 1e-10) est remis à 0, d’où sin(180°) = 0.

use std::time::{Duration, Instant};

use super::jetons::Jeton;
use super::moteur::{Moteur, PI_AFFICHE, TEXTE_ERREUR};

fn taper(m: &mut Moteur, touches: &str) -> String {
    let mut dernier = m.affichage().to_string();
    for t in touches.split_whitespace() {
        let j: Jeton = t
            .parse()
            .unwrap_or_else(|e| panic!("touches={touches:?} err={e}"));
        dernier = m.appliquer(j).to_string();
    }
    dernier
}

fn assert_affiche(touches: &str, attendu: &str) {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, touches), attendu, "touches={touches:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn sci_saisie_reproduit_le_litteral() {
    for lit in ["7", "42", "3.14", "0.5", "0.05", "100.001", "9876543210", "0"] {
        let mut m = Moteur::new();
        let touches: Vec<String> = lit.chars().map(|c| c.to_string()).collect();
        let aff = taper(&mut m, &touches.join(" "));
        assert_eq!(aff, lit, "lit={lit:?}");
        assert_eq!(m.point_vu(), lit.contains('.'), "lit={lit:?}");
    }
}

#[test]
fn sci_saisie_zeros_de_tete_replies() {
    assert_affiche("0 0 7", "7");
    assert_affiche("0 0 . 5", "0.5");
    assert_affiche(". 2 5", "0.25");
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_un_plus_un() {
    assert_affiche("1 + 1 =", "2");
}

#[test]
fn sci_repli_entier() {
    assert_affiche("2 . 5 × 4 =", "10");
    assert_affiche("7 ÷ 2 =", "3.5");
    assert_affiche("1 - 3 =", "-2");
    assert_affiche("0 . 1 + 0 . 2 =", "0.30000000000000004");
}

#[test]
fn sci_egal_repete_operande() {
    // "5 + =" : l’opérande courant sert aussi de second opérande
    assert_affiche("5 + =", "10");
}

#[test]
fn sci_chaine_gauche_a_droite() {
    // pas de priorité : ((2 + 3) × 4) - 6
    assert_affiche("2 + 3 × 4 - 6 =", "14");
}

#[test]
fn sci_resultat_puis_nouvelle_saisie() {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, "6 × 7 ="), "42");
    assert_eq!(taper(&mut m, "1"), "1");
    assert_eq!(m.operateur(), None);
}

#[test]
fn sci_resultat_reutilise() {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, "6 × 7 ="), "42");
    assert_eq!(taper(&mut m, "÷ 2 ="), "21");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_division_par_zero() {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, "5 ÷ 0 ="), TEXTE_ERREUR);
    assert_eq!(taper(&mut m, "3"), "3");
    assert_eq!(m.saisie(), "3");
}

#[test]
fn sci_erreurs_de_domaine() {
    assert_affiche("4 ± √", TEXTE_ERREUR);
    assert_affiche("0 . 1/x", TEXTE_ERREUR);
    assert_affiche("9 0 tan", TEXTE_ERREUR);
    assert_affiche("2 7 0 tan", TEXTE_ERREUR);
    assert_affiche("9 0 ± tan", TEXTE_ERREUR);
}

#[test]
fn sci_erreur_puis_effacer() {
    let mut m = Moteur::new();
    taper(&mut m, "1 ÷ 0 =");
    assert_eq!(taper(&mut m, "C"), "0");
    assert_eq!(m, Moteur::new());
}

/* ------------------------ Fonctions ------------------------ */

#[test]
fn sci_racine() {
    assert_affiche("9 √", "3");
    assert_affiche("0 √", "0");
    assert_affiche("2 √", "1.4142135623730951");
    assert_affiche("0 . 2 5 √", "0.5");

    // √ d’une valeur positive ou nulle réussit toujours
    for n in 0..200u32 {
        let mut m = Moteur::new();
        for c in n.to_string().chars() {
            m.appliquer(Jeton::Chiffre(c.to_digit(10).unwrap() as u8));
        }
        let aff = m.appliquer(Jeton::Racine).to_string();
        assert_ne!(aff, TEXTE_ERREUR, "n={n}");
    }
}

#[test]
fn sci_trig_degres() {
    assert_affiche("1 8 0 sin", "0");
    assert_affiche("3 6 0 sin", "0");
    assert_affiche("9 0 sin", "1");
    assert_affiche("2 7 0 cos", "0");
    assert_affiche("0 cos", "1");
    assert_affiche("1 8 0 tan", "0");
}

#[test]
fn sci_trig_approche() {
    let mut m = Moteur::new();
    let aff = taper(&mut m, "3 0 sin");
    let v: f64 = aff.parse().unwrap();
    assert!((v - 0.5).abs() < 1e-12, "sin(30°) = {aff}");
}

#[test]
fn sci_pi() {
    assert_affiche("π", PI_AFFICHE);
    assert_affiche("π x²", "9.869604401090658");
    assert_affiche("1 8 0 ÷ π =", "57.29577951307855");
}

#[test]
fn sci_pourcentage() {
    assert_affiche("2 5 %", "0.25");
    assert_affiche("2 0 0 %", "2");
    assert_affiche("5 ± %", "-0.05");
    // pourcentage d’un résultat
    assert_affiche("1 0 × 5 = %", "0.5");
}

/* ------------------------ Édition ------------------------ */

#[test]
fn sci_retour_point() {
    let mut m = Moteur::new();
    assert_eq!(taper(&mut m, "1 2 ."), "12.");
    assert_eq!(taper(&mut m, "⌫"), "12");
    assert!(!m.point_vu());
    assert_eq!(taper(&mut m, ". 7"), "12.7");
}

#[test]
fn sci_effacer_idempotent() {
    let scenarios = [
        "",
        "1 2 3",
        "1 . 5 +",
        "9 ÷ 0 =",
        "π sin ×",
        "4 ± x² - 2 =",
        "C C",
    ];

    let start = Instant::now();
    for s in scenarios {
        budget(start, Duration::from_secs(2));
        let mut m = Moteur::new();
        taper(&mut m, s);
        assert_eq!(taper(&mut m, "C"), "0", "scenario={s:?}");
        assert_eq!(m, Moteur::new(), "scenario={s:?}");
        assert_eq!(taper(&mut m, "C"), "0");
        assert_eq!(m, Moteur::new(), "scenario={s:?} (2e C)");
    }
}
