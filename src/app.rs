// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Traduire le clavier en jetons (le pavé, lui, est dans vue.rs)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::jetons::format_jetons;
use crate::noyau::Jeton;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier global : pas de champ texte dans le panneau, donc pas de conflit de focus.
        let jetons = ctx.input(|i| {
            i.events
                .iter()
                .flat_map(jetons_evenement)
                .collect::<Vec<_>>()
        });
        if !jetons.is_empty() {
            tracing::debug!(touches = %format_jetons(&jetons), "clavier");
        }
        for j in jetons {
            self.appuyer(j);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Un évènement egui -> 0..n jetons.
/// - texte : chaque caractère reconnu (chiffres, . , + - * / x = %)
/// - touches : Enter = "=", Backspace = ⌫, Escape/Delete = C
fn jetons_evenement(ev: &egui::Event) -> Vec<Jeton> {
    match ev {
        egui::Event::Text(t) => jetons_texte(t),
        egui::Event::Key {
            key, pressed: true, ..
        } => jeton_touche(*key).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn jetons_texte(t: &str) -> Vec<Jeton> {
    let mut buf = [0u8; 4];
    t.chars()
        .filter_map(|c| c.encode_utf8(&mut buf).parse::<Jeton>().ok())
        // "C"/"c" tapé au clavier : Escape suffit, on évite d’effacer par accident
        .filter(|j| *j != Jeton::Effacer)
        .collect()
}

fn jeton_touche(key: egui::Key) -> Option<Jeton> {
    match key {
        egui::Key::Enter => Some(Jeton::Egal),
        egui::Key::Backspace => Some(Jeton::Retour),
        egui::Key::Escape | egui::Key::Delete => Some(Jeton::Effacer),
        _ => None,
    }
}
