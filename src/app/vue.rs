// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Disposition du panneau :
// - indicateur (opérande + opérateur en attente), petit, aligné à droite
// - affichage principal, gros, aligné à droite
// - pavé 4 colonnes, "0" sur deux colonnes
//
// Le moteur n’est jamais lu ici autrement que par ses deux textes.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Jeton, Operateur, TrigFn};

const TAILLE_AFFICHAGE: f32 = 26.0;
const TAILLE_INDICATEUR: f32 = 13.0;
const TAILLE_BOUTON: f32 = 18.0;
const ESPACE: f32 = 6.0;

/// Lignes du pavé (None = case vide). Le "0" est élargi à deux colonnes.
const PAVE: [[Option<Jeton>; 4]; 7] = [
    [
        Some(Jeton::Trig(TrigFn::Sin)),
        Some(Jeton::Trig(TrigFn::Cos)),
        Some(Jeton::Trig(TrigFn::Tan)),
        Some(Jeton::Racine),
    ],
    [
        Some(Jeton::Effacer),
        Some(Jeton::Signe),
        Some(Jeton::Pourcentage),
        Some(Jeton::Operateur(Operateur::Divise)),
    ],
    [
        Some(Jeton::Chiffre(7)),
        Some(Jeton::Chiffre(8)),
        Some(Jeton::Chiffre(9)),
        Some(Jeton::Operateur(Operateur::Fois)),
    ],
    [
        Some(Jeton::Chiffre(4)),
        Some(Jeton::Chiffre(5)),
        Some(Jeton::Chiffre(6)),
        Some(Jeton::Operateur(Operateur::Moins)),
    ],
    [
        Some(Jeton::Chiffre(1)),
        Some(Jeton::Chiffre(2)),
        Some(Jeton::Chiffre(3)),
        Some(Jeton::Operateur(Operateur::Plus)),
    ],
    [Some(Jeton::Chiffre(0)), None, Some(Jeton::Point), Some(Jeton::Egal)],
    [
        Some(Jeton::Pi),
        Some(Jeton::Carre),
        Some(Jeton::Inverse),
        Some(Jeton::Retour),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Ligne du haut : dernière touche à gauche, indicateur à droite.
                // Hauteur réservée même vide (pas de saut de mise en page).
                ui.horizontal(|ui| {
                    if let Some(j) = self.derniere {
                        ui.label(egui::RichText::new(libelle(j)).size(TAILLE_INDICATEUR).weak());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let txt = if self.indicateur().is_empty() {
                            " "
                        } else {
                            self.indicateur()
                        };
                        ui.label(
                            egui::RichText::new(txt)
                                .size(TAILLE_INDICATEUR)
                                .strong()
                                .weak(),
                        );
                    });
                });

                // Affichage principal : nombres longs => défilement horizontal, jamais tronqués
                egui::ScrollArea::horizontal()
                    .id_salt("ecran_affichage")
                    .stick_to_right(true)
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let mut rt = egui::RichText::new(self.affichage())
                                .size(TAILLE_AFFICHAGE)
                                .monospace()
                                .strong();
                            if self.en_erreur() {
                                rt = rt.color(ui.visuals().error_fg_color);
                            }
                            ui.add(egui::Label::new(rt).wrap_mode(egui::TextWrapMode::Extend));
                        });
                    });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let colonnes = 4.0;
        let lignes = PAVE.len() as f32;

        // Boutons carrés-ish qui remplissent la place disponible.
        let larg = ((ui.available_width() - ESPACE * (colonnes - 1.0)) / colonnes).max(40.0);
        let haut = ((ui.available_height() - ESPACE * (lignes - 1.0)) / lignes).clamp(36.0, 72.0);

        for ligne in PAVE.iter() {
            ui.horizontal(|ui| {
                let mut i = 0;
                while i < ligne.len() {
                    match ligne[i] {
                        // case suivante vide => double largeur
                        Some(j) if ligne.get(i + 1) == Some(&None) => {
                            self.bouton(ui, j, [2.0 * larg + ESPACE, haut]);
                            i += 2;
                        }
                        Some(j) => {
                            self.bouton(ui, j, [larg, haut]);
                            i += 1;
                        }
                        None => i += 1,
                    }
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, jeton: Jeton, taille: [f32; 2]) {
        let texte = egui::RichText::new(libelle(jeton)).size(TAILLE_BOUTON);
        let mut b = egui::Button::new(texte).corner_radius(6.0);
        if jeton == Jeton::Egal {
            b = b.fill(ui.visuals().selection.bg_fill);
        }

        let mut resp = ui.add_sized(taille, b);
        if let Some(txt) = aide(jeton) {
            resp = resp.on_hover_text(txt);
        }
        if resp.clicked() {
            self.appuyer(jeton);
        }
    }
}

/// Libellé affiché sur le bouton.
/// ⌫ n’est pas dans les polices par défaut d’egui : "DEL" à la place.
fn libelle(jeton: Jeton) -> &'static str {
    match jeton {
        Jeton::Retour => "DEL",
        j => j.label(),
    }
}

fn aide(jeton: Jeton) -> Option<&'static str> {
    let txt = match jeton {
        Jeton::Effacer => "Remise à zéro (Échap)",
        Jeton::Retour => "Efface le dernier chiffre (Retour arrière)",
        Jeton::Signe => "Change le signe",
        Jeton::Pourcentage => "Divise par 100",
        Jeton::Racine => "Racine carrée",
        Jeton::Carre => "Carré",
        Jeton::Inverse => "Inverse",
        Jeton::Pi => "π ≈ 3.14159265359",
        Jeton::Trig(_) => "Angle en degrés",
        Jeton::Egal => "Résultat (Entrée)",
        _ => return None,
    };
    Some(txt)
}
