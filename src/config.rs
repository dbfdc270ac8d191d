// src/config.rs
//
// Configuration du panneau (fenêtre + logs)
// -----------------------------------------
// - NATIF : options en ligne de commande (clap)
// - WEB   : valeurs par défaut (pas de ligne de commande)
//
// Le moteur n’a aucune option : ses constantes vivent dans noyau/.

/// Taille par défaut du panneau (fixe sauf --redimensionnable).
pub const LARGEUR_DEFAUT: f32 = 420.0;
pub const HAUTEUR_DEFAUT: f32 = 580.0;

/// Garde-fous : fenêtre utilisable, pas démesurée.
const LARGEUR_MIN: f32 = 320.0;
const HAUTEUR_MIN: f32 = 460.0;
const COTE_MAX: f32 = 4096.0;

/// Filtre tracing par défaut (écrasé par RUST_LOG).
pub const LOG_DEFAUT: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub largeur: f32,
    pub hauteur: f32,
    pub redimensionnable: bool,
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            largeur: LARGEUR_DEFAUT,
            hauteur: HAUTEUR_DEFAUT,
            redimensionnable: false,
            log: LOG_DEFAUT.to_string(),
        }
    }
}

impl Config {
    /// Bornes appliquées à la taille demandée.
    pub fn bornee(mut self) -> Self {
        self.largeur = self.largeur.clamp(LARGEUR_MIN, COTE_MAX);
        self.hauteur = self.hauteur.clamp(HAUTEUR_MIN, COTE_MAX);
        self
    }

    pub fn taille(&self) -> [f32; 2] {
        [self.largeur, self.hauteur]
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;

    use super::{Config, HAUTEUR_DEFAUT, LARGEUR_DEFAUT, LOG_DEFAUT};

    /// Calculatrice scientifique (pavé + moteur saisie/opérateur).
    #[derive(Parser, Debug)]
    #[command(version)]
    pub struct Options {
        /// Largeur de la fenêtre (points)
        #[arg(long, default_value_t = LARGEUR_DEFAUT)]
        pub largeur: f32,

        /// Hauteur de la fenêtre (points)
        #[arg(long, default_value_t = HAUTEUR_DEFAUT)]
        pub hauteur: f32,

        /// Autorise le redimensionnement (fenêtre fixe par défaut)
        #[arg(long)]
        pub redimensionnable: bool,

        /// Filtre de logs tracing (ex: "debug", "calculatrice_scientifique=trace").
        /// RUST_LOG a priorité.
        #[arg(long, default_value = LOG_DEFAUT)]
        pub log: String,
    }

    impl From<Options> for Config {
        fn from(o: Options) -> Self {
            Config {
                largeur: o.largeur,
                hauteur: o.hauteur,
                redimensionnable: o.redimensionnable,
                log: o.log,
            }
            .bornee()
        }
    }

    impl Config {
        /// Lit la ligne de commande du processus.
        pub fn depuis_ligne_de_commande() -> Self {
            Options::parse().into()
        }
    }

}
