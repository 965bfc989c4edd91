//! src/app/etat.rs
//!
//! État de la coquille (sans vue).
//!
//! Rôle : posséder le noyau (accumulateur + historique) et porter les
//! quelques drapeaux purement UI (panneau d'historique). Construit
//! explicitement depuis le contexte eframe : aucun singleton ambiant.
//!
//! Contrats :
//! - Aucune arithmétique ici : la coquille relaie les frappes et lit l'état.
//! - Actions déterministes, sans effet de bord caché.

use crate::noyau::{Accumulateur, Historique};

/// Clé de persistance de l'historique (eframe::Storage).
pub const CLE_HISTORIQUE: &str = "historique";

#[derive(Default)]
pub struct AppBureau {
    // --- noyau ---
    pub calc: Accumulateur,
    pub historique: Historique,

    // --- UI ---
    pub panneau_historique: bool,
}

impl AppBureau {
    /// Construit la coquille, en restaurant l'historique de la session
    /// précédente s'il existe.
    pub fn nouveau(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        if let Some(storage) = cc.storage {
            if let Some(historique) = eframe::get_value::<Historique>(storage, CLE_HISTORIQUE) {
                app.historique = historique;
            }
        }
        app
    }

    /// `=` : évalue et consigne le calcul abouti dans l'historique.
    pub fn evalue(&mut self) {
        if let Some(calcul) = self.calc.egal() {
            self.historique.consigne(calcul);
        }
    }

    /// Reprend le résultat d'une entrée du panneau, puis referme celui-ci.
    pub fn reprend_entree(&mut self, resultat: &str) {
        self.calc.reprend_resultat(resultat);
        self.panneau_historique = false;
    }

    /// Échap : referme le panneau s'il est ouvert, sinon remet à zéro.
    pub fn echappement(&mut self) {
        if self.panneau_historique {
            self.panneau_historique = false;
        } else {
            self.calc.reset_total();
        }
    }
}
