// src/app.rs
//
// Calculatrice de bureau — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppBureau (pour main.rs: use crate::app::AppBureau;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Échap est géré ici (global) : referme le panneau d'historique s'il est
//   ouvert, sinon remet la saisie à zéro.
// - Entrée/Retour arrière et le reste du clavier vivent dans vue.rs.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppBureau;`
pub use etat::AppBureau;

use eframe::egui;

impl eframe::App for AppBureau {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let echap = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if echap {
            self.echappement();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, etat::CLE_HISTORIQUE, &self.historique);
    }
}
