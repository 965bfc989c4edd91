// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppBureau (etat.rs) pour natif + wasm
// - Clavier : chiffres/opérateurs au fil du texte, Entrée ou = évalue,
//   Retour arrière efface (Échap est géré au niveau app)
// - Tactile : gros boutons, pavé 4 colonnes
//
// Toute frappe (bouton ou clavier) passe par applique_touche : un seul
// chemin vers le noyau.

use eframe::egui;

use crate::noyau::format::format_resultat;
use crate::noyau::jetons::Operateur;

use super::etat::AppBureau;

impl AppBureau {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_ecran(ui);
                ui.add_space(8.0);

                self.ui_pave(ui);

                if self.panneau_historique {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.ui_historique(ui);
                }
            });
    }

    /* ------------------------ Clavier ------------------------ */

    /// Clavier physique : chiffres/opérateurs arrivent en événements texte
    /// (couvre aussi * via Maj), Entrée évalue, Retour arrière efface.
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());

        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        match c {
                            '0'..='9' | '.' => self.calc.tape_chiffre(c),
                            '=' => self.evalue(),
                            _ => {
                                if let Some(op) = Operateur::depuis_char(c) {
                                    self.calc.choisit_operateur(op);
                                }
                            }
                        }
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.evalue(),
                egui::Event::Key {
                    key: egui::Key::Backspace,
                    pressed: true,
                    ..
                } => self.calc.efface_dernier(),
                _ => {}
            }
        }
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.add_space(12.0);

            let resp = ui
                .add_sized([92.0, 26.0], egui::Button::new("Historique"))
                .on_hover_text("Affiche les calculs récents");
            if resp.clicked() {
                self.panneau_historique = !self.panneau_historique;
            }

            if self.calc.a_memoire() {
                ui.monospace(format!("M {}", format_resultat(self.calc.memoire())));
            }
        });
    }

    /// Paire d'affichage : préfixe accumulé (petit) + opérande courant (gros).
    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                let precedent = self.calc.affichage_precedent();
                if precedent.is_empty() {
                    // réserve la ligne pour éviter les sauts de mise en page
                    ui.monospace(" ");
                } else {
                    ui.monospace(precedent);
                }

                let courant = egui::RichText::new(self.calc.operande_courant())
                    .monospace()
                    .size(30.0);
                if self.calc.est_erreur() {
                    ui.colored_label(ui.visuals().error_fg_color, courant);
                } else {
                    ui.label(courant);
                }
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "MC", "Vide la mémoire", Touche::MemoireEfface);
                self.bouton(ui, "MR", "Rappelle la mémoire", Touche::MemoireRappel);
                self.bouton(ui, "M-", "Retranche l'opérande de la mémoire", Touche::MemoireMoins);
                self.bouton(ui, "M+", "Ajoute l'opérande à la mémoire", Touche::MemoirePlus);
                ui.end_row();

                self.bouton(ui, "AC", "Remise à zéro", Touche::ResetTotal);
                self.bouton(ui, "DEL", "Efface le dernier chiffre", Touche::Efface);
                self.bouton(ui, "/", "", Touche::Op(Operateur::Divise));
                self.bouton(ui, "*", "", Touche::Op(Operateur::Fois));
                ui.end_row();

                self.bouton(ui, "7", "", Touche::Chiffre('7'));
                self.bouton(ui, "8", "", Touche::Chiffre('8'));
                self.bouton(ui, "9", "", Touche::Chiffre('9'));
                self.bouton(ui, "-", "", Touche::Op(Operateur::Moins));
                ui.end_row();

                self.bouton(ui, "4", "", Touche::Chiffre('4'));
                self.bouton(ui, "5", "", Touche::Chiffre('5'));
                self.bouton(ui, "6", "", Touche::Chiffre('6'));
                self.bouton(ui, "+", "", Touche::Op(Operateur::Plus));
                ui.end_row();

                self.bouton(ui, "1", "", Touche::Chiffre('1'));
                self.bouton(ui, "2", "", Touche::Chiffre('2'));
                self.bouton(ui, "3", "", Touche::Chiffre('3'));
                self.bouton(ui, "=", "Évalue l'expression", Touche::Egal);
                ui.end_row();

                self.bouton(ui, "0", "", Touche::Chiffre('0'));
                self.bouton(ui, ".", "", Touche::Chiffre('.'));
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized([52.0, 34.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }
        if resp.clicked() {
            self.applique_touche(touche);
        }
    }

    /// Chemin unique boutons/clavier -> noyau.
    fn applique_touche(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.calc.tape_chiffre(c),
            Touche::Op(op) => self.calc.choisit_operateur(op),
            Touche::Egal => self.evalue(),
            Touche::ResetTotal => self.calc.reset_total(),
            Touche::Efface => self.calc.efface_dernier(),
            Touche::MemoireEfface => self.calc.memoire_efface(),
            Touche::MemoireRappel => self.calc.memoire_rappel(),
            Touche::MemoirePlus => self.calc.memoire_plus(),
            Touche::MemoireMoins => self.calc.memoire_moins(),
        }
    }

    /* ------------------------ Historique ------------------------ */

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Historique :");
            if ui.small_button("Vider").clicked() {
                self.historique.vide();
            }
        });

        if self.historique.est_vide() {
            ui.monospace("aucun calcul pour l'instant");
            return;
        }

        let mut reprise: Option<String> = None;
        for (i, entree) in self.historique.entrees().iter().enumerate() {
            ui.push_id(i, |ui| {
                let texte = format!("{} = {}", entree.expression, entree.resultat);
                let resp = ui
                    .add(egui::Button::new(egui::RichText::new(texte).monospace()).frame(false))
                    .on_hover_text("Reprend ce résultat");
                if resp.clicked() {
                    reprise = Some(entree.resultat.clone());
                }
            });
        }

        if let Some(resultat) = reprise {
            self.reprend_entree(&resultat);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Op(Operateur),
    Egal,
    ResetTotal,
    Efface,
    MemoireEfface,
    MemoireRappel,
    MemoirePlus,
    MemoireMoins,
}
