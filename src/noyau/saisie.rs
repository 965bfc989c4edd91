//! src/noyau/saisie.rs
//!
//! Accumulateur de saisie : la machine à états qui transforme les frappes
//! (chiffres, point, opérateurs, effacement, égal) en expression infixe
//! bien formée.
//!
//! Contrats :
//! - `courant` n'est jamais vide : "0", un numéral décimal, ou la
//!   sentinelle d'erreur.
//! - `courant` contient au plus un point décimal.
//! - `precedent` est une liste de paires (opérande, opérateur) : la forme
//!   alternée « nombre opérateur ... » se termine toujours par un
//!   opérateur, par construction.
//! - après une erreur, seules les remises à zéro ont un effet.
//! - aucune évaluation hors de `egal()` ; pas d'effet de bord caché.

use super::eval::eval_expression;
use super::format::format_resultat;
use super::jetons::Operateur;

/// Sentinelle affichée quand l'évaluation échoue.
/// Le code ne compare jamais ce texte ailleurs : voir `est_erreur()`.
const SENTINELLE_ERREUR: &str = "Erreur";

/// Une étape déjà validée de l'expression : l'opérande telle qu'elle a été
/// tapée, suivie de son opérateur. Représentation typée : pas de re-parsing
/// de fin de chaîne pour retrouver l'opérateur à remplacer.
#[derive(Clone, Debug, PartialEq)]
pub struct Terme {
    pub operande: String,
    pub operateur: Operateur,
}

/// Calcul abouti, prêt à être consigné dans l'historique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculAbouti {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct Accumulateur {
    // --- état éditable ---
    courant: String,
    precedent: Vec<Terme>,

    // --- drapeaux de saisie ---
    saisie_commencee: bool,
    nouvelle_saisie: bool,

    // --- registre mémoire (MC/MR/M+/M-) ---
    memoire: f64,
}

impl Default for Accumulateur {
    fn default() -> Self {
        Self {
            courant: "0".to_string(),
            precedent: Vec::new(),
            saisie_commencee: false,
            nouvelle_saisie: false,
            memoire: 0.0,
        }
    }
}

impl Accumulateur {
    /* ------------------------ Lecture ------------------------ */

    /// Opérande en cours de frappe (ou dernier résultat, ou sentinelle).
    pub fn operande_courant(&self) -> &str {
        &self.courant
    }

    /// Préfixe d'expression accumulé, rendu en texte ("12 + 5 *").
    /// Vide hors saisie d'une suite.
    pub fn affichage_precedent(&self) -> String {
        let mut morceaux = Vec::with_capacity(self.precedent.len() * 2);
        for terme in &self.precedent {
            morceaux.push(terme.operande.clone());
            morceaux.push(terme.operateur.symbole().to_string());
        }
        morceaux.join(" ")
    }

    pub fn est_erreur(&self) -> bool {
        self.courant == SENTINELLE_ERREUR
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn a_memoire(&self) -> bool {
        self.memoire != 0.0
    }

    /* ------------------------ Remises à zéro ------------------------ */

    /// AC : remise à zéro de la saisie. Le registre mémoire survit.
    pub fn reset_total(&mut self) {
        self.courant = "0".to_string();
        self.precedent.clear();
        self.saisie_commencee = false;
        self.nouvelle_saisie = false;
    }

    /// DEL : efface le dernier caractère de l'opérande courant.
    ///
    /// Après un résultat (`nouvelle_saisie`), DEL abandonne tout le
    /// résultat : même effet que AC.
    pub fn efface_dernier(&mut self) {
        if self.nouvelle_saisie {
            self.reset_total();
            return;
        }
        if self.courant == "0" {
            return;
        }

        self.courant.pop();
        if self.courant.is_empty() || self.courant == "-" {
            self.courant = "0".to_string();
            self.saisie_commencee = false;
        }
    }

    /* ------------------------ Frappes ------------------------ */

    /// Chiffre ou point décimal.
    pub fn tape_chiffre(&mut self, symbole: char) {
        if self.est_erreur() {
            return;
        }
        if !symbole.is_ascii_digit() && symbole != '.' {
            return;
        }

        if self.nouvelle_saisie {
            // le prochain chiffre démarre une saisie fraîche
            self.courant.clear();
            self.nouvelle_saisie = false;
            self.saisie_commencee = true;
        }

        if symbole == '.' && self.courant.contains('.') {
            return;
        }

        if self.courant == "0" && symbole != '.' {
            self.courant = symbole.to_string();
        } else {
            // "0" + '.' donne "0." ; sinon simple concaténation
            self.courant.push(symbole);
        }
        self.saisie_commencee = true;
    }

    /// Choix d'un opérateur binaire. Trois cas, par priorité :
    /// 1. enchaînement après résultat (le résultat devient l'opérande gauche)
    /// 2. remplacement du dernier opérateur (aucune saisie depuis)
    /// 3. validation de l'opérande courant + ajout de l'opérateur
    pub fn choisit_operateur(&mut self, op: Operateur) {
        if self.est_erreur() {
            return;
        }

        // 1. Enchaînement : on repart du résultat précédent.
        if self.nouvelle_saisie {
            self.nouvelle_saisie = false;
            self.precedent.clear();
            self.precedent.push(Terme {
                operande: self.courant.clone(),
                operateur: op,
            });
            self.courant = "0".to_string();
            self.saisie_commencee = false;
            return;
        }

        // 2. Remplacement : la liste se termine toujours par un opérateur,
        //    il suffit de réécrire celui de la dernière paire.
        if !self.saisie_commencee {
            if let Some(dernier) = self.precedent.last_mut() {
                dernier.operateur = op;
                return;
            }
        }

        // 3. Ajout normal.
        self.precedent.push(Terme {
            operande: self.courant.clone(),
            operateur: op,
        });
        self.courant = "0".to_string();
        self.saisie_commencee = false;
    }

    /// `=` : évalue l'expression composée.
    ///
    /// Retourne le calcul abouti à consigner dans l'historique quand un
    /// préfixe existait (sinon rien : un `=` sur un opérande seul ne fait
    /// que normaliser l'affichage).
    pub fn egal(&mut self) -> Option<CalculAbouti> {
        if self.est_erreur() {
            return None;
        }

        let expression = self.texte_expression();

        match eval_expression(&expression) {
            Ok(valeur) => {
                let resultat = format_resultat(valeur);

                let abouti = if self.precedent.is_empty() {
                    None
                } else {
                    Some(CalculAbouti {
                        expression,
                        resultat: resultat.clone(),
                    })
                };

                self.courant = resultat;
                self.precedent.clear();
                self.nouvelle_saisie = true;
                self.saisie_commencee = false;
                abouti
            }
            Err(e) => {
                log::warn!("évaluation échouée ({e}) : {expression:?}");
                self.courant = SENTINELLE_ERREUR.to_string();
                self.precedent.clear();
                self.nouvelle_saisie = true;
                None
            }
        }
    }

    /// Expression complète : préfixe rendu + opérande courant.
    fn texte_expression(&self) -> String {
        if self.precedent.is_empty() {
            self.courant.clone()
        } else {
            format!("{} {}", self.affichage_precedent(), self.courant)
        }
    }

    /* ------------------------ Mémoire (MC/MR/M+/M-) ------------------------ */

    /// MC : vide le registre.
    pub fn memoire_efface(&mut self) {
        self.memoire = 0.0;
    }

    /// MR : rappelle le registre comme opérande courant.
    /// Sans effet si le registre est vide ou après une erreur.
    pub fn memoire_rappel(&mut self) {
        if !self.a_memoire() || self.est_erreur() {
            return;
        }
        self.courant = format_resultat(self.memoire);
        self.saisie_commencee = true;
        self.nouvelle_saisie = false;
    }

    /// M+ : ajoute l'opérande courant au registre.
    /// Sans effet si l'opérande ne parse pas (la sentinelle ne parse jamais).
    pub fn memoire_plus(&mut self) {
        if let Ok(v) = self.courant.parse::<f64>() {
            self.memoire += v;
        }
    }

    /// M- : retranche l'opérande courant du registre.
    pub fn memoire_moins(&mut self) {
        if let Ok(v) = self.courant.parse::<f64>() {
            self.memoire -= v;
        }
    }

    /* ------------------------ Historique ------------------------ */

    /// Reprend un résultat de l'historique comme opérande courant
    /// (clic sur une entrée du panneau).
    pub fn reprend_resultat(&mut self, resultat: &str) {
        self.courant = resultat.to_string();
        self.precedent.clear();
        self.saisie_commencee = true;
        self.nouvelle_saisie = true;
    }
}
