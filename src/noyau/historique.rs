// src/noyau/historique.rs
//
// Collecteur d'historique : ajout en tête (plus récent d'abord), borné à
// 50 entrées. Sérialisable : la coquille le fait survivre aux sessions via
// eframe::Storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::saisie::CalculAbouti;

/// Borne dure : au-delà, la plus ancienne entrée saute.
pub const CAPACITE_HISTORIQUE: usize = 50;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
    pub horodatage: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    /// Consigne un calcul abouti, horodaté à l'arrivée.
    pub fn consigne(&mut self, calcul: CalculAbouti) {
        self.entrees.insert(
            0,
            EntreeHistorique {
                expression: calcul.expression,
                resultat: calcul.resultat,
                horodatage: Utc::now(),
            },
        );
        self.entrees.truncate(CAPACITE_HISTORIQUE);
    }

    pub fn vide(&mut self) {
        self.entrees.clear();
    }

    pub fn est_vide(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Entrées, plus récente d'abord.
    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }
}
