//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - jetons.rs     : opérateurs + tokenisation
//! - rpn.rs        : shunting-yard (infixe -> postfixe)
//! - eval.rs       : évaluation pile + pipeline complet
//! - format.rs     : affichage décimal (12 chiffres significatifs)
//! - saisie.rs     : accumulateur de saisie (machine à états des frappes)
//! - historique.rs : collecteur borné des calculs aboutis

pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;
pub mod saisie;

#[cfg(test)]
mod tests_parcours;

// API publique minimale
pub use eval::{eval_expression, ErreurEval};
pub use historique::{EntreeHistorique, Historique};
pub use saisie::{Accumulateur, CalculAbouti};
