//! Request and response bodies

use correction_math::CorrectionTableKind;
use serde::{Deserialize, Serialize};

/// Rate prediction request for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredicaoInput {
    pub ano: i32,
    pub mes: u32,
    pub tipo_tabela: CorrectionTableKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredicaoOutput {
    pub ano: i32,
    pub mes: u32,
    pub valor_previsto: f64,
}

/// Correction of `valor` from the reference month, with the table extended
/// up to the prediction month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculoInput {
    pub valor: f64,
    pub referencia_ano: i32,
    pub referencia_mes: u32,
    pub predicao_ano: i32,
    pub predicao_mes: u32,
    pub tipo_tabela: CorrectionTableKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculoOutput {
    pub ano: i32,
    pub mes: u32,
    pub taxa: f64,
    pub valor_previsto: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resposta {
    pub mensagem: String,
}

impl Resposta {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}
