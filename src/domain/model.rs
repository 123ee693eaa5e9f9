use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 兩份待合併的樣式表原文
#[derive(Debug, Clone)]
pub struct StylesheetSources {
    pub theme: String,
    pub design_system: String,
}

/// `--color-blue-<shade>` 對應表，重複的色階以最後一次出現為準
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTokenMap {
    shades: BTreeMap<String, String>,
}

impl ColorTokenMap {
    pub fn insert(&mut self, shade: impl Into<String>, value: impl Into<String>) {
        self.shades.insert(shade.into(), value.into());
    }

    pub fn get(&self, shade: &str) -> Option<&str> {
        self.shades.get(shade).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub font_faces: usize,
    pub stripped_blocks: usize,
    pub blue_shades: usize,
    pub rebranded: usize,
    pub display_font_substituted: bool,
}

#[derive(Debug, Clone)]
pub struct MergedStylesheet {
    pub css: String,
    pub report: MergeReport,
}

/// One row of the client spreadsheet export. Headers follow the export's
/// Portuguese column names; absent columns read as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpreadsheetRow {
    #[serde(rename = "Nome", default)]
    pub name: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Telefone", default)]
    pub phone: Option<String>,
    #[serde(rename = "CPF", default)]
    pub cpf: Option<String>,
    #[serde(rename = "Nascimento", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "Bairro", default)]
    pub neighborhood: Option<String>,
    #[serde(rename = "Cidade", default)]
    pub city: Option<String>,
    #[serde(rename = "Profissao", default)]
    pub profession: Option<String>,
    #[serde(rename = "OrigemLead", default)]
    pub lead_source: Option<String>,
    #[serde(rename = "Criado em", default)]
    pub created_at: Option<String>,
    #[serde(rename = "Atualizado em", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStage {
    New,
    Active,
    Drifting,
    Churned,
    Vip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSeed {
    pub id: String,
    pub full_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub cpf: Option<String>,
    pub birth_date: Option<String>,
    pub address_neighborhood: Option<String>,
    pub address_city: Option<String>,
    pub profession: Option<String>,
    pub lead_source: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub life_cycle_stage: LifecycleStage,
    pub role: String,
    pub xp: u32,
    pub total_spent: u32,
    pub total_sessions: u32,
    pub sessions_float: u32,
    pub sessions_massage: u32,
    pub sessions_combo: u32,
}

#[derive(Debug, Clone, Default)]
pub struct SeedBatch {
    pub clients: Vec<ClientSeed>,
    pub skipped_rows: usize,
}
