use crate::domain::model::{ClientSeed, LifecycleStage, SeedBatch, SpreadsheetRow};
use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

const MISSING_EMAIL_DOMAIN: &str = "missing.email";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// 試算表的 Status 欄位對應到客戶生命週期
pub fn map_status_to_lifecycle(status: Option<&str>) -> LifecycleStage {
    let Some(status) = status else {
        return LifecycleStage::New;
    };

    match status.trim().to_lowercase().as_str() {
        "ativo" => LifecycleStage::Active,
        "novo" | "prospect" => LifecycleStage::New,
        "ex-cliente" => LifecycleStage::Churned,
        "inativo" => LifecycleStage::Drifting,
        "vip" => LifecycleStage::Vip,
        _ => LifecycleStage::New,
    }
}

/// Phone numbers exported from a numeric cell come back as `11987654321.0`.
pub fn clean_phone(phone: Option<&str>) -> Option<String> {
    let phone = non_blank(phone)?;
    Some(phone.strip_suffix(".0").unwrap_or(phone).to_string())
}

/// 能辨識的日期時間轉成 ISO-8601，無法辨識的原樣保留
pub fn clean_date(value: Option<&str>) -> Option<String> {
    let value = non_blank(value)?;

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return Some(format!("{}T00:00:00", parsed.format("%Y-%m-%d")));
        }
    }

    Some(value.to_string())
}

/// Returns `None` when the row has neither a usable email nor a name.
pub fn resolve_email(email: Option<&str>, name: Option<&str>) -> Option<String> {
    match non_blank(email) {
        Some(email) if email.contains('@') => Some(email.to_string()),
        _ => {
            let name = non_blank(name)?;
            let slug = name.to_lowercase().replace(' ', ".");
            Some(format!("{}@{}", slug, MISSING_EMAIL_DOMAIN))
        }
    }
}

/// Random v4 UUID in its canonical hyphenated form.
pub fn new_client_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn map_row(row: &SpreadsheetRow, id: String) -> Option<ClientSeed> {
    let email = resolve_email(row.email.as_deref(), row.name.as_deref())?;

    Some(ClientSeed {
        id,
        full_name: non_blank(row.name.as_deref()).map(str::to_string),
        email,
        phone: clean_phone(row.phone.as_deref()),
        cpf: text(&row.cpf),
        birth_date: clean_date(row.birth_date.as_deref()),
        address_neighborhood: text(&row.neighborhood),
        address_city: text(&row.city),
        profession: text(&row.profession),
        lead_source: text(&row.lead_source),
        created_at: clean_date(row.created_at.as_deref()),
        updated_at: clean_date(row.updated_at.as_deref()),
        life_cycle_stage: map_status_to_lifecycle(non_blank(row.status.as_deref())),
        role: "client".to_string(),
        xp: 0,
        total_spent: 0,
        total_sessions: 0,
        sessions_float: 0,
        sessions_massage: 0,
        sessions_combo: 0,
    })
}

pub fn map_rows<I>(rows: I) -> SeedBatch
where
    I: IntoIterator<Item = SpreadsheetRow>,
{
    let mut batch = SeedBatch::default();
    for (index, row) in rows.into_iter().enumerate() {
        match map_row(&row, new_client_id()) {
            Some(client) => batch.clients.push(client),
            None => {
                tracing::debug!("Skipping row {}: no email and no name", index + 1);
                batch.skipped_rows += 1;
            }
        }
    }
    batch
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn text(value: &Option<String>) -> Option<String> {
    non_blank(value.as_deref()).map(str::to_string)
}
