use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Urgency level, transmitted as its ordinal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::Low),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::High),
            other => Err(format!("prioridade must be 1, 2 or 3, got {other}")),
        }
    }
}

/// Lifecycle label, transmitted as the literal text below (case sensitive).
/// Any status may be set on create or replace; there are no transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Planejado")]
    Planned,
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Done,
    #[serde(rename = "Cancelado")]
    Canceled,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("titulo must not be empty")]
    EmptyTitle,
}

/// Validated full-record input for create and replace. The registry assigns
/// `id` and `criado_em`; everything else comes from the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub titulo: String,
    pub descricao: Option<String>,
    pub prioridade: Priority,
    pub status: Status,
}

impl ProjectDraft {
    pub fn new(
        titulo: impl Into<String>,
        descricao: Option<String>,
        prioridade: Priority,
        status: Status,
    ) -> Result<Self, DraftError> {
        let titulo = titulo.into();
        if titulo.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        Ok(Self {
            titulo,
            descricao,
            prioridade,
            status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub prioridade: Priority,
    pub status: Status,
    #[serde(with = "criado_em_format")]
    pub criado_em: DateTime<Utc>,
}

/// Wire format for `criado_em`. Second precision; day first.
pub mod criado_em_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d-%m-%Y %H:%M:%S";

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let naive = NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)?;
        Ok(naive.and_utc())
    }
}
