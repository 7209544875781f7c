// In memory project registry.
//
// Purpose
// - Serve the HTTP surface without a database.
//
// Responsibilities
// - Store project rows keyed by identifier.
// - Assign identifiers from a counter that starts at 1 and never reuses a
//   value, not even after a delete.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::modules::projects::core::model::{Priority, Project, ProjectDraft, Status};
use crate::modules::projects::core::ports::{ProjectRegistry, RegistryError};

struct Table {
    rows: BTreeMap<i64, Project>,
    next_id: i64,
}

pub struct InMemoryProjectRegistry {
    table: RwLock<Table>,
}

impl InMemoryProjectRegistry {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryProjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRegistry for InMemoryProjectRegistry {
    async fn create(&self, draft: ProjectDraft) -> Project {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;
        let project = Project {
            id,
            titulo: draft.titulo,
            descricao: draft.descricao,
            prioridade: draft.prioridade,
            status: draft.status,
            criado_em: Utc::now(),
        };
        table.rows.insert(id, project.clone());
        project
    }

    async fn list(
        &self,
        status: Option<Status>,
        prioridade: Option<Priority>,
        skip: usize,
        limit: usize,
    ) -> Vec<Project> {
        // Identifiers are assigned monotonically, so BTreeMap order is
        // creation order.
        let table = self.table.read().await;
        table
            .rows
            .values()
            .filter(|project| status.is_none_or(|wanted| project.status == wanted))
            .filter(|project| prioridade.is_none_or(|wanted| project.prioridade == wanted))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    async fn get(&self, id: i64) -> Result<Project, RegistryError> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned().ok_or(RegistryError::NotFound(id))
    }

    async fn replace(&self, id: i64, draft: ProjectDraft) -> Result<Project, RegistryError> {
        let mut table = self.table.write().await;
        let Some(stored) = table.rows.get_mut(&id) else {
            return Err(RegistryError::NotFound(id));
        };
        let updated = Project {
            id,
            titulo: draft.titulo,
            descricao: draft.descricao,
            prioridade: draft.prioridade,
            status: draft.status,
            criado_em: stored.criado_em,
        };
        *stored = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), RegistryError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RegistryError::NotFound(id))
    }
}
