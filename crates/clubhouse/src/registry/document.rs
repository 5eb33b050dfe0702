use crate::{
    model::{Club, Document, DocumentType, Id, DOCUMENT_DIR},
    validate, Db, Model, Result,
};

use clubhouse_core::{stmt::OrderBy, Error};

use std::path::Path;

/// Files uploaded for a club, tagged by type.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentStore;

impl DocumentStore {
    /// Stores `payload` under `club_data/<base name of file_name>`.
    pub async fn store(
        &self,
        db: &mut Db,
        club: Id<Club>,
        file_type: DocumentType,
        file_name: &str,
        payload: &[u8],
    ) -> Result<Document> {
        let base = Path::new(file_name)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if base.is_empty() {
            return Err(Error::validation_length("file_name", 0, Some(1), None));
        }

        let path = format!("{DOCUMENT_DIR}/{base}");
        validate::text(db.schema().table(Document::TABLE)?, "path", &path)?;

        let document: Document = db
            .insert(
                Document::insert()
                    .value("club_id", club)
                    .value("file_type", file_type)
                    .value("path", path)
                    .value("payload", payload),
            )
            .await?;

        tracing::debug!(
            club.id = %club,
            document.id = %document.id,
            file_type = file_type.0,
            size = payload.len(),
            "stored document"
        );
        Ok(document)
    }

    pub async fn store_membership_request_form(
        &self,
        db: &mut Db,
        club: Id<Club>,
        file_name: &str,
        payload: &[u8],
    ) -> Result<Document> {
        self.store(
            db,
            club,
            DocumentType::MEMBERSHIP_REQUEST_FORM,
            file_name,
            payload,
        )
        .await
    }

    /// The base name of the stored file.
    pub fn filename(&self, document: &Document) -> String {
        document.filename()
    }

    /// The club's documents of one type, oldest first.
    pub async fn documents(
        &self,
        db: &mut Db,
        club: Id<Club>,
        file_type: DocumentType,
    ) -> Result<Vec<Document>> {
        db.all(
            Document::query()
                .filter_eq("club_id", club)
                .filter_eq("file_type", file_type)
                .order_by(OrderBy::asc("id")),
        )
        .await
    }
}
