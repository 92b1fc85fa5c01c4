use std::{
    cell::RefCell,
    collections::HashMap,
};

use crate::{
    anki::{
        Field,
        Note,
        StoreClient,
    },
    core::{
        NoteId,
        ReigoError,
    },
};

/// A single recorded store action.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindNotes(String),
    NotesInfo(Vec<NoteId>),
    Update { note_id: NoteId, field: String, value: String },
}

/// In-memory stand-in for AnkiConnect. Queries are answered by exact string lookup so
/// tests state precisely which search returns which notes.
#[derive(Default)]
pub struct FakeStore {
    queries: HashMap<String, Vec<NoteId>>,
    notes: HashMap<NoteId, Note>,
    failing_action: Option<&'static str>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, note_id: NoteId, fields: &[(&str, &str)]) -> Self {
        let fields = fields
            .iter()
            .enumerate()
            .map(|(order, (name, value))| {
                (name.to_string(), Field { value: value.to_string(), order: order as u32 })
            })
            .collect();
        self.notes.insert(note_id, Note { note_id, fields });
        self
    }

    pub fn with_query(mut self, query: &str, note_ids: &[NoteId]) -> Self {
        self.queries.insert(query.to_string(), note_ids.to_vec());
        self
    }

    pub fn failing_on(mut self, action: &'static str) -> Self {
        self.failing_action = Some(action);
        self
    }

    pub fn find_calls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::FindNotes(query) => Some(query.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn updates(&self) -> Vec<(NoteId, String, String)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Update { note_id, field, value } => {
                    Some((*note_id, field.clone(), value.clone()))
                }
                _ => None,
            })
            .collect()
    }

    fn check(&self, action: &str) -> Result<(), ReigoError> {
        match self.failing_action {
            Some(failing) if failing == action => Err(ReigoError::Api {
                action: action.to_string(),
                message: "collection is not available".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl StoreClient for FakeStore {
    fn find_notes(&self, query: &str) -> Result<Vec<NoteId>, ReigoError> {
        self.calls.borrow_mut().push(Call::FindNotes(query.to_string()));
        self.check("findNotes")?;
        Ok(self.queries.get(query).cloned().unwrap_or_default())
    }

    fn notes_info(&self, note_ids: &[NoteId]) -> Result<Vec<Note>, ReigoError> {
        self.calls.borrow_mut().push(Call::NotesInfo(note_ids.to_vec()));
        self.check("notesInfo")?;
        Ok(note_ids.iter().filter_map(|id| self.notes.get(id).cloned()).collect())
    }

    fn update_note_field(
        &self,
        note_id: NoteId,
        field: &str,
        value: &str,
    ) -> Result<(), ReigoError> {
        self.calls.borrow_mut().push(Call::Update {
            note_id,
            field: field.to_string(),
            value: value.to_string(),
        });
        self.check("updateNoteFields")
    }
}
