//! Transient form state for the user directory.
//!
//! [`FormDraft`] stages the input-widget values between keystrokes and
//! submission. Both fields stay text until [`validate`](FormDraft::validate)
//! runs — `age` in particular is never coerced to a number while the user is
//! still typing, so half-typed input round-trips through the widgets
//! unchanged.

use serde::{Deserialize, Serialize};

use store::{NewUser, RecordId, UserRecord};

/// The two editable fields of the form, addressed by
/// [`DirectoryState::update_draft`](crate::DirectoryState::update_draft).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftField {
    Name,
    Age,
}

/// Staged form input, including which record (if any) is being edited.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDraft {
    /// Raw name input.
    pub name: String,
    /// Raw age input, kept as text until validation.
    pub age: String,
    /// When set, submission replaces this record instead of inserting.
    pub editing_id: Option<RecordId>,
}

impl FormDraft {
    /// Overwrite one field with the latest widget value.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Age => self.age = value,
        }
    }

    /// Stage an existing record for editing.
    pub fn load(&mut self, record: &UserRecord) {
        self.name = record.name.clone();
        self.age = record.age.to_string();
        self.editing_id = Some(record.id.clone());
    }

    /// Reset to the empty state (`editing_id = None`).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the staged input: name must be non-empty and age must parse to
    /// a strictly positive number. Returns the validated pair, or `None`
    /// when the draft is not submittable.
    pub fn validate(&self) -> Option<NewUser> {
        if self.name.is_empty() {
            return None;
        }
        let age: u32 = self.age.trim().parse().ok()?;
        if age == 0 {
            return None;
        }
        Some(NewUser {
            name: self.name.clone(),
            age,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name_and_bad_ages() {
        let mut draft = FormDraft::default();
        assert_eq!(draft.validate(), None);

        draft.set(DraftField::Name, "Ann".to_string());
        assert_eq!(draft.validate(), None); // age missing

        draft.set(DraftField::Age, "thirty".to_string());
        assert_eq!(draft.validate(), None);

        draft.set(DraftField::Age, "0".to_string());
        assert_eq!(draft.validate(), None);

        draft.set(DraftField::Age, "-3".to_string());
        assert_eq!(draft.validate(), None);

        draft.set(DraftField::Age, "30".to_string());
        assert_eq!(
            draft.validate(),
            Some(NewUser {
                name: "Ann".to_string(),
                age: 30
            })
        );
    }

    #[test]
    fn load_formats_age_as_text() {
        let record = UserRecord {
            id: RecordId::new("mem-1"),
            name: "Ann".to_string(),
            age: 30,
        };
        let mut draft = FormDraft::default();
        draft.load(&record);

        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.age, "30");
        assert_eq!(draft.editing_id, Some(RecordId::new("mem-1")));
    }
}
