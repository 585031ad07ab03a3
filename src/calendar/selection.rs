use crate::calendar::DayKey;

/// Which day, if any, is being edited, plus its unsaved draft text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    None,
    Editing {
        key: DayKey,
        draft: String,
    },
}

impl SelectionState {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn key(&self) -> Option<DayKey> {
        match self {
            Self::None => None,
            Self::Editing { key, .. } => Some(*key),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn is_selected(&self, key: &DayKey) -> bool {
        self.key().as_ref() == Some(key)
    }
}
