//! Block placement units.

use serde::Serialize;


/// BlockKind classifies what a placement cell holds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Data,
    Parity,
    Mirror,
    /// Reserved for presentation layers marking unoccupied cells.
    Empty,
}

/// Block is one placement unit inside a stripe.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// Symbolic token, unique within the block's role across a layout.
    pub id: String,
    /// For mirror blocks only: the datum id this block duplicates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl Block {
    #[must_use]
    pub fn data(id: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Data,
            id: id.into(),
            source_id: None,
        }
    }

    #[must_use]
    pub fn parity(id: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Parity,
            id: id.into(),
            source_id: None,
        }
    }

    /// `mirror` builds a replica block named `M<source>` linking back to its
    /// source datum.
    #[must_use]
    pub fn mirror(source_id: impl Into<String>) -> Self {
        let source_id = source_id.into();
        Self {
            kind: BlockKind::Mirror,
            id: format!("M{source_id}"),
            source_id: Some(source_id),
        }
    }
}
