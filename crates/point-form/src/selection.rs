//! Item Selection
//!
//! Ordered, duplicate-free set of selected item ids.

/// Selected residue ids in click order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedItems {
    ids: Vec<u32>,
}

impl SelectedItems {
    /// Remove `id` if present, otherwise append it
    pub fn toggle(&mut self, id: u32) {
        if let Some(pos) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.ids
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.ids.clone()
    }
}
