//! Ordered storage for one entity kind.
//!
//! Rows are grouped by parent id (`None` for top level entities). Positions
//! are only meaningful within a group.

use catalog_core::types::CatalogId;

use crate::models::CatalogEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Why a row could not be moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftError {
    NotFound,
    AtEdge,
}

#[derive(Debug, Clone)]
struct Row<T> {
    parent: Option<CatalogId>,
    item: T,
}

#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<Row<T>>,
    next_id: CatalogId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: CatalogEntity> Table<T> {
    pub fn get(&self, id: CatalogId) -> Option<&T> {
        self.row(id).map(|row| &row.item)
    }

    pub fn contains(&self, id: CatalogId) -> bool {
        self.row(id).is_some()
    }

    pub fn parent_of(&self, id: CatalogId) -> Option<CatalogId> {
        self.row(id).and_then(|row| row.parent)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.item)
    }

    /// Members of a group in position order (ties broken by id).
    pub fn group(&self, parent: Option<CatalogId>) -> Vec<T> {
        let mut items: Vec<T> = self
            .rows
            .iter()
            .filter(|row| row.parent == parent)
            .map(|row| row.item.clone())
            .collect();
        items.sort_by_key(|item| (item.position().unwrap_or(i32::MAX), item.id()));
        items
    }

    /// Store a new row at the end of its group and return the assigned id.
    pub fn insert(&mut self, parent: Option<CatalogId>, mut item: T) -> CatalogId {
        let id = self.next_id;
        self.next_id += 1;

        let position = self
            .rows
            .iter()
            .filter(|row| row.parent == parent)
            .filter_map(|row| row.item.position())
            .max()
            .map_or(0, |max| max + 1);

        item.set_id(Some(id));
        item.set_position(Some(position));
        self.rows.push(Row { parent, item });
        id
    }

    /// Replace the stored row with the same id, keeping its parent.
    ///
    /// A missing position on `item` keeps the stored one.
    pub fn replace(&mut self, mut item: T) -> bool {
        let Some(id) = item.id() else {
            return false;
        };
        match self.rows.iter_mut().find(|row| row.item.id() == Some(id)) {
            Some(row) => {
                if item.position().is_none() {
                    item.set_position(row.item.position());
                }
                row.item = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: CatalogId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.item.id() != Some(id));
        self.rows.len() != before
    }

    /// Remove every row of a group, returning the removed ids.
    pub fn remove_group(&mut self, parent: CatalogId) -> Vec<CatalogId> {
        let removed = self
            .rows
            .iter()
            .filter(|row| row.parent == Some(parent))
            .filter_map(|row| row.item.id())
            .collect();
        self.rows.retain(|row| row.parent != Some(parent));
        removed
    }

    /// Swap a row with its neighbour and renumber the group.
    pub fn shift(&mut self, id: CatalogId, direction: Direction) -> Result<(), ShiftError> {
        let parent = self.row(id).ok_or(ShiftError::NotFound)?.parent;
        let mut order: Vec<CatalogId> = self
            .group(parent)
            .iter()
            .filter_map(CatalogEntity::id)
            .collect();

        let index = order
            .iter()
            .position(|candidate| *candidate == id)
            .ok_or(ShiftError::NotFound)?;
        let neighbour = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|next| *next < order.len()),
        }
        .ok_or(ShiftError::AtEdge)?;

        order.swap(index, neighbour);
        self.assign_positions(&order);
        Ok(())
    }

    /// Renumber every group to `0..n` in its current order.
    pub fn renumber(&mut self) {
        let mut parents: Vec<Option<CatalogId>> = self.rows.iter().map(|row| row.parent).collect();
        parents.sort();
        parents.dedup();

        for parent in parents {
            let order: Vec<CatalogId> = self
                .group(parent)
                .iter()
                .filter_map(CatalogEntity::id)
                .collect();
            self.assign_positions(&order);
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    fn row(&self, id: CatalogId) -> Option<&Row<T>> {
        self.rows.iter().find(|row| row.item.id() == Some(id))
    }

    fn assign_positions(&mut self, order: &[CatalogId]) {
        for row in &mut self.rows {
            if let Some(position) = row
                .item
                .id()
                .and_then(|id| order.iter().position(|candidate| *candidate == id))
            {
                row.item.set_position(Some(position as i32));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Genre;

    fn genre(name: &str) -> Genre {
        Genre {
            id: None,
            name: name.to_string(),
            position: None,
        }
    }

    fn names(table: &Table<Genre>, parent: Option<CatalogId>) -> Vec<String> {
        table.group(parent).into_iter().map(|g| g.name).collect()
    }

    #[test]
    fn insert_assigns_ids_and_positions_per_group() {
        let mut table = Table::default();
        assert_eq!(table.insert(None, genre("a")), 1);
        assert_eq!(table.insert(Some(7), genre("b")), 2);
        assert_eq!(table.insert(None, genre("c")), 3);

        assert_eq!(table.get(1).unwrap().position, Some(0));
        assert_eq!(table.get(2).unwrap().position, Some(0));
        assert_eq!(table.get(3).unwrap().position, Some(1));
        assert_eq!(table.parent_of(2), Some(7));
    }

    #[test]
    fn shift_swaps_with_neighbour() {
        let mut table = Table::default();
        for name in ["a", "b", "c"] {
            table.insert(None, genre(name));
        }

        table.shift(3, Direction::Up).unwrap();
        assert_eq!(names(&table, None), ["a", "c", "b"]);

        table.shift(1, Direction::Down).unwrap();
        assert_eq!(names(&table, None), ["c", "a", "b"]);
    }

    #[test]
    fn shift_rejects_edges_and_unknown_ids() {
        let mut table = Table::default();
        table.insert(None, genre("a"));
        table.insert(None, genre("b"));

        assert_eq!(table.shift(1, Direction::Up), Err(ShiftError::AtEdge));
        assert_eq!(table.shift(2, Direction::Down), Err(ShiftError::AtEdge));
        assert_eq!(table.shift(9, Direction::Up), Err(ShiftError::NotFound));
    }

    #[test]
    fn replace_keeps_position_when_missing() {
        let mut table = Table::default();
        table.insert(None, genre("a"));
        table.insert(None, genre("b"));

        let mut updated = genre("renamed");
        updated.id = Some(2);
        assert!(table.replace(updated));
        assert_eq!(table.get(2).unwrap().position, Some(1));
        assert_eq!(table.get(2).unwrap().name, "renamed");
    }

    #[test]
    fn renumber_closes_gaps() {
        let mut table = Table::default();
        for name in ["a", "b", "c"] {
            table.insert(None, genre(name));
        }
        table.remove(2);
        table.renumber();

        assert_eq!(table.get(1).unwrap().position, Some(0));
        assert_eq!(table.get(3).unwrap().position, Some(1));
    }

    #[test]
    fn remove_group_only_touches_children() {
        let mut table = Table::default();
        table.insert(Some(1), genre("a"));
        table.insert(Some(2), genre("b"));
        table.insert(Some(1), genre("c"));

        assert_eq!(table.remove_group(1), vec![1, 3]);
        assert_eq!(table.len(), 1);
        assert!(table.contains(2));
    }
}
