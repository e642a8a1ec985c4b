//! Filters reference rows into display-name tables.
//!
//! Each builder keeps only the rows that name something the host can actually
//! show, title-cases the name, and rejects sheets that map two rows to one key.

use actorid_primitives::WorldId;

use crate::sheets::{CompanionRow, MountRow, NameRow, Sheet, SheetError, WorldRow};
use crate::tables::{NameTable, WorldTable};
use crate::title_case::to_title_case;

/// Public worlds with a name, keyed by the low 16 bits of the row id.
///
/// World names are used verbatim.
pub fn build_worlds(rows: impl IntoIterator<Item = WorldRow>) -> Result<WorldTable, SheetError> {
	let mut table = WorldTable::default();
	for row in rows.into_iter().filter(|w| w.is_public && !w.name.is_empty()) {
		let id = WorldId(row.row_id as u16);
		if !table.insert_new(id, row.name) {
			return Err(duplicate(Sheet::World, row.row_id));
		}
	}
	Ok(table)
}

pub fn build_mounts(rows: impl IntoIterator<Item = MountRow>) -> Result<NameTable, SheetError> {
	collect_names(
		Sheet::Mount,
		rows.into_iter()
			.filter(|m| !m.singular.is_empty() && m.order >= 0)
			.map(|m| (m.row_id, to_title_case(&m.singular, m.article))),
	)
}

pub fn build_companions(rows: impl IntoIterator<Item = CompanionRow>) -> Result<NameTable, SheetError> {
	collect_names(
		Sheet::Companion,
		rows.into_iter()
			.filter(|c| !c.singular.is_empty() && c.order < u16::MAX)
			.map(|c| (c.row_id, to_title_case(&c.singular, c.article))),
	)
}

/// Ornaments, battle NPC names and event NPC residents: every named row.
pub fn build_named(sheet: Sheet, rows: impl IntoIterator<Item = NameRow>) -> Result<NameTable, SheetError> {
	collect_names(
		sheet,
		rows.into_iter()
			.filter(|n| !n.singular.is_empty())
			.map(|n| (n.row_id, to_title_case(&n.singular, n.article))),
	)
}

fn collect_names(sheet: Sheet, rows: impl Iterator<Item = (u32, String)>) -> Result<NameTable, SheetError> {
	let mut table = NameTable::default();
	for (id, name) in rows {
		if !table.insert_new(id, name) {
			return Err(duplicate(sheet, id));
		}
	}
	Ok(table)
}

fn duplicate(sheet: Sheet, row_id: u32) -> SheetError {
	SheetError::Incompatible {
		sheet,
		reason: format!("duplicate key for row {row_id}"),
	}
}
