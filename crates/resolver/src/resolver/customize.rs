//! Tracing UI preview copies back to live players by their customize block.

use actorid_primitives::{ActorIdentifier, CUTSCENE_START, ObjectKind};

use super::ActorResolver;
use crate::host::LiveObject;

impl ActorResolver {
	/// Identity of the first candidate slot whose customize block equals `source`'s.
	///
	/// Empty slots are skipped. A source without a readable customize block
	/// matches nothing.
	pub fn search_customize(&self, source: &LiveObject, candidates: &[u16]) -> ActorIdentifier {
		let Some(customize) = source.customize else {
			return ActorIdentifier::Invalid;
		};
		candidates
			.iter()
			.filter_map(|&index| self.host.objects.get(index))
			.find(|candidate| candidate.customize == Some(customize))
			.map_or(ActorIdentifier::Invalid, |candidate| self.from_object(&candidate))
	}

	/// Identity of the first player, scanning even slots below the cutscene
	/// range, whose customize block differs from `source`'s.
	pub fn search_other_player(&self, source: &LiveObject) -> ActorIdentifier {
		let Some(customize) = source.customize else {
			return ActorIdentifier::Invalid;
		};
		(0..CUTSCENE_START)
			.step_by(2)
			.filter_map(|index| self.host.objects.get(index))
			.find(|other| {
				other.kind == Some(ObjectKind::Player) && other.customize.is_some_and(|c| c != customize)
			})
			.map_or(ActorIdentifier::Invalid, |other| self.from_object(&other))
	}
}
