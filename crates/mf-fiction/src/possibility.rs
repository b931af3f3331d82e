//! The two-tier possibility model behind every action.
//!
//! An action first declares, statically, which candidates it could ever
//! accept in each argument domain. Enumeration then asks the dynamic
//! question: is this candidate acceptable right now, given the world state
//! and the arguments already chosen?

use mf_core::{Exit, NounId, World};

use crate::domain::Domain;
use crate::error::FictionResult;
use crate::universe::Universe;

/// A concrete argument: something a domain can yield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A noun in the world graph.
    Noun(NounId),
    /// A topology edge leaving the mover's location.
    Exit(Exit),
    /// A line of dialog the player could say to `speaker`.
    Line {
        /// Who the line is said to.
        speaker: NounId,
        /// What the player says.
        said: String,
    },
}

impl Target {
    /// The noun, if this target is one.
    pub fn noun(&self) -> Option<NounId> {
        match self {
            Self::Noun(id) => Some(*id),
            _ => None,
        }
    }
}

/// An operation the player may invoke from the menu.
///
/// Implementors declare their argument domains in order, the static and
/// dynamic possibility predicates per domain, how a sentence is rendered,
/// and the effect of performing it.
pub trait Action {
    /// Short identifying name, used for logging and lookup.
    fn name(&self) -> &str;

    /// Argument domains, resolved left to right.
    fn domains(&self) -> &[Domain] {
        &[]
    }

    /// Whether `target` could ever be an argument in `domain`.
    ///
    /// This is a capability check: it looks at which components a noun
    /// carries, not at their current values.
    fn ever_possible(&self, _world: &World, _domain: Domain, _target: &Target) -> bool {
        false
    }

    /// Whether `target` is acceptable now, with `sentence` holding the
    /// arguments already chosen to its left.
    ///
    /// Only consulted once [`Action::ever_possible`] has agreed; see
    /// [`admits`].
    fn possible_now(
        &self,
        universe: &Universe,
        _sentence: &[Target],
        domain: Domain,
        target: &Target,
    ) -> bool {
        self.ever_possible(universe.world(), domain, target)
    }

    /// Gate checked for the action as a whole before its domains are searched.
    fn gate(&self, _universe: &Universe) -> bool {
        true
    }

    /// Render the sentence in lower case, one part per argument domain.
    fn render(&self, parts: &[String]) -> String;

    /// Apply the action. Returns `true` to end the game.
    fn perform(&self, universe: &mut Universe, arguments: &[Target]) -> FictionResult<bool>;
}

/// Both tiers at once. The dynamic predicate can never grant what the
/// static one forbids, whatever an action overrides.
pub fn admits(
    action: &dyn Action,
    universe: &Universe,
    sentence: &[Target],
    domain: Domain,
    target: &Target,
) -> bool {
    action.ever_possible(universe.world(), domain, target)
        && action.possible_now(universe, sentence, domain, target)
}
